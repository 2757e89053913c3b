use jsonwebtoken::Algorithm;

use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::Claims;
use crate::token::Role;
use crate::token::TokenAuthority;
use crate::token::TokenError;
use crate::token::TokenPurpose;

/// Authentication coordinator combining credential verification and token
/// issuance.
///
/// Covers the three flows the service boundary needs: registration (hash a
/// credential), login (verify a credential and mint an access/refresh
/// pair), and refresh (exchange a refresh token for a new access token).
pub struct Authenticator<C: Clock = SystemClock> {
    password_hasher: PasswordHasher,
    token_authority: TokenAuthority<C>,
}

/// Access/refresh pair minted on successful login.
pub struct TokenPair {
    /// Short-lived token presented on API requests.
    pub access_token: String,
    /// Longer-lived token exchanged for new access tokens.
    pub refresh_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    /// Credential did not match the stored digest. A normal negative
    /// result the caller turns into an auth rejection, never retried.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator<SystemClock> {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `secret` - Secret key for token signing
    /// * `algorithm` - Token signing algorithm
    pub fn new(secret: &[u8], algorithm: Algorithm) -> Self {
        Self::with_clock(secret, algorithm, SystemClock)
    }
}

impl<C: Clock> Authenticator<C> {
    /// Create an authenticator reading time from the given clock.
    pub fn with_clock(secret: &[u8], algorithm: Algorithm, clock: C) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_authority: TokenAuthority::with_clock(secret, algorithm, clock),
        }
    }

    /// Hash a credential for storage (registration path).
    ///
    /// # Errors
    /// * `HashingUnavailable` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a credential and mint an access/refresh token pair.
    ///
    /// # Arguments
    /// * `password` - Plaintext credential to verify
    /// * `stored_digest` - Digest persisted at registration
    /// * `subject` - Contact identifier of the principal
    /// * `role` - Role the access token will carry
    /// * `extended_lifetime` - Issue 7 day tokens instead of 24 hour ones
    ///
    /// # Errors
    /// * `InvalidCredentials` - Credential does not match
    /// * `Token` - Token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_digest: &str,
        subject: &str,
        role: Role,
        extended_lifetime: bool,
    ) -> Result<TokenPair, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_digest) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token =
            self.token_authority
                .issue_access_token(subject, role, extended_lifetime)?;
        let refresh_token = self
            .token_authority
            .issue_refresh_token(subject, extended_lifetime)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Verify an access token presented on a request.
    ///
    /// # Errors
    /// * `SignatureInvalid` - Signature does not verify
    /// * `Expired` - Token lifetime has passed
    /// * `WrongPurpose` - A refresh token was presented instead
    pub fn verify_access(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_authority.verify(token, TokenPurpose::Access)
    }

    /// Exchange a refresh token for a new access token carrying `role`.
    ///
    /// # Errors
    /// Verification failures of the refresh token propagate unchanged.
    pub fn refresh(&self, refresh_token: &str, role: Role) -> Result<String, TokenError> {
        self.token_authority.refresh(refresh_token, role)
    }
}
