use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use crate::clock::Clock;
use crate::clock::SystemClock;

use super::claims::Claims;
use super::claims::Role;
use super::claims::TokenPurpose;
use super::errors::TokenError;

/// Token lifetime without the extended flag: 24 hours.
const DEFAULT_LIFETIME_SECS: i64 = 24 * 60 * 60;

/// Token lifetime with the extended ("remember me") flag: 7 days.
const EXTENDED_LIFETIME_SECS: i64 = 7 * 24 * 60 * 60;

/// Token issuing and verification authority.
///
/// Holds the signing secret and algorithm, both immutable after
/// construction, and a clock. Fully stateless beyond that: no record of
/// issued tokens is kept, so every verification is a pure function of the
/// token bytes and the current time.
///
/// # Security Notes
/// - The secret should be at least 256 bits (32 bytes) for HS256
/// - Store secrets in environment variables or secure vaults, never in code
pub struct TokenAuthority<C: Clock = SystemClock> {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    clock: C,
}

impl TokenAuthority<SystemClock> {
    /// Create an authority reading wall-clock time.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    /// * `algorithm` - Signing algorithm, typically `Algorithm::HS256`
    pub fn new(secret: &[u8], algorithm: Algorithm) -> Self {
        Self::with_clock(secret, algorithm, SystemClock)
    }
}

impl<C: Clock> TokenAuthority<C> {
    /// Create an authority reading time from the given clock.
    pub fn with_clock(secret: &[u8], algorithm: Algorithm, clock: C) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            clock,
        }
    }

    /// Issue a signed access token for `subject` carrying `role`.
    ///
    /// Lifetime is 24 hours, or 7 days when `extended_lifetime` is set.
    /// No side effects beyond computing and signing.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue_access_token(
        &self,
        subject: &str,
        role: Role,
        extended_lifetime: bool,
    ) -> Result<String, TokenError> {
        let issued_at = self.clock.now();
        let claims = Claims {
            subject: subject.to_string(),
            role: Some(role),
            issued_at,
            expires_at: issued_at + lifetime_secs(extended_lifetime),
            purpose: TokenPurpose::Access,
        };

        self.encode(&claims)
    }

    /// Issue a signed refresh token for `subject`.
    ///
    /// Same expiry policy as access tokens. Carries no role: the caller
    /// supplies one again when exchanging the refresh token, and that
    /// choice alone decides the role of the next access token. A known
    /// weak point of the protocol; callers must not pass a role the
    /// principal does not actually hold.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue_refresh_token(
        &self,
        subject: &str,
        extended_lifetime: bool,
    ) -> Result<String, TokenError> {
        let issued_at = self.clock.now();
        let claims = Claims {
            subject: subject.to_string(),
            role: None,
            issued_at,
            expires_at: issued_at + lifetime_secs(extended_lifetime),
            purpose: TokenPurpose::Refresh,
        };

        self.encode(&claims)
    }

    /// Verify a token and return its claims.
    ///
    /// Checks, in order: the signature under the configured secret and
    /// algorithm, expiry against the clock, and the purpose discriminator.
    ///
    /// # Errors
    /// * `SignatureInvalid` - Signature or token format does not verify
    /// * `Expired` - Current time is past `expires_at`
    /// * `WrongPurpose` - Token purpose does not match `expected_purpose`
    pub fn verify(
        &self,
        token: &str,
        expected_purpose: TokenPurpose,
    ) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry lives in the custom `expiresAt` claim and is checked below
        // against the injected clock; the built-in `exp` handling stays off.
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| TokenError::SignatureInvalid(e.to_string()))?;
        let claims = data.claims;

        if claims.is_expired(self.clock.now()) {
            return Err(TokenError::Expired);
        }

        if claims.purpose != expected_purpose {
            return Err(TokenError::WrongPurpose {
                expected: expected_purpose,
                found: claims.purpose,
            });
        }

        Ok(claims)
    }

    /// Exchange a valid refresh token for a fresh access token.
    ///
    /// The new access token carries the subject from the refresh token and
    /// the role supplied here, with the default 24 hour lifetime.
    ///
    /// # Errors
    /// Verification failures of the refresh token propagate unchanged.
    pub fn refresh(&self, refresh_token: &str, role: Role) -> Result<String, TokenError> {
        let claims = self.verify(refresh_token, TokenPurpose::Refresh)?;
        self.issue_access_token(&claims.subject, role, false)
    }

    fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }
}

fn lifetime_secs(extended: bool) -> i64 {
    if extended {
        EXTENDED_LIFETIME_SECS
    } else {
        DEFAULT_LIFETIME_SECS
    }
}
