//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for the storefront
//! services:
//! - Credential hashing (Argon2id with a fixed pepper suffix)
//! - Signed access/refresh token issuance and verification
//! - The refresh exchange protocol
//!
//! Every component is stateless over immutable configuration (signing
//! secret, algorithm, pepper) and safe to share across request handlers.
//! There is no token store: a token is invalidated only by expiry or by
//! failing the signature check.
//!
//! Note that a refresh token does not pin a role; the caller chooses the
//! role of the next access token at exchange time. See
//! [`TokenAuthority::issue_refresh_token`].
//!
//! # Examples
//!
//! ## Credential Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{Role, TokenAuthority, TokenPurpose};
//! use jsonwebtoken::Algorithm;
//!
//! let authority = TokenAuthority::new(b"secret_key_at_least_32_bytes_long!", Algorithm::HS256);
//! let token = authority.issue_access_token("u1", Role::Client, false).unwrap();
//! let claims = authority.verify(&token, TokenPurpose::Access).unwrap();
//! assert_eq!(claims.subject, "u1");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Role};
//! use jsonwebtoken::Algorithm;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Algorithm::HS256);
//!
//! // Register: hash the credential
//! let digest = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and mint an access/refresh pair
//! let pair = auth
//!     .authenticate("password123", &digest, "u1", Role::Client, false)
//!     .unwrap();
//!
//! // Authorize a request
//! let claims = auth.verify_access(&pair.access_token).unwrap();
//! assert_eq!(claims.subject, "u1");
//!
//! // Exchange the refresh token for a new access token
//! let renewed = auth.refresh(&pair.refresh_token, Role::Client).unwrap();
//! assert!(!renewed.is_empty());
//! ```

pub mod authenticator;
pub mod clock;
pub mod config;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::TokenPair;
pub use clock::Clock;
pub use clock::SystemClock;
pub use config::AuthConfig;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::Role;
pub use token::TokenAuthority;
pub use token::TokenError;
pub use token::TokenPurpose;
