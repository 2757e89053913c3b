use thiserror::Error;

/// Error type for credential hashing operations.
///
/// A failed verification is not an error: `verify` reports a mismatch, or a
/// digest it cannot parse, as `false`. This error only covers the hash
/// primitive itself being unable to produce a digest.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing unavailable: {0}")]
    HashingUnavailable(String),
}
