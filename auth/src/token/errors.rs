use thiserror::Error;

use super::claims::TokenPurpose;

/// Error type for token issuance and verification.
///
/// The verification variants are rejections the caller surfaces as
/// unauthenticated/unauthorized responses; none of them is retryable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature is invalid: {0}")]
    SignatureInvalid(String),

    #[error("Token is expired")]
    Expired,

    #[error("Wrong token purpose: expected {expected}, found {found}")]
    WrongPurpose {
        expected: TokenPurpose,
        found: TokenPurpose,
    },
}
