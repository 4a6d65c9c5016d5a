use thiserror::Error;

/// Error type for JWT operations.
///
/// Verification failures are split by kind so callers can tell a tampered or
/// cross-purpose token (`InvalidSignature`) from one that simply ran out
/// (`Expired`) or was never a token at all (`Malformed`).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,
}
