use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for session operations
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    // Domain-level errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Refresh token missing")]
    RefreshTokenMissing,

    #[error("Refresh token invalid: {0}")]
    RefreshTokenInvalid(auth::JwtError),

    #[error("Sales person not found: {0}")]
    UserNotFound(String),

    // Infrastructure errors
    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
