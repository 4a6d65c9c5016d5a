use thiserror::Error;

/// Minimum accepted password length, in characters.
pub const MIN_LENGTH: usize = 8;

/// A single rule a candidate password fails to meet.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StrengthViolation {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Password must contain an uppercase letter (A-Z)")]
    MissingUppercase,

    #[error("Password must contain a lowercase letter (a-z)")]
    MissingLowercase,

    #[error("Password must contain a digit")]
    MissingDigit,
}

/// Check a candidate password against the strength policy.
///
/// Returns every violated rule; an empty vector means the password is acceptable.
pub fn check(password: &str) -> Vec<StrengthViolation> {
    let mut violations = Vec::new();

    let length = password.chars().count();
    if length < MIN_LENGTH {
        violations.push(StrengthViolation::TooShort {
            min: MIN_LENGTH,
            actual: length,
        });
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        violations.push(StrengthViolation::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        violations.push(StrengthViolation::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push(StrengthViolation::MissingDigit);
    }

    violations
}
