pub mod argon2;
pub mod errors;
pub mod strength;

pub use self::argon2::PasswordHasher;
pub use errors::PasswordError;
pub use strength::StrengthViolation;
