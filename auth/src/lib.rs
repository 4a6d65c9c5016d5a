//! Session authentication library
//!
//! Provides the credential and token machinery behind the sales-report service:
//! - Password hashing and verification (Argon2id)
//! - Signed access/refresh token issuance with distinct secrets
//! - Token verification with typed rejection kinds
//! - Authentication coordination (credential check followed by token issuance)
//!
//! Nothing in this crate performs I/O. Secrets are passed in explicitly through
//! [`TokenSecrets`], so tests can run with their own keys side by side.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("password123").unwrap();
//! assert!(hasher.verify("password123", &hash));
//! assert!(!hasher.verify("wrong", &hash));
//! ```
//!
//! ## Token Pair
//! ```
//! use auth::{Authenticator, TokenSecrets, TokenSubject};
//!
//! let secrets = TokenSecrets::new(
//!     "access_secret_at_least_32_bytes_long!",
//!     "refresh_secret_at_least_32_bytes_long",
//! );
//! let authenticator = Authenticator::new(&secrets);
//!
//! let subject = TokenSubject::new(1, "yamada@example.com", false);
//! let pair = authenticator.issue_pair(&subject).unwrap();
//!
//! let claims = authenticator.verify_access_token(&pair.access_token).unwrap();
//! assert_eq!(claims.subject(), subject);
//! assert!(authenticator.verify_refresh_token(&pair.access_token).is_err());
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::SessionClaims;
pub use jwt::TokenIssuer;
pub use jwt::TokenKind;
pub use jwt::TokenPair;
pub use jwt::TokenSecrets;
pub use jwt::TokenSubject;
pub use jwt::TokenVerifier;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::StrengthViolation;
