use crate::jwt::JwtError;
use crate::jwt::SessionClaims;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenPair;
use crate::jwt::TokenSecrets;
use crate::jwt::TokenSubject;
use crate::jwt::TokenVerifier;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token handling.
///
/// Holds no mutable state; share it behind an `Arc` across request handlers.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    issuer: TokenIssuer,
    verifier: TokenVerifier,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `secrets` - Distinct signing secrets for access and refresh tokens
    pub fn new(secrets: &TokenSecrets) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            issuer: TokenIssuer::new(secrets),
            verifier: TokenVerifier::new(secrets),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and mint a fresh token pair.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identity to embed in both tokens
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &TokenSubject,
    ) -> Result<TokenPair, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issuer.issue_pair(subject)?)
    }

    /// Mint a token pair without password verification.
    ///
    /// Used by the refresh flow, where the refresh token stands in for the password.
    pub fn issue_pair(&self, subject: &TokenSubject) -> Result<TokenPair, JwtError> {
        self.issuer.issue_pair(subject)
    }

    pub fn verify_access_token(&self, token: &str) -> Result<SessionClaims, JwtError> {
        self.verifier.verify_access_token(token)
    }

    pub fn verify_refresh_token(&self, token: &str) -> Result<SessionClaims, JwtError> {
        self.verifier.verify_refresh_token(token)
    }

    pub fn issuer(&self) -> &TokenIssuer {
        &self.issuer
    }

    pub fn verifier(&self) -> &TokenVerifier {
        &self.verifier
    }
}
