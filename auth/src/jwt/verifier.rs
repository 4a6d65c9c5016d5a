use chrono::Utc;
use serde::Deserialize;

use super::claims::SessionClaims;
use super::claims::TokenKind;
use super::errors::JwtError;
use super::handler::JwtHandler;
use super::issuer::TokenSecrets;

/// Only the expiry, for unverified inspection.
#[derive(Deserialize)]
struct ExpirationOnly {
    exp: Option<i64>,
}

/// Validates tokens minted by [`super::TokenIssuer`].
///
/// Each kind is checked against its own secret, so presenting an access token
/// where a refresh token is expected (or the reverse) fails the signature check.
pub struct TokenVerifier {
    access: JwtHandler,
    refresh: JwtHandler,
}

impl TokenVerifier {
    pub fn new(secrets: &TokenSecrets) -> Self {
        Self {
            access: JwtHandler::new(&secrets.access),
            refresh: JwtHandler::new(&secrets.refresh),
        }
    }

    /// Verify a token of the given kind and return its claims.
    ///
    /// # Errors
    /// * `Malformed` - Not a decodable token
    /// * `InvalidSignature` - Wrong secret (including cross-purpose use) or tampering
    /// * `Expired` - Current time is at or past `exp`
    pub fn verify(&self, kind: TokenKind, token: &str) -> Result<SessionClaims, JwtError> {
        let claims: SessionClaims = self.handler(kind).decode(token)?;

        // The codec accepts `now == exp`; a token is already dead in that second.
        if claims.is_expired(Utc::now().timestamp()) {
            return Err(JwtError::Expired);
        }

        Ok(claims)
    }

    pub fn verify_access_token(&self, token: &str) -> Result<SessionClaims, JwtError> {
        self.verify(TokenKind::Access, token)
    }

    pub fn verify_refresh_token(&self, token: &str) -> Result<SessionClaims, JwtError> {
        self.verify(TokenKind::Refresh, token)
    }

    /// Read `exp` without checking the signature.
    ///
    /// Returns `None` for anything that does not decode or carries no `exp`.
    pub fn expiration(&self, token: &str) -> Option<i64> {
        self.access
            .decode_unverified::<ExpirationOnly>(token)
            .ok()
            .and_then(|claims| claims.exp)
    }

    /// True when the token cannot be shown to be unexpired.
    pub fn is_expired(&self, token: &str) -> bool {
        match self.expiration(token) {
            Some(exp) => Utc::now().timestamp() >= exp,
            None => true,
        }
    }

    fn handler(&self, kind: TokenKind) -> &JwtHandler {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }
}
