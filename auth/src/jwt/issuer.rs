use chrono::DateTime;
use chrono::Utc;

use super::claims::SessionClaims;
use super::claims::TokenKind;
use super::claims::TokenSubject;
use super::errors::JwtError;
use super::handler::JwtHandler;

/// Signing secrets, one per token kind.
///
/// Passed explicitly to the issuer and verifier at construction time.
#[derive(Clone)]
pub struct TokenSecrets {
    pub access: Vec<u8>,
    pub refresh: Vec<u8>,
}

impl TokenSecrets {
    pub fn new(access: impl Into<Vec<u8>>, refresh: impl Into<Vec<u8>>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
        }
    }
}

impl std::fmt::Debug for TokenSecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSecrets")
            .field("access", &"<redacted>")
            .field("refresh", &"<redacted>")
            .finish()
    }
}

/// An access token and a refresh token minted together for one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub access_expires_at: DateTime<Utc>,
    pub refresh_expires_at: DateTime<Utc>,
}

/// Mints signed access and refresh tokens.
///
/// Issuance is pure computation: given the same subject and the same second,
/// the same token comes out.
pub struct TokenIssuer {
    access: JwtHandler,
    refresh: JwtHandler,
}

impl TokenIssuer {
    pub fn new(secrets: &TokenSecrets) -> Self {
        Self {
            access: JwtHandler::new(&secrets.access),
            refresh: JwtHandler::new(&secrets.refresh),
        }
    }

    /// Issue a one-hour access token.
    pub fn issue_access_token(&self, subject: &TokenSubject) -> Result<String, JwtError> {
        self.issue_at(TokenKind::Access, subject, Utc::now())
    }

    /// Issue a seven-day refresh token.
    pub fn issue_refresh_token(&self, subject: &TokenSubject) -> Result<String, JwtError> {
        self.issue_at(TokenKind::Refresh, subject, Utc::now())
    }

    /// Issue both tokens for the same subject and instant.
    pub fn issue_pair(&self, subject: &TokenSubject) -> Result<TokenPair, JwtError> {
        self.issue_pair_at(subject, Utc::now())
    }

    /// Issue a token of `kind` as if the current time were `issued_at`.
    pub fn issue_at(
        &self,
        kind: TokenKind,
        subject: &TokenSubject,
        issued_at: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        let claims = SessionClaims::for_subject(subject, kind, issued_at);
        self.handler(kind).encode(&claims)
    }

    /// Issue a pair as if the current time were `issued_at`.
    pub fn issue_pair_at(
        &self,
        subject: &TokenSubject,
        issued_at: DateTime<Utc>,
    ) -> Result<TokenPair, JwtError> {
        Ok(TokenPair {
            access_token: self.issue_at(TokenKind::Access, subject, issued_at)?,
            refresh_token: self.issue_at(TokenKind::Refresh, subject, issued_at)?,
            access_expires_at: issued_at + TokenKind::Access.lifetime(),
            refresh_expires_at: issued_at + TokenKind::Refresh.lifetime(),
        })
    }

    fn handler(&self, kind: TokenKind) -> &JwtHandler {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }
}
