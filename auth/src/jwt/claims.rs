use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Access token lifetime: 1 hour.
pub const ACCESS_TOKEN_LIFETIME_SECS: i64 = 60 * 60;

/// Refresh token lifetime: 7 days.
pub const REFRESH_TOKEN_LIFETIME_SECS: i64 = 7 * 24 * 60 * 60;

/// Purpose of a signed token. Each kind is signed with its own secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    /// Time from issuance to expiry.
    pub fn lifetime(self) -> Duration {
        match self {
            TokenKind::Access => Duration::seconds(ACCESS_TOKEN_LIFETIME_SECS),
            TokenKind::Refresh => Duration::seconds(REFRESH_TOKEN_LIFETIME_SECS),
        }
    }
}

/// Identity facts embedded in every token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSubject {
    pub user_id: i64,
    pub email: String,
    pub is_manager: bool,
}

impl TokenSubject {
    pub fn new(user_id: i64, email: impl Into<String>, is_manager: bool) -> Self {
        Self {
            user_id,
            email: email.into(),
            is_manager,
        }
    }
}

/// Signed token payload.
///
/// Serialized as `{userId, email, isManager, iat, exp}`; access and refresh
/// tokens share this shape and differ only in secret and lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    pub user_id: i64,
    pub email: String,
    pub is_manager: bool,
    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

impl SessionClaims {
    /// Build claims for a subject issued at `issued_at` with the lifetime of `kind`.
    pub fn for_subject(subject: &TokenSubject, kind: TokenKind, issued_at: DateTime<Utc>) -> Self {
        let expiration = issued_at + kind.lifetime();

        Self {
            user_id: subject.user_id,
            email: subject.email.clone(),
            is_manager: subject.is_manager,
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Identity facts carried by these claims.
    pub fn subject(&self) -> TokenSubject {
        TokenSubject::new(self.user_id, self.email.clone(), self.is_manager)
    }

    /// Expiration as a UTC timestamp.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// A token is expired from the second named by `exp` onwards.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
