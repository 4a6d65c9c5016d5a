use async_trait::async_trait;

use crate::session::errors::SessionError;
use crate::session::models::EmailAddress;
use crate::session::models::LoginCommand;
use crate::session::models::SalesPerson;
use crate::session::models::SalesPersonId;
use crate::session::models::SessionGrant;

/// Port for session lifecycle operations.
#[async_trait]
pub trait SessionServicePort: Send + Sync + 'static {
    /// Verify credentials and open a session.
    ///
    /// # Arguments
    /// * `command` - Validated email and plaintext password
    ///
    /// # Returns
    /// Session grant with a fresh token pair
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `DatabaseError` - Identity lookup failed
    async fn login(&self, command: LoginCommand) -> Result<SessionGrant, SessionError>;

    /// Extend a session using its refresh token.
    ///
    /// # Arguments
    /// * `refresh_token` - Refresh token read from the request, if any
    ///
    /// # Returns
    /// Session grant with a brand-new token pair for the re-resolved identity
    ///
    /// # Errors
    /// * `RefreshTokenMissing` - No refresh token was presented
    /// * `RefreshTokenInvalid` - Token failed verification or is expired
    /// * `UserNotFound` - Identity no longer exists
    /// * `DatabaseError` - Identity lookup failed
    async fn refresh(&self, refresh_token: Option<String>) -> Result<SessionGrant, SessionError>;

    /// Re-resolve the identity behind a verified session.
    ///
    /// # Errors
    /// * `UserNotFound` - Identity no longer exists
    /// * `DatabaseError` - Identity lookup failed
    async fn current_user(&self, id: &SalesPersonId) -> Result<SalesPerson, SessionError>;
}

/// Read access to sales person identities.
#[async_trait]
pub trait SalesPersonRepository: Send + Sync + 'static {
    /// Retrieve sales person by identifier.
    ///
    /// # Returns
    /// Optional sales person (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &SalesPersonId) -> Result<Option<SalesPerson>, SessionError>;

    /// Retrieve sales person by exact email address.
    ///
    /// # Returns
    /// Optional sales person (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<SalesPerson>, SessionError>;
}
