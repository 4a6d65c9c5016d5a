use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::session::errors::SessionError;
use crate::session::models::LoginCommand;
use crate::session::models::SalesPerson;
use crate::session::models::SalesPersonId;
use crate::session::models::SessionGrant;
use crate::session::ports::SalesPersonRepository;
use crate::session::ports::SessionServicePort;

/// Domain service implementation for session operations.
///
/// Stateless: every session lives entirely in the client-held tokens, so a
/// refresh token stays usable until its own expiry even after it has been
/// exchanged for a new pair.
pub struct SessionService<R>
where
    R: SalesPersonRepository,
{
    repository: Arc<R>,
    authenticator: Arc<Authenticator>,
}

impl<R> SessionService<R>
where
    R: SalesPersonRepository,
{
    /// Create a new session service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Sales person lookup implementation
    /// * `authenticator` - Password and token machinery holding the signing secrets
    pub fn new(repository: Arc<R>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    async fn resolve(&self, id: &SalesPersonId) -> Result<SalesPerson, SessionError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(SessionError::UserNotFound(id.to_string()))
    }
}

#[async_trait]
impl<R> SessionServicePort for SessionService<R>
where
    R: SalesPersonRepository,
{
    async fn login(&self, command: LoginCommand) -> Result<SessionGrant, SessionError> {
        let Some(sales_person) = self.repository.find_by_email(&command.email).await? else {
            tracing::warn!(reason = "unknown_email", "Login rejected");
            return Err(SessionError::InvalidCredentials);
        };

        // Argon2 verification is CPU-bound.
        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let stored_hash = sales_person.password_hash.clone();
        let subject = sales_person.token_subject();
        let outcome = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, &subject)
        })
        .await
        .map_err(|e| SessionError::Unknown(format!("Credential check task failed: {}", e)))?;

        let tokens = outcome.map_err(|e| match e {
            AuthenticationError::InvalidCredentials => {
                tracing::warn!(
                    sales_person_id = %sales_person.id,
                    reason = "password_mismatch",
                    "Login rejected"
                );
                SessionError::InvalidCredentials
            }
            AuthenticationError::JwtError(err) => SessionError::TokenIssuance(err.to_string()),
        })?;

        tracing::info!(sales_person_id = %sales_person.id, "Session opened");

        Ok(SessionGrant::new(sales_person, tokens))
    }

    async fn refresh(&self, refresh_token: Option<String>) -> Result<SessionGrant, SessionError> {
        let refresh_token = refresh_token
            .filter(|token| !token.is_empty())
            .ok_or(SessionError::RefreshTokenMissing)?;

        let claims = self
            .authenticator
            .verify_refresh_token(&refresh_token)
            .map_err(|e| {
                tracing::warn!(reason = %e, "Refresh rejected");
                SessionError::RefreshTokenInvalid(e)
            })?;

        // Pick up role or email changes made since the old pair was issued.
        let sales_person = self.resolve(&SalesPersonId(claims.user_id)).await?;

        let tokens = self
            .authenticator
            .issue_pair(&sales_person.token_subject())
            .map_err(|e| SessionError::TokenIssuance(e.to_string()))?;

        tracing::info!(sales_person_id = %sales_person.id, "Session refreshed");

        Ok(SessionGrant::new(sales_person, tokens))
    }

    async fn current_user(&self, id: &SalesPersonId) -> Result<SalesPerson, SessionError> {
        self.resolve(id).await
    }
}
