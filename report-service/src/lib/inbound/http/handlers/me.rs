use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::session::ports::SessionServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::session::models::SalesPersonId;

/// Current profile, re-read from storage rather than taken from the token.
pub async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let sales_person = state
        .session_service
        .current_user(&SalesPersonId(user.claims.user_id))
        .await?;

    Ok(ApiSuccess::new(StatusCode::OK, (&sales_person).into()))
}
