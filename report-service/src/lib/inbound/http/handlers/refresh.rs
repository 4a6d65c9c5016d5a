use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;

use super::ApiError;
use super::ApiSuccess;
use super::SessionResponseData;
use crate::domain::session::ports::SessionServicePort;
use crate::inbound::http::router::AppState;

/// Exchange the refresh cookie for a brand-new session.
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, ApiSuccess<SessionResponseData>), ApiError> {
    let refresh_token = state.session_cookies.read_refresh_token(&jar);
    let grant = state.session_service.refresh(refresh_token).await?;

    let jar = state.session_cookies.write(jar, &grant.tokens);

    Ok((
        jar,
        ApiSuccess::new(
            StatusCode::OK,
            SessionResponseData {
                token: grant.tokens.access_token.clone(),
                expires_at: grant.expires_at,
                user: (&grant.sales_person).into(),
            },
        ),
    ))
}
