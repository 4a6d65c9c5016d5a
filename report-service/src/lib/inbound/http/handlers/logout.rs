use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;

use crate::inbound::http::router::AppState;

/// Clear both session cookies. Succeeds with or without a session.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, StatusCode) {
    (state.session_cookies.clear(jar), StatusCode::NO_CONTENT)
}
