use axum::http::StatusCode;
use axum::Extension;

use super::ApiSuccess;
use super::GateResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Reachable only through the manager gate.
pub async fn check_admin(
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiSuccess<GateResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        GateResponseData {
            message: "Manager access granted".to_string(),
            user: (&user.claims).into(),
        },
    )
}
