use axum::http::StatusCode;
use axum::Extension;

use super::ApiSuccess;
use super::GateResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;

pub async fn protected(
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiSuccess<GateResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        GateResponseData {
            message: "Access granted".to_string(),
            user: (&user.claims).into(),
        },
    )
}
