use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::session::errors::SessionError;
use crate::session::models::SalesPerson;

pub mod check_admin;
pub mod login;
pub mod logout;
pub mod me;
pub mod protected;
pub mod refresh;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Every rejection the HTTP surface can produce.
///
/// Each variant owns a stable machine-readable code; `Internal` carries a detail that is
/// logged but never sent to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InvalidCredentials,
    Unauthorized,
    Forbidden,
    RefreshTokenMissing,
    RefreshTokenInvalid,
    UserNotFound,
    Validation(Vec<FieldError>),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidCredentials
            | ApiError::Unauthorized
            | ApiError::RefreshTokenMissing
            | ApiError::RefreshTokenInvalid => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidCredentials => "AUTH_INVALID_CREDENTIALS",
            ApiError::Unauthorized => "AUTH_UNAUTHORIZED",
            ApiError::Forbidden => "AUTH_FORBIDDEN",
            ApiError::RefreshTokenMissing => "REFRESH_TOKEN_MISSING",
            ApiError::RefreshTokenInvalid => "REFRESH_TOKEN_INVALID",
            ApiError::UserNotFound => "USER_NOT_FOUND",
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::InvalidCredentials => "Invalid email or password",
            ApiError::Unauthorized => "Authentication required",
            ApiError::Forbidden => "Manager role required",
            ApiError::RefreshTokenMissing => "Refresh token not found",
            ApiError::RefreshTokenInvalid => "Refresh token is invalid or expired",
            ApiError::UserNotFound => "User not found",
            ApiError::Validation(_) => "Request validation failed",
            ApiError::Internal(_) => "An unexpected error occurred",
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::InvalidCredentials => ApiError::InvalidCredentials,
            SessionError::RefreshTokenMissing => ApiError::RefreshTokenMissing,
            SessionError::RefreshTokenInvalid(_) => ApiError::RefreshTokenInvalid,
            SessionError::UserNotFound(_) => ApiError::UserNotFound,
            // Request emails are validated before reaching the service.
            SessionError::InvalidEmail(_)
            | SessionError::TokenIssuance(_)
            | SessionError::DatabaseError(_)
            | SessionError::Unknown(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let ApiError::Internal(detail) = &self {
            tracing::error!(error = %detail, "Request failed");
        }

        let details = match &self {
            ApiError::Validation(fields) => Some(fields.clone()),
            _ => None,
        };

        let body = ApiErrorResponse {
            error: ApiErrorBody {
                code: self.code(),
                message: self.message().to_string(),
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// One rejected request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Body shared by login and refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResponseData {
    pub token: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
    pub user: UserData,
}

/// Profile as stored; field names are snake_case, unlike the claims echo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: String,
    pub is_manager: bool,
}

impl From<&SalesPerson> for UserData {
    fn from(sales_person: &SalesPerson) -> Self {
        Self {
            id: sales_person.id.0,
            name: sales_person.name.clone(),
            email: sales_person.email.as_str().to_string(),
            department: sales_person.department.clone(),
            is_manager: sales_person.is_manager,
        }
    }
}

/// Identity echo returned by the gated probe routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateResponseData {
    pub message: String,
    pub user: ClaimsUserData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimsUserData {
    pub id: i64,
    pub email: String,
    pub is_manager: bool,
}

impl From<&auth::SessionClaims> for ClaimsUserData {
    fn from(claims: &auth::SessionClaims) -> Self {
        Self {
            id: claims.user_id,
            email: claims.email.clone(),
            is_manager: claims.is_manager,
        }
    }
}
