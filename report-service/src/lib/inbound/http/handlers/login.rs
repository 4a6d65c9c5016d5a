use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::FieldError;
use super::SessionResponseData;
use crate::domain::session::ports::SessionServicePort;
use crate::inbound::http::router::AppState;
use crate::session::models::EmailAddress;
use crate::session::models::LoginCommand;

/// Verify credentials, set both session cookies and return the access token.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<(CookieJar, ApiSuccess<SessionResponseData>), ApiError> {
    let Json(body) = body.map_err(|rejection| {
        ApiError::Validation(vec![FieldError::new("body", rejection.body_text())])
    })?;

    let command = body.try_into_command()?;
    let grant = state.session_service.login(command).await?;

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

/// Missing fields deserialize as empty strings so they are reported per field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

impl LoginRequestBody {
    fn try_into_command(self) -> Result<LoginCommand, ApiError> {
        let mut errors = Vec::new();

        let email = if self.email.is_empty() {
            errors.push(FieldError::new("email", "Email is required"));
            None
        } else {
            match EmailAddress::new(self.email) {
                Ok(email) => Some(email),
                Err(e) => {
                    errors.push(FieldError::new("email", e.to_string()));
                    None
                }
            }
        };

        if self.password.is_empty() {
            errors.push(FieldError::new("password", "Password is required"));
        }

        match email {
            Some(email) if errors.is_empty() => Ok(LoginCommand::new(email, self.password)),
            _ => Err(ApiError::Validation(errors)),
        }
    }
}
