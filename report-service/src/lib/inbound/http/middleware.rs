use auth::JwtError;
use auth::SessionClaims;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Verified access-token claims, stored in request extensions by the gates.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub claims: SessionClaims,
}

/// Gate for routes that need any signed-in sales person.
///
/// Reads the access token from the `access_token` cookie, falling back to an
/// `Authorization: Bearer` header. Rejects with `401 AUTH_UNAUTHORIZED` without
/// calling the inner handler when the token is absent or fails verification.
pub async fn require_authenticated(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = authenticate(&state, req.headers())?;

    req.extensions_mut().insert(AuthenticatedUser { claims });

    Ok(next.run(req).await)
}

/// Gate for manager-only routes.
///
/// Authentication is checked first; the role flag of an unverified token is never read.
pub async fn require_manager(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = authenticate(&state, req.headers())?;

    if !claims.is_manager {
        tracing::warn!(
            sales_person_id = claims.user_id,
            uri = %req.uri(),
            "Manager role required"
        );
        return Err(ApiError::Forbidden);
    }

    req.extensions_mut().insert(AuthenticatedUser { claims });

    Ok(next.run(req).await)
}

fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<SessionClaims, ApiError> {
    let jar = CookieJar::from_headers(headers);
    let token = state
        .session_cookies
        .read_access_token(&jar)
        .or_else(|| bearer_token(headers))
        .ok_or_else(|| {
            tracing::debug!("No access token presented");
            ApiError::Unauthorized
        })?;

    state
        .authenticator
        .verify_access_token(&token)
        .map_err(|e| {
            let reason = match e {
                JwtError::Expired => "expired",
                JwtError::InvalidSignature => "invalid_signature",
                JwtError::Malformed(_) => "malformed",
                JwtError::EncodingFailed(_) => "encoding_failed",
            };
            tracing::warn!(reason, "Access token rejected");
            ApiError::Unauthorized
        })
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use auth::Authenticator;
    use auth::TokenKind;
    use auth::TokenSecrets;
    use auth::TokenSubject;
    use axum::body::to_bytes;
    use axum::body::Body;
    use axum::http::header::COOKIE;
    use axum::http::Request as HttpRequest;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Extension;
    use axum::Router;
    use chrono::Duration;
    use chrono::Utc;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::session::ports::SessionServicePort;
    use crate::inbound::http::session_cookies::SessionCookies;
    use crate::session::errors::SessionError;
    use crate::session::models::LoginCommand;
    use crate::session::models::SalesPerson;
    use crate::session::models::SalesPersonId;
    use crate::session::models::SessionGrant;

    /// The gates never reach the session service.
    struct UnreachableSessionService;

    #[async_trait]
    impl SessionServicePort for UnreachableSessionService {
        async fn login(&self, _command: LoginCommand) -> Result<SessionGrant, SessionError> {
            unreachable!()
        }

        async fn refresh(
            &self,
            _refresh_token: Option<String>,
        ) -> Result<SessionGrant, SessionError> {
            unreachable!()
        }

        async fn current_user(&self, _id: &SalesPersonId) -> Result<SalesPerson, SessionError> {
            unreachable!()
        }
    }

    fn secrets() -> TokenSecrets {
        TokenSecrets::new(
            "test_access_secret_at_least_32_bytes!",
            "test_refresh_secret_at_least_32_bytes",
        )
    }

    fn state() -> AppState {
        AppState {
            session_service: Arc::new(UnreachableSessionService),
            authenticator: Arc::new(Authenticator::new(&secrets())),
            session_cookies: SessionCookies::new(false),
        }
    }

    async fn echo(Extension(user): Extension<AuthenticatedUser>) -> String {
        user.claims.email
    }

    fn app(state: AppState) -> Router {
        let authenticated = Router::new()
            .route("/authenticated", get(echo))
            .route_layer(axum::middleware::from_fn_with_state(
                state.clone(),
                require_authenticated,
            ));
        let manager = Router::new()
            .route("/manager", get(echo))
            .route_layer(axum::middleware::from_fn_with_state(
                state.clone(),
                require_manager,
            ));

        Router::new()
            .merge(authenticated)
            .merge(manager)
            .with_state(state)
    }

    fn token(kind: TokenKind, is_manager: bool) -> String {
        let subject = TokenSubject::new(1, "yamada@example.com", is_manager);
        state()
            .authenticator
            .issuer()
            .issue_at(kind, &subject, Utc::now())
            .unwrap()
    }

    async fn send(uri: &str, header: Option<(&str, String)>) -> (StatusCode, String) {
        let mut builder = HttpRequest::builder().uri(uri);
        if let Some((name, value)) = header {
            builder = builder.header(name, value);
        }
        let response = app(state())
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn error_code(body: &str) -> String {
        let value: Value = serde_json::from_str(body).unwrap();
        value["error"]["code"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_missing_token_rejected() {
        let (status, body) = send("/authenticated", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(error_code(&body), "AUTH_UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_cookie_token_accepted() {
        let cookie = format!("access_token={}", token(TokenKind::Access, false));
        let (status, body) = send("/authenticated", Some((COOKIE.as_str(), cookie))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "yamada@example.com");
    }

    #[tokio::test]
    async fn test_bearer_token_accepted() {
        let header = format!("Bearer {}", token(TokenKind::Access, false));
        let (status, _) = send("/authenticated", Some((AUTHORIZATION.as_str(), header))).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_refresh_token_not_accepted_as_access() {
        let cookie = format!("access_token={}", token(TokenKind::Refresh, false));
        let (status, body) = send("/authenticated", Some((COOKIE.as_str(), cookie))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(error_code(&body), "AUTH_UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_expired_token_rejected() {
        let subject = TokenSubject::new(1, "yamada@example.com", false);
        let expired = state()
            .authenticator
            .issuer()
            .issue_at(TokenKind::Access, &subject, Utc::now() - Duration::hours(2))
            .unwrap();

        let cookie = format!("access_token={}", expired);
        let (status, _) = send("/authenticated", Some((COOKIE.as_str(), cookie))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_garbage_token_rejected() {
        let cookie = "access_token=not-a-token".to_string();
        let (status, _) = send("/authenticated", Some((COOKIE.as_str(), cookie))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_manager_gate_forbids_non_manager() {
        let cookie = format!("access_token={}", token(TokenKind::Access, false));
        let (status, body) = send("/manager", Some((COOKIE.as_str(), cookie))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(error_code(&body), "AUTH_FORBIDDEN");
    }

    #[tokio::test]
    async fn test_manager_gate_authenticates_first() {
        let (status, body) = send("/manager", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(error_code(&body), "AUTH_UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_manager_gate_admits_manager() {
        let cookie = format!("access_token={}", token(TokenKind::Access, true));
        let (status, _) = send("/manager", Some((COOKIE.as_str(), cookie))).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[test]
    fn test_bearer_token_parsing() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, "Basic abc".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, "Bearer ".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi".to_string()));
    }
}
