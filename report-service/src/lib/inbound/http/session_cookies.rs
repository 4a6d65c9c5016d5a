use auth::TokenPair;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::cookie::SameSite;
use time::Duration;

pub const ACCESS_COOKIE_NAME: &str = "access_token";
pub const REFRESH_COOKIE_NAME: &str = "refresh_token";

const ACCESS_COOKIE_MAX_AGE_SECS: i64 = auth::jwt::claims::ACCESS_TOKEN_LIFETIME_SECS;
const REFRESH_COOKIE_MAX_AGE_SECS: i64 = auth::jwt::claims::REFRESH_TOKEN_LIFETIME_SECS;

/// Binds a token pair to the request and response cookie jars.
///
/// Both cookies are `HttpOnly`, `SameSite=Lax`, `Path=/`, and `Secure` only when
/// `secure` is set. Each cookie is emitted as its own `Set-Cookie` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionCookies {
    secure: bool,
}

impl SessionCookies {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// Add both session cookies to the outgoing jar.
    pub fn write(&self, jar: CookieJar, tokens: &TokenPair) -> CookieJar {
        jar.add(self.build(
            ACCESS_COOKIE_NAME,
            tokens.access_token.clone(),
            ACCESS_COOKIE_MAX_AGE_SECS,
        ))
        .add(self.build(
            REFRESH_COOKIE_NAME,
            tokens.refresh_token.clone(),
            REFRESH_COOKIE_MAX_AGE_SECS,
        ))
    }

    pub fn read_access_token(&self, jar: &CookieJar) -> Option<String> {
        read(jar, ACCESS_COOKIE_NAME)
    }

    pub fn read_refresh_token(&self, jar: &CookieJar) -> Option<String> {
        read(jar, REFRESH_COOKIE_NAME)
    }

    /// Expire both session cookies.
    ///
    /// Browsers only drop a cookie when name, path and attributes match the ones it was
    /// set with, so the removal cookies are built by the same routine as `write`.
    pub fn clear(&self, jar: CookieJar) -> CookieJar {
        jar.add(self.build(ACCESS_COOKIE_NAME, String::new(), 0))
            .add(self.build(REFRESH_COOKIE_NAME, String::new(), 0))
    }

    fn build(&self, name: &'static str, value: String, max_age_secs: i64) -> Cookie<'static> {
        Cookie::build((name, value))
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .path("/")
            .max_age(Duration::seconds(max_age_secs))
            .build()
    }
}

fn read(jar: &CookieJar, name: &str) -> Option<String> {
    jar.get(name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}
