//! Browser session cookies carrying GoTrue tokens.
//!
//! DESIGN
//! ======
//! Tokens live only in HttpOnly cookies, so page scripts never see them.
//! The access cookie expires with the access token; the refresh cookie
//! outlives it so `/api/auth/me` can rotate a stale session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use super::gotrue::Session;

pub const ACCESS_COOKIE: &str = "mealdash_access_token";
pub const REFRESH_COOKIE: &str = "mealdash_refresh_token";

const DEFAULT_ACCESS_TTL_SECS: i64 = 3600;
const REFRESH_TTL_DAYS: i64 = 30;

/// Tokens presented by the browser, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionTokens {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl SessionTokens {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none()
    }
}

/// Read both token cookies, treating empty values as absent.
#[must_use]
pub fn read_tokens(jar: &CookieJar) -> SessionTokens {
    let value = |name: &str| {
        jar.get(name)
            .map(Cookie::value)
            .filter(|v| !v.is_empty())
            .map(str::to_owned)
    };
    SessionTokens { access_token: value(ACCESS_COOKIE), refresh_token: value(REFRESH_COOKIE) }
}

fn token_cookie(name: &'static str, value: String, secure: bool, max_age: Duration) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

/// Cookies storing a freshly issued session.
#[must_use]
pub fn session_cookies(session: &Session, secure: bool) -> [Cookie<'static>; 2] {
    let access_ttl = session.expires_in.filter(|secs| *secs > 0).unwrap_or(DEFAULT_ACCESS_TTL_SECS);
    [
        token_cookie(ACCESS_COOKIE, session.access_token.clone(), secure, Duration::seconds(access_ttl)),
        token_cookie(REFRESH_COOKIE, session.refresh_token.clone(), secure, Duration::days(REFRESH_TTL_DAYS)),
    ]
}

/// Expired, empty cookies that make the browser drop the session.
#[must_use]
pub fn clear_session_cookies(secure: bool) -> [Cookie<'static>; 2] {
    [
        token_cookie(ACCESS_COOKIE, String::new(), secure, Duration::ZERO),
        token_cookie(REFRESH_COOKIE, String::new(), secure, Duration::ZERO),
    ]
}

#[must_use]
pub fn with_session(jar: CookieJar, session: &Session, secure: bool) -> CookieJar {
    session_cookies(session, secure).into_iter().fold(jar, CookieJar::add)
}

#[must_use]
pub fn without_session(jar: CookieJar, secure: bool) -> CookieJar {
    clear_session_cookies(secure).into_iter().fold(jar, CookieJar::add)
}
