//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth failures
//! land in the form message area without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{RegisterForm, SignUpResponse, User};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
#[cfg(feature = "hydrate")]
use super::types::SignInRequest;

pub const ME_ENDPOINT: &str = "/api/auth/me";
pub const SIGN_UP_ENDPOINT: &str = "/api/auth/signup";
pub const SIGN_IN_ENDPOINT: &str = "/api/auth/login";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

/// Turn a non-OK response body into the message shown to the user.
#[cfg(any(test, feature = "hydrate"))]
fn error_message_from_body(action: &str, status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.error.is_empty() || !parsed.fields.is_empty() => parsed.display_message(),
        _ => request_failed_message(action, status),
    }
}

#[cfg(feature = "hydrate")]
async fn error_from_response(action: &str, resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let message = error_message_from_body(action, status, &body);
    log::warn!("{action} rejected ({status}): {message}");
    message
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ME_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Register a new account via `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns a user-facing message if the request fails, the server rejects the
/// form, or the auth backend refuses the sign-up.
pub async fn sign_up(form: &RegisterForm) -> Result<SignUpResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SIGN_UP_ENDPOINT)
            .json(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response("sign up", resp).await);
        }
        resp.json::<SignUpResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err("not available on server".to_owned())
    }
}

/// Sign in with e-mail and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns a user-facing message if the request fails or the credentials are
/// rejected.
pub async fn sign_in(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = SignInRequest { email: email.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post(SIGN_IN_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response("sign in", resp).await);
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await {
            log::warn!("logout request failed: {e}");
        }
    }
}
