//! Auth routes: sign-up, password sign-in, current user, logout.
//!
//! Handlers translate between the browser's JSON/cookie world and the GoTrue
//! client. Tokens never appear in response bodies.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::CookieJar;
use client::net::types::{SignInRequest, SignUpRequest, SignUpResponse, User};
use client::util::validation::{validate_login_form, validate_register_form};

use crate::error::ApiError;
use crate::services::gotrue::{GoTrueError, GoTrueUser, Session};
use crate::services::session;
use crate::state::AppState;

/// Resolve the browser-facing user for a new session, asking the backend
/// when the token response did not embed one.
async fn session_user(state: &AppState, session: &Session) -> Result<User, ApiError> {
    match &session.user {
        Some(user) => Ok(user.to_user()),
        None => Ok(state.gotrue.get_user(&session.access_token).await?.to_user()),
    }
}

/// `POST /api/auth/signup`: validate, register upstream, set cookies when a
/// session was issued immediately.
pub async fn sign_up(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(form): Json<SignUpRequest>,
) -> Result<(CookieJar, Json<SignUpResponse>), ApiError> {
    let registration = validate_register_form(&form).map_err(ApiError::Validation)?;
    let metadata = serde_json::json!({
        "name": registration.name,
        "type": registration.user_type.as_str(),
    });

    let outcome = state
        .gotrue
        .sign_up(&registration.email, &registration.password, &metadata)
        .await?;

    let session_active = outcome.session.is_some();
    let jar = match &outcome.session {
        Some(issued) => session::with_session(jar, issued, state.cookie_secure),
        None => jar,
    };
    let user = outcome.user.as_ref().map(GoTrueUser::to_user);
    tracing::info!(
        user_id = user.as_ref().map_or("", |u| u.id.as_str()),
        user_type = %registration.user_type,
        session_active,
        "sign-up accepted"
    );

    Ok((jar, Json(SignUpResponse { user, session_active })))
}

/// `POST /api/auth/login`: exchange e-mail + password for session cookies.
pub async fn sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<SignInRequest>,
) -> Result<(CookieJar, Json<User>), ApiError> {
    let (email, password) =
        validate_login_form(&request.email, &request.password).map_err(|m| ApiError::BadRequest(m.to_owned()))?;

    let issued = state
        .gotrue
        .sign_in_with_password(&email, &password)
        .await
        .map_err(|e| match e {
            GoTrueError::Api { status: 400 | 401 | 403, message } => ApiError::InvalidCredentials(message),
            other => ApiError::GoTrue(other),
        })?;

    let user = session_user(&state, &issued).await?;
    tracing::info!(user_id = %user.id, "password sign-in");
    Ok((session::with_session(jar, &issued, state.cookie_secure), Json(user)))
}

/// `GET /api/auth/me`: current user; rotates the session once when the
/// access token has expired but a refresh token is present.
pub async fn me(State(state): State<AppState>, jar: CookieJar) -> Result<Response, ApiError> {
    let tokens = session::read_tokens(&jar);
    if tokens.is_empty() {
        return Err(ApiError::Unauthorized);
    }

    if let Some(access_token) = &tokens.access_token {
        match state.gotrue.get_user(access_token).await {
            Ok(user) => return Ok(Json(user.to_user()).into_response()),
            Err(e) if e.is_unauthorized() => {
                tracing::debug!("access token rejected, trying refresh");
            }
            Err(e) => return Err(e.into()),
        }
    }

    // Reaching here means the access token was rejected or absent.
    let Some(refresh_token) = tokens.refresh_token else {
        return Ok((session::without_session(jar, state.cookie_secure), ApiError::Unauthorized).into_response());
    };

    let refreshed = match state.gotrue.refresh_session(&refresh_token).await {
        Ok(refreshed) => refreshed,
        Err(e) if e.is_client_rejection() => {
            tracing::info!(error = %e, "refresh token rejected, clearing session");
            return Ok((session::without_session(jar, state.cookie_secure), ApiError::Unauthorized).into_response());
        }
        Err(e) => return Err(e.into()),
    };

    let user = session_user(&state, &refreshed).await?;
    Ok((session::with_session(jar, &refreshed, state.cookie_secure), Json(user)).into_response())
}

/// `POST /api/auth/logout`: revoke upstream when possible, always clear the
/// cookies. Succeeds without a session.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let tokens = session::read_tokens(&jar);
    if let Some(access_token) = revocable_access_token(&state, tokens).await {
        if let Err(e) = state.gotrue.sign_out(&access_token).await {
            tracing::warn!(error = %e, "upstream sign-out failed; clearing cookies anyway");
        }
    }
    (session::without_session(jar, state.cookie_secure), StatusCode::NO_CONTENT)
}

/// Access token to revoke on logout. An expired access cookie leaves only the
/// refresh cookie, which is traded for a fresh access token first.
async fn revocable_access_token(state: &AppState, tokens: session::SessionTokens) -> Option<String> {
    if let Some(access_token) = tokens.access_token {
        return Some(access_token);
    }
    let refresh_token = tokens.refresh_token?;
    match state.gotrue.refresh_session(&refresh_token).await {
        Ok(refreshed) => Some(refreshed.access_token),
        Err(e) => {
            tracing::warn!(error = %e, "refresh before sign-out failed; clearing cookies anyway");
            None
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
