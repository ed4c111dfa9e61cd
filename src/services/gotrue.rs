//! Supabase Auth (GoTrue) REST client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only component that holds the anon key or calls the auth backend.
//! Every request carries the `apikey` header; user-scoped calls add the
//! access token as a bearer.
//!
//! `POST /signup` answers with a full session when e-mail confirmation is
//! disabled and with a bare user object otherwise; `parse_auth_response`
//! folds both shapes into `AuthResponse`.

#[cfg(test)]
#[path = "gotrue_test.rs"]
mod gotrue_test;

use std::time::Duration;

use client::net::types::{User, UserType};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::config::GoTrueConfig;

/// Errors produced by auth backend calls.
#[derive(Debug, thiserror::Error)]
pub enum GoTrueError {
    /// The HTTP request could not be sent or the body could not be read.
    #[error("auth request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("auth backend error: status {status}: {message}")]
    Api { status: u16, message: String },

    /// The backend answered 2xx with a body we cannot interpret.
    #[error("auth response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl GoTrueError {
    /// The backend rejected the presented token.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401 | 403, .. })
    }

    /// The backend rejected the request content (bad credentials, stale
    /// refresh token, duplicate account, ...).
    #[must_use]
    pub fn is_client_rejection(&self) -> bool {
        matches!(self, Self::Api { status: 400..=499, .. })
    }
}

/// A user record as returned by GoTrue.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GoTrueUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    /// Free-form metadata supplied at sign-up (`name`, `type`).
    #[serde(default)]
    pub user_metadata: Value,
}

impl GoTrueUser {
    /// Project into the browser-facing user shape.
    #[must_use]
    pub fn to_user(&self) -> User {
        let metadata_str = |key: &str| self.user_metadata.get(key).and_then(Value::as_str);
        User {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: metadata_str("name").map(str::to_owned),
            user_type: metadata_str("type").and_then(|raw| raw.parse::<UserType>().ok()),
        }
    }
}

/// Tokens issued by GoTrue.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub user: Option<GoTrueUser>,
}

/// Normalised result of a sign-up.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthResponse {
    pub user: Option<GoTrueUser>,
    /// `None` until the user confirms their e-mail.
    pub session: Option<Session>,
}

pub struct GoTrueClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    email_redirect_url: Option<String>,
}

impl GoTrueClient {
    /// Build a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns `GoTrueError::HttpClientBuild` if reqwest cannot build the client.
    pub fn new(config: &GoTrueConfig) -> Result<Self, GoTrueError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| GoTrueError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_owned(),
            anon_key: config.anon_key.clone(),
            email_redirect_url: config.email_redirect_url.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    /// Register a new user. `metadata` lands in the user's `user_metadata`.
    ///
    /// # Errors
    ///
    /// Returns `GoTrueError` on transport failure, a rejected sign-up, or an
    /// unrecognised response body.
    pub async fn sign_up(&self, email: &str, password: &str, metadata: &Value) -> Result<AuthResponse, GoTrueError> {
        let payload = serde_json::json!({
            "email": email,
            "password": password,
            "data": metadata,
        });
        let mut request = self.http.post(self.endpoint("signup")).json(&payload);
        if let Some(redirect_to) = &self.email_redirect_url {
            request = request.query(&[("redirect_to", redirect_to)]);
        }
        let body = self.send(request).await?;
        parse_auth_response(body)
    }

    /// Exchange e-mail and password for a session.
    ///
    /// # Errors
    ///
    /// Returns `GoTrueError::Api` with status 400 for wrong credentials.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, GoTrueError> {
        let request = self
            .http
            .post(self.endpoint("token"))
            .query(&[("grant_type", "password")])
            .json(&serde_json::json!({ "email": email, "password": password }));
        let body = self.send(request).await?;
        serde_json::from_value(body).map_err(|e| GoTrueError::Parse(e.to_string()))
    }

    /// Trade a refresh token for a fresh session.
    ///
    /// # Errors
    ///
    /// Returns `GoTrueError::Api` when the refresh token is unknown or used.
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<Session, GoTrueError> {
        let request = self
            .http
            .post(self.endpoint("token"))
            .query(&[("grant_type", "refresh_token")])
            .json(&serde_json::json!({ "refresh_token": refresh_token }));
        let body = self.send(request).await?;
        serde_json::from_value(body).map_err(|e| GoTrueError::Parse(e.to_string()))
    }

    /// Fetch the user owning `access_token`.
    ///
    /// # Errors
    ///
    /// Returns an unauthorized `GoTrueError::Api` for expired or revoked tokens.
    pub async fn get_user(&self, access_token: &str) -> Result<GoTrueUser, GoTrueError> {
        let request = self.http.get(self.endpoint("user")).bearer_auth(access_token);
        let body = self.send(request).await?;
        serde_json::from_value(body).map_err(|e| GoTrueError::Parse(e.to_string()))
    }

    /// Revoke the session owning `access_token`.
    ///
    /// # Errors
    ///
    /// Returns `GoTrueError` on transport failure or a non-success status.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), GoTrueError> {
        let request = self.http.post(self.endpoint("logout")).bearer_auth(access_token);
        self.send(request).await.map(|_| ())
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value, GoTrueError> {
        let resp = request
            .header("apikey", &self.anon_key)
            .send()
            .await
            .map_err(|e| GoTrueError::Request(e.to_string()))?;
        let status = resp.status().as_u16();
        let text = resp.text().await.map_err(|e| GoTrueError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(GoTrueError::Api { status, message: parse_error_message(status, &text) });
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| GoTrueError::Parse(e.to_string()))
    }
}

/// Fold the two sign-up response shapes into `AuthResponse`.
pub(crate) fn parse_auth_response(body: Value) -> Result<AuthResponse, GoTrueError> {
    if body.get("access_token").is_some() {
        let session: Session = serde_json::from_value(body).map_err(|e| GoTrueError::Parse(e.to_string()))?;
        return Ok(AuthResponse { user: session.user.clone(), session: Some(session) });
    }

    let user_value = if let Some(nested) = body.get("user").filter(|u| !u.is_null()) {
        nested.clone()
    } else if body.get("id").is_some() {
        body
    } else {
        return Ok(AuthResponse { user: None, session: None });
    };
    let user = serde_json::from_value(user_value).map_err(|e| GoTrueError::Parse(e.to_string()))?;
    Ok(AuthResponse { user: Some(user), session: None })
}

/// Pull a human-readable message out of a GoTrue error body.
pub(crate) fn parse_error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["msg", "message", "error_description", "error"] {
            if let Some(message) = value.get(key).and_then(Value::as_str).filter(|m| !m.is_empty()) {
                return message.to_owned();
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() { format!("status {status}") } else { trimmed.to_owned() }
}
