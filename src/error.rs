//! HTTP error type for `/api` handlers.
//!
//! Every variant renders as a JSON `ErrorBody` so the browser can show the
//! message in the form's notification area.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use client::net::types::{ErrorBody, FieldMessage};
use client::util::validation::ValidationErrors;

use crate::services::gotrue::GoTrueError;

const UPSTREAM_UNAVAILABLE: &str = "auth service unavailable";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(ValidationErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("not authenticated")]
    Unauthorized,

    /// Wrong e-mail/password; carries the backend's wording.
    #[error("{0}")]
    InvalidCredentials(String),

    #[error(transparent)]
    GoTrue(#[from] GoTrueError),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized | Self::InvalidCredentials(_) => StatusCode::UNAUTHORIZED,
            Self::GoTrue(err) => upstream_status(err),
        }
    }

    #[must_use]
    pub fn body(&self) -> ErrorBody {
        match self {
            Self::Validation(errors) => ErrorBody {
                error: self.to_string(),
                fields: errors
                    .issues()
                    .iter()
                    .map(|issue| FieldMessage { field: issue.field().as_str().to_owned(), message: issue.to_string() })
                    .collect(),
            },
            Self::GoTrue(GoTrueError::Api { status: 400..=499, message, .. }) => ErrorBody::new(message.clone()),
            Self::GoTrue(_) => ErrorBody::new(UPSTREAM_UNAVAILABLE),
            _ => ErrorBody::new(self.to_string()),
        }
    }
}

/// Backend 4xx answers are the caller's problem; anything else is ours.
fn upstream_status(err: &GoTrueError) -> StatusCode {
    match err {
        GoTrueError::Api { status: 401 | 403, .. } => StatusCode::UNAUTHORIZED,
        GoTrueError::Api { status: 429, .. } => StatusCode::TOO_MANY_REQUESTS,
        GoTrueError::Api { status: 422, .. } => StatusCode::UNPROCESSABLE_ENTITY,
        GoTrueError::Api { status: 400..=499, .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "auth request failed");
        } else {
            tracing::debug!(error = %self, %status, "auth request rejected");
        }
        (status, Json(self.body())).into_response()
    }
}
