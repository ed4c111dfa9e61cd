//! Shared REST DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server crate serializes exactly these types, so both sides of
//! `/api/auth/*` agree on field names without a separate schema.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub use crate::util::validation::{RegisterForm, UserType};

/// Route shown after a sign-up that still needs e-mail confirmation.
pub const VERIFY_EMAIL_ROUTE: &str = "/verify-email";
/// Route shown once a session exists.
pub const PROFILE_ROUTE: &str = "/profile";

/// The signed-in MealDash user as exposed to the browser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Auth backend user id (UUID string).
    pub id: String,
    pub email: Option<String>,
    /// Display name captured at registration.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub user_type: Option<UserType>,
}

/// `POST /api/auth/signup` body. Carries the raw form; the server
/// re-validates it.
pub type SignUpRequest = RegisterForm;

/// `POST /api/auth/signup` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub user: Option<User>,
    /// `false` when the backend requires e-mail confirmation first.
    pub session_active: bool,
}

/// `POST /api/auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// A per-field validation message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMessage {
    pub field: String,
    pub message: String,
}

/// JSON error body returned by every failing `/api` route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldMessage>,
}

impl ErrorBody {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into(), fields: Vec::new() }
    }

    /// Text suitable for the form message area.
    #[must_use]
    pub fn display_message(&self) -> String {
        if self.fields.is_empty() {
            return self.error.clone();
        }
        self.fields
            .iter()
            .map(|f| f.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Where the register page goes after the backend accepted a sign-up.
///
/// A user without a session has to confirm their e-mail first.
#[must_use]
pub fn next_route_after_sign_up(response: &SignUpResponse) -> Option<&'static str> {
    match (&response.user, response.session_active) {
        (Some(_), false) => Some(VERIFY_EMAIL_ROUTE),
        (Some(_), true) => Some(PROFILE_ROUTE),
        (None, _) => None,
    }
}
