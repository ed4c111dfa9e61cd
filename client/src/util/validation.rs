//! Register and login form schema.
//!
//! SYSTEM CONTEXT
//! ==============
//! The register page validates before any network call, and the server runs
//! the same `validate_register_form` on the raw payload it receives, so the
//! rules live here once.
//!
//! Lengths are counted in UTF-16 code units to match what the browser reports
//! for the input value.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const PASSWORD_MIN_LEN: usize = 5;
pub const PASSWORD_MAX_LEN: usize = 18;
pub const NAME_MIN_LEN: usize = 2;

const LOGIN_REQUIRED_MESSAGE: &str = "Enter both e-mail and password.";

/// MealDash account role chosen at registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserType {
    #[default]
    #[serde(rename = "HOS")]
    Hos,
    #[serde(rename = "DAS")]
    Das,
}

impl UserType {
    pub const ALL: [Self; 2] = [Self::Hos, Self::Das];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hos => "HOS",
            Self::Das => "DAS",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HOS" => Ok(Self::Hos),
            "DAS" => Ok(Self::Das),
            other => Err(FieldError::InvalidUserType { received: other.to_owned() }),
        }
    }
}

/// Raw register form state as typed by the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(rename = "type")]
    pub user_type: String,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            name: String::new(),
            user_type: UserType::default().as_str().to_owned(),
        }
    }
}

/// A register form that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
    pub user_type: UserType,
}

/// Form field a validation issue belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Email,
    Password,
    Name,
    Type,
}

impl Field {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Name => "name",
            Self::Type => "type",
        }
    }
}

/// A single rejected field.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Invalid e-mail address")]
    InvalidEmail,
    #[error("String must contain at least {min} character(s)")]
    TooShort { field: Field, min: usize },
    #[error("String must contain at most {max} character(s)")]
    TooLong { field: Field, max: usize },
    #[error("Invalid enum value. Expected 'HOS' | 'DAS', received '{received}'")]
    InvalidUserType { received: String },
}

impl FieldError {
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::InvalidEmail => Field::Email,
            Self::TooShort { field, .. } | Self::TooLong { field, .. } => *field,
            Self::InvalidUserType { .. } => Field::Type,
        }
    }
}

/// Every issue found in a form, in field order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    #[must_use]
    pub fn issues(&self) -> &[FieldError] {
        &self.0
    }

    #[must_use]
    pub fn for_field(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|issue| issue.field() == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate the register form, collecting one issue per failing field.
///
/// # Errors
///
/// Returns every failing field when any rule is violated.
pub fn validate_register_form(form: &RegisterForm) -> Result<Registration, ValidationErrors> {
    let email = form.email.trim();
    let name = form.name.trim();
    let mut issues = Vec::new();

    if !is_valid_email(email) {
        issues.push(FieldError::InvalidEmail);
    }
    if let Err(issue) = check_length(Field::Password, &form.password, PASSWORD_MIN_LEN, Some(PASSWORD_MAX_LEN)) {
        issues.push(issue);
    }
    if let Err(issue) = check_length(Field::Name, name, NAME_MIN_LEN, None) {
        issues.push(issue);
    }
    let user_type = match form.user_type.parse::<UserType>() {
        Ok(user_type) => Some(user_type),
        Err(issue) => {
            issues.push(issue);
            None
        }
    };

    match user_type {
        Some(user_type) if issues.is_empty() => Ok(Registration {
            email: email.to_owned(),
            password: form.password.clone(),
            name: name.to_owned(),
            user_type,
        }),
        _ => Err(ValidationErrors(issues)),
    }
}

/// Validate the login form: both fields are required.
///
/// # Errors
///
/// Returns a user-facing message when either field is empty.
pub fn validate_login_form(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(LOGIN_REQUIRED_MESSAGE);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Syntactic e-mail check: `local@label.label.tld`.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    if local.is_empty() || local.starts_with('.') || local.contains("..") || local.ends_with(['.', '\'']) {
        return false;
    }
    local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '+' | '-' | '.'))
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, hosts)) = labels.split_last() else {
        return false;
    };
    if hosts.is_empty() {
        return false;
    }
    let hosts_ok = hosts.iter().all(|label| {
        label.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    hosts_ok && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

fn check_length(field: Field, value: &str, min: usize, max: Option<usize>) -> Result<(), FieldError> {
    let len = value.encode_utf16().count();
    if len < min {
        return Err(FieldError::TooShort { field, min });
    }
    match max {
        Some(max) if len > max => Err(FieldError::TooLong { field, max }),
        _ => Ok(()),
    }
}
