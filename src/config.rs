//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GOTRUE_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_GOTRUE_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set or is empty.
    #[error("missing config: env var {var} not set")]
    Missing { var: &'static str },

    /// A variable is set but cannot be parsed.
    #[error("invalid config: {var}={value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoTrueTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Auth backend (Supabase GoTrue) connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoTrueConfig {
    /// Project URL without trailing slash, e.g. `https://xyz.supabase.co`.
    pub url: String,
    pub anon_key: String,
    /// Where confirmation e-mails send the user back to.
    pub email_redirect_url: Option<String>,
    pub timeouts: GoTrueTimeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub cookie_secure: bool,
    pub gotrue: GoTrueConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `SUPABASE_URL`
    /// - `SUPABASE_ANON_KEY`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `COOKIE_SECURE`: bool; inferred from `SITE_URL` being `https://` when absent
    /// - `AUTH_EMAIL_REDIRECT_URL`: `redirect_to` for confirmation e-mails
    /// - `GOTRUE_REQUEST_TIMEOUT_SECS`: default 30
    /// - `GOTRUE_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a required variable is missing or a value is
    /// malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = required(&lookup, "SUPABASE_URL")?.trim_end_matches('/').to_owned();
        let anon_key = required(&lookup, "SUPABASE_ANON_KEY")?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { var: "COOKIE_SECURE", value: raw })?,
            None => lookup("SITE_URL").is_some_and(|site| site.starts_with("https://")),
        };

        let email_redirect_url = lookup("AUTH_EMAIL_REDIRECT_URL").filter(|v| !v.trim().is_empty());
        let timeouts = GoTrueTimeouts {
            request_secs: parse_u64_or(&lookup, "GOTRUE_REQUEST_TIMEOUT_SECS", DEFAULT_GOTRUE_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64_or(&lookup, "GOTRUE_CONNECT_TIMEOUT_SECS", DEFAULT_GOTRUE_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, cookie_secure, gotrue: GoTrueConfig { url, anon_key, email_redirect_url, timeouts } })
    }
}

fn required<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing { var })
}

fn parse_u64_or<F>(lookup: &F, var: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

/// Parse the usual boolean spellings, case-insensitively.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
