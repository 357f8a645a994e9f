//! Auth API configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

const SIGNUP_PATH: &str = "/users/signup/";
const LOGIN_PATH: &str = "/users/login/";

/// Location of the remote authentication API.
///
/// Injected into [`crate::AuthHandler`] at construction so tests and the
/// browser build can point at different hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub api_base_url: String,
}

impl AuthConfig {
    /// Build a config from a base URL. Trailing slashes are dropped and a
    /// blank value falls back to [`DEFAULT_API_BASE_URL`].
    #[must_use]
    pub fn new(api_base_url: &str) -> Self {
        let trimmed = api_base_url.trim().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self { api_base_url: api_base_url.to_owned() }
    }

    /// Build config from the `API_BASE_URL` environment variable.
    ///
    /// Optional:
    /// - `API_BASE_URL`: default `http://localhost:8000/api`
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_var(API_BASE_URL_ENV)
    }

    fn from_env_var(key: &str) -> Self {
        match std::env::var(key) {
            Ok(value) => Self::new(&value),
            Err(_) => Self::default(),
        }
    }

    #[must_use]
    pub fn signup_url(&self) -> String {
        format!("{}{SIGNUP_PATH}", self.api_base_url)
    }

    #[must_use]
    pub fn login_url(&self) -> String {
        format!("{}{LOGIN_PATH}", self.api_base_url)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}
