//! Auth API access from the browser.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): only the config helpers are available.
//!
//! ERROR HANDLING
//! ==============
//! A fetch that never yields a response maps to `TransportError`; the handler
//! turns that into the "unable to reach" message. Status codes and bodies are
//! passed through untouched.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use remeals_auth::AuthConfig;
use remeals_auth::config::DEFAULT_API_BASE_URL;

/// Base URL baked in at build time from `API_BASE_URL`, if set.
const BUILD_API_BASE_URL: Option<&str> = option_env!("API_BASE_URL");

/// Auth API config for this build.
#[must_use]
pub fn auth_config() -> AuthConfig {
    config_from(BUILD_API_BASE_URL)
}

fn config_from(base_url: Option<&str>) -> AuthConfig {
    AuthConfig::new(base_url.unwrap_or(DEFAULT_API_BASE_URL))
}

#[cfg(feature = "csr")]
pub use fetch::{FetchTransport, auth_handler};

#[cfg(feature = "csr")]
mod fetch {
    use remeals_auth::{AuthHandler, AuthTransport, HttpReply, TransportError};
    use serde_json::Value;

    /// `AuthTransport` over the browser `fetch` API.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct FetchTransport;

    #[async_trait::async_trait(?Send)]
    impl AuthTransport for FetchTransport {
        async fn post_json(&self, url: &str, body: &Value) -> Result<HttpReply, TransportError> {
            let resp = gloo_net::http::Request::post(url)
                .json(body)
                .map_err(|e| TransportError::new(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::new(e.to_string()))?;

            let status = resp.status();
            let bytes = resp.binary().await.map_err(|e| TransportError::new(e.to_string()))?;
            Ok(HttpReply::from_bytes(status, &bytes))
        }
    }

    /// Handler wired to the build's API base URL.
    #[must_use]
    pub fn auth_handler() -> AuthHandler<FetchTransport> {
        AuthHandler::new(super::auth_config(), FetchTransport)
    }
}
