//! HTTP seam between the handler and the network.
//!
//! [`AuthTransport`] is `?Send` so browser fetch futures can implement it.
//! The native implementation, [`HttpTransport`], wraps `reqwest`.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use serde_json::Value;

use crate::error::TransportError;

/// Status and decoded body of an HTTP response.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    /// `None` when the body was empty or not valid JSON.
    pub body: Option<Value>,
}

impl HttpReply {
    /// Build a reply from raw body bytes, decoding JSON when possible.
    #[must_use]
    pub fn from_bytes(status: u16, bytes: &[u8]) -> Self {
        Self { status, body: serde_json::from_slice(bytes).ok() }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON POST and reports what came back.
///
/// Implementations return `Err` only when no HTTP response was received.
/// Non-2xx statuses are successful transports.
#[async_trait::async_trait(?Send)]
pub trait AuthTransport {
    /// POST `body` as JSON to `url`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the request could not be sent or the
    /// response could not be read.
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpReply, TransportError>;
}

// =============================================================================
// REQWEST
// =============================================================================

/// Native transport backed by a shared `reqwest::Client`.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    http: reqwest::Client,
}

#[cfg(feature = "reqwest")]
impl HttpTransport {
    #[must_use]
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[cfg(feature = "reqwest")]
#[async_trait::async_trait(?Send)]
impl AuthTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpReply, TransportError> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        Ok(HttpReply::from_bytes(status, &bytes))
    }
}
