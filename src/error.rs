//! Error types for auth submissions.

/// Message shown when the auth server cannot be reached or answered with
/// something that is not a usable success body.
pub const UNREACHABLE_MESSAGE: &str = "Unable to reach authentication server";

/// Failure of a single sign-up or login submission.
///
/// The `Display` output is the text rendered next to the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The server answered with a non-2xx status. Holds the message derived
    /// from the response body.
    #[error("{0}")]
    ServerRejected(String),

    /// The request never produced a usable response. Holds the transport
    /// diagnostic, which is logged but not shown.
    #[error("{}", UNREACHABLE_MESSAGE)]
    Unreachable(String),
}

/// Low-level failure reported by an [`crate::AuthTransport`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<TransportError> for AuthError {
    fn from(err: TransportError) -> Self {
        Self::Unreachable(err.0)
    }
}
