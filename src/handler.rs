//! Sign-up and login submission against the remote auth API.
//!
//! ERROR HANDLING
//! ==============
//! A non-2xx status becomes [`AuthError::ServerRejected`] with a message from
//! [`extract_error_message`]. A transport failure, or a 2xx whose body cannot
//! be decoded, becomes [`AuthError::Unreachable`]. Both are logged with
//! `tracing::warn!` and rendered inline; neither is retried.

#[cfg(test)]
#[path = "handler_test.rs"]
mod handler_test;

use serde_json::{Map, Value, json};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::extract::{extract_error_message, is_truthy, stringify};
use crate::forms::FormStatus;
use crate::transport::{AuthTransport, HttpReply};
use crate::types::{AuthEvent, AuthMode, LoggedUser, LoginCredentials, SignupCredentials};

pub const SIGNUP_DEFAULT_MESSAGE: &str = "Account created";
pub const LOGIN_DEFAULT_MESSAGE: &str = "Login successful";
pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "Unexpected response";

/// Result of one submission: the form's new status plus side effects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub status: FormStatus,
    pub events: Vec<AuthEvent>,
}

/// Accepted auth response, before it is turned into UI state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accepted {
    pub message: String,
    /// Present when the response carried both `username` and `email`.
    pub user: Option<LoggedUser>,
}

/// Submits credential forms through a transport and interprets the replies.
pub struct AuthHandler<T> {
    config: AuthConfig,
    transport: T,
}

impl<T: AuthTransport> AuthHandler<T> {
    pub fn new(config: AuthConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// POST sign-up credentials to `/users/signup/`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::ServerRejected`] on a non-2xx status and
    /// [`AuthError::Unreachable`] when no usable response arrived.
    pub async fn signup(&self, credentials: &SignupCredentials) -> Result<Accepted, AuthError> {
        let body = json!(credentials);
        let payload = self.post(&self.config.signup_url(), &body).await?;
        Ok(accepted(&payload, SIGNUP_DEFAULT_MESSAGE))
    }

    /// POST login credentials to `/users/login/`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::ServerRejected`] on a non-2xx status and
    /// [`AuthError::Unreachable`] when no usable response arrived.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<Accepted, AuthError> {
        let body = json!(credentials);
        let payload = self.post(&self.config.login_url(), &body).await?;
        Ok(accepted(&payload, LOGIN_DEFAULT_MESSAGE))
    }

    /// Submit the sign-up form and translate the result into UI state.
    ///
    /// Success always switches the modal to the login form. If the server
    /// also returned an identity the user is signed in and the modal closes.
    pub async fn submit_signup(&self, credentials: &SignupCredentials) -> SubmitOutcome {
        tracing::debug!(username = %credentials.username, "submitting signup");
        match self.signup(credentials).await {
            Ok(accepted) => {
                let mut events = vec![AuthEvent::ModeChanged(AuthMode::Login)];
                events.extend(identity_events(accepted.user));
                SubmitOutcome { status: FormStatus::success(accepted.message), events }
            }
            Err(e) => failure("signup", &e),
        }
    }

    /// Submit the login form and translate the result into UI state.
    ///
    /// The modal closes only when the response identifies the user.
    pub async fn submit_login(&self, credentials: &LoginCredentials) -> SubmitOutcome {
        tracing::debug!(identifier = %credentials.identifier, "submitting login");
        match self.login(credentials).await {
            Ok(accepted) => SubmitOutcome {
                status: FormStatus::success(accepted.message),
                events: identity_events(accepted.user),
            },
            Err(e) => failure("login", &e),
        }
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Value, AuthError> {
        let reply: HttpReply = self.transport.post_json(url, body).await?;
        let status = reply.status;

        if !reply.is_success() {
            let payload = reply.body.unwrap_or_else(unexpected_response);
            return Err(AuthError::ServerRejected(extract_error_message(Some(&payload))));
        }

        reply
            .body
            .ok_or_else(|| AuthError::Unreachable(format!("status {status} with undecodable body")))
    }
}

fn unexpected_response() -> Value {
    json!({ "error": UNEXPECTED_RESPONSE_MESSAGE })
}

fn failure(form: &'static str, err: &AuthError) -> SubmitOutcome {
    match err {
        AuthError::ServerRejected(message) => tracing::warn!(form, %message, "auth request rejected"),
        AuthError::Unreachable(detail) => tracing::warn!(form, %detail, "auth server unreachable"),
    }
    SubmitOutcome { status: FormStatus::failed(err.to_string()), events: Vec::new() }
}

fn identity_events(user: Option<LoggedUser>) -> Vec<AuthEvent> {
    match user {
        Some(user) => {
            tracing::info!(username = %user.username, "user authenticated");
            vec![AuthEvent::Authenticated(user), AuthEvent::ModalClosed]
        }
        None => Vec::new(),
    }
}

fn accepted(payload: &Value, default_message: &str) -> Accepted {
    let empty = Map::new();
    let fields = payload.as_object().unwrap_or(&empty);

    let message = match fields.get("message") {
        Some(v) if !v.is_null() => stringify(v),
        _ => default_message.to_owned(),
    };

    Accepted { message, user: logged_user(fields) }
}

/// Identity from a success body. Both `username` and `email` must be truthy.
fn logged_user(fields: &Map<String, Value>) -> Option<LoggedUser> {
    let truthy = |key: &str| fields.get(key).filter(|v| is_truthy(v));
    let (username, email) = (truthy("username")?, truthy("email")?);

    let user_id = match fields.get("user_id") {
        Some(v) if !v.is_null() => stringify(v),
        _ => String::new(),
    };
    let flag = |key: &str| truthy(key).is_some();

    Some(LoggedUser {
        username: stringify(username),
        email: stringify(email),
        user_id,
        is_admin: flag("is_admin"),
        is_delivery_staff: flag("is_delivery_staff"),
    })
}
