//! Client-side authentication interaction for the Re-Meals web app.
//!
//! This crate owns everything between a credential form and the remote auth
//! API: credential records, per-form status, the error-message extraction
//! policy, and the [`AuthHandler`] that submits forms through an
//! [`AuthTransport`]. It is UI-framework agnostic; the `client` crate binds
//! it to Leptos components.
//!
//! DESIGN
//! ======
//! Submissions never call back into presentation code. They return a
//! [`SubmitOutcome`] carrying the new [`FormStatus`] plus [`AuthEvent`]s
//! (mode switch, authenticated user, modal close) for the caller to apply.

pub mod config;
pub mod error;
pub mod extract;
pub mod forms;
pub mod handler;
pub mod transport;
pub mod types;

pub use config::AuthConfig;
pub use error::{AuthError, TransportError};
pub use extract::extract_error_message;
pub use forms::{AuthForms, FormPhase, FormStatus};
pub use handler::{AuthHandler, SubmitOutcome};
pub use transport::{AuthTransport, HttpReply};
pub use types::{AuthEvent, AuthMode, LoggedUser, LoginCredentials, LoginField, SignupCredentials, SignupField};

#[cfg(feature = "reqwest")]
pub use transport::HttpTransport;
