//! Per-form status and the modal's form state machine.
//!
//! DESIGN
//! ======
//! Each form cycles `idle -> loading -> (success | error)` and re-enters
//! `loading` on the next submit. Submission is split into `begin_*` (take a
//! snapshot of the credentials, mark loading) and `finish_*` (apply the
//! outcome) so a UI can hold the state in a reactive cell without keeping a
//! borrow across the network await.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::handler::SubmitOutcome;
use crate::types::{AuthEvent, AuthMode, LoginCredentials, SignupCredentials};

// =============================================================================
// FORM STATUS
// =============================================================================

/// Presentation state derived from a submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub loading: bool,
    /// Success text.
    pub message: Option<String>,
    /// Failure text.
    pub error: Option<String>,
}

/// Coarse phase of a [`FormStatus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Loading,
    Success,
    Error,
}

impl FormStatus {
    #[must_use]
    pub fn loading() -> Self {
        Self { loading: true, message: None, error: None }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { loading: false, message: Some(message.into()), error: None }
    }

    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self { loading: false, message: None, error: Some(error.into()) }
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        if self.loading {
            FormPhase::Loading
        } else if self.error.is_some() {
            FormPhase::Error
        } else if self.message.is_some() {
            FormPhase::Success
        } else {
            FormPhase::Idle
        }
    }

    /// Success text to render, hidden while loading.
    #[must_use]
    pub fn visible_message(&self) -> Option<&str> {
        if self.loading { None } else { self.message.as_deref() }
    }

    /// Failure text to render, hidden while loading.
    #[must_use]
    pub fn visible_error(&self) -> Option<&str> {
        if self.loading { None } else { self.error.as_deref() }
    }
}

// =============================================================================
// MODAL FORMS
// =============================================================================

/// State owned by an open auth modal: active mode plus both forms.
///
/// Created empty when the modal opens and dropped when it closes. The two
/// forms never share state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForms {
    pub mode: AuthMode,
    pub signup: SignupCredentials,
    pub login: LoginCredentials,
    pub signup_status: FormStatus,
    pub login_status: FormStatus,
}

impl AuthForms {
    #[must_use]
    pub fn open(mode: AuthMode) -> Self {
        Self { mode, ..Self::default() }
    }

    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
    }

    /// Status to render under the form for the active mode.
    ///
    /// After a sign-up switches the modal to login, the sign-up success text
    /// stays visible until the login form has a status of its own.
    #[must_use]
    pub fn active_status(&self) -> &FormStatus {
        let carry_signup =
            self.login_status.phase() == FormPhase::Idle && self.signup_status.phase() == FormPhase::Success;
        match self.mode {
            AuthMode::Signup => &self.signup_status,
            AuthMode::Login if carry_signup => &self.signup_status,
            AuthMode::Login => &self.login_status,
        }
    }

    /// Mark the sign-up form loading and return the credentials to submit.
    ///
    /// Returns `None` while a sign-up request is already in flight or while a
    /// required field is empty.
    pub fn begin_signup(&mut self) -> Option<SignupCredentials> {
        if self.signup_status.loading || !self.signup.is_complete() {
            return None;
        }
        self.signup_status = FormStatus::loading();
        Some(self.signup.clone())
    }

    /// Apply a sign-up outcome. Clears the credentials on success, applies
    /// mode changes, and returns the events the parent view must handle.
    pub fn finish_signup(&mut self, outcome: SubmitOutcome) -> Vec<AuthEvent> {
        if outcome.status.phase() == FormPhase::Success {
            self.signup = SignupCredentials::default();
        }
        self.signup_status = outcome.status;
        self.absorb(outcome.events)
    }

    /// Mark the login form loading and return the credentials to submit.
    ///
    /// Returns `None` while a login request is already in flight or while a
    /// required field is empty.
    pub fn begin_login(&mut self) -> Option<LoginCredentials> {
        if self.login_status.loading || !self.login.is_complete() {
            return None;
        }
        self.login_status = FormStatus::loading();
        Some(self.login.clone())
    }

    /// Apply a login outcome. Clears the credentials on success and returns
    /// the events the parent view must handle.
    pub fn finish_login(&mut self, outcome: SubmitOutcome) -> Vec<AuthEvent> {
        if outcome.status.phase() == FormPhase::Success {
            self.login = LoginCredentials::default();
        }
        self.login_status = outcome.status;
        self.absorb(outcome.events)
    }

    /// Mode changes are applied here; everything else goes up to the parent.
    fn absorb(&mut self, events: Vec<AuthEvent>) -> Vec<AuthEvent> {
        for event in &events {
            if let AuthEvent::ModeChanged(mode) = event {
                self.mode = *mode;
            }
        }
        events
    }
}
