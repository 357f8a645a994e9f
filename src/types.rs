//! Credential records, session identity, and the events emitted by submits.
//!
//! DESIGN
//! ======
//! Credential structs serialize straight to the request bodies the auth API
//! expects, so field names on the wire (`fname`, `bod`, ...) are fixed here
//! and nowhere else.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

const REDACTED: &str = "<redacted>";

/// Which of the two modal forms is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Signup,
    Login,
}

// =============================================================================
// SIGN-UP
// =============================================================================

/// Fields collected by the sign-up form. All are required by the UI.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupCredentials {
    pub username: String,
    #[serde(rename = "fname")]
    pub first_name: String,
    #[serde(rename = "lname")]
    pub last_name: String,
    /// Date of birth as entered in the date widget.
    #[serde(rename = "bod")]
    pub birth_date: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

/// Addressable sign-up input, used for field-by-field updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupField {
    Username,
    FirstName,
    LastName,
    BirthDate,
    Phone,
    Email,
    Password,
}

impl SignupField {
    pub const ALL: [Self; 7] = [
        Self::Username,
        Self::FirstName,
        Self::LastName,
        Self::BirthDate,
        Self::Phone,
        Self::Email,
        Self::Password,
    ];

    /// Wire key for this field.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::FirstName => "fname",
            Self::LastName => "lname",
            Self::BirthDate => "bod",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl SignupCredentials {
    #[must_use]
    pub fn get(&self, field: SignupField) -> &str {
        match field {
            SignupField::Username => &self.username,
            SignupField::FirstName => &self.first_name,
            SignupField::LastName => &self.last_name,
            SignupField::BirthDate => &self.birth_date,
            SignupField::Phone => &self.phone,
            SignupField::Email => &self.email,
            SignupField::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: SignupField, value: impl Into<String>) {
        let slot = match field {
            SignupField::Username => &mut self.username,
            SignupField::FirstName => &mut self.first_name,
            SignupField::LastName => &mut self.last_name,
            SignupField::BirthDate => &mut self.birth_date,
            SignupField::Phone => &mut self.phone,
            SignupField::Email => &mut self.email,
            SignupField::Password => &mut self.password,
        };
        *slot = value.into();
    }

    /// Required fields that are still empty, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<SignupField> {
        SignupField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

impl fmt::Debug for SignupCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupCredentials")
            .field("username", &self.username)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("birth_date", &self.birth_date)
            .field("phone", &self.phone)
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

// =============================================================================
// LOGIN
// =============================================================================

/// Fields collected by the login form.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    /// Username or email.
    pub identifier: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Identifier,
    Password,
}

impl LoginCredentials {
    #[must_use]
    pub fn get(&self, field: LoginField) -> &str {
        match field {
            LoginField::Identifier => &self.identifier,
            LoginField::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: LoginField, value: impl Into<String>) {
        match field {
            LoginField::Identifier => self.identifier = value.into(),
            LoginField::Password => self.password = value.into(),
        }
    }

    #[must_use]
    pub fn missing_fields(&self) -> Vec<LoginField> {
        [LoginField::Identifier, LoginField::Password]
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("identifier", &self.identifier)
            .field("password", &REDACTED)
            .finish()
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// Identity held by the parent view after a successful authentication.
///
/// Memory-only: no token and no expiry. `None` in the parent means anonymous.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedUser {
    pub username: String,
    pub email: String,
    /// Server-side user id when the response carries one, else empty.
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_delivery_staff: bool,
}

/// Side effect requested by a submission, applied by whoever owns the state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    /// The modal should show the given form.
    ModeChanged(AuthMode),
    /// A user authenticated; the parent should hold this identity.
    Authenticated(LoggedUser),
    /// The modal should close.
    ModalClosed,
}
