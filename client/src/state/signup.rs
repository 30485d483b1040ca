//! Signup form value and its validation rules.
//!
//! Validation is pure: it runs before any network call and reports only the
//! first rule the form violates.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::net::types::RegisterRequest;

pub const MIN_USERNAME_CHARS: usize = 3;
pub const MIN_PASSWORD_CHARS: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// First violated signup rule, in check order. `Display` is the user-facing
/// message.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SignupError {
    #[error("Username is required")]
    UsernameRequired,
    #[error("Username must be at least 3 characters")]
    UsernameTooShort,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Editable fields of [`SignupForm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupField {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

/// Signup form contents exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn set(&mut self, field: SignupField, value: String) {
        match field {
            SignupField::Username => self.username = value,
            SignupField::Email => self.email = value,
            SignupField::Password => self.password = value,
            SignupField::ConfirmPassword => self.confirm_password = value,
        }
    }

    pub fn get(&self, field: SignupField) -> &str {
        match field {
            SignupField::Username => &self.username,
            SignupField::Email => &self.email,
            SignupField::Password => &self.password,
            SignupField::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Check every rule in order and build the registration body.
    ///
    /// Values are sent as typed; only the emptiness checks look at trimmed
    /// text.
    ///
    /// # Errors
    ///
    /// Returns the first rule the form violates.
    pub fn validate(&self) -> Result<RegisterRequest, SignupError> {
        if self.username.trim().is_empty() {
            return Err(SignupError::UsernameRequired);
        }
        if self.username.chars().count() < MIN_USERNAME_CHARS {
            return Err(SignupError::UsernameTooShort);
        }
        if self.email.trim().is_empty() {
            return Err(SignupError::EmailRequired);
        }
        if !is_valid_email(&self.email) {
            return Err(SignupError::EmailInvalid);
        }
        if self.password.is_empty() {
            return Err(SignupError::PasswordRequired);
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(SignupError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }
        Ok(RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
