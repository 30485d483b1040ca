//! Login form value.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use serde::{Deserialize, Serialize};

use crate::net::types::LoginRequest;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Credentials to submit, exactly as typed.
    pub fn request(&self) -> LoginRequest {
        LoginRequest { email: self.email.clone(), password: self.password.clone() }
    }
}
