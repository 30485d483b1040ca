//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the dashboard route guard to decide between rendering the account
//! and redirecting to login.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::CurrentUser;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<CurrentUser>,
    pub loading: bool,
}

impl AuthState {
    /// State while `/auth/me/` is in flight.
    pub fn loading() -> Self {
        Self { user: None, loading: true }
    }

    pub fn signed_in(user: CurrentUser) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub fn signed_out() -> Self {
        Self { user: None, loading: false }
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|current| current.user.username.as_str())
    }
}
