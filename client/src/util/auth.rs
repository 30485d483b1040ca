//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components that require a session apply identical unauthenticated
//! redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::util::route::Route;

/// Whether a guarded page should leave for `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Latch that lets the unauthenticated redirect fire at most once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedirectOnce {
    fired: bool,
}

impl RedirectOnce {
    /// True the first time `state` calls for a redirect, false ever after.
    pub fn should_fire(&mut self, state: &AuthState) -> bool {
        if self.fired || !should_redirect_unauth(state) {
            return false;
        }
        self.fired = true;
        true
    }
}

/// Redirect to `/login` once auth has settled with no user present.
///
/// Fires at most once per installation, even if the state is touched again
/// before the route unmounts.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let mut latch = RedirectOnce::default();
    Effect::new(move || {
        let state = auth.get();
        if latch.should_fire(&state) {
            navigate(Route::Login.path(), NavigateOptions::default());
        }
    });
}
