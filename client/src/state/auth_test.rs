use super::*;
use crate::net::types::User;

fn alice() -> CurrentUser {
    CurrentUser {
        user: User {
            id: 1,
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            first_name: None,
            last_name: None,
        },
        profile: None,
    }
}

#[test]
fn default_is_signed_out_and_idle() {
    assert_eq!(AuthState::default(), AuthState::signed_out());
}

#[test]
fn loading_has_no_user() {
    let state = AuthState::loading();
    assert!(state.loading);
    assert_eq!(state.username(), None);
}

#[test]
fn signed_in_exposes_username() {
    let state = AuthState::signed_in(alice());
    assert!(!state.loading);
    assert_eq!(state.username(), Some("alice"));
}
