use futures::executor::block_on;

use super::*;
use crate::net::testing::{RecordingTransport, StaticCookies, test_api};
use crate::net::transport::Method;
use crate::util::auth::should_redirect_unauth;

const ME_JSON: &str = r#"{
    "user": {"id": 7, "username": "alice", "email": "alice@example.com"},
    "profile": {"spotify_user_id": "sp-1", "voice_commands_enabled": true, "ai_suggestions_enabled": true}
}"#;

// =============================================================
// Mount fetch
// =============================================================

#[test]
fn authenticated_user_renders_profile() {
    let api = test_api(RecordingTransport::new().reply(200, ME_JSON), StaticCookies::empty());

    let DashboardLoad::Ready(current) = block_on(load_dashboard(&api)) else {
        panic!("expected a loaded user");
    };
    assert_eq!(current.user.username, "alice");
    assert!(current.profile.unwrap().spotify_linked());

    let state = AuthState::from(DashboardLoad::Ready(CurrentUser {
        user: current.user,
        profile: None,
    }));
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn any_rejection_status_redirects_to_login() {
    for (status, body) in [
        (401, r#"{"detail": "Authentication credentials were not provided."}"#),
        (403, r#"{"error": "forbidden"}"#),
        (500, "<html>oops</html>"),
    ] {
        let api = test_api(RecordingTransport::new().reply(status, body), StaticCookies::empty());
        let load = block_on(load_dashboard(&api));
        assert_eq!(load, DashboardLoad::SignedOut, "status {status}");
        assert!(should_redirect_unauth(&AuthState::from(load)));
        assert_eq!(api.transport().request_count(), 1);
    }
}

#[test]
fn transport_failure_redirects_to_login() {
    let api = test_api(RecordingTransport::new().fail("offline"), StaticCookies::empty());
    assert_eq!(block_on(load_dashboard(&api)), DashboardLoad::SignedOut);
}

#[test]
fn mount_fetch_uses_me_endpoint() {
    let api = test_api(RecordingTransport::new().reply(200, ME_JSON), StaticCookies::new("csrftoken=c"));
    block_on(load_dashboard(&api));
    let req = &api.transport().requests()[0];
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.url, "http://localhost:8000/api/auth/me/");
    assert_eq!(req.header("X-CSRFToken"), Some("c"));
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_success_goes_to_login() {
    let api = test_api(RecordingTransport::new().reply(200, r#"{"message": "Logout successful"}"#), StaticCookies::empty());
    assert_eq!(block_on(sign_out(&api)), Route::Login);
    assert_eq!(api.transport().requests()[0].url, "http://localhost:8000/api/auth/logout/");
}

#[test]
fn logout_failure_still_goes_to_login() {
    let rejected = test_api(RecordingTransport::new().reply(403, r#"{"detail": "CSRF Failed"}"#), StaticCookies::empty());
    assert_eq!(block_on(sign_out(&rejected)), Route::Login);

    let offline = test_api(RecordingTransport::new().fail("offline"), StaticCookies::empty());
    assert_eq!(block_on(sign_out(&offline)), Route::Login);
}
