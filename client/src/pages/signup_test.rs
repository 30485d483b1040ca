use futures::executor::block_on;

use super::*;
use crate::net::testing::{RecordingTransport, StaticCookies, test_api};
use crate::net::types::ErrorBody;

fn valid_form() -> SignupForm {
    SignupForm {
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
    }
}

fn status_error(status: u16, error: Option<&str>, detail: Option<&str>) -> ApiError {
    ApiError::Status {
        status,
        body: ErrorBody { error: error.map(str::to_owned), detail: detail.map(str::to_owned) },
    }
}

// =============================================================
// Failure message precedence
// =============================================================

#[test]
fn failure_message_prefers_error_field() {
    let err = status_error(400, Some("Username already exists"), Some("ignored"));
    assert_eq!(signup_failure_message(&err), "Username already exists");
}

#[test]
fn failure_message_falls_back_to_detail() {
    assert_eq!(signup_failure_message(&status_error(400, None, Some("bad request"))), "bad request");
}

#[test]
fn failure_message_uses_generic_text_last() {
    assert_eq!(signup_failure_message(&status_error(500, None, None)), SIGNUP_FALLBACK_MESSAGE);
    assert_eq!(signup_failure_message(&ApiError::Decode("eof".to_owned())), SIGNUP_FALLBACK_MESSAGE);
}

// =============================================================
// Full flow
// =============================================================

#[test]
fn short_username_is_rejected_before_any_request_exists() {
    let form = SignupForm { username: "ab".to_owned(), ..valid_form() };
    let err = form.validate().unwrap_err();
    assert_eq!(err.to_string(), "Username must be at least 3 characters");
}

#[test]
fn server_error_field_is_displayed_verbatim() {
    let transport = RecordingTransport::new().reply(400, r#"{"error": "Email already exists"}"#);
    let api = test_api(transport, StaticCookies::empty());

    let outcome = block_on(register_account(&api, &valid_form().validate().unwrap()));
    assert_eq!(outcome, SignupOutcome::Failed("Email already exists".to_owned()));
}

#[test]
fn server_detail_field_is_used_without_error() {
    let transport = RecordingTransport::new().reply(400, r#"{"detail": "bad request"}"#);
    let api = test_api(transport, StaticCookies::empty());

    let outcome = block_on(register_account(&api, &valid_form().validate().unwrap()));
    assert_eq!(outcome, SignupOutcome::Failed("bad request".to_owned()));
}

#[test]
fn network_failure_shows_fallback() {
    let api = test_api(RecordingTransport::new().fail("offline"), StaticCookies::empty());
    let outcome = block_on(register_account(&api, &valid_form().validate().unwrap()));
    assert_eq!(outcome, SignupOutcome::Failed(SIGNUP_FALLBACK_MESSAGE.to_owned()));
}

#[test]
fn success_redirects_to_login_with_confirmation() {
    let transport = RecordingTransport::new().reply(201, r#"{"id": 3, "username": "alice", "email": "alice@example.com"}"#);
    let api = test_api(transport, StaticCookies::new("csrftoken=t"));

    let outcome = block_on(register_account(&api, &valid_form().validate().unwrap()));
    assert_eq!(
        outcome,
        SignupOutcome::Redirect { to: Route::Login, flash: "Account created successfully! Please log in.".to_owned() }
    );

    let requests = api.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, "http://localhost:8000/api/auth/register/");
    let sent: serde_json::Value = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(
        sent,
        serde_json::json!({"username": "alice", "email": "alice@example.com", "password": "secret1"})
    );
}
