use super::*;

// =============================================================
// Current user decoding
// =============================================================

#[test]
fn me_response_accepts_backend_envelope() {
    let raw = r#"{
        "user": {"id": 7, "username": "alice", "email": "alice@example.com", "first_name": "", "last_name": ""},
        "profile": {"id": 3, "spotify_user_id": null, "voice_commands_enabled": true, "ai_suggestions_enabled": false}
    }"#;
    let current: CurrentUser = serde_json::from_str::<MeResponse>(raw).unwrap().into();
    assert_eq!(current.user.id, 7);
    assert_eq!(current.user.username, "alice");
    let profile = current.profile.unwrap();
    assert!(profile.voice_commands_enabled);
    assert!(!profile.spotify_linked());
}

#[test]
fn me_response_accepts_bare_user() {
    let raw = r#"{"id": 1, "username": "bob", "email": "bob@example.com"}"#;
    let current: CurrentUser = serde_json::from_str::<MeResponse>(raw).unwrap().into();
    assert_eq!(current.user.email, "bob@example.com");
    assert_eq!(current.user.first_name, None);
    assert_eq!(current.profile, None);
}

#[test]
fn me_response_rejects_unrelated_json() {
    assert!(serde_json::from_str::<MeResponse>(r#"{"detail": "nope"}"#).is_err());
}

#[test]
fn spotify_linked_requires_non_empty_id() {
    let mut profile = AccountProfile::default();
    assert!(!profile.spotify_linked());
    profile.spotify_user_id = Some(String::new());
    assert!(!profile.spotify_linked());
    profile.spotify_user_id = Some("spotify-user".to_owned());
    assert!(profile.spotify_linked());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn register_request_serializes_exact_fields() {
    let req = RegisterRequest {
        username: "alice".to_owned(),
        email: "a@b.co".to_owned(),
        password: "secret1".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({"username": "alice", "email": "a@b.co", "password": "secret1"})
    );
}

#[test]
fn login_request_serializes_email_and_password_only() {
    let req = LoginRequest { email: "a@b.co".to_owned(), password: "pw".to_owned() };
    assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({"email": "a@b.co", "password": "pw"}));
}

// =============================================================
// Error bodies
// =============================================================

#[test]
fn error_body_reads_error_and_detail() {
    let body = ErrorBody::parse(r#"{"error": "Email already exists", "detail": "x"}"#);
    assert_eq!(body.error.as_deref(), Some("Email already exists"));
    assert_eq!(body.detail.as_deref(), Some("x"));
}

#[test]
fn error_body_ignores_non_string_and_empty_values() {
    let body = ErrorBody::parse(r#"{"error": {"email": ["taken"]}, "detail": ""}"#);
    assert_eq!(body, ErrorBody::default());
}

#[test]
fn error_body_tolerates_non_json() {
    assert_eq!(ErrorBody::parse("<html>502 Bad Gateway</html>"), ErrorBody::default());
    assert_eq!(ErrorBody::parse(""), ErrorBody::default());
}
