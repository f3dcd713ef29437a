use super::*;

#[test]
fn profile_endpoint_path() {
    assert_eq!(PROFILE_ENDPOINT, "/api/profiles");
}

#[test]
fn failed_message_carries_status() {
    assert_eq!(profile_request_failed_message(503), "profile request failed: 503");
}

#[test]
fn conflict_body_message_is_surfaced() {
    let body = r#"{"message":"Profile already exists"}"#;
    assert_eq!(conflict_or_error_message(400, body), "Profile already exists");
}

#[test]
fn error_body_message_is_surfaced() {
    let body = r#"{"error":"not authenticated"}"#;
    assert_eq!(conflict_or_error_message(401, body), "not authenticated");
}

#[test]
fn unparseable_body_falls_back_to_status() {
    assert_eq!(conflict_or_error_message(400, "<html>"), "profile request failed: 400");
}

#[test]
fn empty_body_falls_back_to_status() {
    assert_eq!(conflict_or_error_message(500, ""), "profile request failed: 500");
}
