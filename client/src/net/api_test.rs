use super::*;

#[test]
fn rejection_message_reads_message_field() {
    assert_eq!(
        rejection_message(r#"{"message":"Email already exists"}"#),
        Some("Email already exists".to_owned())
    );
}

#[test]
fn rejection_message_ignores_other_shapes() {
    assert_eq!(rejection_message("Internal Server Error"), None);
    assert_eq!(rejection_message(r#"{"error":"nope"}"#), None);
    assert_eq!(rejection_message(r#"{"message":404}"#), None);
}

#[test]
fn user_message_prefers_server_message() {
    let err = ApiError::Rejected { status: 409, message: Some("Email already exists".to_owned()) };
    assert_eq!(err.user_message("Sign up failed"), "Email already exists");
}

#[test]
fn user_message_falls_back_for_empty_or_missing_message() {
    let empty = ApiError::Rejected { status: 400, message: Some(String::new()) };
    let missing = ApiError::Rejected { status: 500, message: None };
    assert_eq!(empty.user_message("Login failed"), "Login failed");
    assert_eq!(missing.user_message("Login failed"), "Login failed");
}

#[test]
fn user_message_keeps_whitespace_only_message_verbatim() {
    let err = ApiError::Rejected { status: 400, message: Some("  ".to_owned()) };
    assert_eq!(err.user_message("Login failed"), "  ");
}

#[test]
fn user_message_falls_back_for_transport_and_decode() {
    assert_eq!(ApiError::Transport("offline".to_owned()).user_message("Login failed"), "Login failed");
    assert_eq!(ApiError::Decode("no user".to_owned()).user_message("Login failed"), "Login failed");
    assert_eq!(ApiError::Unavailable.user_message("Login failed"), "Login failed");
}

#[test]
fn api_paths_are_absolute() {
    assert_eq!(LOGIN_PATH, "/api/auth/login");
    assert_eq!(REGISTER_PATH, "/api/v1/users/register");
}
