use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Field {
    Name,
    Email,
}

// =============================================================
// FieldErrors
// =============================================================

#[test]
fn field_errors_keep_first_message_per_field() {
    let mut errors = FieldErrors::new();
    errors.add(Field::Email, "Email is required");
    errors.add(Field::Email, "Enter a valid email address");
    assert_eq!(errors.get(Field::Email), Some("Email is required"));
    assert_eq!(errors.get(Field::Name), None);
}

#[test]
fn field_errors_check_only_records_failures() {
    let mut errors = FieldErrors::new();
    errors.check(Field::Name, true, "unused");
    errors.check(Field::Email, false, "bad");
    assert_eq!(errors.get(Field::Name), None);
    assert_eq!(errors.get(Field::Email), Some("bad"));
    assert!(!errors.is_empty());
}

#[test]
fn into_result_passes_value_when_clean() {
    let errors = FieldErrors::<Field>::new();
    assert_eq!(errors.into_result(7), Ok(7));
}

#[test]
fn into_result_returns_errors_when_dirty() {
    let mut errors = FieldErrors::new();
    errors.add(Field::Name, "First name is required");
    assert!(errors.into_result(()).is_err());
}

// =============================================================
// Rules
// =============================================================

#[test]
fn min_chars_counts_characters_not_bytes() {
    assert!(min_chars("Zoë", 3));
    assert!(!min_chars("Zo", 3));
    assert!(min_chars("", 0));
}

#[test]
fn valid_emails_are_accepted() {
    assert!(is_valid_email("manish@example.com"));
    assert!(is_valid_email("first.last+tag@mail.example.co"));
    assert!(is_valid_email("o'neil@sub-domain.example.org"));
}

#[test]
fn malformed_emails_are_rejected() {
    for email in [
        "",
        "not-an-email",
        "@example.com",
        "user@",
        "a@b@c.com",
        "user@localhost",
        "user@example.c",
        "user@example.c0m",
        ".user@example.com",
        "user.@example.com",
        "jane'@example.com",
        "us..er@example.com",
        "user@-example.com",
        "user@example..com",
        "us er@example.com",
        " user@example.com",
    ] {
        assert!(!is_valid_email(email), "expected rejection for {email:?}");
    }
}
