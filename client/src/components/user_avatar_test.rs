use super::*;

#[test]
fn initials_take_first_two_parts() {
    assert_eq!(initials("Manish Gupta"), "MG");
    assert_eq!(initials("jane van der berg"), "JV");
}

#[test]
fn initials_single_name() {
    assert_eq!(initials("Cher"), "C");
}

#[test]
fn initials_ignore_extra_whitespace() {
    assert_eq!(initials("  ravi   kumar "), "RK");
    assert_eq!(initials(""), "");
}

#[test]
fn menu_class_marks_open_state() {
    assert_eq!(menu_class(false), "avatar-menu__content");
    assert!(menu_class(true).ends_with("avatar-menu__content--open"));
}

#[test]
fn account_heading_prefers_email() {
    let user = SessionUser::from_value(serde_json::json!({ "name": "Jane Doe", "email": "jane@example.com" })).unwrap();
    assert_eq!(account_heading(Some(&user)), "jane@example.com");

    let nameless = SessionUser::from_value(serde_json::json!({ "name": "Jane Doe" })).unwrap();
    assert_eq!(account_heading(Some(&nameless)), "My Account");
    assert_eq!(account_heading(None), "My Account");
}

#[test]
fn role_caption_labels_known_roles_only() {
    let postmaster = SessionUser::from_value(serde_json::json!({ "role": "postmaster" })).unwrap();
    assert_eq!(role_caption(Some(&postmaster)), Some(Role::Postmaster.label()));

    let unknown = SessionUser::from_value(serde_json::json!({ "role": "ranger" })).unwrap();
    assert_eq!(role_caption(Some(&unknown)), None);
    assert_eq!(role_caption(None), None);
}
