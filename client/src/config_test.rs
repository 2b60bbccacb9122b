use super::*;

#[test]
fn normalize_base_trims_trailing_slashes() {
    assert_eq!(normalize_base(" https://api.example.com/ "), "https://api.example.com");
    assert_eq!(normalize_base("https://api.example.com///"), "https://api.example.com");
    assert_eq!(normalize_base(""), "");
}

#[test]
fn endpoint_joins_with_single_slash() {
    assert_eq!(
        endpoint("https://api.example.com/", "/api/auth/login"),
        "https://api.example.com/api/auth/login"
    );
    assert_eq!(
        endpoint("https://api.example.com", "api/v1/users/register"),
        "https://api.example.com/api/v1/users/register"
    );
}

#[test]
fn endpoint_with_empty_base_is_same_origin() {
    assert_eq!(endpoint("", "/api/auth/login"), "/api/auth/login");
}
