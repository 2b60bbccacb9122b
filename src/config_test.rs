use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect::<HashMap<_, _>>();
    move |key| vars.get(key).cloned()
}

// =============================================================================
// parse_or
// =============================================================================

#[test]
fn parse_or_missing_returns_default() {
    let val: u16 = parse_or(None, 42);
    assert_eq!(val, 42);
}

#[test]
fn parse_or_present_valid() {
    let val: u16 = parse_or(Some("8080".to_owned()), 0);
    assert_eq!(val, 8080);
}

#[test]
fn parse_or_present_invalid_returns_default() {
    let val: u16 = parse_or(Some("notaport".to_owned()), 7);
    assert_eq!(val, 7);
}

// =============================================================================
// ServerConfig
// =============================================================================

#[test]
fn bind_addr_listens_on_all_interfaces() {
    let config = ServerConfig { port: 4000, backend_url: None };
    assert_eq!(config.bind_addr(), "0.0.0.0:4000");
}

#[test]
fn from_lookup_defaults_when_nothing_is_set() {
    let config = ServerConfig::from_lookup(lookup_from(&[]));
    assert_eq!(config, ServerConfig { port: DEFAULT_PORT, backend_url: None });
}

#[test]
fn from_lookup_reads_port_and_normalizes_backend_url() {
    let config = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8081"),
        (client::config::BACKEND_URL_VAR, "https://api.vanaraksha.test/"),
    ]));
    assert_eq!(config.port, 8081);
    assert_eq!(config.backend_url.as_deref(), Some("https://api.vanaraksha.test"));
}

#[test]
fn from_lookup_treats_blank_backend_url_as_unset() {
    let config = ServerConfig::from_lookup(lookup_from(&[(client::config::BACKEND_URL_VAR, "  ")]));
    assert_eq!(config.backend_url, None);
}

#[test]
fn from_lookup_ignores_malformed_port() {
    let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")]));
    assert_eq!(config.port, DEFAULT_PORT);
}
