//! Host configuration loaded from the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the remote auth API, published to the browser.
    pub backend_url: Option<String>,
}

impl ServerConfig {
    /// Load from `PORT` and `VANARAKSHA_BACKEND_URL`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` in place of the process environment.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let backend_url = lookup(client::config::BACKEND_URL_VAR)
            .map(|v| client::config::normalize_base(&v))
            .filter(|v| !v.is_empty());
        Self { port: parse_or(lookup("PORT"), DEFAULT_PORT), backend_url }
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// Parse `value`, falling back to `default` when it is missing or malformed.
pub(crate) fn parse_or<T>(value: Option<String>, default: T) -> T
where
    T: std::str::FromStr,
{
    value.and_then(|v| v.parse::<T>().ok()).unwrap_or(default)
}
