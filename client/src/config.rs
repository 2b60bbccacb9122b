//! Backend endpoint configuration.
//!
//! The backend base URL comes from `VANARAKSHA_BACKEND_URL`. The SSR host
//! reads it at runtime and publishes it in a `<meta>` tag so the WASM bundle
//! picks up deployment changes without a rebuild; the value captured at
//! compile time is the fallback. An empty base means same-origin requests.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const BACKEND_URL_VAR: &str = "VANARAKSHA_BACKEND_URL";
pub const BACKEND_URL_META: &str = "vanaraksha-backend-url";

/// Strip surrounding whitespace and trailing slashes from a base URL.
#[must_use]
pub fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

/// Join a base URL and an absolute API path with exactly one slash between.
#[must_use]
pub fn endpoint(base: &str, path: &str) -> String {
    let base = normalize_base(base);
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

fn compiled_backend_url() -> String {
    normalize_base(option_env!("VANARAKSHA_BACKEND_URL").unwrap_or_default())
}

/// Resolve the backend base URL for the current environment.
pub fn backend_url() -> String {
    #[cfg(feature = "hydrate")]
    {
        if let Some(url) = meta_backend_url() {
            return url;
        }
    }
    #[cfg(feature = "ssr")]
    {
        if let Ok(url) = std::env::var(BACKEND_URL_VAR) {
            return normalize_base(&url);
        }
    }
    compiled_backend_url()
}

#[cfg(feature = "hydrate")]
fn meta_backend_url() -> Option<String> {
    use wasm_bindgen::JsCast;

    let doc = web_sys::window()?.document()?;
    let el = doc
        .query_selector(&format!("meta[name=\"{BACKEND_URL_META}\"]"))
        .ok()
        .flatten()?;
    let meta = el.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    let content = meta.content();
    if content.trim().is_empty() {
        return None;
    }
    Some(normalize_base(&content))
}
