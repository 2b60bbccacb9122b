//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from durable storage and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! storage and updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::storage::{BrowserStorage, KeyValueStore, load_json, save_json};

pub const STORAGE_KEY: &str = "vanaraksha_dark";

/// Read the stored preference from `store`. Anything but a JSON boolean is ignored.
pub fn stored_preference(store: &impl KeyValueStore) -> Option<bool> {
    load_json(store, STORAGE_KEY)
}

/// Read the dark mode preference.
///
/// Returns `true` if the user previously enabled dark mode, or if the system
/// prefers dark mode and no preference is stored.
pub fn read_preference() -> bool {
    if let Some(stored) = stored_preference(&BrowserStorage) {
        return stored;
    }
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    persist(&BrowserStorage, next);
    next
}

fn persist(store: &impl KeyValueStore, enabled: bool) {
    if let Err(e) = save_json(store, STORAGE_KEY, &enabled) {
        log::debug!("dark mode preference not persisted: {e}");
    }
}
