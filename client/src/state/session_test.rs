use std::sync::{Arc, Mutex};

use serde_json::json;

use super::*;
use crate::util::storage::MemoryStore;

// =============================================================
// Helpers
// =============================================================

fn user(value: serde_json::Value) -> SessionUser {
    SessionUser::from_value(value).unwrap()
}

fn stored(store: &MemoryStore) -> Option<String> {
    store.get(SESSION_KEY).unwrap()
}

fn recorder<S: KeyValueStore>(session: &mut SessionStore<S>) -> Arc<Mutex<Vec<Option<SessionUser>>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    session.subscribe(move |u| sink.lock().unwrap().push(u.cloned()));
    seen
}

// =============================================================
// login
// =============================================================

#[test]
fn login_sets_user_and_persists_round_trip() {
    let storage = MemoryStore::new();
    let mut session = SessionStore::new(storage.clone());
    let record = user(json!({ "_id": "u1", "name": "Jane Doe", "role": "admin", "prefs": { "lang": "hi" } }));

    session.login(record.clone());

    assert_eq!(session.current_user(), Some(&record));
    let raw = stored(&storage).expect("session persisted");
    assert_eq!(decode_user(&raw), Some(record));
}

#[test]
fn login_replaces_previous_user_wholesale() {
    let storage = MemoryStore::new();
    let mut session = SessionStore::new(storage.clone());
    session.login(user(json!({ "name": "First", "email": "first@example.com" })));
    session.login(user(json!({ "name": "Second" })));

    let current = session.current_user().unwrap();
    assert_eq!(current.name(), Some("Second"));
    assert_eq!(current.email(), None);
    assert_eq!(decode_user(&stored(&storage).unwrap()).unwrap().email(), None);
}

#[test]
fn login_notifies_subscribers() {
    let mut session = SessionStore::new(MemoryStore::new());
    let seen = recorder(&mut session);
    let record = user(json!({ "name": "Jane Doe" }));

    session.login(record.clone());

    assert_eq!(*seen.lock().unwrap(), vec![Some(record)]);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_user_and_storage() {
    let storage = MemoryStore::new();
    let mut session = SessionStore::new(storage.clone());
    session.login(user(json!({ "name": "Jane Doe" })));

    session.logout();

    assert!(session.current_user().is_none());
    assert_eq!(stored(&storage), None);
}

#[test]
fn logout_is_idempotent() {
    let storage = MemoryStore::new();
    let mut session = SessionStore::new(storage.clone());
    let seen = recorder(&mut session);

    session.logout();
    session.logout();

    assert!(session.current_user().is_none());
    assert_eq!(stored(&storage), None);
    assert_eq!(*seen.lock().unwrap(), vec![None, None]);
}

#[test]
fn logout_removes_key_written_before_store_existed() {
    let storage = MemoryStore::with_entry(SESSION_KEY, r#"{"name":"Stale"}"#);
    let mut session = SessionStore::new(storage.clone());
    session.logout();
    assert_eq!(stored(&storage), None);
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_rehydrates_stored_user() {
    let storage = MemoryStore::with_entry(SESSION_KEY, r#"{"name":"Jane Doe","role":"postmaster"}"#);
    let mut session = SessionStore::new(storage);
    let seen = recorder(&mut session);

    session.initialize();

    assert_eq!(session.current_user().and_then(SessionUser::name), Some("Jane Doe"));
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn initialize_with_empty_storage_stays_logged_out() {
    let mut session = SessionStore::new(MemoryStore::new());
    session.initialize();
    assert!(session.is_initialized());
    assert!(session.current_user().is_none());
}

#[test]
fn initialize_ignores_malformed_content() {
    for raw in ["{not json", "", "null", "\"Jane\"", "42", "[]"] {
        let mut session = SessionStore::new(MemoryStore::with_entry(SESSION_KEY, raw));
        session.initialize();
        assert!(session.current_user().is_none(), "expected logged out for {raw:?}");
    }
}

#[test]
fn initialize_runs_once() {
    let storage = MemoryStore::with_entry(SESSION_KEY, r#"{"name":"Jane Doe"}"#);
    let mut session = SessionStore::new(storage.clone());
    session.initialize();
    session.logout();
    storage.set(SESSION_KEY, r#"{"name":"Someone Else"}"#).unwrap();

    session.initialize();

    assert!(session.current_user().is_none());
}

// =============================================================
// Unavailable storage
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn unavailable_storage_degrades_to_memory_session() {
    let mut session = SessionStore::new(crate::util::storage::BrowserStorage);
    session.initialize();
    assert!(session.current_user().is_none());

    let record = user(json!({ "name": "Jane Doe" }));
    session.login(record.clone());
    assert_eq!(session.current_user(), Some(&record));

    session.logout();
    assert!(session.current_user().is_none());
}

// =============================================================
// Subscriptions
// =============================================================

#[test]
fn unsubscribe_stops_notifications() {
    let mut session = SessionStore::new(MemoryStore::new());
    let seen = Arc::new(Mutex::new(0));
    let sink = seen.clone();
    let id = session.subscribe(move |_| *sink.lock().unwrap() += 1);

    session.login(user(json!({ "name": "A" })));
    assert!(session.unsubscribe(id));
    session.logout();

    assert_eq!(*seen.lock().unwrap(), 1);
    assert!(!session.unsubscribe(id));
}
