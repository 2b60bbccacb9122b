use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn stored_preference_accepts_booleans_only() {
    assert_eq!(stored_preference(&MemoryStore::with_entry(STORAGE_KEY, "true")), Some(true));
    assert_eq!(stored_preference(&MemoryStore::with_entry(STORAGE_KEY, "false")), Some(false));
    assert_eq!(stored_preference(&MemoryStore::with_entry(STORAGE_KEY, "yes")), None);
    assert_eq!(stored_preference(&MemoryStore::new()), None);
}

#[test]
fn persist_writes_value_stored_preference_reads_back() {
    let store = MemoryStore::new();
    persist(&store, true);
    assert_eq!(store.get(STORAGE_KEY).unwrap().as_deref(), Some("true"));
    assert_eq!(stored_preference(&store), Some(true));

    persist(&store, false);
    assert_eq!(stored_preference(&store), Some(false));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_false_in_non_hydrate_tests() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}
