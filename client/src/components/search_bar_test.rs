use super::*;

#[test]
fn empty_query_lists_every_suggestion() {
    assert_eq!(filter_suggestions(""), SUGGESTIONS.to_vec());
    assert_eq!(filter_suggestions("   ").len(), 3);
}

#[test]
fn query_matches_case_insensitively() {
    let found = filter_suggestions("REPORT");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].label, "Download Reports");
}

#[test]
fn unmatched_query_is_empty() {
    assert!(filter_suggestions("wildlife").is_empty());
}

#[test]
fn shortcut_needs_modifier() {
    assert!(is_toggle_shortcut("k", false, true));
    assert!(is_toggle_shortcut("k", true, false));
    assert!(is_toggle_shortcut("K", true, false));
    assert!(!is_toggle_shortcut("k", false, false));
    assert!(!is_toggle_shortcut("j", true, true));
}
