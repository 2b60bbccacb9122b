use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_everything_closed() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.nav_open);
    assert!(!state.search_open);
}

// =============================================================
// Toggles
// =============================================================

#[test]
fn toggle_nav_flips_menu() {
    let mut state = UiState::default();
    state.toggle_nav();
    assert!(state.nav_open);
    state.toggle_nav();
    assert!(!state.nav_open);
}

#[test]
fn toggle_search_leaves_nav_alone() {
    let mut state = UiState { nav_open: true, ..UiState::default() };
    state.toggle_search();
    assert!(state.search_open);
    assert!(state.nav_open);
}
