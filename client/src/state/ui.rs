//! Local UI chrome state (theme, navigation menu, search palette).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of session state so the header
//! and its overlays can evolve independently of auth.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Collapsible navigation on narrow screens.
    pub nav_open: bool,
    pub search_open: bool,
}

impl UiState {
    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    pub fn toggle_search(&mut self) {
        self.search_open = !self.search_open;
    }
}
