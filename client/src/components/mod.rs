//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and form controls while reading/writing
//! shared state from Leptos context providers.

pub mod form_field;
pub mod header;
pub mod hero;
pub mod mode_toggle;
pub mod search_bar;
pub mod toaster;
pub mod user_avatar;
