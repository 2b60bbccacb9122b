//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, SessionContext};

pub const SIGN_IN_ROUTE: &str = "/sign-in";

/// Redirect only once the stored session has been read and found empty.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.is_logged_out()
}

/// Redirect to `/sign-in` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(session: SessionContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.state()) {
            navigate(SIGN_IN_ROUTE, NavigateOptions::default());
        }
    });
}
