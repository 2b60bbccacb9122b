//! Session context provided at the application root.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionContext` is the only way components reach the session. It owns the
//! `SessionStore` (in a `StoredValue`) and bridges store notifications into a
//! reactive `AuthState` signal, so reading `user()` inside a view or effect
//! re-renders on login and logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::session::{SessionStore, SessionWriter};
use crate::net::types::SessionUser;
use crate::util::storage::BrowserStorage;

/// Reactive view of the session.
///
/// `loading` stays `true` until the stored session has been read, so route
/// guards can tell "not yet known" apart from "logged out".
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// True once initialization finished without finding a user.
    #[must_use]
    pub fn is_logged_out(&self) -> bool {
        !self.loading && self.user.is_none()
    }
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<AuthState>,
    store: StoredValue<SessionStore<BrowserStorage>>,
}

impl SessionContext {
    /// Create the store, wire its notifications into the auth signal, and
    /// provide the context to descendants.
    pub fn provide() -> Self {
        let state = RwSignal::new(AuthState::default());
        let mut store = SessionStore::new(BrowserStorage);
        store.subscribe(move |user| state.update(|s| s.user = user.cloned()));

        let ctx = Self { state, store: StoredValue::new(store) };
        provide_context(ctx);
        ctx
    }

    /// Fetch the context provided by `App`.
    ///
    /// # Panics
    ///
    /// Panics if called outside the component tree rooted at `App`.
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Read the stored session. Call from an effect so it runs after first
    /// paint; repeated calls are no-ops.
    pub fn initialize(&self) {
        self.store.update_value(SessionStore::initialize);
        self.state.update(|s| s.loading = false);
    }

    pub fn login(&self, user: SessionUser) {
        self.store.update_value(|store| store.login(user));
    }

    pub fn logout(&self) {
        self.store.update_value(|store| store.logout());
    }

    /// Current user, tracked.
    pub fn user(&self) -> Option<SessionUser> {
        self.state.with(|s| s.user.clone())
    }

    /// Whole auth state, tracked.
    pub fn state(&self) -> AuthState {
        self.state.get()
    }
}

impl SessionWriter for SessionContext {
    fn login(&mut self, user: SessionUser) {
        SessionContext::login(self, user);
    }

    fn logout(&mut self) {
        SessionContext::logout(self);
    }
}
