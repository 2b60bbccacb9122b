//! Session store: the single owner of "who is logged in".
//!
//! DESIGN
//! ======
//! The store holds the current `SessionUser`, mirrors it into durable storage
//! under `SESSION_KEY`, and publishes every change to explicit subscribers.
//! It is generic over `KeyValueStore` so the browser build uses
//! `localStorage` while tests use `MemoryStore`.
//!
//! ERROR HANDLING
//! ==============
//! Storage is best-effort. Malformed stored content reads as "logged out";
//! unavailable storage leaves an in-memory session. Neither is surfaced to
//! the user, only logged.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::SessionUser;
use crate::util::storage::{KeyValueStore, save_json};

pub const SESSION_KEY: &str = "user";

/// Handle returned by `SessionStore::subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(Option<&SessionUser>) + Send + Sync>;

/// Anything that can establish or clear the session. Flows write through
/// this so they work against both the raw store and the Leptos context.
pub trait SessionWriter {
    fn login(&mut self, user: SessionUser);
    fn logout(&mut self);
}

pub struct SessionStore<S> {
    storage: S,
    user: Option<SessionUser>,
    initialized: bool,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage, user: None, initialized: false, listeners: Vec::new(), next_id: 0 }
    }

    /// Rehydrate the session from storage. Only the first call has any effect.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        let raw = match self.storage.get(SESSION_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("session storage unreadable, starting logged out: {e}");
                return;
            }
        };
        let Some(raw) = raw else {
            return;
        };
        match decode_user(&raw) {
            Some(user) => {
                self.user = Some(user);
                self.publish();
            }
            None => log::warn!("ignoring malformed stored session"),
        }
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// Register a listener called with the new user after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(Option<&SessionUser>) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn publish(&self) {
        let user = self.user.as_ref();
        for (_, listener) in &self.listeners {
            listener(user);
        }
    }
}

impl<S: KeyValueStore> SessionWriter for SessionStore<S> {
    fn login(&mut self, user: SessionUser) {
        if let Err(e) = save_json(&self.storage, SESSION_KEY, &user) {
            log::warn!("session not persisted: {e}");
        }
        self.user = Some(user);
        self.publish();
    }

    fn logout(&mut self) {
        if let Err(e) = self.storage.remove(SESSION_KEY) {
            log::warn!("stored session not removed: {e}");
        }
        self.user = None;
        self.publish();
    }
}

/// Decode a stored session. Only JSON objects count as a user.
#[must_use]
pub fn decode_user(raw: &str) -> Option<SessionUser> {
    let value = serde_json::from_str(raw).ok()?;
    SessionUser::from_value(value)
}
