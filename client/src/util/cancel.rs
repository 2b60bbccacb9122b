//! Cancellation tokens tying async work to the lifetime of its owner.
//!
//! Pages create one token, cancel it from `on_cleanup`, and check it after
//! every `.await` before touching reactive state.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the token cancelled. All clones observe it.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
