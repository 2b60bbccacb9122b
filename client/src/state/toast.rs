//! Transient notification queue.
//!
//! Only the newest toast is shown; pushing a new one evicts older entries.
//! The `Toaster` component auto-dismisses each toast after `TOAST_DURATION`.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

pub const TOAST_LIMIT: usize = 1;
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A toast to be shown, before it has been assigned an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub variant: ToastVariant,
}

impl Notice {
    pub fn info(title: impl Into<String>) -> Self {
        Self { title: title.into(), variant: ToastVariant::Default }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self { title: title.into(), variant: ToastVariant::Destructive }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Show `notice`, returning the id used to dismiss it.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.insert(0, Toast { id, title: notice.title, variant: notice.variant });
        self.items.truncate(TOAST_LIMIT);
        id
    }

    /// Remove the toast with `id`. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    #[must_use]
    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}
