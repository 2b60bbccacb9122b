//! Form validation primitives shared by the sign-in and sign-up flows.
//!
//! DESIGN
//! ======
//! Each form declares its own field enum and collects at most one message per
//! field into `FieldErrors`. Rules count characters rather than bytes so
//! non-ASCII names are measured the way users see them.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::BTreeMap;

/// Per-field validation messages. The first failing rule for a field wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldErrors<F: Ord> {
    errors: BTreeMap<F, &'static str>,
}

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self { errors: BTreeMap::new() }
    }
}

impl<F: Ord + Copy> FieldErrors<F> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless the field already has one.
    pub fn add(&mut self, field: F, message: &'static str) {
        self.errors.entry(field).or_insert(message);
    }

    /// Record `message` when `ok` is false.
    pub fn check(&mut self, field: F, ok: bool, message: &'static str) {
        if !ok {
            self.add(field, message);
        }
    }

    #[must_use]
    pub fn get(&self, field: F) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Ok(value)` when no errors were recorded, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns the collected errors if any rule failed.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

#[must_use]
pub fn min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Check that `email` looks like `local@domain.tld`.
///
/// The local part may contain letters, digits and `_ ' + - .`, must not start
/// or end with a dot and must not contain `..`. Every domain label starts with
/// a letter or digit, and the top-level label is at least two letters.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    valid_local_part(local) && valid_domain(domain)
}

fn valid_local_part(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('.')
        && !local.ends_with(['.', '\''])
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '+' | '-' | '.'))
}

fn valid_domain(domain: &str) -> bool {
    let labels = domain.split('.').collect::<Vec<_>>();
    if labels.len() < 2 {
        return false;
    }
    let Some((tld, rest)) = labels.split_last() else {
        return false;
    };
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());
    tld_ok
        && rest.iter().all(|label| {
            label.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}
