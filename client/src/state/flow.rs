//! Shared pieces of the form-submission state machines.
//!
//! DESIGN
//! ======
//! Flows are sans-IO: `submit` validates a draft and hands back the request
//! to send, `resolve` consumes the API result and says what the page should
//! do next. Pages own the network call, the timer and the navigation, which
//! keeps every transition testable without a browser.
//!
//! ```text
//! Idle --submit--> Submitting --ok--> Navigating
//!                      |
//!                      +--err--> Idle
//! ```

use std::time::Duration;

use super::toast::Notice;
use crate::util::validate::FieldErrors;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowPhase {
    #[default]
    Idle,
    Submitting,
    Navigating,
}

/// Why `submit` refused to produce a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError<F: Ord> {
    /// A previous submission is still in flight or already succeeded.
    Busy(FlowPhase),
    Invalid(FieldErrors<F>),
}

/// Client-side route change to perform after `delay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub path: &'static str,
    pub delay: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowOutcome {
    Succeeded { notice: Option<Notice>, redirect: Redirect },
    Failed { notice: Notice },
    /// The owner went away while the request was in flight.
    Abandoned,
}

impl FlowOutcome {
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            FlowOutcome::Succeeded { notice, .. } => notice.as_ref(),
            FlowOutcome::Failed { notice } => Some(notice),
            FlowOutcome::Abandoned => None,
        }
    }

    #[must_use]
    pub fn redirect(&self) -> Option<Redirect> {
        match self {
            FlowOutcome::Succeeded { redirect, .. } => Some(*redirect),
            _ => None,
        }
    }
}
