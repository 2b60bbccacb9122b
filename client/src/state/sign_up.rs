//! Sign-up flow: profile fields against `POST /api/v1/users/register`.
//!
//! Registration never authenticates; success sends the visitor to the
//! sign-in page.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use std::time::Duration;

use super::flow::{FlowOutcome, FlowPhase, Redirect, SubmitError};
use super::toast::Notice;
use crate::net::api::ApiError;
use crate::net::types::{GovernmentIdType, RegisterRequest, Role};
use crate::util::cancel::CancelToken;
use crate::util::validate::{FieldErrors, is_valid_email, min_chars};

pub const SIGN_IN_ROUTE: &str = "/sign-in";
pub const FALLBACK_ERROR: &str = "Sign up failed";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignUpField {
    FirstName,
    LastName,
    Email,
    Password,
    MobileNo,
    GovernmentIdType,
    GovernmentId,
    Role,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub mobile_no: String,
    pub government_id_type: Option<GovernmentIdType>,
    pub government_id: String,
    pub role: Option<Role>,
}

impl SignUpDraft {
    /// Check every rule and build the registration payload.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule per field.
    pub fn validate(&self) -> Result<RegisterRequest, FieldErrors<SignUpField>> {
        let mut errors = FieldErrors::new();
        errors.check(SignUpField::FirstName, min_chars(&self.first_name, 3), "First name is required");
        errors.check(SignUpField::LastName, min_chars(&self.last_name, 2), "Last name is required");
        errors.check(SignUpField::Email, is_valid_email(&self.email), "Invalid email address");
        errors.check(
            SignUpField::Password,
            min_chars(&self.password, 6),
            "Password must be at least 6 characters",
        );
        errors.check(SignUpField::MobileNo, min_chars(&self.mobile_no, 10), "Mobile number is required");
        errors.check(SignUpField::GovernmentId, min_chars(&self.government_id, 6), "Government Id is required");

        let id_type = self.government_id_type;
        errors.check(SignUpField::GovernmentIdType, id_type.is_some(), "Please select a government Id");
        let role = self.role.filter(|r| r.is_registrable());
        errors.check(SignUpField::Role, role.is_some(), "Please select a role");

        let (Some(government_id_type), Some(role)) = (id_type, role) else {
            return Err(errors);
        };
        errors.into_result(RegisterRequest {
            name: format!("{} {}", self.first_name, self.last_name),
            email: self.email.clone(),
            password: self.password.clone(),
            role,
            government_id_type,
            government_id: self.government_id.clone(),
            mobile_no: self.mobile_no.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpFlow {
    phase: FlowPhase,
}

impl SignUpFlow {
    #[must_use]
    pub fn phase(&self) -> FlowPhase {
        self.phase
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase != FlowPhase::Idle
    }

    #[must_use]
    pub fn can_submit(&self, draft: &SignUpDraft) -> bool {
        !self.is_busy() && draft.validate().is_ok()
    }

    /// Move to `Submitting` and return the payload to send.
    ///
    /// # Errors
    ///
    /// Refuses while a submission is pending or when the draft is invalid.
    pub fn submit(&mut self, draft: &SignUpDraft) -> Result<RegisterRequest, SubmitError<SignUpField>> {
        if self.is_busy() {
            return Err(SubmitError::Busy(self.phase));
        }
        let request = draft.validate().map_err(SubmitError::Invalid)?;
        self.phase = FlowPhase::Submitting;
        Ok(request)
    }

    /// Apply the registration result.
    pub fn resolve(&mut self, token: &CancelToken, result: Result<(), ApiError>) -> FlowOutcome {
        if token.is_cancelled() {
            self.phase = FlowPhase::Idle;
            return FlowOutcome::Abandoned;
        }
        match result {
            Ok(()) => {
                self.phase = FlowPhase::Navigating;
                FlowOutcome::Succeeded {
                    notice: None,
                    redirect: Redirect { path: SIGN_IN_ROUTE, delay: Duration::ZERO },
                }
            }
            Err(err) => {
                log::warn!("registration failed: {err}");
                self.phase = FlowPhase::Idle;
                FlowOutcome::Failed { notice: Notice::error(err.user_message(FALLBACK_ERROR)) }
            }
        }
    }
}
