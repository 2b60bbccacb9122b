//! Sign-in flow: email + password against `POST /api/auth/login`.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use std::time::Duration;

use super::flow::{FlowOutcome, FlowPhase, Redirect, SubmitError};
use super::session::SessionWriter;
use super::toast::Notice;
use crate::net::api::ApiError;
use crate::net::types::{LoginRequest, LoginResponse};
use crate::util::cancel::CancelToken;
use crate::util::validate::{FieldErrors, is_valid_email, min_chars};

pub const MIN_PASSWORD_CHARS: usize = 6;
pub const DASHBOARD_ROUTE: &str = "/dashboard";
/// Keeps the welcome toast on screen before leaving the page.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(3);
pub const FALLBACK_ERROR: &str = "Login failed";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignInField {
    Email,
    Password,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInDraft {
    pub email: String,
    pub password: String,
}

impl SignInDraft {
    /// Check every rule and build the login request.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule per field.
    pub fn validate(&self) -> Result<LoginRequest, FieldErrors<SignInField>> {
        let mut errors = FieldErrors::new();
        errors.check(SignInField::Email, !self.email.is_empty(), "Email is required");
        errors.check(SignInField::Email, is_valid_email(&self.email), "Enter a valid email address");
        errors.check(
            SignInField::Password,
            min_chars(&self.password, MIN_PASSWORD_CHARS),
            "Password must be at least 6 characters long",
        );
        errors.into_result(LoginRequest { email: self.email.clone(), password: self.password.clone() })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInFlow {
    phase: FlowPhase,
}

impl SignInFlow {
    #[must_use]
    pub fn phase(&self) -> FlowPhase {
        self.phase
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase != FlowPhase::Idle
    }

    /// Whether the submit button should be enabled for `draft`.
    #[must_use]
    pub fn can_submit(&self, draft: &SignInDraft) -> bool {
        !self.is_busy() && draft.validate().is_ok()
    }

    /// Move to `Submitting` and return the request to send.
    ///
    /// # Errors
    ///
    /// Refuses while a submission is pending or when the draft is invalid;
    /// the phase is left unchanged.
    pub fn submit(&mut self, draft: &SignInDraft) -> Result<LoginRequest, SubmitError<SignInField>> {
        if self.is_busy() {
            return Err(SubmitError::Busy(self.phase));
        }
        let request = draft.validate().map_err(SubmitError::Invalid)?;
        self.phase = FlowPhase::Submitting;
        Ok(request)
    }

    /// Apply the login result. On success the user is written to `session`.
    pub fn resolve(
        &mut self,
        token: &CancelToken,
        result: Result<LoginResponse, ApiError>,
        session: &mut impl SessionWriter,
    ) -> FlowOutcome {
        if token.is_cancelled() {
            self.phase = FlowPhase::Idle;
            return FlowOutcome::Abandoned;
        }
        match result {
            Ok(LoginResponse { user }) => {
                let title = match user.first_name() {
                    Some(first) => format!("Welcome {first}"),
                    None => "Welcome".to_owned(),
                };
                session.login(user);
                self.phase = FlowPhase::Navigating;
                FlowOutcome::Succeeded {
                    notice: Some(Notice::info(title)),
                    redirect: Redirect { path: DASHBOARD_ROUTE, delay: REDIRECT_DELAY },
                }
            }
            Err(err) => {
                log::warn!("login failed: {err}");
                self.phase = FlowPhase::Idle;
                FlowOutcome::Failed { notice: Notice::error(err.user_message(FALLBACK_ERROR)) }
            }
        }
    }
}
