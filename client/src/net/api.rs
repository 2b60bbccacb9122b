//! REST calls to the remote auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with credentials
//! included so the backend can set its session cookie.
//! Server-side (SSR) and native tests: `ApiError::Unavailable`, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is an `ApiError`. Flows turn it into a toast title with
//! `ApiError::user_message`, which prefers the backend's own `message`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ErrorBody, LoginRequest, LoginResponse, RegisterRequest};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/v1/users/register";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Text to show the user: the server's message when it sent one,
    /// otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected { message: Some(m), .. } if !m.is_empty() => m.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Pull `message` out of an error response body, if it is JSON and has one.
#[must_use]
pub fn rejection_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok()?.message
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(path: &str, body: &T) -> Result<gloo_net::http::Response, ApiError> {
    let url = crate::config::endpoint(&crate::config::backend_url(), path);
    let resp = gloo_net::http::Request::post(&url)
        .credentials(web_sys::RequestCredentials::Include)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        let status = resp.status();
        let message = resp.text().await.ok().as_deref().and_then(rejection_message);
        return Err(ApiError::Rejected { status, message });
    }
    Ok(resp)
}

/// Authenticate with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns `ApiError` if the request fails, is rejected, or the body has no
/// user object.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json(LOGIN_PATH, request).await?;
        resp.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/v1/users/register`.
///
/// Any 2xx status counts as success; the body is ignored.
///
/// # Errors
///
/// Returns `ApiError` if the request fails or is rejected.
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(REGISTER_PATH, request).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}
