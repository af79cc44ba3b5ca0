//! Domain services: authentication and typed dashboard API clients.
//!
//! ARCHITECTURE
//! ============
//! `auth` owns the login/logout/refresh/validate flows and dispatches to the
//! demo directory or the remote backend. The endpoint clients (`users`,
//! `analytics`, `settings`) are thin typed wrappers whose list fetches
//! degrade to local placeholder data instead of failing the caller.

pub mod analytics;
pub mod auth;
pub mod demo;
pub mod settings;
pub mod users;

/// Shared error for the dashboard endpoint clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned status {status}")]
    Status { status: u16 },
}

impl ApiError {
    pub(crate) fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            Err(ApiError::Status { status: resp.status().as_u16() })
        }
    }
}
