//! Authentication service: login, logout, token refresh and validation.
//!
//! DESIGN
//! ======
//! The backend is selected explicitly from configuration: `AuthClient`
//! dispatches to either the in-memory demo directory or a remote HTTP
//! backend. Refresh and validation share one pipeline — decode the token,
//! reject it past expiry, then resolve the encoded subject back to a user
//! through the active provider.
//!
//! The service performs no persistence of its own; storing and clearing
//! tokens is the session manager's responsibility.

use serde::Deserialize;
use std::time::Duration;

use crate::config::{AppConfig, AuthProviderKind, ConfigError};
use crate::services::demo;
use crate::token::{self, MalformedTokenError, TokenPayload};
use crate::types::{LoginCredentials, LoginResponse, RefreshResponse, User};

/// Simulated network latency for the demo provider, per operation.
const DEMO_LOGIN_DELAY: Duration = Duration::from_millis(800);
const DEMO_LOGOUT_DELAY: Duration = Duration::from_millis(300);
const DEMO_RESOLVE_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("login failed: {0}")]
    LoginFailed(String),
    #[error("token expired")]
    ExpiredToken,
    #[error("user not found")]
    UserNotFound,
    #[error("no refresh token available")]
    MissingRefreshToken,
    #[error(transparent)]
    MalformedToken(#[from] MalformedTokenError),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Async seam over the auth operations, for injecting scripted backends in
/// tests.
#[async_trait::async_trait]
pub trait AuthBackend: Send + Sync {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, AuthError>;
    async fn logout(&self) -> Result<(), AuthError>;
    async fn refresh_token(&self, refresh_token: &str) -> Result<RefreshResponse, AuthError>;
    async fn validate_token(&self, token: &str) -> Result<User, AuthError>;
}

/// Decode a token and reject it if past its expiry instant.
fn decode_unexpired(raw: &str) -> Result<TokenPayload, AuthError> {
    let payload = token::decode(raw)?;
    if payload.is_expired(token::now_ms()) {
        return Err(AuthError::ExpiredToken);
    }
    Ok(payload)
}

// =============================================================================
// DEMO PROVIDER
// =============================================================================

/// Auth provider backed by the fixed demo directory. No network; each call
/// sleeps briefly to mimic a round trip.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoAuth;

impl DemoAuth {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, AuthError> {
        tokio::time::sleep(DEMO_LOGIN_DELAY).await;

        let account =
            demo::lookup(&credentials.email).ok_or(AuthError::InvalidCredentials)?;
        if account.password != credentials.password {
            return Err(AuthError::InvalidCredentials);
        }

        let mut user = account.user;
        user.last_login = Some(demo::now_rfc3339());

        Ok(LoginResponse {
            token: token::encode_access(&user, token::ACCESS_TOKEN_TTL),
            refresh_token: token::encode_refresh(&user, token::REFRESH_TOKEN_TTL),
            user,
        })
    }

    async fn logout(&self) -> Result<(), AuthError> {
        tokio::time::sleep(DEMO_LOGOUT_DELAY).await;
        Ok(())
    }

    async fn resolve_subject(&self, sub: &str) -> Result<Option<User>, AuthError> {
        tokio::time::sleep(DEMO_RESOLVE_DELAY).await;
        Ok(demo::resolve_subject(sub))
    }
}

// =============================================================================
// REMOTE PROVIDER
// =============================================================================

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Auth provider talking to the real backend over HTTP.
#[derive(Debug, Clone)]
pub struct RemoteAuth {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteAuth {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url: base_url.into() })
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, AuthError> {
        let resp = self
            .client
            .post(format!("{}/endpointApi", self.base_url))
            .json(credentials)
            .send()
            .await?;

        if !resp.status().is_success() {
            let message = resp
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| "Login failed".into());
            return Err(AuthError::LoginFailed(message));
        }

        Ok(resp.json().await?)
    }

    async fn logout(&self) -> Result<(), AuthError> {
        self.client
            .post(format!("{}/logout", self.base_url))
            .send()
            .await?;
        Ok(())
    }

    /// Resolve a token subject against the backend's user endpoint.
    /// 404 means the subject no longer exists.
    async fn resolve_subject(&self, sub: &str) -> Result<Option<User>, AuthError> {
        let resp = self
            .client
            .get(format!("{}/users/{sub}", self.base_url))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Ok(None);
        }
        Ok(Some(resp.json().await?))
    }
}

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Concrete auth client dispatching to the demo directory or the remote
/// backend, selected from [`AppConfig`].
#[derive(Debug, Clone)]
pub struct AuthClient {
    inner: Provider,
}

#[derive(Debug, Clone)]
enum Provider {
    Demo(DemoAuth),
    Remote(RemoteAuth),
}

impl AuthClient {
    /// Demo-directory client, no network.
    #[must_use]
    pub fn demo() -> Self {
        Self { inner: Provider::Demo(DemoAuth) }
    }

    /// Remote-backend client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn remote(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self { inner: Provider::Remote(RemoteAuth::new(base_url, timeout)?) })
    }

    /// Build the client selected by configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if remote mode is configured without a base URL or
    /// the HTTP client fails to build.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        match config.provider {
            AuthProviderKind::Demo => Ok(Self::demo()),
            AuthProviderKind::Remote => {
                let base_url = config
                    .api_base_url
                    .as_deref()
                    .ok_or(ConfigError::MissingBaseUrl)?;
                let timeout = Duration::from_secs(config.request_timeout_secs);
                Ok(Self::remote(base_url, timeout)?)
            }
        }
    }

    async fn resolve_subject(&self, sub: &str) -> Result<Option<User>, AuthError> {
        match &self.inner {
            Provider::Demo(demo) => demo.resolve_subject(sub).await,
            Provider::Remote(remote) => remote.resolve_subject(sub).await,
        }
    }
}

#[async_trait::async_trait]
impl AuthBackend for AuthClient {
    /// Authenticate and mint a fresh access+refresh token pair.
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, AuthError> {
        match &self.inner {
            Provider::Demo(demo) => demo.login(credentials).await,
            Provider::Remote(remote) => remote.login(credentials).await,
        }
    }

    /// Best-effort backend notification. Callers treat failure as non-fatal.
    async fn logout(&self) -> Result<(), AuthError> {
        match &self.inner {
            Provider::Demo(demo) => demo.logout().await,
            Provider::Remote(remote) => remote.logout().await,
        }
    }

    /// Mint a new access token from an unexpired refresh token whose subject
    /// still resolves to a known user.
    async fn refresh_token(&self, refresh_token: &str) -> Result<RefreshResponse, AuthError> {
        let payload = decode_unexpired(refresh_token)?;
        let user = self
            .resolve_subject(&payload.sub)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(RefreshResponse {
            token: token::encode_access(&user, token::ACCESS_TOKEN_TTL),
            user,
        })
    }

    /// Resolve an unexpired access token back to its user.
    async fn validate_token(&self, raw: &str) -> Result<User, AuthError> {
        let payload = decode_unexpired(raw)?;
        self.resolve_subject(&payload.sub)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
