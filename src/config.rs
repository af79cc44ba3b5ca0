//! Application configuration parsed from environment variables.
//!
//! The auth provider is selected explicitly here (demo directory vs remote
//! backend) rather than inferred from the shape of a login email.

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Which auth backend the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthProviderKind {
    /// In-memory demo directory, no network.
    Demo,
    /// Real backend over HTTP.
    Remote,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown ADMIN_AUTH_PROVIDER: {0} (expected 'demo' or 'remote')")]
    UnknownProvider(String),
    #[error("ADMIN_AUTH_PROVIDER=remote requires ADMIN_API_BASE_URL")]
    MissingBaseUrl,
    #[error("http client build failed: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub provider: AuthProviderKind,
    /// Backend base URL, trailing slashes trimmed. Required in remote mode.
    pub api_base_url: Option<String>,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `ADMIN_AUTH_PROVIDER`: `demo` (default) or `remote`
    /// - `ADMIN_API_BASE_URL`: backend base URL (required for `remote`)
    /// - `ADMIN_REQUEST_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown provider name or a remote provider
    /// without a base URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let provider = parse_provider(std::env::var("ADMIN_AUTH_PROVIDER").ok().as_deref())?;
        let api_base_url = std::env::var("ADMIN_API_BASE_URL")
            .ok()
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        if provider == AuthProviderKind::Remote && api_base_url.is_none() {
            return Err(ConfigError::MissingBaseUrl);
        }

        let request_timeout_secs = std::env::var("ADMIN_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Ok(Self { provider, api_base_url, request_timeout_secs })
    }

    /// Demo-mode config: no backend, default timeout.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            provider: AuthProviderKind::Demo,
            api_base_url: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

fn parse_provider(raw: Option<&str>) -> Result<AuthProviderKind, ConfigError> {
    match raw.unwrap_or("demo") {
        "demo" => Ok(AuthProviderKind::Demo),
        "remote" => Ok(AuthProviderKind::Remote),
        other => Err(ConfigError::UnknownProvider(other.into())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
