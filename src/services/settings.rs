//! Settings API client: fetch and save the account/application preferences.
//!
//! The fetch degrades to defaults on failure; saving propagates its error so
//! the settings form can tell the user the write did not land.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::services::ApiError;

/// Account and application preferences, saved as one object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub weekly_digest: bool,
    pub two_factor_enabled: bool,
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: false,
            weekly_digest: true,
            two_factor_enabled: false,
            theme: "light".into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsApi {
    client: reqwest::Client,
    base_url: String,
}

impl SettingsApi {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url: base_url.into() })
    }

    async fn fetch(&self) -> Result<Settings, ApiError> {
        let resp = self
            .client
            .get(format!("{}/settings", self.base_url))
            .send()
            .await?;
        Ok(ApiError::check(resp)?.json().await?)
    }

    /// Current settings, degrading to defaults on failure.
    pub async fn get(&self) -> Settings {
        match self.fetch().await {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "settings fetch failed, using defaults");
                Settings::default()
            }
        }
    }

    /// Save the full settings object, returning the stored version.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn save(&self, settings: &Settings) -> Result<Settings, ApiError> {
        let resp = self
            .client
            .put(format!("{}/settings", self.base_url))
            .json(settings)
            .send()
            .await?;
        Ok(ApiError::check(resp)?.json().await?)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
