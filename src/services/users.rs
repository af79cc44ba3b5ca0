//! User-management API client (admin CRUD over `{base}/users`).
//!
//! The list fetch never fails the caller: on any transport or status error
//! it logs a warning and returns the local placeholder roster. Mutations
//! propagate their errors so forms can surface them.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::services::ApiError;
use crate::types::Role;

/// Account lifecycle state shown in the management table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
}

/// One row of the user-management table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub status: UserStatus,
    pub last_active: String,
}

/// A record draft without a server-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserRecord {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub status: UserStatus,
    pub last_active: String,
}

/// Placeholder roster used when the backend is unreachable.
#[must_use]
pub fn fallback_users() -> Vec<UserRecord> {
    vec![UserRecord {
        id: "f1".into(),
        name: "Demo Admin".into(),
        email: "demo@enterprise.com".into(),
        role: Role::Admin,
        department: "IT".into(),
        status: UserStatus::Active,
        last_active: "1 min ago".into(),
    }]
}

#[derive(Debug, Clone)]
pub struct UserApi {
    client: reqwest::Client,
    base_url: String,
}

impl UserApi {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url: base_url.into() })
    }

    async fn fetch_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let resp = self
            .client
            .get(format!("{}/users", self.base_url))
            .send()
            .await?;
        Ok(ApiError::check(resp)?.json().await?)
    }

    /// List users, degrading to the placeholder roster on any failure.
    pub async fn list(&self) -> Vec<UserRecord> {
        match self.fetch_users().await {
            Ok(users) => users,
            Err(e) => {
                tracing::warn!(error = %e, "user list fetch failed, using placeholder data");
                fallback_users()
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn create(&self, draft: &NewUserRecord) -> Result<UserRecord, ApiError> {
        let resp = self
            .client
            .post(format!("{}/users", self.base_url))
            .json(draft)
            .send()
            .await?;
        Ok(ApiError::check(resp)?.json().await?)
    }

    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn update(&self, id: &str, record: &UserRecord) -> Result<UserRecord, ApiError> {
        let resp = self
            .client
            .put(format!("{}/users/{id}", self.base_url))
            .json(record)
            .send()
            .await?;
        Ok(ApiError::check(resp)?.json().await?)
    }

    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let resp = self
            .client
            .delete(format!("{}/users/{id}", self.base_url))
            .send()
            .await?;
        ApiError::check(resp)?;
        Ok(())
    }

    /// Toggle an account's blocked state.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn toggle_block(&self, id: &str) -> Result<UserRecord, ApiError> {
        let resp = self
            .client
            .patch(format!("{}/users/{id}/block", self.base_url))
            .send()
            .await?;
        Ok(ApiError::check(resp)?.json().await?)
    }
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
