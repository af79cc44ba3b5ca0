//! Analytics and reports API client.
//!
//! List fetches degrade to local placeholder snapshots on failure, with a
//! warning, so the dashboard never blocks on a dead backend. Report creation
//! propagates its error.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::services::ApiError;

/// Headline numbers for the analytics overview cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub page_views: u64,
    pub active_users: u64,
    pub bounce_rate: f64,
    pub conversion_rate: f64,
}

/// One month of page-view history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    pub views: u64,
}

/// Conversion rate for one acquisition channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelRate {
    pub channel: String,
    pub rate: f64,
}

/// Full analytics payload from `GET {base}analytics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub overview: Overview,
    pub page_views_trend: Vec<TrendPoint>,
    pub conversion_by_channel: Vec<ChannelRate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    Generated,
    Pending,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportType {
    Financial,
    Performance,
    Security,
}

/// A generated organizational report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ReportType,
    pub owner: String,
    pub generated_on: String,
    pub status: ReportStatus,
}

/// A report draft without a server-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ReportType,
    pub owner: String,
}

/// Placeholder analytics shown when the backend is unreachable.
#[must_use]
pub fn fallback_analytics() -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        overview: Overview {
            page_views: 128_450,
            active_users: 2_318,
            bounce_rate: 34.2,
            conversion_rate: 4.7,
        },
        page_views_trend: ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
            .iter()
            .zip([18_200_u64, 19_850, 21_400, 20_900, 23_600, 24_500])
            .map(|(month, views)| TrendPoint { month: (*month).into(), views })
            .collect(),
        conversion_by_channel: [
            ("Organic", 4.2),
            ("Paid", 3.8),
            ("Social", 2.9),
            ("Email", 5.1),
            ("Direct", 6.3),
        ]
        .iter()
        .map(|(channel, rate)| ChannelRate { channel: (*channel).into(), rate: *rate })
        .collect(),
    }
}

/// Placeholder report list shown when the backend is unreachable.
#[must_use]
pub fn fallback_reports() -> Vec<Report> {
    vec![
        Report {
            id: "R-201".into(),
            title: "Q1 Financial Summary".into(),
            kind: ReportType::Financial,
            owner: "Finance Department".into(),
            generated_on: "08 Jan 2026".into(),
            status: ReportStatus::Generated,
        },
        Report {
            id: "R-202".into(),
            title: "Team Performance Report".into(),
            kind: ReportType::Performance,
            owner: "HR Department".into(),
            generated_on: "07 Jan 2026".into(),
            status: ReportStatus::Generated,
        },
        Report {
            id: "R-203".into(),
            title: "System Security Audit".into(),
            kind: ReportType::Security,
            owner: "IT Security".into(),
            generated_on: "06 Jan 2026".into(),
            status: ReportStatus::Pending,
        },
    ]
}

#[derive(Debug, Clone)]
pub struct AnalyticsApi {
    client: reqwest::Client,
    base_url: String,
}

impl AnalyticsApi {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url: base_url.into() })
    }

    async fn fetch_analytics(&self) -> Result<AnalyticsSnapshot, ApiError> {
        // Historical quirk: this endpoint joins the base URL without a slash.
        let resp = self
            .client
            .get(format!("{}analytics", self.base_url))
            .send()
            .await?;
        Ok(ApiError::check(resp)?.json().await?)
    }

    /// Analytics snapshot, degrading to the local placeholder on failure.
    pub async fn analytics(&self) -> AnalyticsSnapshot {
        match self.fetch_analytics().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(error = %e, "analytics fetch failed, using placeholder data");
                fallback_analytics()
            }
        }
    }

    async fn fetch_reports(&self) -> Result<Vec<Report>, ApiError> {
        let resp = self
            .client
            .get(format!("{}/reports", self.base_url))
            .send()
            .await?;
        Ok(ApiError::check(resp)?.json().await?)
    }

    /// Report list, degrading to the local placeholder on failure.
    pub async fn reports(&self) -> Vec<Report> {
        match self.fetch_reports().await {
            Ok(reports) => reports,
            Err(e) => {
                tracing::warn!(error = %e, "report list fetch failed, using placeholder data");
                fallback_reports()
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn create_report(&self, draft: &ReportDraft) -> Result<Report, ApiError> {
        let resp = self
            .client
            .post(format!("{}/reports", self.base_url))
            .json(draft)
            .send()
            .await?;
        Ok(ApiError::check(resp)?.json().await?)
    }
}

#[cfg(test)]
#[path = "analytics_test.rs"]
mod tests;
