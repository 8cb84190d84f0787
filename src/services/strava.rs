// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client for fetching activities and athlete statistics.
//!
//! Handles:
//! - Activity listing and detailed activities (with best efforts)
//! - Athlete year-to-date and all-time run totals
//! - Authorization code exchange and token refresh
//! - Rate limit / expired token detection

use crate::error::AppError;
use crate::models::{RawEffort, RunTotals, StoredToken};
use serde::Deserialize;

const DEFAULT_API_URL: &str = "https://www.strava.com/api/v3";
const DEFAULT_OAUTH_URL: &str = "https://www.strava.com/oauth";

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
    oauth_url: String,
    client_id: String,
    client_secret: String,
}

impl StravaClient {
    /// Create a new Strava client with OAuth credentials.
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self::with_base_urls(
            client_id,
            client_secret,
            DEFAULT_API_URL.to_string(),
            DEFAULT_OAUTH_URL.to_string(),
        )
    }

    /// Create a client talking to another API host (used by tests).
    pub fn with_base_urls(
        client_id: String,
        client_secret: String,
        base_url: String,
        oauth_url: String,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            oauth_url,
            client_id,
            client_secret,
        }
    }

    /// Get authenticated athlete profile.
    pub async fn get_athlete(&self, access_token: &str) -> Result<StravaAthlete, AppError> {
        let url = format!("{}/athlete", self.base_url);
        self.get_json(&url, access_token, &[]).await
    }

    /// Get run/ride/swim totals for an athlete.
    pub async fn get_athlete_stats(
        &self,
        access_token: &str,
        athlete_id: u64,
    ) -> Result<StravaAthleteStats, AppError> {
        let url = format!("{}/athletes/{}/stats", self.base_url, athlete_id);
        self.get_json(&url, access_token, &[]).await
    }

    /// List the athlete's activities (paginated).
    ///
    /// With `after` set Strava returns activities oldest first, otherwise
    /// newest first.
    pub async fn list_activities(
        &self,
        access_token: &str,
        after: Option<i64>,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<StravaActivitySummary>, AppError> {
        let url = format!("{}/athlete/activities", self.base_url);

        let mut query = vec![
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ];
        if let Some(after) = after {
            query.push(("after", after.to_string()));
        }

        self.get_json(&url, access_token, &query).await
    }

    /// Get a detailed activity by ID.
    pub async fn get_activity(
        &self,
        access_token: &str,
        activity_id: u64,
    ) -> Result<StravaDetailedActivity, AppError> {
        let url = format!("{}/activities/{}", self.base_url, activity_id);
        self.get_json(&url, access_token, &[]).await
    }

    /// Exchange an authorization code for tokens.
    pub async fn exchange_code(&self, code: &str) -> Result<StoredToken, AppError> {
        let response = self
            .http
            .post(format!("{}/token", self.oauth_url))
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("code", code),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(|e| AppError::StravaApi(format!("Token exchange failed: {}", e)))?;

        self.check_response_json(response).await
    }

    /// Refresh an expired access token.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<StoredToken, AppError> {
        let response = self
            .http
            .post(format!("{}/token", self.oauth_url))
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("refresh_token", refresh_token),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await
            .map_err(|e| AppError::StravaApi(format!("Token refresh request failed: {}", e)))?;

        self.check_response_json(response).await
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        access_token: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(access_token)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                tracing::warn!("Strava rate limit hit (429)");
                return Err(AppError::StravaApi(AppError::STRAVA_RATE_LIMIT.to_string()));
            }

            if status.as_u16() == 401 {
                return Err(AppError::StravaApi(
                    AppError::STRAVA_TOKEN_ERROR.to_string(),
                ));
            }

            return Err(AppError::StravaApi(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::StravaApi(format!("JSON parse error: {}", e)))
    }
}

/// Authenticated athlete profile.
#[derive(Debug, Clone, Deserialize)]
pub struct StravaAthlete {
    pub id: u64,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
}

/// Athlete statistics (only the run totals are used).
#[derive(Debug, Clone, Deserialize)]
pub struct StravaAthleteStats {
    #[serde(default)]
    pub ytd_run_totals: Option<StravaRunTotals>,
    #[serde(default)]
    pub all_run_totals: Option<StravaRunTotals>,
}

/// Totals for one period as reported by Strava.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StravaRunTotals {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub moving_time: f64,
    #[serde(default)]
    pub elapsed_time: f64,
    #[serde(default)]
    pub elevation_gain: f64,
    #[serde(default)]
    pub achievement_count: Option<u64>,
}

impl From<Option<&StravaRunTotals>> for RunTotals {
    fn from(totals: Option<&StravaRunTotals>) -> Self {
        match totals {
            None => RunTotals::default(),
            Some(t) => RunTotals {
                achievement_count: t
                    .achievement_count
                    .map_or_else(|| "None".to_string(), |c| c.to_string()),
                count: t.count.to_string(),
                distance: t.distance.to_string(),
                elapsed_time: t.elapsed_time.to_string(),
                elevation_gain: t.elevation_gain.to_string(),
                moving_time: t.moving_time.to_string(),
            },
        }
    }
}

/// Summary activity for list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct StravaActivitySummary {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sport_type: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub moving_time: i64,
    #[serde(default)]
    pub total_elevation_gain: f64,
    #[serde(default)]
    pub average_heartrate: Option<f64>,
    #[serde(default)]
    pub map: Option<StravaMap>,
}

/// Activity map data with polylines.
#[derive(Debug, Clone, Deserialize)]
pub struct StravaMap {
    #[serde(default)]
    pub summary_polyline: Option<String>,
}

/// Detailed Strava activity response (only the fields needed for best efforts).
#[derive(Debug, Clone, Deserialize)]
pub struct StravaDetailedActivity {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub best_efforts: Option<Vec<StravaBestEffort>>,
}

/// A best effort inside a detailed activity.
#[derive(Debug, Clone, Deserialize)]
pub struct StravaBestEffort {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub moving_time: i64,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub pr_rank: Option<u32>,
}

impl From<&StravaBestEffort> for RawEffort {
    fn from(effort: &StravaBestEffort) -> Self {
        RawEffort {
            distance_m: effort.distance,
            time_seconds: effort.moving_time,
            pr_rank: effort.pr_rank,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// StravaService - High-level service with token management
// ─────────────────────────────────────────────────────────────────────────────

use crate::services::TokenStore;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Refresh the access token when it expires within this margin.
const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

/// Strava service that keeps the stored token fresh and wraps API calls.
///
/// Clones share one refresh lock, so concurrent callers never refresh the
/// same token twice.
#[derive(Clone)]
pub struct StravaService {
    client: StravaClient,
    token_store: TokenStore,
    /// Serializes token refresh; Strava rotates the refresh token on use.
    refresh_lock: Arc<Mutex<()>>,
}

impl StravaService {
    pub fn new(client: StravaClient, token_store: TokenStore) -> Self {
        Self {
            client,
            token_store,
            refresh_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Get a valid access token, refreshing and persisting it when expiring.
    pub async fn get_valid_access_token(&self) -> Result<String, AppError> {
        let token = self.token_store.load()?;
        if !token.needs_refresh(Utc::now().timestamp(), TOKEN_REFRESH_MARGIN_SECS) {
            return Ok(token.access_token);
        }

        let _guard = self.refresh_lock.lock().await;

        // Re-check after the lock: another task may have refreshed already
        let token = self.token_store.load()?;
        if !token.needs_refresh(Utc::now().timestamp(), TOKEN_REFRESH_MARGIN_SECS) {
            tracing::debug!("Token refreshed by another task");
            return Ok(token.access_token);
        }

        tracing::info!(expires_at = token.expires_at, "Access token expired, refreshing");

        let refreshed = self.client.refresh_token(&token.refresh_token).await?;
        self.token_store.save(&refreshed)?;

        tracing::info!(expires_at = refreshed.expires_at, "Token refreshed and saved");
        Ok(refreshed.access_token)
    }

    /// Year-to-date and all-time run totals, in that order.
    pub async fn run_totals(&self) -> Result<(RunTotals, RunTotals), AppError> {
        let access_token = self.get_valid_access_token().await?;
        let athlete = self.client.get_athlete(&access_token).await?;
        let stats = self
            .client
            .get_athlete_stats(&access_token, athlete.id)
            .await?;

        Ok((
            RunTotals::from(stats.ytd_run_totals.as_ref()),
            RunTotals::from(stats.all_run_totals.as_ref()),
        ))
    }

    /// All activities started after `after`, oldest first.
    pub async fn activities_since(
        &self,
        after: i64,
        per_page: u32,
    ) -> Result<Vec<StravaActivitySummary>, AppError> {
        let access_token = self.get_valid_access_token().await?;
        let mut activities = Vec::new();
        let mut page = 1;

        loop {
            let batch = self
                .client
                .list_activities(&access_token, Some(after), page, per_page)
                .await?;
            let done = batch.len() < per_page as usize;
            activities.extend(batch);

            if done {
                break;
            }
            page += 1;
        }

        tracing::debug!(count = activities.len(), pages = page, "Listed activities");
        Ok(activities)
    }

    /// The `limit` most recent activities with their detailed records, newest first.
    ///
    /// Detailed records are fetched concurrently, at most `concurrency` at a time.
    pub async fn recent_detailed_activities(
        &self,
        limit: u32,
        concurrency: usize,
    ) -> Result<Vec<StravaDetailedActivity>, AppError> {
        use futures_util::{stream, StreamExt, TryStreamExt};

        let access_token = self.get_valid_access_token().await?;
        let summaries = self
            .client
            .list_activities(&access_token, None, 1, limit)
            .await?;

        let token = access_token.as_str();
        stream::iter(summaries)
            .map(|summary| async move { self.client.get_activity(token, summary.id).await })
            .buffered(concurrency.max(1))
            .try_collect()
            .await
    }
}
