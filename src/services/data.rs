// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fetch-or-cache orchestration of the datasets behind the statistics.
//!
//! Each dataset is read from the JSON cache when present, otherwise fetched
//! from Strava, converted to the string-encoded shape and cached.

use chrono::Utc;

use crate::analysis::{aggregate_best_efforts, summarize_activity_efforts};
use crate::error::{AppError, Result};
use crate::models::{
    ActivityEfforts, ActivitySet, BestEffortSummary, LastActivity, RawEffort, RunTotals,
};
use crate::services::cache::{
    JsonCache, ACTIVITIES_FILE, ALL_TIME_RUN_FILE, BEST_EFFORTS_FILE, YTD_RUN_FILE,
};
use crate::services::strava::{StravaActivitySummary, StravaDetailedActivity, StravaService};
use crate::time_utils::{days_ago_timestamp, format_effort_date};

/// Page size when listing recent activities.
const ACTIVITIES_PER_PAGE: u32 = 200;

/// Concurrent detailed-activity requests.
const DETAIL_FETCH_CONCURRENCY: usize = 3;

/// Everything the dashboard views need, fetched in one go.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub recent: ActivitySet,
    pub ytd: RunTotals,
    pub all_time: RunTotals,
    pub best_efforts: Vec<ActivityEfforts>,
    pub best_effort_summary: Vec<BestEffortSummary>,
}

/// Data access for the CLI: Strava behind a flat JSON cache.
#[derive(Clone)]
pub struct DataService {
    strava: StravaService,
    cache: JsonCache,
    recent_days: i64,
    best_efforts_activity_limit: u32,
}

impl DataService {
    pub fn new(
        strava: StravaService,
        cache: JsonCache,
        recent_days: i64,
        best_efforts_activity_limit: u32,
    ) -> Self {
        Self {
            strava,
            cache,
            recent_days,
            best_efforts_activity_limit,
        }
    }

    pub fn cache(&self) -> &JsonCache {
        &self.cache
    }

    pub fn recent_days(&self) -> i64 {
        self.recent_days
    }

    /// Activities of the last `recent_days` days, newest first.
    pub async fn recent_activities(&self) -> Result<ActivitySet> {
        if let Some(cached) = self.cache.read::<ActivitySet>(ACTIVITIES_FILE)? {
            return Ok(cached);
        }

        let after = days_ago_timestamp(Utc::now(), self.recent_days).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Recent window of {} days is out of range",
                self.recent_days
            ))
        })?;
        let mut activities = self
            .strava
            .activities_since(after, ACTIVITIES_PER_PAGE)
            .await?;
        activities.reverse();

        let mut set = ActivitySet::default();
        for activity in &activities {
            set.push(to_last_activity(activity));
        }

        tracing::info!(count = set.len(), days = self.recent_days, "Fetched recent activities");
        self.cache.write(ACTIVITIES_FILE, &set)?;
        Ok(set)
    }

    /// Year-to-date and all-time run totals, in that order.
    pub async fn run_totals(&self) -> Result<(RunTotals, RunTotals)> {
        let ytd = self.cache.read::<RunTotals>(YTD_RUN_FILE)?;
        let all_time = self.cache.read::<RunTotals>(ALL_TIME_RUN_FILE)?;
        if let (Some(ytd), Some(all_time)) = (ytd, all_time) {
            return Ok((ytd, all_time));
        }

        let (ytd, all_time) = self.strava.run_totals().await?;
        tracing::info!(ytd_count = %ytd.count, all_time_count = %all_time.count, "Fetched run totals");

        self.cache.write(YTD_RUN_FILE, &ytd)?;
        self.cache.write(ALL_TIME_RUN_FILE, &all_time)?;
        Ok((ytd, all_time))
    }

    /// Best efforts of the most recent activities.
    pub async fn best_efforts(&self) -> Result<Vec<ActivityEfforts>> {
        if let Some(cached) = self.cache.read::<Vec<ActivityEfforts>>(BEST_EFFORTS_FILE)? {
            return Ok(cached);
        }

        let detailed = self
            .strava
            .recent_detailed_activities(self.best_efforts_activity_limit, DETAIL_FETCH_CONCURRENCY)
            .await?;

        let entries: Vec<ActivityEfforts> = detailed.iter().filter_map(activity_efforts).collect();

        tracing::info!(
            activities = detailed.len(),
            with_efforts = entries.len(),
            "Fetched best efforts"
        );
        self.cache.write(BEST_EFFORTS_FILE, &entries)?;
        Ok(entries)
    }

    /// Purge a stale cache, then load all datasets concurrently.
    pub async fn load_dashboard(&self) -> Result<Dashboard> {
        self.cache.purge_if_stale(Utc::now())?;

        let (recent, (ytd, all_time), best_efforts) = tokio::try_join!(
            self.recent_activities(),
            self.run_totals(),
            self.best_efforts(),
        )?;

        let best_effort_summary = aggregate_best_efforts(&best_efforts);

        Ok(Dashboard {
            recent,
            ytd,
            all_time,
            best_efforts,
            best_effort_summary,
        })
    }
}

/// String-encode a listed activity; a missing heart rate becomes `"None"`.
pub fn to_last_activity(activity: &StravaActivitySummary) -> LastActivity {
    LastActivity {
        name: activity.name.clone(),
        distance: activity.distance.to_string(),
        time: activity.moving_time.to_string(),
        polyline: activity
            .map
            .as_ref()
            .and_then(|m| m.summary_polyline.clone())
            .unwrap_or_default(),
        average_heartrate: activity
            .average_heartrate
            .map_or_else(|| "None".to_string(), |hr| hr.to_string()),
        total_elevation_gain: activity.total_elevation_gain.to_string(),
        activity_type: activity.sport_type.clone(),
    }
}

/// Effort entry for a detailed activity; needs a start date and efforts.
pub fn activity_efforts(activity: &StravaDetailedActivity) -> Option<ActivityEfforts> {
    let efforts = activity.best_efforts.as_deref().filter(|e| !e.is_empty())?;
    let date = format_effort_date(activity.start_date.as_deref()?)?;

    let raw: Vec<RawEffort> = efforts.iter().map(RawEffort::from).collect();
    summarize_activity_efforts(activity.name.as_deref().unwrap_or_default(), &date, &raw)
}
