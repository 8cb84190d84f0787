// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Best-effort records for recently fetched detailed activities.

use serde::{Deserialize, Serialize};

/// A timed effort as delivered by the data source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawEffort {
    pub distance_m: f64,
    pub time_seconds: i64,
    #[serde(default)]
    pub pr_rank: Option<u32>,
}

/// A formatted effort belonging to one parent activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffortRecord {
    /// Bucket key: two-decimal kilometers (`"5.00"`) or whole meters (`"400"`)
    pub distance: String,
    pub distance_m: f64,
    /// `M:SS`
    pub time: String,
    pub time_seconds: i64,
    /// `M:SS` per kilometer
    pub pace: String,
    pub is_personal_record: bool,
}

/// Efforts of one activity. Stored as `best_efforts.json` (a list of these).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEfforts {
    pub activity_name: String,
    /// `MM/DD/YY`
    pub date: String,
    pub best_efforts: Vec<EffortRecord>,
}

/// Fastest effort seen for one distance bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestEffortSummary {
    pub distance: String,
    pub distance_m: f64,
    pub best_time: String,
    pub time_seconds: i64,
    pub pace: String,
    pub activity_name: String,
    pub date: String,
}
