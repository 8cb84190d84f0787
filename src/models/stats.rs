//! Period run totals.
//!
//! Year-to-date and all-time totals come pre-aggregated from the Strava
//! athlete stats endpoint; recent totals are derived from the activity set
//! on every request and never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Run totals for one period, string-encoded like the activity set.
///
/// Stored at: `ytd_run.json` / `all_time_run.json` in the cache directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunTotals {
    #[serde(default = "zero")]
    pub achievement_count: String,
    #[serde(default = "zero")]
    pub count: String,
    /// Meters
    #[serde(default = "zero")]
    pub distance: String,
    /// Seconds
    #[serde(default = "zero")]
    pub elapsed_time: String,
    /// Meters
    #[serde(default = "zero")]
    pub elevation_gain: String,
    /// Seconds
    #[serde(default = "zero")]
    pub moving_time: String,
}

fn zero() -> String {
    "0".to_string()
}

impl Default for RunTotals {
    fn default() -> Self {
        Self {
            achievement_count: zero(),
            count: zero(),
            distance: zero(),
            elapsed_time: zero(),
            elevation_gain: zero(),
            moving_time: zero(),
        }
    }
}

/// Named aggregation period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    Recent,
    Ytd,
    AllTime,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Recent, Period::Ytd, Period::AllTime];

    /// Short label used on comparison charts.
    pub fn label(self) -> &'static str {
        match self {
            Period::Recent => "Recent",
            Period::Ytd => "YTD",
            Period::AllTime => "All Time",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived totals for one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodTotals {
    pub period: Period,
    /// Number of runs, as reported (ytd/all-time) or counted (recent)
    pub count: String,
    pub distance_km: f64,
    pub time_minutes: f64,
    pub elevation_m: f64,
}
