// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Duration, Utc};
use std::time::SystemTime;

/// Format an activity start date the way effort tables show it (`MM/DD/YY`).
///
/// Returns `None` when the input is not RFC3339.
pub fn format_effort_date(start_date: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(start_date)
        .ok()
        .map(|d| d.format("%m/%d/%y").to_string())
}

/// Unix timestamp `days` before `now`, or `None` when out of chrono's range.
pub fn days_ago_timestamp(now: DateTime<Utc>, days: i64) -> Option<i64> {
    let window = Duration::try_days(days)?;
    now.checked_sub_signed(window).map(|t| t.timestamp())
}

/// Age of a file modification time relative to `now`.
pub fn age_of(modified: SystemTime, now: DateTime<Utc>) -> Duration {
    now - DateTime::<Utc>::from(modified)
}
