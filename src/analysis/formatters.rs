// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User-visible number and time formatting.
//!
//! These strings end up in tables, so their exact shape matters.

use super::validity::parse_number;

/// Pace shown when the distance is zero.
pub const PACE_NOT_AVAILABLE: &str = "N/A";

/// Pace shown when time or distance could not be parsed.
pub const PACE_UNPARSABLE: &str = "0";

/// Format a pace in `M:SS` per kilometer.
///
/// Minutes and seconds are both truncated, never rounded.
pub fn format_pace(time_seconds: f64, distance_meters: f64) -> String {
    if distance_meters == 0.0 {
        return PACE_NOT_AVAILABLE.to_string();
    }

    let pace_sec_per_meter = time_seconds / distance_meters;
    let pace_sec_per_km = pace_sec_per_meter * 1000.0;
    let pace_min_per_km = pace_sec_per_km / 60.0;

    let minutes = pace_min_per_km as i64;
    let seconds = ((pace_min_per_km - minutes as f64) * 60.0) as i64;

    format!("{minutes}:{seconds:02}")
}

/// Paces for parallel time/distance sequences.
pub fn create_pace_list<S: AsRef<str>>(times: &[S], distances: &[S]) -> Vec<String> {
    times
        .iter()
        .zip(distances)
        .map(|(time, distance)| {
            match (parse_number(time.as_ref()), parse_number(distance.as_ref())) {
                (Some(_), Some(d)) if d == 0.0 => PACE_NOT_AVAILABLE.to_string(),
                (Some(t), Some(d)) => format_pace(t, d),
                _ => PACE_UNPARSABLE.to_string(),
            }
        })
        .collect()
}

/// Convert an `M:SS` pace to fractional minutes.
pub fn pace_to_minutes(pace: &str) -> Option<f64> {
    if pace == PACE_NOT_AVAILABLE {
        return None;
    }

    let (min_str, sec_str) = pace.split_once(':')?;
    let minutes: i64 = min_str.trim().parse().ok()?;
    let seconds: i64 = sec_str.trim().parse().ok()?;
    Some(minutes as f64 + seconds as f64 / 60.0)
}

/// Effort bucket label: two-decimal kilometers from 1000 m up, whole meters below.
pub fn format_effort_distance(distance_meters: f64) -> String {
    if distance_meters >= 1000.0 {
        format!("{:.2}", distance_meters / 1000.0)
    } else {
        format!("{distance_meters:.0}")
    }
}

/// Effort time as `M:SS`; minutes are not wrapped into hours.
pub fn format_effort_time(time_seconds: i64) -> String {
    format!("{}:{:02}", time_seconds / 60, time_seconds % 60)
}
