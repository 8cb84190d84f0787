// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Totals over filtered activities and period comparisons.

use super::filter::filter_valid_activities;
use super::validity::{is_null, parse_number};
use crate::models::{ActivitySet, Period, PeriodTotals, RunTotals};

/// Summed distance, time and elevation of a set of activities.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActivityTotals {
    pub distance_km: f64,
    pub time_minutes: f64,
    pub elevation_m: f64,
}

/// Convert a string-encoded number, dividing by `scale_factor`.
///
/// Returns `default` for null sentinels, unparsable input, or a zero scale.
pub fn float_convert(value: Option<&str>, default: f64, scale_factor: f64) -> f64 {
    if is_null(value) || scale_factor == 0.0 {
        return default;
    }

    value
        .and_then(parse_number)
        .map_or(default, |number| number / scale_factor)
}

/// Sum the fields at `indices`, converting meters to km and seconds to minutes.
///
/// `indices` are expected to come from the filtering functions; an index out
/// of range or a field that does not parse contributes nothing.
pub fn calculate_activity_totals<S: AsRef<str>>(
    distances: &[S],
    times: &[S],
    elevations: &[S],
    indices: &[usize],
) -> ActivityTotals {
    let sum = |field: &[S]| -> f64 {
        indices
            .iter()
            .filter_map(|&i| field.get(i))
            .filter_map(|v| parse_number(v.as_ref()))
            .sum()
    };

    ActivityTotals {
        distance_km: sum(distances) / 1000.0,
        time_minutes: sum(times) / 60.0,
        elevation_m: sum(elevations),
    }
}

/// Totals of the valid runs in an activity set.
pub fn recent_run_totals(activities: &ActivitySet) -> (usize, ActivityTotals) {
    let run_indices = filter_valid_activities(
        &activities.activity_type,
        &activities.distances,
        &activities.times,
        &activities.total_elevation_gain,
        None,
    );

    let totals = calculate_activity_totals(
        &activities.distances,
        &activities.times,
        &activities.total_elevation_gain,
        &run_indices,
    );

    (run_indices.len(), totals)
}

/// Recent, year-to-date and all-time totals for the comparison table.
///
/// Reported periods use moving time.
pub fn period_totals(
    activities: &ActivitySet,
    ytd: &RunTotals,
    all_time: &RunTotals,
) -> [PeriodTotals; 3] {
    let (recent_count, recent) = recent_run_totals(activities);

    let reported = |period: Period, totals: &RunTotals| PeriodTotals {
        period,
        count: totals.count.clone(),
        distance_km: float_convert(Some(totals.distance.as_str()), 0.0, 1000.0),
        time_minutes: float_convert(Some(totals.moving_time.as_str()), 0.0, 60.0),
        elevation_m: float_convert(Some(totals.elevation_gain.as_str()), 0.0, 1.0),
    };

    [
        PeriodTotals {
            period: Period::Recent,
            count: recent_count.to_string(),
            distance_km: recent.distance_km,
            time_minutes: recent.time_minutes,
            elevation_m: recent.elevation_m,
        },
        reported(Period::Ytd, ytd),
        reported(Period::AllTime, all_time),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_convert() {
        assert_eq!(float_convert(Some("5000"), 0.0, 1000.0), 5.0);
        assert_eq!(float_convert(Some("12.5"), 0.0, 1.0), 12.5);
        assert_eq!(float_convert(None, 7.0, 1.0), 7.0);
        assert_eq!(float_convert(Some("None"), 7.0, 1.0), 7.0);
        assert_eq!(float_convert(Some("0"), 7.0, 1.0), 7.0);
        assert_eq!(float_convert(Some("abc"), -1.0, 1.0), -1.0);
        assert_eq!(float_convert(Some("10"), 3.0, 0.0), 3.0);
    }

    #[test]
    fn test_totals_sum_selected_indices() {
        let distances = ["5000", "10000", "2500"];
        let times = ["1800", "3600", "900"];
        let elevations = ["50", "120", "10"];

        let totals = calculate_activity_totals(&distances, &times, &elevations, &[0, 2]);
        assert_eq!(totals.distance_km, 7.5);
        assert_eq!(totals.time_minutes, 45.0);
        assert_eq!(totals.elevation_m, 60.0);
    }

    #[test]
    fn test_totals_are_stable_across_calls() {
        let distances = ["5000"];
        let times = ["1800"];
        let elevations = ["50"];

        let first = calculate_activity_totals(&distances, &times, &elevations, &[0]);
        let second = calculate_activity_totals(&distances, &times, &elevations, &[0]);
        assert_eq!(first, second);
        assert_eq!(first.distance_km, 5.0);
    }

    #[test]
    fn test_totals_of_nothing() {
        let empty: [&str; 0] = [];
        assert_eq!(
            calculate_activity_totals(&empty, &empty, &empty, &[]),
            ActivityTotals::default()
        );
    }

    #[test]
    fn test_period_totals_order_and_conversion() {
        let activities = ActivitySet::default();
        let ytd = RunTotals {
            count: "4".to_string(),
            distance: "42000.0".to_string(),
            moving_time: "12600".to_string(),
            elevation_gain: "310".to_string(),
            ..RunTotals::default()
        };
        let all_time = RunTotals::default();

        let periods = period_totals(&activities, &ytd, &all_time);

        assert_eq!(periods[0].period, Period::Recent);
        assert_eq!(periods[0].count, "0");
        assert_eq!(periods[1].distance_km, 42.0);
        assert_eq!(periods[1].time_minutes, 210.0);
        assert_eq!(periods[1].elevation_m, 310.0);
        assert_eq!(periods[2].period, Period::AllTime);
        assert_eq!(periods[2].distance_km, 0.0);
    }
}
