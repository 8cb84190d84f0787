// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Chart-ready series derived from activities, period totals and best efforts.

use serde::Serialize;

use super::filter::{extract_by_indices, filter_activities_with_heartrate};
use super::formatters::{create_pace_list, pace_to_minutes};
use super::totals::{float_convert, recent_run_totals};
use super::validity::parse_number;
use crate::models::{ActivitySet, BestEffortSummary, Period, RunTotals};

/// Series for the overview scatter plots (runs with heart rate and pace only).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OverviewPlotData {
    pub names: Vec<String>,
    pub distances_km: Vec<f64>,
    pub times_min: Vec<f64>,
    pub average_heartrate: Vec<f64>,
    pub total_elevation_gain: Vec<f64>,
    pub pace_mins: Vec<Option<f64>>,
}

/// Per-period totals for the comparison bar charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonData {
    pub periods: Vec<&'static str>,
    pub total_distances: Vec<f64>,
    pub total_times: Vec<f64>,
    pub total_elevation_gains: Vec<f64>,
}

/// Series for the best-effort plots.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BestEffortsPlotData {
    /// Bucket labels as numbers (km from 1000 m up, meters below)
    pub distances: Vec<f64>,
    pub distance_km: Vec<f64>,
    pub pace: Vec<String>,
    /// Pace in minutes, rounded to two decimals
    pub pace_values: Vec<f64>,
    pub times: Vec<f64>,
}

fn to_numbers(values: &[String], scale: f64) -> Vec<f64> {
    values
        .iter()
        .map(|v| parse_number(v).unwrap_or(0.0) / scale)
        .collect()
}

/// Filter the activity set down to runs with heart rate and a real pace.
pub fn prepare_overview_data(activities: &ActivitySet) -> OverviewPlotData {
    let paces = create_pace_list(&activities.times, &activities.distances);

    let valid_indices = filter_activities_with_heartrate(
        &activities.activity_type,
        &activities.distances,
        &activities.times,
        &activities.total_elevation_gain,
        &activities.average_heartrate,
        &paces,
    );

    let filtered_paces = extract_by_indices(&paces, &valid_indices);

    OverviewPlotData {
        names: extract_by_indices(&activities.names, &valid_indices),
        distances_km: to_numbers(
            &extract_by_indices(&activities.distances, &valid_indices),
            1000.0,
        ),
        times_min: to_numbers(&extract_by_indices(&activities.times, &valid_indices), 60.0),
        average_heartrate: to_numbers(
            &extract_by_indices(&activities.average_heartrate, &valid_indices),
            1.0,
        ),
        total_elevation_gain: to_numbers(
            &extract_by_indices(&activities.total_elevation_gain, &valid_indices),
            1.0,
        ),
        pace_mins: filtered_paces.iter().map(|p| pace_to_minutes(p)).collect(),
    }
}

/// Distance, time and elevation per period.
///
/// Reported periods use elapsed time here, unlike the comparison table.
pub fn prepare_comparison_data(
    activities: &ActivitySet,
    ytd: &RunTotals,
    all_time: &RunTotals,
) -> ComparisonData {
    let (_, recent) = recent_run_totals(activities);

    let reported = |totals: &RunTotals| {
        (
            float_convert(Some(totals.distance.as_str()), 0.0, 1.0) / 1000.0,
            float_convert(Some(totals.elapsed_time.as_str()), 0.0, 1.0) / 60.0,
            float_convert(Some(totals.elevation_gain.as_str()), 0.0, 1.0),
        )
    };
    let (ytd_km, ytd_min, ytd_elev) = reported(ytd);
    let (all_km, all_min, all_elev) = reported(all_time);

    ComparisonData {
        periods: Period::ALL.iter().map(|p| p.label()).collect(),
        total_distances: vec![recent.distance_km, ytd_km, all_km],
        total_times: vec![recent.time_minutes, ytd_min, all_min],
        total_elevation_gains: vec![recent.elevation_m, ytd_elev, all_elev],
    }
}

/// Numeric series for the best-effort summary.
pub fn prepare_best_efforts_data(best_efforts: &[BestEffortSummary]) -> BestEffortsPlotData {
    BestEffortsPlotData {
        distances: best_efforts
            .iter()
            .map(|e| parse_number(&e.distance).unwrap_or(0.0))
            .collect(),
        distance_km: best_efforts.iter().map(|e| e.distance_m / 1000.0).collect(),
        pace: best_efforts.iter().map(|e| e.pace.clone()).collect(),
        pace_values: best_efforts
            .iter()
            .map(|e| pace_to_minutes(&e.pace).map_or(0.0, |p| (p * 100.0).round() / 100.0))
            .collect(),
        times: best_efforts
            .iter()
            .map(|e| e.time_seconds as f64 / 60.0)
            .collect(),
    }
}
