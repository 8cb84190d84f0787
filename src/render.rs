// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Plain-text tables for the terminal.

use crate::analysis::create_pace_list;
use crate::analysis::formatters::PACE_NOT_AVAILABLE;
use crate::analysis::validity::parse_number;
use crate::models::{ActivitySet, BestEffortSummary, LastActivity, Period, PeriodTotals};

/// Render rows under a header with columns padded to their widest cell.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(headers.to_vec())];
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        out.push(line(row.iter().map(String::as_str).collect()));
    }
    out.join("\n")
}

/// Last activities with distance, time and pace.
pub fn activities_table(activities: &[LastActivity]) -> String {
    let times: Vec<&str> = activities.iter().map(|a| a.time.as_str()).collect();
    let distances: Vec<&str> = activities.iter().map(|a| a.distance.as_str()).collect();
    let paces = create_pace_list(&times, &distances);

    let rows: Vec<Vec<String>> = activities
        .iter()
        .zip(paces)
        .map(|(activity, pace)| {
            match (parse_number(&activity.distance), parse_number(&activity.time)) {
                (Some(distance), Some(time)) => vec![
                    activity.name.clone(),
                    format!("{:.2}", distance / 1000.0),
                    format!("{:.2}", time / 60.0),
                    pace,
                ],
                _ => vec![
                    activity.name.clone(),
                    "0.0".to_string(),
                    "0.0".to_string(),
                    PACE_NOT_AVAILABLE.to_string(),
                ],
            }
        })
        .collect();

    render_table(
        &["Activity", "Distance (km)", "Time (mins)", "Pace (min/km)"],
        &rows,
    )
}

/// The first `rows` activities of a set, of any sport type.
pub fn recent_activities_table(activities: &ActivitySet, rows: usize) -> String {
    activities_table(&activities.last(rows))
}

/// Period comparison of run counts, distance, time and elevation.
pub fn comparison_table(periods: &[PeriodTotals], recent_days: i64) -> String {
    let rows: Vec<Vec<String>> = periods
        .iter()
        .map(|p| {
            let label = match p.period {
                Period::Recent => format!("Last {recent_days} Days"),
                other => other.label().to_string(),
            };
            vec![
                label,
                p.count.clone(),
                format!("{:.2}", p.distance_km),
                format!("{:.2}", p.time_minutes),
                format!("{:.0}", p.elevation_m.trunc()),
            ]
        })
        .collect();

    render_table(
        &["Period", "Activities", "Distance (km)", "Time (mins)", "Elevation (m)"],
        &rows,
    )
}

/// Fastest effort per distance.
pub fn best_efforts_table(summary: &[BestEffortSummary]) -> String {
    let rows: Vec<Vec<String>> = summary
        .iter()
        .map(|e| {
            vec![
                e.distance.clone(),
                e.best_time.clone(),
                e.pace.clone(),
                e.activity_name.clone(),
                e.date.clone(),
            ]
        })
        .collect();

    render_table(
        &["Distance", "Time (mins)", "Pace (min/km)", "Activity", "Date"],
        &rows,
    )
}

/// Race predictions as `(label, time)` rows.
pub fn race_table(predictions: &[(&str, String)]) -> String {
    let rows: Vec<Vec<String>> = predictions
        .iter()
        .map(|(label, time)| vec![label.to_string(), time.clone()])
        .collect();

    render_table(&["Distance", "Predicted Time"], &rows)
}
