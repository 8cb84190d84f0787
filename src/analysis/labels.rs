// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Overview text comparing the athlete's totals with familiar landmarks.

use std::cmp::Ordering;

use super::totals::recent_run_totals;
use crate::models::ActivitySet;

/// City-to-city distances in kilometers.
pub const DISTANCES: [(&str, f64); 20] = [
    ("London to Paris", 344.0),
    ("Berlin to Prague", 280.0),
    ("Dublin to Belfast", 142.0),
    ("London to Edinburgh", 534.0),
    ("Paris to Barcelona", 831.0),
    ("Madrid to Lisbon", 503.0),
    ("Rome to Venice", 394.0),
    ("Amsterdam to Brussels", 174.0),
    ("London to Berlin", 931.0),
    ("Paris to Rome", 1106.0),
    ("London to New York", 5570.0),
    ("New York to Los Angeles", 3936.0),
    ("New York to Chicago", 1144.0),
    ("Los Angeles to Tokyo", 8815.0),
    ("Tokyo to Seoul", 1158.0),
    ("Beijing to Shanghai", 1068.0),
    ("Singapore to Bangkok", 1432.0),
    ("London to Dubai", 5471.0),
    ("Sydney to Melbourne", 706.0),
    ("Mumbai to Delhi", 1141.0),
];

/// Heights of mountains and buildings in meters.
pub const ELEVATIONS: [(&str, f64); 20] = [
    ("Mount Everest", 8849.0),
    ("K2", 8611.0),
    ("Kangchenjunga", 8586.0),
    ("Lhotse", 8516.0),
    ("Makalu", 8485.0),
    ("Aconcagua", 6961.0),
    ("Denali", 6190.0),
    ("Kilimanjaro", 5895.0),
    ("Mount Elbrus", 5642.0),
    ("Chimborazo", 6267.0),
    ("the Burj Khalifa", 829.0),
    ("the Merdeka 118", 679.0),
    ("the Shanghai Tower", 632.0),
    ("the Abraj Al Bait Clock Tower", 601.0),
    ("the One World Trade Center", 541.0),
    ("the Taipei 101", 508.0),
    ("the Empire State Building", 381.0),
    ("the Eiffel Tower", 324.0),
    ("the Statue of Liberty", 93.0),
    ("Big Ben", 96.0),
];

/// Name of the entry closest to `value`; the first wins on a tie.
pub fn closest_landmark(table: &[(&'static str, f64)], value: f64) -> Option<&'static str> {
    table
        .iter()
        .min_by(|a, b| {
            (a.1 - value)
                .abs()
                .partial_cmp(&(b.1 - value).abs())
                .unwrap_or(Ordering::Equal)
        })
        .map(|entry| entry.0)
}

/// Overview text for the all-time distance and the recent elevation gain.
pub fn overview_label(all_time_distance_km: f64, recent: &ActivitySet) -> String {
    if all_time_distance_km == 0.0 {
        return "Here's an overview of some of your running stats!".to_string();
    }

    let (_, totals) = recent_run_totals(recent);
    let closest_distance = closest_landmark(&DISTANCES, all_time_distance_km).unwrap_or_default();
    let closest_elevation = closest_landmark(&ELEVATIONS, totals.elevation_m).unwrap_or_default();

    format!(
        "Here's an overview of some of your running stats.\n\
         You've run around the distance of {closest_distance} during your Strava history,\n\
         and climbed close to the height of {closest_elevation} over the recent period!"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LastActivity;

    #[test]
    fn test_closest_landmark() {
        assert_eq!(closest_landmark(&DISTANCES, 350.0), Some("London to Paris"));
        assert_eq!(closest_landmark(&DISTANCES, 0.0), Some("Dublin to Belfast"));
        assert_eq!(closest_landmark(&ELEVATIONS, 330.0), Some("the Eiffel Tower"));
        assert_eq!(closest_landmark(&ELEVATIONS, 10_000.0), Some("Mount Everest"));
        assert_eq!(closest_landmark(&[], 10.0), None);
    }

    #[test]
    fn test_zero_distance_greeting() {
        let label = overview_label(0.0, &ActivitySet::default());
        assert_eq!(label, "Here's an overview of some of your running stats!");
    }

    #[test]
    fn test_label_uses_recent_run_elevation() {
        let mut recent = ActivitySet::default();
        recent.push(LastActivity {
            name: "Hill reps".to_string(),
            distance: "8000".to_string(),
            time: "3000".to_string(),
            polyline: String::new(),
            average_heartrate: "None".to_string(),
            total_elevation_gain: "380".to_string(),
            activity_type: "Run".to_string(),
        });

        let label = overview_label(900.0, &recent);
        assert!(label.contains("London to Berlin"));
        assert!(label.contains("the Empire State Building"));
    }
}
