// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Race time prediction using Riegel's endurance formula.
//!
//! `T2 = T1 * (D2 / D1)^1.06`, applied as a pure power law across the four
//! reference distances with no clamping at either end.

use std::fmt;
use std::str::FromStr;

/// Riegel formula exponent.
pub const RIEGEL_EXPONENT: f64 = 1.06;

/// Reference race distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RaceDistance {
    FiveK,
    TenK,
    Half,
    Marathon,
}

impl RaceDistance {
    /// All reference distances in display order.
    pub const ALL: [RaceDistance; 4] = [
        RaceDistance::FiveK,
        RaceDistance::TenK,
        RaceDistance::Half,
        RaceDistance::Marathon,
    ];

    /// Distance in meters.
    pub fn meters(self) -> f64 {
        match self {
            RaceDistance::FiveK => 5000.0,
            RaceDistance::TenK => 10000.0,
            RaceDistance::Half => 21097.5,
            RaceDistance::Marathon => 42195.0,
        }
    }

    /// Input key (`5k`, `10k`, `half`, `marathon`).
    pub fn key(self) -> &'static str {
        match self {
            RaceDistance::FiveK => "5k",
            RaceDistance::TenK => "10k",
            RaceDistance::Half => "half",
            RaceDistance::Marathon => "marathon",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            RaceDistance::FiveK => "5K",
            RaceDistance::TenK => "10K",
            RaceDistance::Half => "Half Marathon",
            RaceDistance::Marathon => "Marathon",
        }
    }
}

impl FromStr for RaceDistance {
    type Err = UnknownDistance;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RaceDistance::ALL
            .into_iter()
            .find(|d| d.key() == s)
            .ok_or_else(|| UnknownDistance(s.to_string()))
    }
}

impl fmt::Display for RaceDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Distance key outside the reference set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown race distance '{0}' (expected 5k, 10k, half or marathon)")]
pub struct UnknownDistance(pub String);

/// Parse `MM:SS` or `HH:MM:SS` into seconds.
///
/// Any other field count, a field that is not a non-negative integer, or a
/// blank string yields `None`. A field with a minus sign such as `-1:30` is
/// rejected rather than read as a negative duration, and so is a total that
/// does not fit in a `u64`.
pub fn parse_time_input(time_str: &str) -> Option<u64> {
    let time_str = time_str.trim();
    if time_str.is_empty() {
        return None;
    }

    let parts = time_str
        .split(':')
        .map(|part| part.trim().parse::<u64>().ok())
        .collect::<Option<Vec<u64>>>()?;

    match parts.as_slice() {
        [minutes, seconds] => minutes.checked_mul(60)?.checked_add(*seconds),
        [hours, minutes, seconds] => hours
            .checked_mul(3600)?
            .checked_add(minutes.checked_mul(60)?)?
            .checked_add(*seconds),
        _ => None,
    }
}

/// Predicted seconds for every reference distance, in display order.
///
/// An unknown `distance_key` gives an empty result.
pub fn predict_race_times(distance_key: &str, time_seconds: u64) -> Vec<(RaceDistance, f64)> {
    let Ok(input) = distance_key.parse::<RaceDistance>() else {
        return Vec::new();
    };

    let input_distance = input.meters();

    RaceDistance::ALL
        .into_iter()
        .map(|target| {
            let ratio = target.meters() / input_distance;
            (target, time_seconds as f64 * ratio.powf(RIEGEL_EXPONENT))
        })
        .collect()
}

/// Format seconds as `H:MM:SS` from one hour up, else `M:SS`.
///
/// Fractional seconds are truncated.
pub fn format_race_time(seconds: f64) -> String {
    let seconds = seconds.max(0.0) as u64;
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Parse the input and return `(label, formatted time)` for 5K, 10K, half and
/// full marathon, or `None` when the time or distance is invalid.
pub fn get_race_predictions_formatted(
    distance_key: &str,
    time_str: &str,
) -> Option<Vec<(&'static str, String)>> {
    let input_seconds = parse_time_input(time_str)?;

    let predictions = predict_race_times(distance_key, input_seconds);
    if predictions.is_empty() {
        return None;
    }

    Some(
        predictions
            .into_iter()
            .map(|(distance, seconds)| (distance.label(), format_race_time(seconds)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_input() {
        assert_eq!(parse_time_input("25:30"), Some(1530));
        assert_eq!(parse_time_input("1:02:03"), Some(3723));
        assert_eq!(parse_time_input(" 45:00 "), Some(2700));
        assert_eq!(parse_time_input(""), None);
        assert_eq!(parse_time_input("   "), None);
        assert_eq!(parse_time_input("abc"), None);
        assert_eq!(parse_time_input("45"), None);
        assert_eq!(parse_time_input("1:2:3:4"), None);
        assert_eq!(parse_time_input("25:3x"), None);
        assert_eq!(parse_time_input("25:"), None);
        assert_eq!(parse_time_input("-1:30"), None);
    }

    #[test]
    fn test_parse_time_input_overflow() {
        assert_eq!(parse_time_input("307445734561825861:00"), None);
        assert_eq!(parse_time_input("0:18446744073709551615"), Some(u64::MAX));
        assert_eq!(parse_time_input("1:18446744073709551615"), None);
        assert_eq!(parse_time_input("5124095576030432:00:00"), None);
        assert_eq!(parse_time_input("0:307445734561825861:00"), None);
        assert_eq!(get_race_predictions_formatted("10k", "307445734561825861:00"), None);
    }

    #[test]
    fn test_format_race_time_boundary() {
        assert_eq!(format_race_time(3599.0), "59:59");
        assert_eq!(format_race_time(3600.0), "1:00:00");
        assert_eq!(format_race_time(1295.99), "21:35");
        assert_eq!(format_race_time(59.0), "0:59");
        assert_eq!(format_race_time(36_125.0), "10:02:05");
    }

    #[test]
    fn test_prediction_for_own_distance_is_identity() {
        let predictions = predict_race_times("10k", 2700);
        let own = predictions
            .iter()
            .find(|(d, _)| *d == RaceDistance::TenK)
            .map(|(_, t)| *t);
        assert_eq!(own, Some(2700.0));
    }

    #[test]
    fn test_riegel_scaling() {
        let predictions = predict_race_times("10k", 2700);
        assert_eq!(predictions.len(), 4);

        let five_k = predictions[0].1;
        let marathon = predictions[3].1;
        assert!(five_k < 2700.0);
        let expected = 2700.0 * (42195.0_f64 / 10000.0).powf(1.06);
        assert!((marathon - expected).abs() < 1e-9);
        assert!(marathon > 2700.0);
    }

    #[test]
    fn test_unknown_distance() {
        assert!(predict_race_times("15k", 2700).is_empty());
        assert_eq!(get_race_predictions_formatted("15k", "45:00"), None);
        assert!("mile".parse::<RaceDistance>().is_err());
    }

    #[test]
    fn test_formatted_predictions() {
        let results = get_race_predictions_formatted("10k", "45:00").unwrap();
        assert_eq!(
            results,
            vec![
                ("5K", "21:35".to_string()),
                ("10K", "45:00".to_string()),
                ("Half Marathon", "1:39:17".to_string()),
                ("Marathon", "3:27:00".to_string()),
            ]
        );

        assert_eq!(get_race_predictions_formatted("10k", "abc"), None);
    }

    #[test]
    fn test_formatted_predictions_from_marathon() {
        let results = get_race_predictions_formatted("marathon", "3:30:00").unwrap();
        assert_eq!(results[0], ("5K", "21:53".to_string()));
        assert_eq!(results[3], ("Marathon", "3:30:00".to_string()));
    }
}
