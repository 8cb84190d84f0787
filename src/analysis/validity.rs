// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Field and record validity checks.

/// String values treated as "no data" (an absent value is also null).
pub const NULL_VALUES: [&str; 3] = ["None", "0", ""];

/// Sport types counted as runs.
pub const VALID_RUN_TYPES: [&str; 4] = ["Run", "VirtualRun", "TrailRun", "IndoorRun"];

/// Whether `value` is one of the null sentinels.
pub fn is_null(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(v) => NULL_VALUES.contains(&v),
    }
}

/// Parse a string-encoded number, ignoring surrounding whitespace.
pub(crate) fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

/// Check whether a single field is usable.
///
/// Null sentinels are never valid. Unless `allow_zero` is set the value must
/// parse as a number strictly greater than zero; with `allow_zero` any
/// non-null value passes without being parsed.
pub fn is_valid_value(value: Option<&str>, allow_zero: bool) -> bool {
    if is_null(value) {
        return false;
    }

    if allow_zero {
        return true;
    }

    value
        .and_then(parse_number)
        .is_some_and(|number| number > 0.0)
}

/// Check that an activity is a run with usable distance and time.
///
/// Elevation and heart rate are only checked when supplied.
pub fn is_valid_run_activity(
    activity_type: &str,
    distance: &str,
    time: &str,
    elevation: Option<&str>,
    heartrate: Option<&str>,
) -> bool {
    if !VALID_RUN_TYPES.contains(&activity_type) {
        return false;
    }

    if !is_valid_value(Some(distance), false) || !is_valid_value(Some(time), false) {
        return false;
    }

    if elevation.is_some() && !is_valid_value(elevation, false) {
        return false;
    }
    if heartrate.is_some() && !is_valid_value(heartrate, false) {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_sentinels_never_valid() {
        for value in [None, Some("None"), Some("0"), Some("")] {
            assert!(!is_valid_value(value, false), "{value:?}");
            assert!(!is_valid_value(value, true), "{value:?}");
        }
    }

    #[test]
    fn test_numeric_values() {
        assert!(is_valid_value(Some("5"), false));
        assert!(is_valid_value(Some("5000.0"), false));
        assert!(is_valid_value(Some(" 42 "), false));
        assert!(!is_valid_value(Some("-1"), false));
        assert!(!is_valid_value(Some("0.0"), false));
        assert!(!is_valid_value(Some("abc"), false));
        assert!(!is_valid_value(Some("NaN"), false));
    }

    #[test]
    fn test_allow_zero_skips_parsing() {
        assert!(is_valid_value(Some("0.0"), true));
        assert!(is_valid_value(Some("abc"), true));
        assert!(is_valid_value(Some("-3"), true));
    }

    #[test]
    fn test_run_types() {
        for run_type in VALID_RUN_TYPES {
            assert!(is_valid_run_activity(run_type, "5000", "1800", None, None));
        }
        assert!(!is_valid_run_activity("Ride", "5000", "1800", None, None));
        assert!(!is_valid_run_activity("run", "5000", "1800", None, None));
    }

    #[test]
    fn test_run_requires_distance_and_time() {
        assert!(!is_valid_run_activity("Run", "0", "1800", None, None));
        assert!(!is_valid_run_activity("Run", "5000", "None", None, None));
        assert!(!is_valid_run_activity("Run", "5000", "", None, None));
    }

    #[test]
    fn test_optional_fields_checked_only_when_supplied() {
        assert!(is_valid_run_activity("Run", "5000", "1800", Some("12.5"), None));
        assert!(!is_valid_run_activity("Run", "5000", "1800", Some("0"), None));
        assert!(is_valid_run_activity("Run", "5000", "1800", None, Some("148")));
        assert!(!is_valid_run_activity("Run", "5000", "1800", None, Some("None")));
    }
}
