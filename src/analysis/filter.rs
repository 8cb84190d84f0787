// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Selection of usable activities from parallel field sequences.
//!
//! Both filters scan once in index order and return the qualifying indices in
//! ascending order. Sequences are walked in lockstep, so a shorter sequence
//! ends the scan early.

use super::validity::{is_valid_run_activity, is_valid_value};

/// Pace sentinels that mark an activity as unusable for pace plots.
const INVALID_PACES: [&str; 2] = ["N/A", "0"];

/// Indices of runs with valid distance, time and elevation gain.
///
/// When `average_heartrates` is supplied the heart rate must be valid too.
pub fn filter_valid_activities<S: AsRef<str>>(
    activity_types: &[S],
    distances: &[S],
    times: &[S],
    elevation_gains: &[S],
    average_heartrates: Option<&[S]>,
) -> Vec<usize> {
    let mut valid_indices = Vec::new();

    let fields = activity_types
        .iter()
        .zip(distances)
        .zip(times)
        .zip(elevation_gains)
        .enumerate();

    for (i, (((act_type, dist), time), elev)) in fields {
        if !is_valid_run_activity(
            act_type.as_ref(),
            dist.as_ref(),
            time.as_ref(),
            Some(elev.as_ref()),
            None,
        ) {
            continue;
        }

        if let Some(heartrates) = average_heartrates {
            let hr = heartrates.get(i).map(|hr| hr.as_ref());
            if !is_valid_value(hr, false) {
                continue;
            }
        }

        valid_indices.push(i);
    }

    valid_indices
}

/// Indices of runs usable for heart-rate and pace comparisons.
///
/// Stricter than [`filter_valid_activities`]: heart rate is always required,
/// pace sentinels are rejected, and a literal `"0"` distance is rejected even
/// though the run check already requires a positive distance.
pub fn filter_activities_with_heartrate<S: AsRef<str>>(
    activity_types: &[S],
    distances: &[S],
    times: &[S],
    elevation_gains: &[S],
    average_heartrates: &[S],
    paces: &[S],
) -> Vec<usize> {
    let mut valid_indices = Vec::new();

    let fields = activity_types
        .iter()
        .zip(distances)
        .zip(times)
        .zip(elevation_gains)
        .zip(average_heartrates)
        .zip(paces)
        .enumerate();

    for (i, (((((act_type, dist), time), elev), hr), pace)) in fields {
        if !is_valid_run_activity(
            act_type.as_ref(),
            dist.as_ref(),
            time.as_ref(),
            Some(elev.as_ref()),
            Some(hr.as_ref()),
        ) {
            continue;
        }

        if INVALID_PACES.contains(&pace.as_ref()) {
            continue;
        }

        if dist.as_ref() == "0" {
            continue;
        }

        valid_indices.push(i);
    }

    valid_indices
}

/// Pick the elements at `indices`, skipping any that are out of range.
pub fn extract_by_indices<T: Clone>(data: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().filter_map(|&i| data.get(i).cloned()).collect()
}
