// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Best-effort summarizer.
//!
//! Efforts are formatted per activity, then folded into one fastest entry per
//! distance bucket. The bucket key is the formatted distance label, not the
//! raw meters, so efforts that format the same share a bucket.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::formatters::{format_effort_distance, format_effort_time, format_pace};
use crate::models::{ActivityEfforts, BestEffortSummary, EffortRecord, RawEffort};

/// Format one effort. Efforts without a positive time and distance are skipped.
pub fn effort_record(effort: &RawEffort) -> Option<EffortRecord> {
    if effort.time_seconds <= 0 || effort.distance_m <= 0.0 {
        return None;
    }

    Some(EffortRecord {
        distance: format_effort_distance(effort.distance_m),
        distance_m: effort.distance_m,
        time: format_effort_time(effort.time_seconds),
        time_seconds: effort.time_seconds,
        pace: format_pace(effort.time_seconds as f64, effort.distance_m),
        is_personal_record: effort.pr_rank == Some(1),
    })
}

/// Build the entry for one activity, or `None` if no effort qualifies.
pub fn summarize_activity_efforts(
    activity_name: &str,
    date: &str,
    efforts: &[RawEffort],
) -> Option<ActivityEfforts> {
    let best_efforts: Vec<EffortRecord> = efforts.iter().filter_map(effort_record).collect();

    if best_efforts.is_empty() {
        return None;
    }

    Some(ActivityEfforts {
        activity_name: activity_name.to_string(),
        date: date.to_string(),
        best_efforts,
    })
}

/// Fastest effort per distance bucket, ordered by increasing distance.
///
/// Only a strictly faster time replaces a bucket's entry, so ties keep the
/// first one seen.
pub fn aggregate_best_efforts(activities: &[ActivityEfforts]) -> Vec<BestEffortSummary> {
    let mut summary: Vec<BestEffortSummary> = Vec::new();
    let mut bucket_index: HashMap<String, usize> = HashMap::new();

    for activity in activities {
        for effort in &activity.best_efforts {
            let candidate = || BestEffortSummary {
                distance: effort.distance.clone(),
                distance_m: effort.distance_m,
                best_time: effort.time.clone(),
                time_seconds: effort.time_seconds,
                pace: effort.pace.clone(),
                activity_name: activity.activity_name.clone(),
                date: activity.date.clone(),
            };

            match bucket_index.get(&effort.distance).copied() {
                Some(i) => {
                    if effort.time_seconds < summary[i].time_seconds {
                        summary[i] = candidate();
                    }
                }
                None => {
                    bucket_index.insert(effort.distance.clone(), summary.len());
                    summary.push(candidate());
                }
            }
        }
    }

    // Stable sort: equal distances keep first-seen order.
    summary.sort_by(|a, b| {
        a.distance_m
            .partial_cmp(&b.distance_m)
            .unwrap_or(Ordering::Equal)
    });

    summary
}
