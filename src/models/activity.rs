// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Recent activity data, kept as string-encoded parallel sequences.

use serde::{Deserialize, Serialize};

/// A set of activities as parallel sequences indexed by position.
///
/// Every numeric field is string-encoded and may hold a null sentinel
/// (`"None"`, `"0"`, `""`). Index `i` refers to the same activity in
/// every sequence. Stored as `activities.json` in the cache directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivitySet {
    #[serde(default)]
    pub names: Vec<String>,
    /// Distance in meters
    #[serde(default)]
    pub distances: Vec<String>,
    /// Moving time in seconds
    #[serde(default)]
    pub times: Vec<String>,
    /// Encoded summary polylines (not used by the statistics)
    #[serde(default)]
    pub polylines: Vec<String>,
    /// Average heart rate in bpm
    #[serde(default)]
    pub average_heartrate: Vec<String>,
    /// Total elevation gain in meters
    #[serde(default)]
    pub total_elevation_gain: Vec<String>,
    /// Sport type (Run, TrailRun, Ride, ...)
    #[serde(default)]
    pub activity_type: Vec<String>,
}

impl ActivitySet {
    /// Number of activities, as given by the name sequence.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether all parallel sequences share the same length.
    pub fn is_consistent(&self) -> bool {
        let n = self.names.len();
        [
            self.distances.len(),
            self.times.len(),
            self.polylines.len(),
            self.average_heartrate.len(),
            self.total_elevation_gain.len(),
            self.activity_type.len(),
        ]
        .iter()
        .all(|&len| len == n)
    }

    /// Append one activity to every sequence.
    pub fn push(&mut self, activity: LastActivity) {
        self.names.push(activity.name);
        self.distances.push(activity.distance);
        self.times.push(activity.time);
        self.polylines.push(activity.polyline);
        self.average_heartrate.push(activity.average_heartrate);
        self.total_elevation_gain.push(activity.total_elevation_gain);
        self.activity_type.push(activity.activity_type);
    }

    /// The activity at `index`, if every sequence has it.
    pub fn get(&self, index: usize) -> Option<LastActivity> {
        Some(LastActivity {
            name: self.names.get(index)?.clone(),
            distance: self.distances.get(index)?.clone(),
            time: self.times.get(index)?.clone(),
            polyline: self.polylines.get(index)?.clone(),
            average_heartrate: self.average_heartrate.get(index)?.clone(),
            total_elevation_gain: self.total_elevation_gain.get(index)?.clone(),
            activity_type: self.activity_type.get(index)?.clone(),
        })
    }

    /// The first `n` activities (newest first when fetched by the data service).
    pub fn last(&self, n: usize) -> Vec<LastActivity> {
        (0..n.min(self.len())).filter_map(|i| self.get(i)).collect()
    }
}

/// One activity pulled out of an [`ActivitySet`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastActivity {
    pub name: String,
    pub distance: String,
    pub time: String,
    pub polyline: String,
    pub average_heartrate: String,
    pub total_elevation_gain: String,
    pub activity_type: String,
}
