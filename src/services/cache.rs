// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Flat JSON file cache for fetched Strava data.
//!
//! One file per query. When the activity cache grows older than the
//! configured age every cached file is removed, so all datasets are
//! refetched together.

use chrono::{DateTime, Duration, Utc};
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_CACHE_MAX_AGE_HOURS;
use crate::error::{AppError, Result};
use crate::time_utils::age_of;

pub const ACTIVITIES_FILE: &str = "activities.json";
pub const YTD_RUN_FILE: &str = "ytd_run.json";
pub const ALL_TIME_RUN_FILE: &str = "all_time_run.json";
pub const BEST_EFFORTS_FILE: &str = "best_efforts.json";

/// JSON cache rooted at a data directory.
#[derive(Debug, Clone)]
pub struct JsonCache {
    dir: PathBuf,
    max_age: Duration,
}

impl JsonCache {
    /// A negative or out-of-range `max_age_hours` falls back to the default age.
    pub fn new(dir: impl Into<PathBuf>, max_age_hours: i64) -> Self {
        Self {
            dir: dir.into(),
            max_age: Duration::try_hours(max_age_hours)
                .filter(|age| *age >= Duration::zero())
                .unwrap_or_else(|| Duration::hours(DEFAULT_CACHE_MAX_AGE_HOURS)),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Read a cached value. A missing or unreadable entry is a miss.
    pub fn read<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.path(name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AppError::Cache(format!("{}: {}", path.display(), e))),
        };

        match serde_json::from_str(&content) {
            Ok(value) => {
                tracing::debug!(file = name, "Cache hit");
                Ok(Some(value))
            }
            Err(e) => {
                tracing::warn!(file = name, error = %e, "Ignoring malformed cache file");
                Ok(None)
            }
        }
    }

    /// Write a value, creating the cache directory if needed.
    pub fn write<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| AppError::Cache(format!("{}: {}", self.dir.display(), e)))?;

        let json = serde_json::to_string_pretty(value)
            .map_err(|e| AppError::Cache(format!("Serialize {}: {}", name, e)))?;

        let path = self.path(name);
        fs::write(&path, json).map_err(|e| AppError::Cache(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(file = name, "Cache written");
        Ok(())
    }

    /// Remove every cached file if the activity cache is older than the max age.
    ///
    /// Returns whether a purge happened.
    pub fn purge_if_stale(&self, now: DateTime<Utc>) -> Result<bool> {
        let modified = match fs::metadata(self.path(ACTIVITIES_FILE)).and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(AppError::Cache(e.to_string())),
        };

        let age = age_of(modified, now);
        if age <= self.max_age {
            return Ok(false);
        }

        let removed = self.clear()?;
        tracing::info!(
            age_hours = age.num_hours(),
            removed,
            "Cache expired, removed cached files"
        );
        Ok(true)
    }

    /// Delete all `*.json` files in the cache directory; returns how many.
    pub fn clear(&self) -> Result<usize> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(AppError::Cache(e.to_string())),
        };

        let mut removed = 0;
        for entry in entries {
            let path = entry.map_err(|e| AppError::Cache(e.to_string()))?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                fs::remove_file(&path)
                    .map_err(|e| AppError::Cache(format!("{}: {}", path.display(), e)))?;
                removed += 1;
            }
        }

        Ok(removed)
    }
}
