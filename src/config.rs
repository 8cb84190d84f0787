// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local use.

use chrono::Duration;
use std::env;
use std::path::PathBuf;

const DEFAULT_APP_URL: &str = "http://localhost";
const DEFAULT_AUTH_PORT: u16 = 5042;
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_TOKEN_FILE: &str = "strava_token.json";
/// Cache age used when `CACHE_MAX_AGE_HOURS` is missing or out of range.
pub const DEFAULT_CACHE_MAX_AGE_HOURS: i64 = 24;
/// Recent window used when `RECENT_DAYS` is missing or out of range.
pub const DEFAULT_RECENT_DAYS: i64 = 60;
const DEFAULT_BEST_EFFORTS_ACTIVITY_LIMIT: u32 = 6;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Strava OAuth client ID
    pub strava_client_id: String,
    /// Strava OAuth client secret
    pub strava_client_secret: String,
    /// Base URL the OAuth redirect points back to (without port)
    pub app_url: String,
    /// Port of the local OAuth callback server
    pub auth_port: u16,
    /// Directory holding the JSON cache files
    pub data_dir: PathBuf,
    /// Location of the stored OAuth token
    pub token_file: PathBuf,
    /// Cache files older than this are purged
    pub cache_max_age_hours: i64,
    /// Window of "recent" activities, in days
    pub recent_days: i64,
    /// How many recent activities are inspected for best efforts
    pub best_efforts_activity_limit: u32,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            strava_client_id: "test_client_id".to_string(),
            strava_client_secret: "test_secret".to_string(),
            app_url: DEFAULT_APP_URL.to_string(),
            auth_port: DEFAULT_AUTH_PORT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
            cache_max_age_hours: DEFAULT_CACHE_MAX_AGE_HOURS,
            recent_days: DEFAULT_RECENT_DAYS,
            best_efforts_activity_limit: DEFAULT_BEST_EFFORTS_ACTIVITY_LIMIT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            strava_client_id: env::var("STRAVA_CLIENT_ID")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("STRAVA_CLIENT_ID"))?,
            strava_client_secret: env::var("STRAVA_CLIENT_SECRET")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("STRAVA_CLIENT_SECRET"))?,
            app_url: env::var("APP_URL").unwrap_or_else(|_| DEFAULT_APP_URL.to_string()),
            auth_port: parse_or("AUTH_PORT", DEFAULT_AUTH_PORT),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
            token_file: env::var("TOKEN_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_TOKEN_FILE)),
            cache_max_age_hours: parse_in_range_or(
                "CACHE_MAX_AGE_HOURS",
                DEFAULT_CACHE_MAX_AGE_HOURS,
                Duration::try_hours,
            ),
            recent_days: parse_in_range_or("RECENT_DAYS", DEFAULT_RECENT_DAYS, Duration::try_days),
            best_efforts_activity_limit: parse_or(
                "BEST_EFFORTS_ACTIVITY_LIMIT",
                DEFAULT_BEST_EFFORTS_ACTIVITY_LIMIT,
            ),
        })
    }

    /// Redirect URI registered with Strava for the authorization code flow.
    pub fn redirect_uri(&self) -> String {
        format!(
            "{}:{}/authorization_successful",
            self.app_url.trim_end_matches('/'),
            self.auth_port
        )
    }

    /// Host of `app_url`, which the callback server binds to so that the
    /// redirect lands on the listening socket.
    pub fn auth_host(&self) -> String {
        let url = self.app_url.trim();
        let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
        let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
        let host = authority.trim_start_matches('[').trim_end_matches(']');
        if host.is_empty() {
            "localhost".to_string()
        } else {
            host.to_string()
        }
    }

    /// Base URL of the callback server, as the user opens it in a browser.
    pub fn auth_base_url(&self) -> String {
        format!("{}:{}/", self.app_url.trim_end_matches('/'), self.auth_port)
    }
}

fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Non-negative count that `to_duration` accepts, else `default`.
fn parse_in_range_or(name: &str, default: i64, to_duration: fn(i64) -> Option<Duration>) -> i64 {
    let value = parse_or(name, default);
    if value >= 0 && to_duration(value).is_some() {
        value
    } else {
        tracing::warn!(var = name, value, default, "Out of range, using default");
        default
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
