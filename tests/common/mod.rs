// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers: a fake Strava API on a loopback port and service builders.

use axum::{
    extract::{Path, Query, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use strava_run_stats::models::StoredToken;
use strava_run_stats::services::{DataService, JsonCache, StravaClient, StravaService, TokenStore};

/// Access token the fake API accepts.
#[allow(dead_code)]
pub const FRESH_ACCESS_TOKEN: &str = "fresh-token";

/// Request counters of the fake API.
#[derive(Default)]
pub struct FakeStrava {
    pub api_requests: AtomicUsize,
    pub token_requests: AtomicUsize,
}

#[allow(dead_code)]
impl FakeStrava {
    pub fn api_requests(&self) -> usize {
        self.api_requests.load(Ordering::SeqCst)
    }

    pub fn token_requests(&self) -> usize {
        self.token_requests.load(Ordering::SeqCst)
    }
}

/// Running fake Strava server.
pub struct FakeStravaServer {
    pub api_url: String,
    pub oauth_url: String,
    pub state: Arc<FakeStrava>,
}

#[allow(dead_code)]
impl FakeStravaServer {
    pub fn client(&self) -> StravaClient {
        StravaClient::with_base_urls(
            "test_client_id".to_string(),
            "test_secret".to_string(),
            self.api_url.clone(),
            self.oauth_url.clone(),
        )
    }
}

/// Serve the fake API on 127.0.0.1 with an OS-assigned port.
#[allow(dead_code)]
pub async fn spawn_fake_strava() -> FakeStravaServer {
    let state = Arc::new(FakeStrava::default());

    let app = Router::new()
        .route("/api/athlete", get(athlete))
        .route("/api/athletes/{id}/stats", get(athlete_stats))
        .route("/api/athlete/activities", get(list_activities))
        .route("/api/activities/{id}", get(detailed_activity))
        .route("/oauth/token", post(token))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake Strava");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake Strava server");
    });

    FakeStravaServer {
        api_url: format!("http://{addr}/api"),
        oauth_url: format!("http://{addr}/oauth"),
        state,
    }
}

/// Token that stays valid for the whole test run.
#[allow(dead_code)]
pub fn valid_token() -> StoredToken {
    StoredToken {
        access_token: FRESH_ACCESS_TOKEN.to_string(),
        refresh_token: "refresh-1".to_string(),
        expires_at: 4_102_444_800,
        token_type: Some("Bearer".to_string()),
    }
}

/// Token past its expiry, with an access token the fake API rejects.
#[allow(dead_code)]
pub fn expired_token() -> StoredToken {
    StoredToken {
        access_token: "stale-token".to_string(),
        refresh_token: "refresh-1".to_string(),
        expires_at: 0,
        token_type: Some("Bearer".to_string()),
    }
}

/// Data service over the fake API with cache and token file under `dir`.
#[allow(dead_code)]
pub fn data_service(
    server: &FakeStravaServer,
    dir: &std::path::Path,
    token: Option<StoredToken>,
) -> DataService {
    let token_store = TokenStore::new(dir.join("token.json"));
    if let Some(token) = token {
        token_store.save(&token).expect("save token");
    }

    let strava = StravaService::new(server.client(), token_store);
    let cache = JsonCache::new(dir.join("data"), 24);
    DataService::new(strava, cache, 60, 6)
}

fn check_bearer(state: &FakeStrava, headers: &HeaderMap) -> Result<(), StatusCode> {
    state.api_requests.fetch_add(1, Ordering::SeqCst);
    let expected = format!("Bearer {FRESH_ACCESS_TOKEN}");
    match headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => Ok(()),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

async fn athlete(
    State(state): State<Arc<FakeStrava>>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    check_bearer(&state, &headers)?;
    Ok(Json(json!({"id": 7, "firstname": "Test", "lastname": "Runner"})))
}

async fn athlete_stats(
    State(state): State<Arc<FakeStrava>>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    check_bearer(&state, &headers)?;
    if id != 7 {
        return Err(StatusCode::NOT_FOUND);
    }

    Ok(Json(json!({
        "ytd_run_totals": {
            "count": 12, "distance": 85000.0, "moving_time": 30600,
            "elapsed_time": 31000, "elevation_gain": 900.0, "achievement_count": 4
        },
        "all_run_totals": {
            "count": 250, "distance": 2100000.0, "moving_time": 756000,
            "elapsed_time": 780000, "elevation_gain": 21000.0
        },
        "ytd_ride_totals": {"count": 1, "distance": 12000.0}
    })))
}

/// Three activities, oldest first.
fn activity_summaries() -> Vec<Value> {
    vec![
        json!({
            "id": 101, "name": "Morning Run", "sport_type": "Run",
            "start_date": "2024-03-01T07:00:00Z", "distance": 5000.0,
            "moving_time": 1530, "elapsed_time": 1560, "total_elevation_gain": 40.0,
            "average_heartrate": 150.0, "map": {"id": "a101", "summary_polyline": "abc"}
        }),
        json!({
            "id": 102, "name": "Commute", "sport_type": "Ride",
            "start_date": "2024-03-05T17:30:00Z", "distance": 12000.0,
            "moving_time": 2400, "total_elevation_gain": 80.0,
            "map": {"id": "a102", "summary_polyline": "xyz"}
        }),
        json!({
            "id": 103, "name": "Long Run", "sport_type": "Run",
            "start_date": "2024-03-09T08:00:00Z", "distance": 15000.0,
            "moving_time": 5400, "total_elevation_gain": 120.0,
            "average_heartrate": 145.2, "map": {"id": "a103", "summary_polyline": null}
        }),
    ]
}

async fn list_activities(
    State(state): State<Arc<FakeStrava>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    check_bearer(&state, &headers)?;

    let page: usize = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let per_page: usize = params
        .get("per_page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(30);

    let mut activities = activity_summaries();
    if !params.contains_key("after") {
        activities.reverse();
    }

    let page_items: Vec<Value> = activities
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect();
    Ok(Json(Value::Array(page_items)))
}

async fn detailed_activity(
    State(state): State<Arc<FakeStrava>>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    check_bearer(&state, &headers)?;

    let activity = match id {
        101 => json!({
            "id": 101, "name": "Morning Run", "start_date": "2024-03-01T07:00:00Z",
            "best_efforts": [
                {"name": "400m", "moving_time": 95, "elapsed_time": 95, "distance": 400.0, "pr_rank": null},
                {"name": "1k", "moving_time": 240, "elapsed_time": 241, "distance": 1000.0, "pr_rank": 1},
                {"name": "5k", "moving_time": 1530, "elapsed_time": 1560, "distance": 5000.0, "pr_rank": 2}
            ]
        }),
        102 => json!({
            "id": 102, "name": "Commute", "start_date": "2024-03-05T17:30:00Z",
            "best_efforts": null
        }),
        103 => json!({
            "id": 103, "name": "Long Run", "start_date": "2024-03-09T08:00:00Z",
            "best_efforts": [
                {"name": "400m", "moving_time": 90, "elapsed_time": 90, "distance": 400.0, "pr_rank": 1},
                {"name": "1k", "moving_time": 250, "elapsed_time": 250, "distance": 1000.0},
                {"name": "5k", "moving_time": 1750, "elapsed_time": 1755, "distance": 5000.0}
            ]
        }),
        _ => return Err(StatusCode::NOT_FOUND),
    };
    Ok(Json(activity))
}

async fn token(
    State(state): State<Arc<FakeStrava>>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    state.token_requests.fetch_add(1, Ordering::SeqCst);

    let accepted = match form.get("grant_type").map(String::as_str) {
        Some("authorization_code") => form.get("code").is_some_and(|c| c == "good-code"),
        Some("refresh_token") => form.contains_key("refresh_token"),
        _ => false,
    };
    if !accepted || form.get("client_id").map(String::as_str) != Some("test_client_id") {
        return Err(StatusCode::BAD_REQUEST);
    }

    Ok(Json(json!({
        "token_type": "Bearer",
        "access_token": FRESH_ACCESS_TOKEN,
        "refresh_token": "refresh-2",
        "expires_at": 4_102_444_800_i64,
        "expires_in": 21600
    })))
}
