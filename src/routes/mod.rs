// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP routes of the local authorization server.

pub mod auth;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Notify;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::Config;
use crate::services::{StravaClient, TokenStore};

/// Shared state of the authorization server.
pub struct AuthState {
    pub config: Config,
    pub client: StravaClient,
    pub token_store: TokenStore,
    /// Signalled once a token has been saved.
    pub done: Arc<Notify>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Health check response
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(auth::routes())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Serve the authorization routes until a token has been saved.
///
/// Binds to the host of `APP_URL`, the same host the OAuth redirect names.
pub async fn serve_until_authorized(state: Arc<AuthState>) -> std::io::Result<()> {
    let host = state.config.auth_host();
    let listener = tokio::net::TcpListener::bind((host.as_str(), state.config.auth_port)).await?;
    tracing::info!(address = %listener.local_addr()?, host = %host, "Authorization server listening");

    let done = state.done.clone();
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(async move { done.notified().await })
        .await
}
