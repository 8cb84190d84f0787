// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava OAuth authorization routes.
//!
//! The user opens `/authorize`, approves access on Strava, and Strava
//! redirects back to `/authorization_successful` with a code that is
//! exchanged for a token and saved to the token file.

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

use super::AuthState;
use crate::config::Config;
use crate::error::{AppError, Result};

const STRAVA_AUTHORIZE_URL: &str = "https://www.strava.com/oauth/authorize";
const OAUTH_SCOPE: &str = "read,profile:read_all,activity:read_all";

pub fn routes() -> Router<Arc<AuthState>> {
    Router::new()
        .route("/", get(home))
        .route("/authorize", get(authorize))
        .route("/authorization_successful", get(authorization_successful))
}

/// Build the Strava authorization URL for this configuration.
pub fn authorize_url(config: &Config) -> String {
    format!(
        "{}?client_id={}&response_type=code&redirect_uri={}&scope={}&approval_prompt=force",
        STRAVA_AUTHORIZE_URL,
        urlencoding::encode(&config.strava_client_id),
        urlencoding::encode(&config.redirect_uri()),
        urlencoding::encode(OAUTH_SCOPE),
    )
}

async fn home() -> Html<&'static str> {
    Html(
        "<h1>Strava authorization</h1>\
         <p><a href=\"/authorize\">Login with Strava</a></p>",
    )
}

/// Start OAuth flow - redirect to Strava authorization.
async fn authorize(State(state): State<Arc<AuthState>>) -> Redirect {
    tracing::info!(
        client_id = %state.config.strava_client_id,
        redirect_uri = %state.config.redirect_uri(),
        "Starting OAuth flow, redirecting to Strava"
    );
    Redirect::temporary(&authorize_url(&state.config))
}

#[derive(Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// OAuth callback - exchange the code and persist the token.
async fn authorization_successful(
    State(state): State<Arc<AuthState>>,
    Query(params): Query<CallbackParams>,
) -> Result<Html<String>> {
    if let Some(error) = params.error {
        tracing::warn!(error = %error, "OAuth error from Strava");
        return Err(AppError::BadRequest(format!("Strava denied access: {}", error)));
    }

    let code = params
        .code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::BadRequest("No code".to_string()))?;

    tracing::info!("Exchanging authorization code for tokens");
    let token = state.client.exchange_code(&code).await?;
    state.token_store.save(&token)?;

    tracing::info!(
        path = %state.token_store.path().display(),
        expires_at = token.expires_at,
        "Token saved"
    );
    state.done.notify_one();

    Ok(Html(format!(
        "<h2>Success!</h2><p>Token saved to <code>{}</code>. You can close this window.</p>",
        state.token_store.path().display()
    )))
}
