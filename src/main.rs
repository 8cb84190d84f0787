// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava run statistics command line tool.
//!
//! Authorizes against Strava once, then prints recent run totals, best
//! efforts and race predictions from a locally cached copy of the data.

use clap::{Parser, Subcommand};
use std::sync::Arc;
use strava_run_stats::{
    analysis::{
        aggregate_best_efforts, float_convert, get_race_predictions_formatted,
        labels::overview_label, period_totals, RaceDistance,
    },
    config::Config,
    error::AppError,
    render,
    routes::{self, AuthState},
    services::{DataService, JsonCache, StravaClient, StravaService, TokenStore},
};
use tokio::sync::Notify;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Activities shown by `recent`.
const RECENT_ROWS: usize = 5;

#[derive(Parser)]
#[command(name = "strava-run-stats")]
#[command(about = "Running statistics from your Strava history")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Authorize with Strava through a local web page
    Auth,

    /// Overview text and period comparison table
    Overview,

    /// Latest activities and best efforts
    Recent,

    /// Fastest effort per distance over the recent activities
    Efforts,

    /// Predict race times from a known result
    Predict {
        /// Distance of the known result (5k, 10k, half, marathon)
        distance: RaceDistance,

        /// Finish time as MM:SS or HH:MM:SS
        time: String,
    },

    /// Delete every cached file
    ClearCache,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Predict { distance, time } => predict(distance, &time),
        Commands::Auth => auth().await,
        Commands::ClearCache => clear_cache(),
        Commands::Overview => overview(&data_service()?).await,
        Commands::Recent => recent(&data_service()?).await,
        Commands::Efforts => efforts(&data_service()?).await,
    }
}

fn predict(distance: RaceDistance, time: &str) -> anyhow::Result<()> {
    let predictions = get_race_predictions_formatted(distance.key(), time)
        .ok_or_else(|| anyhow::anyhow!("Invalid time '{time}', expected MM:SS or HH:MM:SS"))?;

    println!("Predictions from a {distance} in {}:", time.trim());
    println!("{}", render::race_table(&predictions));
    Ok(())
}

async fn auth() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let client = StravaClient::new(
        config.strava_client_id.clone(),
        config.strava_client_secret.clone(),
    );
    let token_store = TokenStore::new(config.token_file.clone());

    println!(
        "Open {} in a browser to authorize with Strava",
        config.auth_base_url()
    );

    let state = Arc::new(AuthState {
        config,
        client,
        token_store,
        done: Arc::new(Notify::new()),
    });
    routes::serve_until_authorized(state).await?;

    println!("Authorization complete");
    Ok(())
}

fn clear_cache() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let cache = JsonCache::new(config.data_dir, config.cache_max_age_hours);
    let removed = cache.clear()?;
    println!("Removed {removed} cached file(s) from {}", cache.dir().display());
    Ok(())
}

async fn overview(data: &DataService) -> anyhow::Result<()> {
    data.cache().purge_if_stale(chrono::Utc::now())?;
    let (recent, (ytd, all_time)) = tokio::try_join!(data.recent_activities(), data.run_totals())
        .map_err(report)?;

    let all_time_km = float_convert(Some(all_time.distance.as_str()), 0.0, 1000.0);
    println!("{}\n", overview_label(all_time_km, &recent));
    println!(
        "{}",
        render::comparison_table(&period_totals(&recent, &ytd, &all_time), data.recent_days())
    );
    Ok(())
}

async fn recent(data: &DataService) -> anyhow::Result<()> {
    let dashboard = data.load_dashboard().await.map_err(report)?;

    if dashboard.recent.is_empty() {
        println!("No activities in the last {} days", data.recent_days());
    } else {
        println!(
            "{}",
            render::recent_activities_table(&dashboard.recent, RECENT_ROWS)
        );
    }
    println!();
    println!("{}", render::best_efforts_table(&dashboard.best_effort_summary));
    Ok(())
}

async fn efforts(data: &DataService) -> anyhow::Result<()> {
    data.cache().purge_if_stale(chrono::Utc::now())?;
    let efforts = data.best_efforts().await.map_err(report)?;
    let summary = aggregate_best_efforts(&efforts);

    if summary.is_empty() {
        println!("No best efforts found in recent activities");
        return Ok(());
    }
    println!("{}", render::best_efforts_table(&summary));
    Ok(())
}

fn data_service() -> anyhow::Result<DataService> {
    let config = Config::from_env()?;
    let client = StravaClient::new(
        config.strava_client_id.clone(),
        config.strava_client_secret.clone(),
    );
    let strava = StravaService::new(client, TokenStore::new(config.token_file.clone()));
    let cache = JsonCache::new(config.data_dir.clone(), config.cache_max_age_hours);

    Ok(DataService::new(
        strava,
        cache,
        config.recent_days,
        config.best_efforts_activity_limit,
    ))
}

/// Log token problems with a hint before handing the error back.
fn report(err: AppError) -> anyhow::Error {
    if err.is_strava_token_error() {
        tracing::warn!(error = %err, "Strava token rejected, run `strava-run-stats auth`");
    }
    err.into()
}

/// Initialize logging to stderr, JSON when `LOG_FORMAT=json`.
fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose {
        "strava_run_stats=debug"
    } else {
        "strava_run_stats=info"
    };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }
    Ok(())
}
