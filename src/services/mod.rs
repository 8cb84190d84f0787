// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - Strava access, token storage and caching.

pub mod cache;
pub mod data;
pub mod strava;
pub mod token_store;

pub use cache::JsonCache;
pub use data::{Dashboard, DataService};
pub use strava::{StravaClient, StravaService};
pub use token_store::TokenStore;
