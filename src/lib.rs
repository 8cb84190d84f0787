// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava run statistics: totals, best efforts and race predictions
//!
//! This crate pulls running activities from Strava, keeps them in a small
//! JSON cache and derives the numbers shown by the command line tool.

pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;
pub mod time_utils;
