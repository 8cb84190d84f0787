// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod effort;
pub mod stats;
pub mod token;

pub use activity::{ActivitySet, LastActivity};
pub use effort::{ActivityEfforts, BestEffortSummary, EffortRecord, RawEffort};
pub use stats::{Period, PeriodTotals, RunTotals};
pub use token::StoredToken;
