// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity statistics: validity rules, filtering, totals, best efforts and
//! race predictions.
//!
//! Everything here is synchronous and allocation-only; no function performs
//! I/O or keeps state between calls.

pub mod efforts;
pub mod filter;
pub mod formatters;
pub mod labels;
pub mod plot_data;
pub mod race;
pub mod totals;
pub mod validity;

pub use efforts::{aggregate_best_efforts, effort_record, summarize_activity_efforts};
pub use filter::{extract_by_indices, filter_activities_with_heartrate, filter_valid_activities};
pub use formatters::{create_pace_list, format_pace, pace_to_minutes};
pub use race::{
    format_race_time, get_race_predictions_formatted, parse_time_input, predict_race_times,
    RaceDistance,
};
pub use totals::{calculate_activity_totals, float_convert, period_totals, ActivityTotals};
pub use validity::{is_valid_run_activity, is_valid_value};
