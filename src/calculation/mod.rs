//! Calculation logic for the Billing Calculator.
//!
//! This module contains the time-range parser, the tier matcher, the
//! warning checks, and the [`BillingCalculator`] that runs them as one
//! pipeline, plus an encounter timer that produces calculator input.

mod calculator;
mod tier_matcher;
mod time_parser;
mod timer;
mod warnings;

pub use calculator::{BillingCalculator, calculate};
pub use tier_matcher::{NextTier, TierMatch, find_next_tier, match_tier};
pub use time_parser::{parse_time, split_time_range};
pub use timer::{EncounterTimer, format_elapsed};
pub use warnings::{check_near_next_tier, check_start_time_alignment, collect_warnings};
