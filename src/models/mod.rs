//! Core data models for the Billing Calculator.
//!
//! This module contains all the domain models used throughout the calculator.

mod billing_tier;
mod calculation_result;
mod note_type;
mod time;

pub use billing_tier::BillingTier;
pub use calculation_result::{CalculationResult, Warning};
pub use note_type::{NoteType, UnknownNoteType};
pub use time::{InvalidTimeString, MINUTES_PER_DAY, Time};
