//! Billing tier model.
//!
//! A tier is one row of a billing lookup table. The two note types use
//! differently shaped rows, so the row is a tagged variant rather than a
//! struct with optional columns.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::NoteType;

/// One row of a billing lookup table.
///
/// # Example
///
/// ```
/// use billing_calculator::models::{BillingTier, NoteType};
///
/// let tier = BillingTier::ProgressNote { max_minutes: 45, actual_minutes: 36, calls: 4 };
/// assert_eq!(tier.calls(), 4);
/// assert_eq!(tier.note_type(), NoteType::ProgressNote);
/// assert_eq!(tier.description(), "Max: 45 min, Actual: 36 min");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BillingTier {
    /// A progress note row.
    ProgressNote {
        /// Upper bound of billable time, documentation included.
        max_minutes: u32,
        /// Face-to-face minutes that earn this tier.
        actual_minutes: u32,
        /// Calls awarded.
        calls: u32,
    },
    /// A consult row covering an inclusive minute range.
    Consult {
        /// First minute of the range.
        min_minutes: u32,
        /// Last minute of the range.
        max_minutes: u32,
        /// Calls awarded.
        calls: u32,
    },
}

impl BillingTier {
    /// Calls awarded by this tier.
    pub fn calls(&self) -> u32 {
        match *self {
            BillingTier::ProgressNote { calls, .. } | BillingTier::Consult { calls, .. } => calls,
        }
    }

    /// The note type this row belongs to.
    pub fn note_type(&self) -> NoteType {
        match self {
            BillingTier::ProgressNote { .. } => NoteType::ProgressNote,
            BillingTier::Consult { .. } => NoteType::Consult,
        }
    }

    /// Upper bound of the row, in minutes.
    pub fn max_minutes(&self) -> u32 {
        match *self {
            BillingTier::ProgressNote { max_minutes, .. }
            | BillingTier::Consult { max_minutes, .. } => max_minutes,
        }
    }

    /// The duration a shorter encounter must reach to be billed at this tier.
    ///
    /// Progress notes advertise their face-to-face minutes; consults their
    /// range floor.
    pub fn next_tier_threshold(&self) -> u32 {
        match *self {
            BillingTier::ProgressNote { actual_minutes, .. } => actual_minutes,
            BillingTier::Consult { min_minutes, .. } => min_minutes,
        }
    }

    /// Short human-readable description of the row.
    pub fn description(&self) -> String {
        match *self {
            BillingTier::ProgressNote {
                max_minutes,
                actual_minutes,
                ..
            } => format!("Max: {max_minutes} min, Actual: {actual_minutes} min"),
            BillingTier::Consult {
                min_minutes,
                max_minutes,
                ..
            } => format!("{min_minutes}-{max_minutes} min"),
        }
    }
}

impl fmt::Display for BillingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} calls)", self.description(), self.calls())
    }
}
