//! Calculation result models for the Billing Calculator.
//!
//! This module contains the [`CalculationResult`] returned by a successful
//! calculation and the advisory [`Warning`]s attached to it.

use serde::{Deserialize, Serialize};

use super::{BillingTier, NoteType, Time};

/// An advisory produced alongside a successful calculation.
///
/// Warnings never change the call count. They tell the clinician that a
/// slightly different time range would bill better or align to the schedule.
/// Accepting a suggestion means submitting [`Warning::amended_range`] as a
/// fresh calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Warning {
    /// The duration is a few minutes short of the next tier.
    NearNextTier {
        /// Calls billed for the entered range.
        current_calls: u32,
        /// Calls the next tier would bill.
        next_calls: u32,
        /// Extra minutes needed to reach the next tier.
        minutes_to_next: u32,
        /// End time that reaches the next tier from the same start.
        suggested_end_time: Time,
    },
    /// A progress note start time is not on the hour or half-hour.
    StartTimeNotAligned {
        /// Nearest hour or half-hour boundary.
        suggested_start_time: Time,
    },
}

impl Warning {
    /// Short title for an alert dialog.
    pub fn title(&self) -> &'static str {
        match self {
            Warning::NearNextTier { .. } => "Near Next Tier",
            Warning::StartTimeNotAligned { .. } => "Start Time Not Aligned",
        }
    }

    /// The advisory text shown to the clinician.
    ///
    /// # Example
    ///
    /// ```
    /// use billing_calculator::models::{Time, Warning};
    ///
    /// let warning = Warning::StartTimeNotAligned {
    ///     suggested_start_time: Time::new(9, 0).unwrap(),
    /// };
    /// assert!(warning.message().ends_with("Suggested start time: 09:00"));
    /// ```
    pub fn message(&self) -> String {
        match self {
            Warning::NearNextTier {
                current_calls,
                next_calls,
                minutes_to_next,
                suggested_end_time,
            } => {
                let unit = if *minutes_to_next == 1 { "minute" } else { "minutes" };
                format!(
                    "You're only {minutes_to_next} {unit} away from the next tier \
                     ({next_calls} calls).\n\nCurrent: {current_calls} calls\n\
                     Suggested end time: {suggested_end_time}"
                )
            }
            Warning::StartTimeNotAligned {
                suggested_start_time,
            } => format!(
                "Start time should be on the hour (e.g., 09:00) or half-hour (e.g., 09:30).\n\n\
                 Suggested start time: {suggested_start_time}"
            ),
        }
    }

    /// The range string that applies this suggestion to `result`.
    pub fn amended_range(&self, result: &CalculationResult) -> String {
        match self {
            Warning::NearNextTier {
                suggested_end_time, ..
            } => format!("{}-{}", result.start_time, suggested_end_time),
            Warning::StartTimeNotAligned {
                suggested_start_time,
            } => format!("{}-{}", suggested_start_time, result.end_time),
        }
    }
}

/// The complete result of a billing calculation.
///
/// # Example
///
/// ```
/// use billing_calculator::models::{BillingTier, CalculationResult, NoteType, Time};
///
/// let result = CalculationResult {
///     calls: 5,
///     duration: 60,
///     start_time: Time::new(14, 30).unwrap(),
///     end_time: Time::new(15, 30).unwrap(),
///     matched_tier: Some(BillingTier::ProgressNote {
///         max_minutes: 60,
///         actual_minutes: 48,
///         calls: 5,
///     }),
///     note_type: NoteType::ProgressNote,
///     warnings: vec![],
/// };
/// assert_eq!(result.summary(), "14:30-15:30, 5 calls");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Billable calls.
    pub calls: u32,
    /// Minutes between start and end.
    pub duration: u32,
    /// Parsed start of the range.
    pub start_time: Time,
    /// Parsed end of the range.
    pub end_time: Time,
    /// The table row that produced `calls`.
    pub matched_tier: Option<BillingTier>,
    /// The note type the calculation ran under.
    pub note_type: NoteType,
    /// Advisories, near-tier first.
    pub warnings: Vec<Warning>,
}

impl CalculationResult {
    /// The normalized range, `HH:MM-HH:MM`.
    pub fn time_range(&self) -> String {
        format!("{}-{}", self.start_time, self.end_time)
    }

    /// One-line summary suitable for pasting into a note.
    pub fn summary(&self) -> String {
        format!("{}, {} calls", self.time_range(), self.calls)
    }

    /// The warning a presentation layer should raise first.
    ///
    /// Start-time alignment is shown before the near-tier advisory, since
    /// moving the start changes the duration the near-tier check saw.
    pub fn primary_warning(&self) -> Option<&Warning> {
        self.warnings
            .iter()
            .find(|w| matches!(w, Warning::StartTimeNotAligned { .. }))
            .or_else(|| self.warnings.first())
    }
}
