//! Configuration types for the billing calculator.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the validated
//! [`BillingConfig`] the calculator runs against.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{BillingTier, NoteType};

use super::defaults::{
    CONSULT_TABLE, DEFAULT_LIMITS, DEFAULT_WARNING_WINDOW_MINUTES, PROGRESS_NOTE_TABLE,
};

/// Duration bounds checked before any table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationLimits {
    /// Longest billable progress note, in minutes.
    pub progress_note_max: u32,
    /// Shortest billable consult, in minutes.
    pub consult_min: u32,
    /// Longest billable consult, in minutes.
    pub consult_max: u32,
}

impl DurationLimits {
    /// The minimum duration for a note type, if it has one.
    pub fn minimum(&self, note_type: NoteType) -> Option<u32> {
        match note_type {
            NoteType::ProgressNote => None,
            NoteType::Consult => Some(self.consult_min),
        }
    }

    /// The maximum duration for a note type.
    pub fn maximum(&self, note_type: NoteType) -> u32 {
        match note_type {
            NoteType::ProgressNote => self.progress_note_max,
            NoteType::Consult => self.consult_max,
        }
    }
}

impl Default for DurationLimits {
    fn default() -> Self {
        DEFAULT_LIMITS
    }
}

/// Contents of `calculator.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorSettings {
    /// Duration bounds.
    pub limits: DurationLimits,
    /// Near-tier warning window, in minutes.
    #[serde(default = "default_warning_window")]
    pub warning_window_minutes: u32,
}

fn default_warning_window() -> u32 {
    DEFAULT_WARNING_WINDOW_MINUTES
}

/// A progress note row as written in `progress_note.yaml`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ProgressNoteRow {
    /// Upper bound of billable time.
    pub max_minutes: u32,
    /// Face-to-face minutes.
    pub actual_minutes: u32,
    /// Calls awarded.
    pub calls: u32,
}

impl From<ProgressNoteRow> for BillingTier {
    fn from(row: ProgressNoteRow) -> Self {
        BillingTier::ProgressNote {
            max_minutes: row.max_minutes,
            actual_minutes: row.actual_minutes,
            calls: row.calls,
        }
    }
}

/// A consult row as written in `consult.yaml`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ConsultRow {
    /// First minute of the range.
    pub min_minutes: u32,
    /// Last minute of the range.
    pub max_minutes: u32,
    /// Calls awarded.
    pub calls: u32,
}

impl From<ConsultRow> for BillingTier {
    fn from(row: ConsultRow) -> Self {
        BillingTier::Consult {
            min_minutes: row.min_minutes,
            max_minutes: row.max_minutes,
            calls: row.calls,
        }
    }
}

/// A table file: a list of rows under `tiers`.
#[derive(Debug, Clone, Deserialize)]
pub struct TableFile<R> {
    /// Rows in ascending order.
    pub tiers: Vec<R>,
}

/// The validated configuration a calculator runs against.
///
/// Tables are ordered ascending and never change once built. The default
/// value holds the built-in tables.
///
/// # Example
///
/// ```
/// use billing_calculator::config::BillingConfig;
/// use billing_calculator::models::NoteType;
///
/// let config = BillingConfig::default();
/// assert_eq!(config.table(NoteType::ProgressNote).len(), 10);
/// assert_eq!(config.limits().maximum(NoteType::Consult), 180);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingConfig {
    limits: DurationLimits,
    warning_window_minutes: u32,
    progress_note: Vec<BillingTier>,
    consult: Vec<BillingTier>,
}

impl BillingConfig {
    /// Builds a configuration, validating both tables and the limits.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTable`] if a table is empty, holds rows
    /// of the wrong note type, is out of order, or has overlapping consult
    /// ranges, or if the consult limits are inverted.
    pub fn new(
        limits: DurationLimits,
        warning_window_minutes: u32,
        progress_note: Vec<BillingTier>,
        consult: Vec<BillingTier>,
    ) -> EngineResult<Self> {
        validate_table(NoteType::ProgressNote, &progress_note)?;
        validate_table(NoteType::Consult, &consult)?;

        if limits.consult_min > limits.consult_max {
            return Err(invalid(
                NoteType::Consult,
                format!(
                    "minimum duration {} exceeds maximum {}",
                    limits.consult_min, limits.consult_max
                ),
            ));
        }

        Ok(Self {
            limits,
            warning_window_minutes,
            progress_note,
            consult,
        })
    }

    /// Returns the duration bounds.
    pub fn limits(&self) -> &DurationLimits {
        &self.limits
    }

    /// Returns the near-tier warning window, in minutes.
    pub fn warning_window_minutes(&self) -> u32 {
        self.warning_window_minutes
    }

    /// Returns the table for a note type, in ascending order.
    pub fn table(&self, note_type: NoteType) -> &[BillingTier] {
        match note_type {
            NoteType::ProgressNote => &self.progress_note,
            NoteType::Consult => &self.consult,
        }
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            limits: DEFAULT_LIMITS,
            warning_window_minutes: DEFAULT_WARNING_WINDOW_MINUTES,
            progress_note: PROGRESS_NOTE_TABLE.to_vec(),
            consult: CONSULT_TABLE.to_vec(),
        }
    }
}

fn invalid(note_type: NoteType, message: String) -> EngineError {
    warn!(%note_type, %message, "Rejected billing table");
    EngineError::InvalidTable { note_type, message }
}

fn validate_table(note_type: NoteType, table: &[BillingTier]) -> EngineResult<()> {
    if table.is_empty() {
        return Err(invalid(note_type, "table is empty".to_string()));
    }

    if let Some(index) = table.iter().position(|tier| tier.note_type() != note_type) {
        return Err(invalid(
            note_type,
            format!("row {} belongs to a different note type", index + 1),
        ));
    }

    for (index, tier) in table.iter().enumerate() {
        match *tier {
            BillingTier::ProgressNote {
                max_minutes,
                actual_minutes,
                ..
            } if actual_minutes > max_minutes => {
                return Err(invalid(
                    note_type,
                    format!(
                        "row {}: actual minutes {actual_minutes} exceed maximum {max_minutes}",
                        index + 1
                    ),
                ));
            }
            BillingTier::Consult {
                min_minutes,
                max_minutes,
                ..
            } if min_minutes > max_minutes => {
                return Err(invalid(
                    note_type,
                    format!(
                        "row {}: minimum {min_minutes} exceeds maximum {max_minutes}",
                        index + 1
                    ),
                ));
            }
            _ => {}
        }
    }

    for (index, pair) in table.windows(2).enumerate() {
        let (previous, current) = (pair[0], pair[1]);
        let row = index + 2;

        if current.calls() <= previous.calls() {
            return Err(invalid(
                note_type,
                format!("row {row}: calls must increase down the table"),
            ));
        }

        let ordered = match (previous, current) {
            (
                BillingTier::ProgressNote {
                    max_minutes: previous_max,
                    actual_minutes: previous_actual,
                    ..
                },
                BillingTier::ProgressNote {
                    max_minutes,
                    actual_minutes,
                    ..
                },
            ) => max_minutes > previous_max && actual_minutes > previous_actual,
            (
                BillingTier::Consult {
                    max_minutes: previous_max,
                    ..
                },
                BillingTier::Consult { min_minutes, .. },
            ) => min_minutes > previous_max,
            _ => false,
        };

        if !ordered {
            return Err(invalid(
                note_type,
                format!("row {row} overlaps or precedes the row before it"),
            ));
        }
    }

    Ok(())
}
