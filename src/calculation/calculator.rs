//! The billing calculator pipeline.
//!
//! A calculation runs parse, validate, match and warn in that order and
//! stops at the first failure. The calculator holds only immutable
//! configuration, so one instance can serve any number of threads.

use std::sync::OnceLock;

use tracing::debug;

use crate::config::BillingConfig;
use crate::error::CalculationError;
use crate::models::{BillingTier, CalculationResult, NoteType};

use super::tier_matcher::match_tier;
use super::time_parser::{parse_time, split_time_range};
use super::warnings::collect_warnings;

/// Computes billable calls from a clinician-entered time range.
///
/// # Example
///
/// ```
/// use billing_calculator::calculation::BillingCalculator;
/// use billing_calculator::models::NoteType;
///
/// let calculator = BillingCalculator::default();
/// let result = calculator.calculate("14:30-15:30", NoteType::ProgressNote).unwrap();
///
/// assert_eq!(result.duration, 60);
/// assert_eq!(result.calls, 5);
/// assert!(result.warnings.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BillingCalculator {
    config: BillingConfig,
}

impl BillingCalculator {
    /// Creates a calculator over the given configuration.
    pub fn new(config: BillingConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &BillingConfig {
        &self.config
    }

    /// Returns the billing table for a note type.
    pub fn table(&self, note_type: NoteType) -> &[BillingTier] {
        self.config.table(note_type)
    }

    /// Calculates calls for a time range such as `"09:00-09:45"` or
    /// `"9:00 AM to 10:30 AM"`.
    ///
    /// # Errors
    ///
    /// - [`CalculationError::InvalidFormat`] if the input is not two times
    ///   joined by one separator
    /// - [`CalculationError::InvalidTime`] if either time cannot be parsed
    /// - [`CalculationError::StartAfterEnd`] if the end precedes the start
    /// - [`CalculationError::DurationTooShort`] if a consult is under its
    ///   minimum or matches no table row
    /// - [`CalculationError::DurationTooLong`] if the duration is over the
    ///   note type's maximum
    pub fn calculate(
        &self,
        input: &str,
        note_type: NoteType,
    ) -> Result<CalculationResult, CalculationError> {
        let reject = |error: CalculationError| {
            debug!(input, %note_type, code = error.code(), "Rejected time range");
            error
        };

        let (start_text, end_text) =
            split_time_range(input).ok_or_else(|| reject(CalculationError::InvalidFormat))?;

        let (start_time, end_time) = parse_time(start_text)
            .zip(parse_time(end_text))
            .ok_or_else(|| reject(CalculationError::InvalidTime))?;

        let duration = end_time
            .total_minutes()
            .checked_sub(start_time.total_minutes())
            .ok_or_else(|| reject(CalculationError::StartAfterEnd))?;

        let limits = self.config.limits();
        if limits
            .minimum(note_type)
            .is_some_and(|minimum| duration < minimum)
        {
            return Err(reject(CalculationError::DurationTooShort));
        }
        if duration > limits.maximum(note_type) {
            return Err(reject(CalculationError::DurationTooLong));
        }

        let matched = match_tier(duration, note_type, &self.config);
        if note_type == NoteType::Consult && matched.calls == 0 {
            return Err(reject(CalculationError::DurationTooShort));
        }

        let warnings = collect_warnings(
            duration,
            matched.calls,
            start_time,
            note_type,
            &self.config,
        );

        debug!(
            %note_type,
            duration,
            calls = matched.calls,
            warnings = warnings.len(),
            "Calculated billing calls"
        );

        Ok(CalculationResult {
            calls: matched.calls,
            duration,
            start_time,
            end_time,
            matched_tier: matched.tier,
            note_type,
            warnings,
        })
    }
}

/// Calculates calls against the built-in tables.
///
/// Shorthand for [`BillingCalculator::calculate`] on a shared default
/// calculator.
pub fn calculate(input: &str, note_type: NoteType) -> Result<CalculationResult, CalculationError> {
    static DEFAULT_CALCULATOR: OnceLock<BillingCalculator> = OnceLock::new();
    DEFAULT_CALCULATOR
        .get_or_init(BillingCalculator::default)
        .calculate(input, note_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CONSULT_TABLE, DEFAULT_LIMITS, PROGRESS_NOTE_TABLE};
    use crate::models::{Time, Warning};

    fn time(hours: u8, minutes: u8) -> Time {
        Time::new(hours, minutes).unwrap()
    }

    fn calculator() -> BillingCalculator {
        BillingCalculator::default()
    }

    // ==========================================================================
    // Successful calculations
    // ==========================================================================

    #[test]
    fn test_progress_note_45_minutes_near_next_tier() {
        let result = calculator()
            .calculate("09:00-09:45", NoteType::ProgressNote)
            .unwrap();

        assert_eq!(result.duration, 45);
        assert_eq!(result.calls, 4);
        assert_eq!(result.start_time, time(9, 0));
        assert_eq!(result.end_time, time(9, 45));
        assert!(matches!(
            result.matched_tier,
            Some(BillingTier::ProgressNote {
                actual_minutes: 36,
                ..
            })
        ));
        assert_eq!(
            result.warnings,
            vec![Warning::NearNextTier {
                current_calls: 4,
                next_calls: 5,
                minutes_to_next: 3,
                suggested_end_time: time(9, 48),
            }]
        );
    }

    #[test]
    fn test_progress_note_60_minutes_aligned_no_warnings() {
        let result = calculator()
            .calculate("14:30-15:30", NoteType::ProgressNote)
            .unwrap();

        assert_eq!(result.duration, 60);
        assert_eq!(result.calls, 5);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_consult_65_minutes_one_call() {
        let result = calculator()
            .calculate("09:00-10:05", NoteType::Consult)
            .unwrap();

        assert_eq!(result.duration, 65);
        assert_eq!(result.calls, 1);
        assert_eq!(result.matched_tier, Some(CONSULT_TABLE[0]));
        assert_eq!(result.note_type, NoteType::Consult);
    }

    #[test]
    fn test_progress_note_short_encounter_gets_first_tier_and_alignment() {
        let result = calculator()
            .calculate("09:05-09:20", NoteType::ProgressNote)
            .unwrap();

        assert_eq!(result.duration, 15);
        assert_eq!(result.calls, 3);
        assert_eq!(result.matched_tier, Some(PROGRESS_NOTE_TABLE[0]));
        assert!(result.warnings.contains(&Warning::StartTimeNotAligned {
            suggested_start_time: time(9, 0),
        }));
    }

    #[test]
    fn test_twelve_hour_range_with_to_separator() {
        let result = calculator()
            .calculate("9:00 AM to 10:30 AM", NoteType::ProgressNote)
            .unwrap();

        assert_eq!(result.duration, 90);
        assert_eq!(result.calls, 7);
    }

    #[test]
    fn test_zero_length_progress_note_bills_first_tier() {
        let result = calculator()
            .calculate("10:00-10:00", NoteType::ProgressNote)
            .unwrap();

        assert_eq!(result.duration, 0);
        assert_eq!(result.calls, 3);
    }

    #[test]
    fn test_consult_never_gets_alignment_warning() {
        let result = calculator()
            .calculate("09:05-10:10", NoteType::Consult)
            .unwrap();

        assert!(
            result
                .warnings
                .iter()
                .all(|w| !matches!(w, Warning::StartTimeNotAligned { .. }))
        );
    }

    #[test]
    fn test_progress_note_at_maximum() {
        let result = calculator()
            .calculate("09:00-11:45", NoteType::ProgressNote)
            .unwrap();

        assert_eq!(result.duration, 165);
        assert_eq!(result.calls, 12);
        assert!(result.warnings.is_empty());
    }

    // ==========================================================================
    // Rejections
    // ==========================================================================

    #[test]
    fn test_invalid_format() {
        for input in ["invalid", "09:00", "09:00-10:00-11:00", ""] {
            assert_eq!(
                calculator().calculate(input, NoteType::ProgressNote),
                Err(CalculationError::InvalidFormat),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_invalid_time() {
        for input in ["25:00-26:00", "09:00-abc", "-10:00", "13:00 PM-2:00 PM"] {
            assert_eq!(
                calculator().calculate(input, NoteType::ProgressNote),
                Err(CalculationError::InvalidTime),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_start_after_end() {
        assert_eq!(
            calculator().calculate("10:30-10:00", NoteType::ProgressNote),
            Err(CalculationError::StartAfterEnd)
        );
        assert_eq!(
            calculator().calculate("10:30-10:00", NoteType::Consult),
            Err(CalculationError::StartAfterEnd)
        );
    }

    #[test]
    fn test_consult_too_short() {
        assert_eq!(
            calculator().calculate("09:00-10:00", NoteType::Consult),
            Err(CalculationError::DurationTooShort)
        );
    }

    #[test]
    fn test_consult_too_long() {
        assert_eq!(
            calculator().calculate("09:00-12:10", NoteType::Consult),
            Err(CalculationError::DurationTooLong)
        );
    }

    #[test]
    fn test_progress_note_too_long() {
        assert_eq!(
            calculator().calculate("09:00-11:46", NoteType::ProgressNote),
            Err(CalculationError::DurationTooLong)
        );
    }

    #[test]
    fn test_consult_gap_reports_too_short() {
        let config = BillingConfig::new(
            DEFAULT_LIMITS,
            10,
            PROGRESS_NOTE_TABLE.to_vec(),
            vec![CONSULT_TABLE[0], CONSULT_TABLE[2]],
        )
        .unwrap();
        let calculator = BillingCalculator::new(config);

        // 80 minutes sits between 61-71 and 87-101.
        assert_eq!(
            calculator.calculate("09:00-10:20", NoteType::Consult),
            Err(CalculationError::DurationTooShort)
        );
    }

    #[test]
    fn test_free_function_uses_builtin_tables() {
        let result = calculate("09:00-10:05", NoteType::Consult).unwrap();
        assert_eq!(result.calls, 1);
    }
}
