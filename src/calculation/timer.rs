//! Encounter stopwatch.
//!
//! Instead of typing a range, a clinician can start a timer when the
//! encounter begins and stop it at the end. Stopping yields an input string
//! for [`crate::calculation::BillingCalculator::calculate`].

use chrono::{Duration, Local, NaiveTime};

use crate::models::Time;

/// A running encounter timer.
///
/// Times are wall-clock times of day. An encounter that runs past midnight
/// produces a range whose end precedes its start, which the calculator
/// rejects.
///
/// # Example
///
/// ```
/// use billing_calculator::calculation::EncounterTimer;
/// use chrono::NaiveTime;
///
/// let timer = EncounterTimer::start_at(NaiveTime::from_hms_opt(9, 0, 12).unwrap());
/// let range = timer.stop_at(NaiveTime::from_hms_opt(9, 46, 3).unwrap());
/// assert_eq!(range, "09:00-09:46");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncounterTimer {
    started_at: NaiveTime,
}

impl EncounterTimer {
    /// Starts a timer at the given time of day.
    pub fn start_at(started_at: NaiveTime) -> Self {
        Self { started_at }
    }

    /// Starts a timer at the current local time.
    pub fn start_now() -> Self {
        Self::start_at(Local::now().time())
    }

    /// When the timer was started.
    pub fn started_at(&self) -> NaiveTime {
        self.started_at
    }

    /// Time elapsed at `now`, floored at zero.
    pub fn elapsed_at(&self, now: NaiveTime) -> Duration {
        now.signed_duration_since(self.started_at)
            .max(Duration::zero())
    }

    /// Time elapsed so far.
    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Local::now().time())
    }

    /// Stops the timer at `now`, returning the range as `HH:MM-HH:MM`.
    pub fn stop_at(self, now: NaiveTime) -> String {
        format!("{}-{}", Time::from(self.started_at), Time::from(now))
    }

    /// Stops the timer at the current local time.
    pub fn stop_now(self) -> String {
        self.stop_at(Local::now().time())
    }
}

/// Formats an elapsed duration as `HH:MM:SS`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::BillingCalculator;
    use crate::error::CalculationError;
    use crate::models::NoteType;

    fn at(hours: u32, minutes: u32, seconds: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hours, minutes, seconds).unwrap()
    }

    #[test]
    fn test_elapsed_at() {
        let timer = EncounterTimer::start_at(at(9, 0, 0));
        assert_eq!(timer.elapsed_at(at(9, 45, 30)), Duration::seconds(45 * 60 + 30));
    }

    #[test]
    fn test_elapsed_never_negative() {
        let timer = EncounterTimer::start_at(at(9, 0, 0));
        assert_eq!(timer.elapsed_at(at(8, 0, 0)), Duration::zero());
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::seconds(0)), "00:00:00");
        assert_eq!(format_elapsed(Duration::seconds(3 * 3600 + 7 * 60 + 9)), "03:07:09");
        assert_eq!(format_elapsed(Duration::seconds(-5)), "00:00:00");
    }

    #[test]
    fn test_stop_truncates_seconds() {
        let timer = EncounterTimer::start_at(at(14, 30, 59));
        assert_eq!(timer.stop_at(at(15, 30, 1)), "14:30-15:30");
        assert_eq!(timer.started_at(), at(14, 30, 59));
    }

    #[test]
    fn test_stopped_range_feeds_the_calculator() {
        let range = EncounterTimer::start_at(at(9, 0, 0)).stop_at(at(10, 5, 0));
        let result = BillingCalculator::default()
            .calculate(&range, NoteType::Consult)
            .unwrap();
        assert_eq!(result.calls, 1);
    }

    #[test]
    fn test_range_across_midnight_is_rejected() {
        let range = EncounterTimer::start_at(at(23, 30, 0)).stop_at(at(0, 15, 0));
        assert_eq!(range, "23:30-00:15");
        assert_eq!(
            BillingCalculator::default().calculate(&range, NoteType::ProgressNote),
            Err(CalculationError::StartAfterEnd)
        );
    }
}
