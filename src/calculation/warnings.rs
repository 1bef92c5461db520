//! Advisory warnings for a matched calculation.
//!
//! Two checks run after a tier is matched: whether a few more minutes would
//! reach the next tier, and (progress notes only) whether the start time sits
//! on an hour or half-hour boundary.

use crate::config::BillingConfig;
use crate::models::{NoteType, Time, Warning};

use super::tier_matcher::find_next_tier;

/// Warns when the next tier is within the configured window.
///
/// The window excludes zero: a duration that already equals the threshold
/// is not "near" it.
///
/// # Example
///
/// ```
/// use billing_calculator::calculation::check_near_next_tier;
/// use billing_calculator::config::BillingConfig;
/// use billing_calculator::models::{NoteType, Time, Warning};
///
/// let start = Time::new(9, 0).unwrap();
/// let warning = check_near_next_tier(45, 4, start, NoteType::ProgressNote, &BillingConfig::default());
///
/// assert_eq!(
///     warning,
///     Some(Warning::NearNextTier {
///         current_calls: 4,
///         next_calls: 5,
///         minutes_to_next: 3,
///         suggested_end_time: Time::new(9, 48).unwrap(),
///     })
/// );
/// ```
pub fn check_near_next_tier(
    duration: u32,
    current_calls: u32,
    start_time: Time,
    note_type: NoteType,
    config: &BillingConfig,
) -> Option<Warning> {
    let next = find_next_tier(current_calls, note_type, config)?;

    let minutes_to_next = next
        .threshold
        .checked_sub(duration)
        .filter(|minutes| (1..=config.warning_window_minutes()).contains(minutes))?;

    Some(Warning::NearNextTier {
        current_calls,
        next_calls: next.calls,
        minutes_to_next,
        suggested_end_time: Time::from_total_minutes(start_time.total_minutes() + next.threshold),
    })
}

/// Warns when a start time is not on `:00` or `:30`.
///
/// The suggestion rounds to the nearest boundary: before `:15` goes back to
/// the hour, `:15` through `:44` goes to the half-hour, and `:45` onward goes
/// forward to the next hour (wrapping at midnight).
pub fn check_start_time_alignment(start_time: Time) -> Option<Warning> {
    let minutes = start_time.minutes();
    if minutes == 0 || minutes == 30 {
        return None;
    }

    let hour_start = u32::from(start_time.hours()) * 60;
    let suggested = match minutes {
        0..15 => hour_start,
        15..45 => hour_start + 30,
        _ => hour_start + 60,
    };

    Some(Warning::StartTimeNotAligned {
        suggested_start_time: Time::from_total_minutes(suggested),
    })
}

/// Runs every check that applies to a note type, near-tier first.
pub fn collect_warnings(
    duration: u32,
    calls: u32,
    start_time: Time,
    note_type: NoteType,
    config: &BillingConfig,
) -> Vec<Warning> {
    let near_tier = check_near_next_tier(duration, calls, start_time, note_type, config);
    let alignment = match note_type {
        NoteType::ProgressNote => check_start_time_alignment(start_time),
        NoteType::Consult => None,
    };

    near_tier.into_iter().chain(alignment).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(hours: u8, minutes: u8) -> Time {
        Time::new(hours, minutes).unwrap()
    }

    fn config() -> BillingConfig {
        BillingConfig::default()
    }

    fn suggested_start(start: Time) -> Option<Time> {
        match check_start_time_alignment(start)? {
            Warning::StartTimeNotAligned {
                suggested_start_time,
            } => Some(suggested_start_time),
            other => panic!("Unexpected warning {:?}", other),
        }
    }

    // ==========================================================================
    // Near next tier
    // ==========================================================================

    #[test]
    fn test_near_tier_exactly_at_threshold_is_not_near() {
        // 60 minutes bills 5 calls; the next tier's threshold is 60.
        let warning = check_near_next_tier(60, 5, time(14, 30), NoteType::ProgressNote, &config());
        assert_eq!(warning, None);
    }

    #[test]
    fn test_near_tier_window_edges() {
        // 6 calls -> next threshold 72 (7 calls).
        let at_ten = check_near_next_tier(62, 6, time(9, 0), NoteType::ProgressNote, &config());
        assert!(matches!(
            at_ten,
            Some(Warning::NearNextTier {
                minutes_to_next: 10,
                ..
            })
        ));

        let at_eleven = check_near_next_tier(61, 6, time(9, 0), NoteType::ProgressNote, &config());
        assert_eq!(at_eleven, None);

        let at_one = check_near_next_tier(71, 6, time(9, 0), NoteType::ProgressNote, &config());
        assert!(matches!(
            at_one,
            Some(Warning::NearNextTier {
                minutes_to_next: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_near_tier_past_threshold_is_not_near() {
        // 45 minutes bills 4; a 3-call lookup would see threshold 36 behind it.
        let warning = check_near_next_tier(45, 3, time(9, 0), NoteType::ProgressNote, &config());
        assert_eq!(warning, None);
    }

    #[test]
    fn test_near_tier_consult_uses_range_floor() {
        // 65 minutes bills 1; next tier starts at 72.
        let warning = check_near_next_tier(65, 1, time(9, 0), NoteType::Consult, &config());
        assert_eq!(
            warning,
            Some(Warning::NearNextTier {
                current_calls: 1,
                next_calls: 2,
                minutes_to_next: 7,
                suggested_end_time: time(10, 12),
            })
        );
    }

    #[test]
    fn test_near_tier_none_at_top_tier() {
        let warning = check_near_next_tier(178, 9, time(9, 0), NoteType::Consult, &config());
        assert_eq!(warning, None);
    }

    #[test]
    fn test_near_tier_suggested_end_wraps_past_midnight() {
        // 23:30 start, 29 minutes -> 3 calls, next threshold 36 -> 00:06.
        let warning = check_near_next_tier(29, 3, time(23, 30), NoteType::ProgressNote, &config());
        assert!(matches!(
            warning,
            Some(Warning::NearNextTier {
                suggested_end_time,
                ..
            }) if suggested_end_time == time(0, 6)
        ));
    }

    // ==========================================================================
    // Start time alignment
    // ==========================================================================

    #[test]
    fn test_aligned_start_times_have_no_warning() {
        assert_eq!(check_start_time_alignment(time(9, 0)), None);
        assert_eq!(check_start_time_alignment(time(9, 30)), None);
    }

    #[test]
    fn test_alignment_rounding_boundaries() {
        assert_eq!(suggested_start(time(9, 5)), Some(time(9, 0)));
        assert_eq!(suggested_start(time(9, 14)), Some(time(9, 0)));
        assert_eq!(suggested_start(time(9, 15)), Some(time(9, 30)));
        assert_eq!(suggested_start(time(9, 44)), Some(time(9, 30)));
        assert_eq!(suggested_start(time(9, 45)), Some(time(10, 0)));
    }

    #[test]
    fn test_alignment_wraps_at_midnight() {
        assert_eq!(suggested_start(time(23, 50)), Some(time(0, 0)));
    }

    // ==========================================================================
    // Collection
    // ==========================================================================

    #[test]
    fn test_collect_orders_near_tier_before_alignment() {
        // 09:05 start, 40 minutes -> 4 calls, next threshold 48 is 8 away.
        let warnings = collect_warnings(40, 4, time(9, 5), NoteType::ProgressNote, &config());
        assert_eq!(warnings.len(), 2);
        assert!(matches!(warnings[0], Warning::NearNextTier { .. }));
        assert!(matches!(warnings[1], Warning::StartTimeNotAligned { .. }));
    }

    #[test]
    fn test_collect_skips_alignment_for_consults() {
        let warnings = collect_warnings(100, 3, time(9, 5), NoteType::Consult, &config());
        assert!(
            warnings
                .iter()
                .all(|w| !matches!(w, Warning::StartTimeNotAligned { .. }))
        );
    }
}
