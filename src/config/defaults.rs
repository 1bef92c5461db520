//! Built-in billing tables and limits.

use crate::models::BillingTier;

use super::types::DurationLimits;

/// Progress note table: billable maximum, face-to-face minutes, calls.
pub const PROGRESS_NOTE_TABLE: [BillingTier; 10] = [
    progress(30, 24, 3),
    progress(45, 36, 4),
    progress(60, 48, 5),
    progress(75, 60, 6),
    progress(90, 72, 7),
    progress(105, 84, 8),
    progress(120, 96, 9),
    progress(135, 108, 10),
    progress(150, 120, 11),
    progress(165, 132, 12),
];

/// Consult table: inclusive minute range, calls.
pub const CONSULT_TABLE: [BillingTier; 9] = [
    consult(61, 71, 1),
    consult(72, 86, 2),
    consult(87, 101, 3),
    consult(102, 116, 4),
    consult(117, 131, 5),
    consult(132, 146, 6),
    consult(147, 161, 7),
    consult(162, 176, 8),
    consult(177, 180, 9),
];

/// Minutes short of the next tier that still trigger a near-tier warning.
pub const DEFAULT_WARNING_WINDOW_MINUTES: u32 = 10;

/// Duration bounds applied before tier matching.
pub const DEFAULT_LIMITS: DurationLimits = DurationLimits {
    progress_note_max: 165,
    consult_min: 61,
    consult_max: 180,
};

const fn progress(max_minutes: u32, actual_minutes: u32, calls: u32) -> BillingTier {
    BillingTier::ProgressNote {
        max_minutes,
        actual_minutes,
        calls,
    }
}

const fn consult(min_minutes: u32, max_minutes: u32, calls: u32) -> BillingTier {
    BillingTier::Consult {
        min_minutes,
        max_minutes,
        calls,
    }
}
