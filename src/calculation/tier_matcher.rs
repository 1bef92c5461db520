//! Billing tier lookup.
//!
//! The two note types match durations differently. Progress notes take the
//! first tier whose billable maximum covers the duration and clamp to the
//! top tier beyond that. Consults need the duration to fall inside a row's
//! inclusive range and report no match otherwise.

use serde::{Deserialize, Serialize};

use crate::config::BillingConfig;
use crate::models::{BillingTier, NoteType};

/// The outcome of looking a duration up in a billing table.
///
/// `calls == 0` with no tier means the duration fell between or outside
/// consult rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierMatch {
    /// Calls awarded, or 0 when nothing matched.
    pub calls: u32,
    /// The matched row.
    pub tier: Option<BillingTier>,
}

/// The next tier above a call count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextTier {
    /// Duration, in minutes, that earns the next tier.
    pub threshold: u32,
    /// Calls the next tier awards.
    pub calls: u32,
}

/// Looks up the tier for a duration.
///
/// # Example
///
/// ```
/// use billing_calculator::calculation::match_tier;
/// use billing_calculator::config::BillingConfig;
/// use billing_calculator::models::NoteType;
///
/// let config = BillingConfig::default();
///
/// assert_eq!(match_tier(45, NoteType::ProgressNote, &config).calls, 4);
/// assert_eq!(match_tier(65, NoteType::Consult, &config).calls, 1);
/// assert_eq!(match_tier(30, NoteType::Consult, &config).calls, 0);
/// ```
pub fn match_tier(duration: u32, note_type: NoteType, config: &BillingConfig) -> TierMatch {
    let table = config.table(note_type);
    let covering = table.iter().find(|tier| covers(tier, duration));

    let tier = match note_type {
        NoteType::ProgressNote => covering.or_else(|| table.last()),
        NoteType::Consult => covering,
    }
    .copied();

    TierMatch {
        calls: tier.map_or(0, |tier| tier.calls()),
        tier,
    }
}

/// Finds the first tier that awards more than `current_calls`.
///
/// Returns `None` when `current_calls` is already at or above the top tier.
pub fn find_next_tier(
    current_calls: u32,
    note_type: NoteType,
    config: &BillingConfig,
) -> Option<NextTier> {
    config
        .table(note_type)
        .iter()
        .find(|tier| tier.calls() > current_calls)
        .map(|tier| NextTier {
            threshold: tier.next_tier_threshold(),
            calls: tier.calls(),
        })
}

fn covers(tier: &BillingTier, duration: u32) -> bool {
    match *tier {
        BillingTier::ProgressNote { max_minutes, .. } => duration <= max_minutes,
        BillingTier::Consult {
            min_minutes,
            max_minutes,
            ..
        } => (min_minutes..=max_minutes).contains(&duration),
    }
}
