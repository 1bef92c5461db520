//! Time-of-day value type.
//!
//! Times are wall-clock minutes within a single day. There is no date and no
//! timezone: a range that crosses midnight is not representable.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day with minute precision.
///
/// Serializes as its canonical zero-padded `HH:MM` form.
///
/// # Example
///
/// ```
/// use billing_calculator::models::Time;
///
/// let time = Time::new(9, 5).unwrap();
/// assert_eq!(time.total_minutes(), 545);
/// assert_eq!(time.to_string(), "09:05");
/// assert!(Time::new(24, 0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Time {
    hours: u8,
    minutes: u8,
}

impl Time {
    /// Creates a time, returning `None` unless `hours` is 0-23 and `minutes` is 0-59.
    pub fn new(hours: u8, minutes: u8) -> Option<Self> {
        (hours < 24 && minutes < 60).then_some(Self { hours, minutes })
    }

    /// Creates a time from minutes since midnight, wrapping past the end of the day.
    pub fn from_total_minutes(total: u32) -> Self {
        let total = total % MINUTES_PER_DAY;
        Self {
            hours: (total / 60) as u8,
            minutes: (total % 60) as u8,
        }
    }

    /// The hour, 0-23.
    pub fn hours(&self) -> u8 {
        self.hours
    }

    /// The minute, 0-59.
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Minutes since midnight.
    pub fn total_minutes(&self) -> u32 {
        u32::from(self.hours) * 60 + u32::from(self.minutes)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Returned when a string is not a canonical `HH:MM` time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid time '{0}', expected HH:MM")]
pub struct InvalidTimeString(pub String);

impl FromStr for Time {
    type Err = InvalidTimeString;

    /// Parses the canonical 24-hour `HH:MM` form only. Free-form clinician
    /// input goes through [`crate::calculation::parse_time`] instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map(Self::from)
            .map_err(|_| InvalidTimeString(s.to_string()))
    }
}

impl TryFrom<String> for Time {
    type Error = InvalidTimeString;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Time> for String {
    fn from(time: Time) -> Self {
        time.to_string()
    }
}

impl From<NaiveTime> for Time {
    /// Truncates seconds and sub-second precision.
    fn from(time: NaiveTime) -> Self {
        Self {
            hours: time.hour() as u8,
            minutes: time.minute() as u8,
        }
    }
}

impl From<Time> for NaiveTime {
    fn from(time: Time) -> Self {
        // Both fields are range-checked at construction.
        NaiveTime::from_hms_opt(u32::from(time.hours), u32::from(time.minutes), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}
