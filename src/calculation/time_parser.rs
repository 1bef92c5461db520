//! Time and time-range parsing.
//!
//! Clinicians type ranges by hand, so the parser accepts 24-hour and 12-hour
//! clock times, with or without a colon, and either `-` or `to` between the
//! two ends. Anything it cannot read unambiguously is rejected rather than
//! guessed.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::Time;

/// Period markers that flag a 12-hour time. Dotted forms come first so they
/// are preferred when stripping.
const PERIOD_MARKERS: [&str; 4] = ["A.M.", "P.M.", "AM", "PM"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Period {
    Am,
    Pm,
}

/// Separator between the two ends of a range: a hyphen, or `to` between spaces.
fn separator_regex() -> &'static Regex {
    static SEPARATOR_RE: OnceLock<Regex> = OnceLock::new();
    SEPARATOR_RE.get_or_init(|| Regex::new(r"(?i)\s+to\s+|-").unwrap())
}

/// A period marker standing on its own, e.g. the `PM` in `9:30 PM` or `930PM`.
fn period_regex() -> &'static Regex {
    static PERIOD_RE: OnceLock<Regex> = OnceLock::new();
    PERIOD_RE.get_or_init(|| {
        Regex::new(r"(?:^|[^A-Z])(A\.M\.|P\.M\.|AM|PM)(?:[^A-Z]|$)").unwrap()
    })
}

/// Splits a range into its start and end text.
///
/// Returns `None` unless the input holds exactly one separator.
///
/// # Example
///
/// ```
/// use billing_calculator::calculation::split_time_range;
///
/// assert_eq!(split_time_range(" 09:00-10:30 "), Some(("09:00", "10:30")));
/// assert_eq!(split_time_range("9:00 AM to 10:30 AM"), Some(("9:00 AM", "10:30 AM")));
/// assert_eq!(split_time_range("09:00"), None);
/// assert_eq!(split_time_range("09:00-10:00-11:00"), None);
/// ```
pub fn split_time_range(input: &str) -> Option<(&str, &str)> {
    let mut parts = separator_regex().split(input.trim());
    let start = parts.next()?;
    let end = parts.next()?;

    if parts.next().is_some() {
        return None;
    }

    Some((start.trim(), end.trim()))
}

/// Parses a free-form time of day.
///
/// Accepts `HH:MM`, `H:MM`, `HMM` and `HHMM` in 24-hour form, and the same
/// shapes followed by `AM`, `PM`, `A.M.` or `P.M.` in 12-hour form. Case and
/// surrounding whitespace are ignored. Returns `None` for anything malformed
/// or out of range.
///
/// # Example
///
/// ```
/// use billing_calculator::calculation::parse_time;
/// use billing_calculator::models::Time;
///
/// assert_eq!(parse_time("0930"), Time::new(9, 30));
/// assert_eq!(parse_time("12:15 am"), Time::new(0, 15));
/// assert_eq!(parse_time("1:05 P.M."), Time::new(13, 5));
/// assert_eq!(parse_time("24:00"), None);
/// ```
pub fn parse_time(text: &str) -> Option<Time> {
    let normalized = text.trim().to_uppercase();

    let is_12_hour = PERIOD_MARKERS
        .iter()
        .any(|marker| normalized.contains(marker));

    if is_12_hour {
        let (time_part, period) = split_period(&normalized)?;
        parse_12_hour(time_part, period)
    } else {
        parse_24_hour(&normalized)
    }
}

/// Separates the clock digits from the period marker.
fn split_period(text: &str) -> Option<(&str, Period)> {
    let marker = period_regex().captures(text)?.get(1)?;

    let period = if marker.as_str().starts_with('A') {
        Period::Am
    } else {
        Period::Pm
    };

    Some((text[..marker.start()].trim(), period))
}

fn parse_12_hour(time_part: &str, period: Period) -> Option<Time> {
    let (hours, minutes) = split_clock(time_part)?;

    if !(1..=12).contains(&hours) || minutes > 59 {
        return None;
    }

    let hours = match (period, hours) {
        (Period::Am, 12) => 0,
        (Period::Pm, 12) => 12,
        (Period::Pm, h) => h + 12,
        (Period::Am, h) => h,
    };

    Time::new(hours, minutes)
}

fn parse_24_hour(text: &str) -> Option<Time> {
    let (hours, minutes) = split_clock(text)?;
    Time::new(hours, minutes)
}

/// Splits `H:MM`, `HMM` or `HHMM` into numeric hour and minute.
fn split_clock(text: &str) -> Option<(u8, u8)> {
    let (hours, minutes) = if text.contains(':') {
        let mut pieces = text.split(':');
        let pair = (pieces.next()?, pieces.next()?);
        if pieces.next().is_some() {
            return None;
        }
        pair
    } else {
        match text.chars().count() {
            3 => (text.get(..1)?, text.get(1..)?),
            4 => (text.get(..2)?, text.get(2..)?),
            _ => return None,
        }
    };

    Some((parse_component(hours)?, parse_component(minutes)?))
}

fn parse_component(text: &str) -> Option<u8> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
