//! Note type model.
//!
//! The note type selects which billing table and which validity rules apply
//! to a calculation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The category of medical documentation being billed.
///
/// # Example
///
/// ```
/// use billing_calculator::models::NoteType;
///
/// let note_type: NoteType = "consult".parse().unwrap();
/// assert_eq!(note_type, NoteType::Consult);
/// assert_eq!(NoteType::ProgressNote.to_string(), "Progress Note");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteType {
    /// Progress note, billed by documentation-inclusive time with no minimum.
    #[serde(alias = "progressNote")]
    ProgressNote,
    /// Consult note, billed by inclusive minute ranges from 61 minutes.
    Consult,
}

impl NoteType {
    /// All note types, in display order.
    pub const ALL: [NoteType; 2] = [NoteType::ProgressNote, NoteType::Consult];

    /// Returns the identifier used in URLs and JSON bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteType::ProgressNote => "progress_note",
            NoteType::Consult => "consult",
        }
    }
}

impl fmt::Display for NoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteType::ProgressNote => write!(f, "Progress Note"),
            NoteType::Consult => write!(f, "Consult"),
        }
    }
}

/// Returned when a string names no known note type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown note type: {0}")]
pub struct UnknownNoteType(pub String);

impl FromStr for NoteType {
    type Err = UnknownNoteType;

    /// Parses `progress_note`, `progressNote`, `Progress Note` or `consult`,
    /// ignoring case and word separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "progressnote" => Ok(NoteType::ProgressNote),
            "consult" => Ok(NoteType::Consult),
            _ => Err(UnknownNoteType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_common_spellings() {
        for input in ["progress_note", "progressNote", "Progress Note", "PROGRESS-NOTE"] {
            assert_eq!(input.parse::<NoteType>().unwrap(), NoteType::ProgressNote);
        }
        assert_eq!(" Consult ".parse::<NoteType>().unwrap(), NoteType::Consult);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "discharge".parse::<NoteType>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown note type: discharge");
    }

    #[test]
    fn test_serialization_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&NoteType::ProgressNote).unwrap(),
            "\"progress_note\""
        );
        assert_eq!(serde_json::to_string(&NoteType::Consult).unwrap(), "\"consult\"");
    }

    #[test]
    fn test_deserialization_accepts_camel_case_alias() {
        let note_type: NoteType = serde_json::from_str("\"progressNote\"").unwrap();
        assert_eq!(note_type, NoteType::ProgressNote);
    }

    #[test]
    fn test_as_str_round_trips_through_from_str() {
        for note_type in NoteType::ALL {
            assert_eq!(note_type.as_str().parse::<NoteType>().unwrap(), note_type);
        }
    }
}
