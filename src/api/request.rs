//! Request types for the Billing Calculator API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use serde::{Deserialize, Serialize};

use crate::models::NoteType;

/// Request body for the `/calculate` endpoint.
///
/// # Example
///
/// ```
/// use billing_calculator::api::CalculationRequest;
/// use billing_calculator::models::NoteType;
///
/// let request: CalculationRequest =
///     serde_json::from_str(r#"{"input": "09:00-09:45", "note_type": "progress_note"}"#).unwrap();
/// assert_eq!(request.note_type, NoteType::ProgressNote);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The time range as typed, e.g. `"09:00-09:45"` or `"9 AM to 10:30 AM"`.
    pub input: String,
    /// Which billing table to apply.
    pub note_type: NoteType,
}
