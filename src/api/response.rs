//! Response types for the Billing Calculator API.
//!
//! This module defines the success and error response structures and the
//! mapping from domain errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::CalculationError;
use crate::models::{BillingTier, CalculationResult, NoteType, UnknownNoteType};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<CalculationError> for ApiErrorResponse {
    fn from(error: CalculationError) -> Self {
        ApiErrorResponse {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            error: ApiError::new(error.code(), error.to_string()),
        }
    }
}

impl From<UnknownNoteType> for ApiErrorResponse {
    fn from(error: UnknownNoteType) -> Self {
        ApiErrorResponse {
            status: StatusCode::NOT_FOUND,
            error: ApiError::with_details(
                "UNKNOWN_NOTE_TYPE",
                error.to_string(),
                "Supported note types are 'progress_note' and 'consult'",
            ),
        }
    }
}

/// Successful `/calculate` response: the result plus ready-made strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// The calculation result.
    #[serde(flatten)]
    pub result: CalculationResult,
    /// `HH:MM-HH:MM, N calls`.
    pub summary: String,
    /// Advisory text for each warning, in the same order.
    pub warning_messages: Vec<String>,
}

impl From<CalculationResult> for CalculationResponse {
    fn from(result: CalculationResult) -> Self {
        let summary = result.summary();
        let warning_messages = result.warnings.iter().map(|w| w.message()).collect();
        Self {
            result,
            summary,
            warning_messages,
        }
    }
}

/// `/tables/:note_type` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableResponse {
    /// The table's note type.
    pub note_type: NoteType,
    /// Rows in ascending order.
    pub tiers: Vec<BillingTier>,
}

/// `/health` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the service answers.
    pub status: String,
    /// Crate version.
    pub version: String,
}
