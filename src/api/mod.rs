//! HTTP API module for the Billing Calculator.
//!
//! This module exposes the calculator and its billing tables as JSON
//! endpoints for presentation clients.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, CalculationResponse, HealthResponse, TableResponse};
pub use state::AppState;
