//! Application state for the Billing Calculator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::BillingCalculator;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the calculator built from the loaded configuration. The calculator
/// is immutable, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    calculator: Arc<BillingCalculator>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            calculator: Arc::new(BillingCalculator::new(config.into_config())),
        }
    }

    /// Returns the shared calculator.
    pub fn calculator(&self) -> &BillingCalculator {
        &self.calculator
    }
}
