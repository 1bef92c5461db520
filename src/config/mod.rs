//! Configuration loading and management for the Billing Calculator.
//!
//! This module holds the built-in billing tables and provides functionality
//! to load replacement tables and limits from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use billing_calculator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap().into_config();
//! println!("Warning window: {} min", config.warning_window_minutes());
//! ```

mod defaults;
mod loader;
mod types;

pub use defaults::{
    CONSULT_TABLE, DEFAULT_LIMITS, DEFAULT_WARNING_WINDOW_MINUTES, PROGRESS_NOTE_TABLE,
};
pub use loader::ConfigLoader;
pub use types::{
    BillingConfig, CalculatorSettings, ConsultRow, DurationLimits, ProgressNoteRow, TableFile,
};
