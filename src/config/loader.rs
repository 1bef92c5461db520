//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading billing
//! tables and limits from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{BillingTier, NoteType};

use super::types::{BillingConfig, CalculatorSettings, ConsultRow, ProgressNoteRow, TableFile};

/// Loads and provides access to calculator configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── calculator.yaml     # Duration limits and warning window
/// ├── progress_note.yaml  # Progress note tiers
/// └── consult.yaml        # Consult tiers
/// ```
///
/// # Example
///
/// ```no_run
/// use billing_calculator::config::ConfigLoader;
/// use billing_calculator::models::NoteType;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Consult tiers: {}", loader.table(NoteType::Consult).len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: BillingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Either table fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<CalculatorSettings>(&path.join("calculator.yaml"))?;
        let progress_note =
            Self::load_yaml::<TableFile<ProgressNoteRow>>(&path.join("progress_note.yaml"))?;
        let consult = Self::load_yaml::<TableFile<ConsultRow>>(&path.join("consult.yaml"))?;

        let config = BillingConfig::new(
            settings.limits,
            settings.warning_window_minutes,
            progress_note.tiers.into_iter().map(BillingTier::from).collect(),
            consult.tiers.into_iter().map(BillingTier::from).collect(),
        )?;

        info!(
            path = %path.display(),
            progress_note_tiers = config.table(NoteType::ProgressNote).len(),
            consult_tiers = config.table(NoteType::Consult).len(),
            "Loaded billing configuration"
        );

        Ok(Self { config })
    }

    /// Returns a loader holding the built-in tables.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &BillingConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> BillingConfig {
        self.config
    }

    /// Returns the table for a note type.
    pub fn table(&self, note_type: NoteType) -> &[BillingTier] {
        self.config.table(note_type)
    }
}
