//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::SupplementRuleSet;

use super::types::{
    EngineConfig, EngineFile, EngineMetadata, SickLeaveSettings, WageSupplementsFile,
};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml            # Metadata and sick-leave settings
/// └── wage_supplements.yaml  # Wage supplement rules
/// ```
///
/// Monetary amounts and percentages are written as quoted strings so they
/// are read as exact decimals.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("{} rules loaded", loader.rules().len());
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` when a file is missing and
    /// `ConfigParseError` when a file is not valid for its structure.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine = Self::load_yaml::<EngineFile>(&path.join("engine.yaml"))?;
        let supplements =
            Self::load_yaml::<WageSupplementsFile>(&path.join("wage_supplements.yaml"))?;

        info!(
            config = %engine.metadata.name,
            version = %engine.metadata.version,
            rules = supplements.rules.len(),
            "Configuration loaded"
        );

        Ok(Self {
            config: EngineConfig::new(engine.metadata, supplements.rules, engine.sick_leave),
        })
    }

    /// Wraps an already built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
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

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        self.config.metadata()
    }

    /// Returns the active supplement rules in priority order.
    pub fn rules(&self) -> &SupplementRuleSet {
        self.config.rules()
    }

    /// Returns the sick-leave settings.
    pub fn sick_leave(&self) -> &SickLeaveSettings {
        self.config.sick_leave()
    }
}
