//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{DEFAULT_HOURS_PER_DAY, PercentageAveraging};
use crate::models::SupplementRuleSet;

/// Metadata about the configured rule book.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// Human-readable name of the configuration (e.g., the collective agreement).
    pub name: String,
    /// The version or effective date of the configuration.
    pub version: String,
}

fn default_hours_per_day() -> Decimal {
    DEFAULT_HOURS_PER_DAY
}

/// Sick-leave settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SickLeaveSettings {
    /// Working hours in one sick day, used for pay conversion.
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: Decimal,
    /// How fragment percentages are averaged.
    #[serde(default)]
    pub percentage_averaging: PercentageAveraging,
}

impl Default for SickLeaveSettings {
    fn default() -> Self {
        Self {
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            percentage_averaging: PercentageAveraging::default(),
        }
    }
}

/// Structure of engine.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineFile {
    /// Configuration metadata.
    pub metadata: EngineMetadata,
    /// Sick-leave settings; defaults apply when the section is missing.
    #[serde(default)]
    pub sick_leave: SickLeaveSettings,
}

/// Structure of wage_supplements.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct WageSupplementsFile {
    /// Every configured rule, active or not.
    pub rules: SupplementRuleSet,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    metadata: EngineMetadata,
    rules: SupplementRuleSet,
    sick_leave: SickLeaveSettings,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(
        metadata: EngineMetadata,
        rules: SupplementRuleSet,
        sick_leave: SickLeaveSettings,
    ) -> Self {
        Self {
            metadata,
            rules,
            sick_leave,
        }
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the active supplement rules in priority order.
    pub fn rules(&self) -> &SupplementRuleSet {
        &self.rules
    }

    /// Returns the sick-leave settings.
    pub fn sick_leave(&self) -> &SickLeaveSettings {
        &self.sick_leave
    }
}
