//! Configuration loading for the payroll engine.
//!
//! This module loads the engine metadata, sick-leave settings and wage
//! supplement rules from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded configuration: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, EngineFile, EngineMetadata, SickLeaveSettings, WageSupplementsFile};
