//! Application state for the payroll engine API.
//!
//! The configuration is loaded once at startup and shared read-only by every
//! request.

use std::sync::Arc;

use crate::config::{ConfigLoader, EngineMetadata, SickLeaveSettings};
use crate::models::SupplementRuleSet;

/// Shared application state.
///
/// Cloning is cheap; all clones see the same configuration.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Wraps a loaded configuration for sharing across handlers.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Name and version of the loaded configuration.
    pub fn metadata(&self) -> &EngineMetadata {
        self.config.metadata()
    }

    /// Active supplement rules in priority order.
    pub fn rules(&self) -> &SupplementRuleSet {
        self.config.rules()
    }

    /// Sick-leave pay settings.
    pub fn sick_leave(&self) -> &SickLeaveSettings {
        self.config.sick_leave()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{DEFAULT_HOURS_PER_DAY, PercentageAveraging};
    use crate::models::SupplementType;

    fn default_state() -> AppState {
        AppState::new(ConfigLoader::load("./config/default").expect("Failed to load config"))
    }

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_accessors_expose_loaded_configuration() {
        let state = default_state();

        assert_eq!(state.metadata().name, "Standard turnusavtale");
        assert_eq!(state.rules().len(), 5);
        assert_eq!(state.rules().of_type(SupplementType::Weekend).count(), 2);
        assert_eq!(state.sick_leave().hours_per_day, DEFAULT_HOURS_PER_DAY);
        assert_eq!(
            state.sick_leave().percentage_averaging,
            PercentageAveraging::FragmentMean
        );
    }

    #[test]
    fn test_clones_share_configuration() {
        let state = default_state();
        let clone = state.clone();
        assert!(std::ptr::eq(state.rules(), clone.rules()));
    }
}
