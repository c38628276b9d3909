//! Polling and household-selection configuration.

use std::time::Duration;

use larder_core::HouseholdId;
use serde::{Deserialize, Serialize};

const fn default_poll_interval_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SyncConfig {
    /// Household whose lists are synchronized. Selected once at setup.
    #[serde(default)]
    pub household_id: Option<HouseholdId>,

    /// Seconds between scheduled refresh cycles.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            household_id: None,
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

impl SyncConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.household_id.is_some()
    }

    /// Polling interval as a [`Duration`].
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = SyncConfig::default();
        assert!(config.household_id.is_none());
        assert!(!config.is_configured());
        assert_eq!(config.poll_interval(), Duration::from_secs(60));
    }
}
