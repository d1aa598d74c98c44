//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::driver::DriverConfig;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Named stepper driver configurations.
    pub steppers: FnvIndexMap<String<32>, DriverConfig, 8>,
}

impl SystemConfig {
    /// Get a stepper configuration by name.
    pub fn stepper(&self, name: &str) -> Option<&DriverConfig> {
        self.steppers
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all stepper names.
    pub fn stepper_names(&self) -> impl Iterator<Item = &str> {
        self.steppers.keys().map(|s| s.as_str())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            steppers: FnvIndexMap::new(),
        }
    }
}
