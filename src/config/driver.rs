//! Per-stepper driver configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::settings::DriverSettings;
use super::units::Ohms;

/// Complete driver configuration for one stepper.
///
/// Captured once when the device is built and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// UART slave address (0-3, strapped with MS1/MS2).
    pub uart_address: u8,

    /// External current-sense resistor.
    #[serde(rename = "sense_resistor_ohms")]
    pub sense_resistor: Ohms,

    /// Invert shaft rotation at the register level.
    #[serde(default)]
    pub reverse_direction: bool,

    /// Optional tuning applied once at the end of setup.
    #[serde(default)]
    pub settings: Option<DriverSettings>,
}

impl DriverConfig {
    /// Create a configuration with no extra tuning.
    pub fn new(
        name: &str,
        uart_address: u8,
        sense_resistor: Ohms,
        reverse_direction: bool,
    ) -> Self {
        Self {
            name: String::try_from(name).unwrap_or_default(),
            uart_address,
            sense_resistor,
            reverse_direction,
            settings: None,
        }
    }

    /// Attach tuning settings.
    pub fn with_settings(mut self, settings: DriverSettings) -> Self {
        self.settings = Some(settings);
        self
    }
}
