//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::settings::{DriverSettings, TCOOL_THRESHOLD_MAX};
use super::{DriverConfig, SystemConfig};

/// Highest address the MS1/MS2 straps can select.
const MAX_UART_ADDRESS: u8 = 3;

/// Validate a system configuration.
///
/// Checks:
/// - At least one stepper is declared
/// - UART addresses are in 0-3
/// - Sense resistors are positive
/// - Optional tuning values fit their registers
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    if config.steppers.is_empty() {
        return Err(Error::Config(ConfigError::NoSteppers));
    }

    for (_, stepper) in config.steppers.iter() {
        validate_driver(stepper)?;
    }

    Ok(())
}

/// Validate a single driver configuration.
pub fn validate_driver(config: &DriverConfig) -> Result<()> {
    if config.uart_address > MAX_UART_ADDRESS {
        return Err(Error::Config(ConfigError::InvalidUartAddress(config.uart_address)));
    }

    if !config.sense_resistor.is_valid() {
        return Err(Error::Config(ConfigError::InvalidSenseResistor(
            config.sense_resistor.0,
        )));
    }

    if let Some(ref settings) = config.settings {
        validate_settings(settings)?;
    }

    Ok(())
}

/// Validate tuning settings.
pub fn validate_settings(settings: &DriverSettings) -> Result<()> {
    if let Some(threshold) = settings.tcool_threshold {
        if threshold > TCOOL_THRESHOLD_MAX {
            return Err(Error::Config(ConfigError::InvalidTcoolThreshold(threshold)));
        }
    }

    if let Some(current) = settings.current {
        if current.0 == 0 {
            return Err(Error::Config(ConfigError::InvalidCurrent(current.0)));
        }
    }

    Ok(())
}
