//! Configuration module for tmc2209-stepper.
//!
//! Provides types for loading and validating driver configurations from TOML
//! files (with `std` feature) or pre-built values.

mod driver;
#[cfg(feature = "std")]
mod loader;
mod settings;
mod system;
pub mod units;
mod validation;

pub use driver::DriverConfig;
pub use settings::{DriverSettings, TCOOL_THRESHOLD_MAX};
pub use system::SystemConfig;
pub use validation::{validate_config, validate_driver, validate_settings};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Microsteps, Milliamps, Ohms};
