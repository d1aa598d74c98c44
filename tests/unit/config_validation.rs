//! Unit tests for configuration validation.

use tmc2209_stepper::config::{validate_config, SystemConfig};
use tmc2209_stepper::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[steppers.stepper1]
name = "main_axis"
uart_address = 0
sense_resistor_ohms = 0.11

[steppers.stepper1.settings]
tcool_threshold = 1048575
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for an address the straps cannot select.
#[test]
fn test_uart_address_out_of_range() {
    let toml_str = r#"
[steppers.stepper1]
name = "main_axis"
uart_address = 4
sense_resistor_ohms = 0.11
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidUartAddress(4)))
    ));
}

/// Test validation fails for a negative sense resistor.
#[test]
fn test_negative_sense_resistor() {
    let toml_str = r#"
[steppers.stepper1]
name = "main_axis"
uart_address = 0
sense_resistor_ohms = -0.11
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_err());
}

/// Test validation fails for a TCOOLTHRS value wider than 20 bits.
#[test]
fn test_tcool_threshold_too_wide() {
    let toml_str = r#"
[steppers.stepper1]
name = "main_axis"
uart_address = 0
sense_resistor_ohms = 0.11

[steppers.stepper1.settings]
tcool_threshold = 1048576
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidTcoolThreshold(1_048_576)))
    ));
}

/// Test that a configuration without steppers is rejected.
#[test]
fn test_empty_config_is_invalid() {
    let config = SystemConfig::default();
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::NoSteppers))
    ));
}
