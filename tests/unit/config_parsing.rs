//! Unit tests for TOML configuration parsing.

use tmc2209_stepper::config::{Microsteps, SystemConfig};

/// Test parsing a valid stepper configuration from TOML.
#[test]
fn test_parse_stepper_config() {
    let toml_str = r#"
[steppers.stepper1]
name = "main_axis"
uart_address = 0x03
sense_resistor_ohms = 0.15
reverse_direction = false
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let stepper = config.stepper("stepper1").expect("Stepper not found");

    assert_eq!(stepper.name.as_str(), "main_axis");
    assert_eq!(stepper.uart_address, 3);
    assert_eq!(stepper.sense_resistor.0, 0.15);
    assert!(!stepper.reverse_direction);
    assert!(stepper.settings.is_none());
}

/// Test parsing optional tuning settings.
#[test]
fn test_parse_settings() {
    let toml_str = r#"
[steppers.stepper1]
name = "main_axis"
uart_address = 0
sense_resistor_ohms = 0.11

[steppers.stepper1.settings]
microsteps = 256
tcool_threshold = 400
stall_threshold = 10
current_ma = 1200
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let settings = config
        .stepper("stepper1")
        .and_then(|s| s.settings)
        .expect("Settings not found");

    assert_eq!(settings.microsteps, Some(Microsteps::TWO_FIFTY_SIXTH));
    assert_eq!(settings.tcool_threshold, Some(400));
    assert_eq!(settings.stall_threshold, Some(10));
    assert_eq!(settings.current.map(|c| c.value()), Some(1200));
}

/// Test several steppers on one bus.
#[test]
fn test_parse_multiple_steppers() {
    let toml_str = r#"
[steppers.x]
name = "x"
uart_address = 0
sense_resistor_ohms = 0.11

[steppers.y]
name = "y"
uart_address = 1
sense_resistor_ohms = 0.11
reverse_direction = true
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let names: Vec<_> = config.stepper_names().collect();

    assert_eq!(names, ["x", "y"]);
    assert!(config.stepper("y").unwrap().reverse_direction);
    assert!(config.stepper("z").is_none());
}

/// Test that invalid microstep values are rejected during parsing.
#[test]
fn test_invalid_microsteps_rejected() {
    let toml_str = r#"
[steppers.stepper1]
name = "bad_config"
uart_address = 0
sense_resistor_ohms = 0.11

[steppers.stepper1.settings]
microsteps = 12
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject non-power-of-2 microsteps");
}

/// Test that `microsteps = 0` selects full step.
#[test]
fn test_zero_microsteps_is_full_step() {
    let toml_str = r#"
[steppers.stepper1]
name = "full_step"
uart_address = 0
sense_resistor_ohms = 0.11

[steppers.stepper1.settings]
microsteps = 0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let settings = config.stepper("stepper1").and_then(|s| s.settings).unwrap();

    assert_eq!(settings.microsteps, Some(Microsteps::FULL));
}

/// Test that a missing sense resistor is a parse error.
#[test]
fn test_missing_sense_resistor_rejected() {
    let toml_str = r#"
[steppers.stepper1]
name = "incomplete"
uart_address = 0
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err());
}
