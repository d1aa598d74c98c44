//! Error types for tmc2209-stepper.
//!
//! Provides unified error handling across configuration, driver register
//! configuration, and per-cycle pin control.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all tmc2209-stepper operations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Pin or device operation error
    Motor(MotorError),
    /// Register client error
    Driver(DriverError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Invalid microstep value (0 for full step, or a power of 2 up to 256)
    InvalidMicrosteps(u16),
    /// Stepper name not found in configuration
    StepperNotFound(heapless::String<32>),
    /// Configuration declares no steppers
    NoSteppers,
    /// UART address outside the 0-3 range selectable by MS1/MS2
    InvalidUartAddress(u8),
    /// Sense resistor must be finite and > 0
    InvalidSenseResistor(f32),
    /// Run current must be > 0
    InvalidCurrent(u16),
    /// TCOOLTHRS is a 20-bit register
    InvalidTcoolThreshold(u32),
    /// A required builder field was not supplied
    MissingField(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Pin and device operation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// Pin operation failed
    PinError,
}

/// Register client errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// The register client could not be constructed
    ConnectFailed,
    /// A register write was not accepted by the link
    Link {
        /// Register operation that failed
        operation: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
            Error::Driver(e) => write!(f, "Driver error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidMicrosteps(v) => {
                write!(
                    f,
                    "Invalid microsteps: {}. Use 0 (full step) or a power of 2 up to 256",
                    v
                )
            }
            ConfigError::StepperNotFound(name) => write!(f, "Stepper '{}' not found", name),
            ConfigError::NoSteppers => write!(f, "At least one stepper must be configured"),
            ConfigError::InvalidUartAddress(v) => {
                write!(f, "Invalid UART address: 0x{:02X}. Must be 0x00-0x03", v)
            }
            ConfigError::InvalidSenseResistor(v) => {
                write!(f, "Invalid sense resistor: {} ohm. Must be > 0", v)
            }
            ConfigError::InvalidCurrent(v) => write!(f, "Invalid current: {} mA. Must be > 0", v),
            ConfigError::InvalidTcoolThreshold(v) => {
                write!(f, "Invalid tcool threshold: {}. Must fit in 20 bits", v)
            }
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
        }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::ConnectFailed => write!(f, "Failed to create register client"),
            DriverError::Link { operation } => write!(f, "Register write '{}' failed", operation),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl From<DriverError> for Error {
    fn from(e: DriverError) -> Self {
        Error::Driver(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for DriverError {}
