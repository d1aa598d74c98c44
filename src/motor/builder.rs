//! Builder pattern for Tmc2209.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::units::Ohms;
use crate::config::{validate_driver, DriverConfig, DriverSettings, SystemConfig};
use crate::driver::RegisterClient;
use crate::error::{ConfigError, Error, Result};

use super::driver::Tmc2209;
use super::power::NoPin;

/// Builder for creating Tmc2209 instances.
pub struct Tmc2209Builder<STEP, DIR, DELAY, SLEEP = NoPin>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    SLEEP: OutputPin,
{
    step_pin: Option<STEP>,
    dir_pin: Option<DIR>,
    sleep_pin: Option<SLEEP>,
    delay: Option<DELAY>,
    name: Option<heapless::String<32>>,
    uart_address: Option<u8>,
    sense_resistor: Option<Ohms>,
    reverse_direction: bool,
    settings: Option<DriverSettings>,
}

impl<STEP, DIR, DELAY> Default for Tmc2209Builder<STEP, DIR, DELAY, NoPin>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<STEP, DIR, DELAY> Tmc2209Builder<STEP, DIR, DELAY, NoPin>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new builder with no sleep pin.
    pub fn new() -> Self {
        Self {
            step_pin: None,
            dir_pin: None,
            sleep_pin: None,
            delay: None,
            name: None,
            uart_address: None,
            sense_resistor: None,
            reverse_direction: false,
            settings: None,
        }
    }
}

impl<STEP, DIR, DELAY, SLEEP> Tmc2209Builder<STEP, DIR, DELAY, SLEEP>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    SLEEP: OutputPin,
{
    /// Set the STEP pin.
    pub fn step_pin(mut self, pin: STEP) -> Self {
        self.step_pin = Some(pin);
        self
    }

    /// Set the DIR pin.
    pub fn dir_pin(mut self, pin: DIR) -> Self {
        self.dir_pin = Some(pin);
        self
    }

    /// Wire a SLEEP pin. Without one the driver is assumed always awake.
    pub fn sleep_pin<S: OutputPin>(self, pin: S) -> Tmc2209Builder<STEP, DIR, DELAY, S> {
        Tmc2209Builder {
            step_pin: self.step_pin,
            dir_pin: self.dir_pin,
            sleep_pin: Some(pin),
            delay: self.delay,
            name: self.name,
            uart_address: self.uart_address,
            sense_resistor: self.sense_resistor,
            reverse_direction: self.reverse_direction,
            settings: self.settings,
        }
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the driver name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set the UART slave address (0-3).
    pub fn uart_address(mut self, address: u8) -> Self {
        self.uart_address = Some(address);
        self
    }

    /// Set the current-sense resistor.
    pub fn sense_resistor(mut self, ohms: Ohms) -> Self {
        self.sense_resistor = Some(ohms);
        self
    }

    /// Invert shaft rotation in GCONF.
    pub fn reverse_direction(mut self, reverse: bool) -> Self {
        self.reverse_direction = reverse;
        self
    }

    /// Tuning written at the end of setup.
    pub fn settings(mut self, settings: DriverSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Configure from a DriverConfig.
    pub fn from_driver_config(mut self, config: &DriverConfig) -> Self {
        self.name = Some(config.name.clone());
        self.uart_address = Some(config.uart_address);
        self.sense_resistor = Some(config.sense_resistor);
        self.reverse_direction = config.reverse_direction;
        self.settings = config.settings;
        self
    }

    /// Configure from SystemConfig by stepper name.
    pub fn from_config(self, config: &SystemConfig, stepper_name: &str) -> Result<Self> {
        let driver_config = config.stepper(stepper_name).ok_or_else(|| {
            Error::Config(ConfigError::StepperNotFound(
                heapless::String::try_from(stepper_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_driver_config(driver_config))
    }

    /// Build the Tmc2209.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or the resulting
    /// configuration is invalid.
    pub fn build<C: RegisterClient>(self) -> Result<Tmc2209<C, STEP, DIR, DELAY, SLEEP>> {
        let step_pin = self
            .step_pin
            .ok_or(Error::Config(ConfigError::MissingField("step_pin")))?;

        let dir_pin = self
            .dir_pin
            .ok_or(Error::Config(ConfigError::MissingField("dir_pin")))?;

        let delay = self
            .delay
            .ok_or(Error::Config(ConfigError::MissingField("delay")))?;

        let uart_address = self
            .uart_address
            .ok_or(Error::Config(ConfigError::MissingField("uart_address")))?;

        let sense_resistor = self
            .sense_resistor
            .ok_or(Error::Config(ConfigError::MissingField("sense_resistor")))?;

        let config = DriverConfig {
            name: self.name.unwrap_or_else(|| {
                heapless::String::try_from("stepper").unwrap_or_default()
            }),
            uart_address,
            sense_resistor,
            reverse_direction: self.reverse_direction,
            settings: self.settings,
        };

        validate_driver(&config)?;

        Ok(Tmc2209::new(config, step_pin, dir_pin, self.sleep_pin, delay))
    }
}
