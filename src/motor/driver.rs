//! TMC2209 device instance.
//!
//! Generic over embedded-hal 1.0 pin types and the register client.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::{validate_settings, DriverConfig, DriverSettings};
use crate::driver::{Connect, DriverConfigurator, RegisterClient};
use crate::error::{DriverError, Result};
use crate::motion::{CycleReport, MotionCycle, MotionSource};

use super::power::{NoPin, PowerState, PowerStateController};
use super::pulse::PulseEmitter;

/// One TMC2209 with its STEP/DIR (and optional SLEEP) pins.
///
/// Generic over:
/// - `C`: register client, created in [`setup`](Self::setup)
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider (must implement `DelayNs`)
/// - `SLEEP`: SLEEP pin type, [`NoPin`] when not wired
///
/// Until `setup` succeeds the device holds no register client and every
/// cycle is a no-op.
pub struct Tmc2209<C, STEP, DIR, DELAY, SLEEP = NoPin>
where
    C: RegisterClient,
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    SLEEP: OutputPin,
{
    /// Immutable driver configuration.
    config: DriverConfig,

    /// Register client; `None` until setup succeeds.
    client: Option<C>,

    /// Power and pulse stages.
    cycle: MotionCycle<STEP, DIR, SLEEP>,

    /// Delay provider for settle and pulse timing.
    delay: DELAY,
}

impl<C, STEP, DIR, DELAY, SLEEP> Tmc2209<C, STEP, DIR, DELAY, SLEEP>
where
    C: RegisterClient,
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    SLEEP: OutputPin,
{
    /// Create an unconfigured device.
    pub fn new(
        config: DriverConfig,
        step_pin: STEP,
        dir_pin: DIR,
        sleep_pin: Option<SLEEP>,
        delay: DELAY,
    ) -> Self {
        Self {
            config,
            client: None,
            cycle: MotionCycle::new(
                PowerStateController::new(sleep_pin),
                PulseEmitter::new(step_pin, dir_pin),
            ),
            delay,
        }
    }

    /// Get the driver name.
    #[inline]
    pub fn name(&self) -> &str {
        self.config.name.as_str()
    }

    /// Get the driver configuration.
    #[inline]
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// True once setup has produced a configured register client.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.client.is_some()
    }

    /// Borrow the register client, if setup succeeded.
    #[inline]
    pub fn client(&self) -> Option<&C> {
        self.client.as_ref()
    }

    /// Power state driven in the last cycle.
    #[inline]
    pub fn power_state(&self) -> PowerState {
        self.cycle.power_state()
    }

    /// Connect, configure the chip and initialise the pins.
    ///
    /// On any failure the client is dropped and the device stays inert:
    /// later cycles write nothing. Nothing is retried.
    pub fn setup<K>(&mut self, connect: K) -> Result<()>
    where
        K: Connect<Client = C>,
    {
        info!("Setting up TMC2209 '{}'", self.config.name.as_str());
        debug!("UART address: {:#x}", self.config.uart_address);

        self.client = None;

        let Some(mut client) =
            connect.connect(self.config.sense_resistor, self.config.uart_address)
        else {
            error!(
                "Failed to create register client for '{}'",
                self.config.name.as_str()
            );
            return Err(DriverError::ConnectFailed.into());
        };
        debug!("register client created");

        let mut configurator = DriverConfigurator::new(&mut client);
        configurator.configure(&self.config)?;
        if let Some(settings) = self.config.settings {
            configurator.apply_settings(&settings)?;
        }

        self.cycle.init()?;
        self.client = Some(client);

        info!("TMC2209 setup complete for '{}'", self.config.name.as_str());
        Ok(())
    }

    /// Run one control tick against `source`.
    ///
    /// Returns [`CycleReport::Inert`] without touching the source or any pin
    /// when setup has not succeeded.
    pub fn run_cycle<M>(&mut self, source: &mut M) -> Result<CycleReport>
    where
        M: MotionSource + ?Sized,
    {
        if self.client.is_none() {
            return Ok(CycleReport::Inert);
        }

        self.cycle.run(source, &mut self.delay)
    }

    /// Write tuning registers on a running device.
    ///
    /// Does nothing on an inert device.
    pub fn apply_settings(&mut self, settings: &DriverSettings) -> Result<()> {
        validate_settings(settings)?;

        let Some(client) = self.client.as_mut() else {
            warn!("'{}' is not set up, settings ignored", self.config.name.as_str());
            return Ok(());
        };

        DriverConfigurator::new(client).apply_settings(settings)
    }

    /// Log the configuration.
    pub fn dump_config(&self) {
        info!("TMC2209 '{}':", self.config.name.as_str());
        info!("  Sleep pin: {}", self.cycle.has_sleep_pin());
        info!("  Current sense resistor: {} ohm", self.config.sense_resistor.0);
        info!("  UART address: {:#x}", self.config.uart_address);
        info!("  Reverse direction: {}", self.config.reverse_direction);
        info!("  Ready: {}", self.is_ready());
    }

    /// Tear the device down, returning `(step, dir, sleep, delay, client)`.
    pub fn release(self) -> (STEP, DIR, Option<SLEEP>, DELAY, Option<C>) {
        let (step, dir, sleep) = self.cycle.release();
        (step, dir, sleep, self.delay, self.client)
    }
}

impl<C, STEP, DIR, DELAY, SLEEP> core::fmt::Debug for Tmc2209<C, STEP, DIR, DELAY, SLEEP>
where
    C: RegisterClient,
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    SLEEP: OutputPin,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tmc2209")
            .field("config", &self.config)
            .field("ready", &self.is_ready())
            .field("power_state", &self.power_state())
            .finish()
    }
}
