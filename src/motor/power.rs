//! Sleep-pin state machine.
//!
//! The TMC2209 sleep input is active-low: the pin is driven high while
//! movement is outstanding and low once the motion source reports the target
//! reached. Coming out of sleep the charge pump needs time before the driver
//! follows STEP edges, so a wake edge blocks for [`WAKE_SETTLE_US`].

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin, PinState};

use crate::error::{MotorError, Result};

/// Wait after a wake edge before any step pulse is trusted.
pub const WAKE_SETTLE_US: u32 = 1000;

/// Driver power state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Sleep pin high, driver energised.
    Awake,
    /// Sleep pin low, driver parked.
    Asleep,
}

impl PowerState {
    /// Desired state for a cycle: awake while movement is outstanding.
    #[inline]
    pub fn for_target(at_target: bool) -> Self {
        if at_target {
            PowerState::Asleep
        } else {
            PowerState::Awake
        }
    }

    /// Level driven on the sleep pin.
    #[inline]
    pub fn pin_state(self) -> PinState {
        match self {
            PowerState::Awake => PinState::High,
            PowerState::Asleep => PinState::Low,
        }
    }
}

/// Power-state change observed in one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// No change (or no sleep pin).
    Steady,
    /// Asleep to awake; the settle delay ran.
    Wake,
    /// Awake to asleep.
    Sleep,
}

/// Placeholder for boards without a sleep pin wired.
///
/// Every write succeeds and does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPin;

impl ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }
}

/// Edge-triggered sleep controller.
///
/// Without a sleep pin the controller never writes and never waits; the
/// driver is assumed always awake.
#[derive(Debug)]
pub struct PowerStateController<SLEEP>
where
    SLEEP: OutputPin,
{
    /// Optional SLEEP pin (active low).
    sleep_pin: Option<SLEEP>,

    /// Level driven in the previous cycle.
    state: PowerState,
}

impl<SLEEP> PowerStateController<SLEEP>
where
    SLEEP: OutputPin,
{
    /// Create a controller. With a pin the initial state is `Asleep`, since
    /// [`init`](Self::init) drives the pin low.
    pub fn new(sleep_pin: Option<SLEEP>) -> Self {
        let state = if sleep_pin.is_some() {
            PowerState::Asleep
        } else {
            PowerState::Awake
        };

        Self { sleep_pin, state }
    }

    /// Drive the sleep pin low once during device setup.
    pub fn init(&mut self) -> Result<()> {
        if let Some(pin) = self.sleep_pin.as_mut() {
            pin.set_low().map_err(|_| MotorError::PinError)?;
            self.state = PowerState::Asleep;
        }
        Ok(())
    }

    /// Whether a sleep pin is wired.
    #[inline]
    pub fn has_sleep_pin(&self) -> bool {
        self.sleep_pin.is_some()
    }

    /// State driven in the last cycle.
    #[inline]
    pub fn state(&self) -> PowerState {
        self.state
    }

    /// Drive the sleep pin for this cycle.
    ///
    /// The pin is written every cycle. On a wake edge the settle delay runs
    /// after the write and before returning.
    pub fn update<D: DelayNs>(&mut self, at_target: bool, delay: &mut D) -> Result<Transition> {
        let Some(pin) = self.sleep_pin.as_mut() else {
            return Ok(Transition::Steady);
        };

        let next = PowerState::for_target(at_target);
        let wake_edge = self.state == PowerState::Asleep && next == PowerState::Awake;

        pin.set_state(next.pin_state()).map_err(|_| MotorError::PinError)?;

        let previous = self.state;
        self.state = next;

        if wake_edge {
            delay.delay_us(WAKE_SETTLE_US);
            return Ok(Transition::Wake);
        }

        if previous == PowerState::Awake && next == PowerState::Asleep {
            Ok(Transition::Sleep)
        } else {
            Ok(Transition::Steady)
        }
    }

    /// Give the pin back.
    pub fn release(self) -> Option<SLEEP> {
        self.sleep_pin
    }
}
