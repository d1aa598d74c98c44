//! STEP/DIR pulse generation.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use crate::error::{MotorError, Result};
use crate::motion::{Direction, StepRequest};

/// STEP high time. The TMC2209 latches edges far faster; this leaves margin
/// for slow GPIO expanders and level shifters.
pub const STEP_PULSE_WIDTH_US: u32 = 5;

/// Emits at most one step pulse per call.
#[derive(Debug)]
pub struct PulseEmitter<STEP, DIR>
where
    STEP: OutputPin,
    DIR: OutputPin,
{
    /// STEP pin (pulse to move one microstep).
    step_pin: STEP,

    /// DIR pin (high = positive).
    dir_pin: DIR,
}

impl<STEP, DIR> PulseEmitter<STEP, DIR>
where
    STEP: OutputPin,
    DIR: OutputPin,
{
    /// Wrap the STEP and DIR pins.
    pub fn new(step_pin: STEP, dir_pin: DIR) -> Self {
        Self { step_pin, dir_pin }
    }

    /// Drive STEP and DIR low once during device setup.
    pub fn init(&mut self) -> Result<()> {
        self.step_pin.set_low().map_err(|_| MotorError::PinError)?;
        self.dir_pin.set_low().map_err(|_| MotorError::PinError)?;
        Ok(())
    }

    /// Emit the pulse for `request`.
    ///
    /// `Hold` touches no pin and does not wait. Otherwise DIR is written
    /// before the rising edge and STEP stays high for
    /// [`STEP_PULSE_WIDTH_US`]. Returns the direction stepped.
    pub fn emit<D: DelayNs>(
        &mut self,
        request: StepRequest,
        delay: &mut D,
    ) -> Result<Option<Direction>> {
        let Some(direction) = request.direction() else {
            return Ok(None);
        };

        self.dir_pin
            .set_state(PinState::from(direction.pin_high()))
            .map_err(|_| MotorError::PinError)?;

        self.step_pin.set_high().map_err(|_| MotorError::PinError)?;
        delay.delay_us(STEP_PULSE_WIDTH_US);
        self.step_pin.set_low().map_err(|_| MotorError::PinError)?;

        trace!("step {}", direction.sign());
        Ok(Some(direction))
    }

    /// Give the pins back.
    pub fn release(self) -> (STEP, DIR) {
        (self.step_pin, self.dir_pin)
    }
}
