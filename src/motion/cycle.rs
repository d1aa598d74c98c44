//! Per-tick orchestration.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::error::Result;
use crate::motor::{PowerState, PowerStateController, PulseEmitter, Transition};

use super::request::{Direction, MotionSource};

/// Outcome of one control tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleReport {
    /// The device has no driver handle; nothing was queried or written.
    Inert,
    /// The cycle ran.
    Ran {
        /// Motion source reported the target reached.
        at_target: bool,
        /// Power-state change in this cycle.
        transition: Transition,
        /// Direction of the emitted pulse, if any.
        step: Option<Direction>,
    },
}

impl CycleReport {
    /// Whether the host should keep running the control loop at high
    /// frequency. Requested while movement is outstanding.
    #[inline]
    pub fn high_frequency(&self) -> bool {
        matches!(self, CycleReport::Ran { at_target: false, .. })
    }

    /// Direction stepped in this cycle.
    #[inline]
    pub fn step(&self) -> Option<Direction> {
        match self {
            CycleReport::Ran { step, .. } => *step,
            CycleReport::Inert => None,
        }
    }

    /// True if this cycle woke the driver.
    #[inline]
    pub fn woke(&self) -> bool {
        matches!(
            self,
            CycleReport::Ran {
                transition: Transition::Wake,
                ..
            }
        )
    }
}

/// Power-state update followed by at most one step pulse.
#[derive(Debug)]
pub struct MotionCycle<STEP, DIR, SLEEP>
where
    STEP: OutputPin,
    DIR: OutputPin,
    SLEEP: OutputPin,
{
    power: PowerStateController<SLEEP>,
    pulse: PulseEmitter<STEP, DIR>,
}

impl<STEP, DIR, SLEEP> MotionCycle<STEP, DIR, SLEEP>
where
    STEP: OutputPin,
    DIR: OutputPin,
    SLEEP: OutputPin,
{
    /// Assemble a cycle from its two stages.
    pub fn new(power: PowerStateController<SLEEP>, pulse: PulseEmitter<STEP, DIR>) -> Self {
        Self { power, pulse }
    }

    /// Drive every pin low once: sleep first, then STEP and DIR.
    pub fn init(&mut self) -> Result<()> {
        self.power.init()?;
        self.pulse.init()
    }

    /// Current power state.
    #[inline]
    pub fn power_state(&self) -> PowerState {
        self.power.state()
    }

    /// Whether a sleep pin is wired.
    #[inline]
    pub fn has_sleep_pin(&self) -> bool {
        self.power.has_sleep_pin()
    }

    /// Run one tick.
    ///
    /// 1. ask the source whether the target is reached
    /// 2. update the sleep pin (may block for the settle delay)
    /// 3. at target: stop here, the step decision is not even queried
    /// 4. otherwise emit the requested pulse
    pub fn run<M, D>(&mut self, source: &mut M, delay: &mut D) -> Result<CycleReport>
    where
        M: MotionSource + ?Sized,
        D: DelayNs,
    {
        let at_target = source.at_target();
        let transition = self.power.update(at_target, delay)?;

        match transition {
            Transition::Wake => debug!("driver woke"),
            Transition::Sleep => debug!("driver parked"),
            Transition::Steady => {}
        }

        if at_target {
            return Ok(CycleReport::Ran {
                at_target,
                transition,
                step: None,
            });
        }

        let request = source.step_decision();
        let step = self.pulse.emit(request, delay)?;

        Ok(CycleReport::Ran {
            at_target,
            transition,
            step,
        })
    }

    /// Give the pins back as `(step, dir, sleep)`.
    pub fn release(self) -> (STEP, DIR, Option<SLEEP>) {
        let (step, dir) = self.pulse.release();
        (step, dir, self.power.release())
    }
}
