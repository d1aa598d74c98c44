//! Per-cycle step decisions and the motion source seam.

/// Direction of motor motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise (positive step count).
    Clockwise,
    /// Counter-clockwise (negative step count).
    CounterClockwise,
}

impl Direction {
    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    /// Logical DIR pin level: high for positive steps.
    #[inline]
    pub fn pin_high(self) -> bool {
        self == Direction::Clockwise
    }
}

/// What the motion source wants for this cycle.
///
/// Consumed within the cycle that produced it; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepRequest {
    /// Step in the negative direction (-1).
    Negative,
    /// No step this cycle (0).
    #[default]
    Hold,
    /// Step in the positive direction (+1).
    Positive,
}

impl StepRequest {
    /// Map a signed decision onto a request. Any positive value steps
    /// forward, any negative value steps back.
    #[inline]
    pub fn from_sign(value: i32) -> Self {
        match value.signum() {
            1 => StepRequest::Positive,
            -1 => StepRequest::Negative,
            _ => StepRequest::Hold,
        }
    }

    /// Signed value in {-1, 0, +1}.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            StepRequest::Negative => -1,
            StepRequest::Hold => 0,
            StepRequest::Positive => 1,
        }
    }

    /// Direction of the pulse, or `None` when no pulse is wanted.
    #[inline]
    pub fn direction(self) -> Option<Direction> {
        match self {
            StepRequest::Negative => Some(Direction::CounterClockwise),
            StepRequest::Hold => None,
            StepRequest::Positive => Some(Direction::Clockwise),
        }
    }
}

impl From<i32> for StepRequest {
    fn from(value: i32) -> Self {
        Self::from_sign(value)
    }
}

impl From<Direction> for StepRequest {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Clockwise => StepRequest::Positive,
            Direction::CounterClockwise => StepRequest::Negative,
        }
    }
}

/// Target position and motion-profile state owned outside this crate.
///
/// Queried once each per cycle by [`MotionCycle`](super::MotionCycle).
pub trait MotionSource {
    /// True when the current position matches the commanded target.
    fn at_target(&self) -> bool;

    /// Whether to step this cycle, and which way.
    ///
    /// Only called when [`at_target`](Self::at_target) returned false.
    fn step_decision(&mut self) -> StepRequest;
}

impl<M: MotionSource + ?Sized> MotionSource for &mut M {
    fn at_target(&self) -> bool {
        (**self).at_target()
    }

    fn step_decision(&mut self) -> StepRequest {
        (**self).step_decision()
    }
}
