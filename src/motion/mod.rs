//! Motion module for tmc2209-stepper.
//!
//! Step decisions, the motion source seam and the per-tick cycle.

mod cycle;
mod request;

pub use cycle::{CycleReport, MotionCycle};
pub use request::{Direction, MotionSource, StepRequest};
