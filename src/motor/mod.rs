//! Motor module for tmc2209-stepper.
//!
//! Provides the device instance, its builder, and the sleep and pulse stages.

mod builder;
mod driver;
mod power;
mod pulse;

pub use builder::Tmc2209Builder;
pub use driver::Tmc2209;
pub use power::{NoPin, PowerState, PowerStateController, Transition, WAKE_SETTLE_US};
pub use pulse::{PulseEmitter, STEP_PULSE_WIDTH_US};
