//! Driver module for tmc2209-stepper.
//!
//! Register client seam and the startup configuration sequence.

mod client;
mod configurator;

pub use client::{Connect, RegisterClient};
pub use configurator::DriverConfigurator;
