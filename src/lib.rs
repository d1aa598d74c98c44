//! # tmc2209-stepper
//!
//! Step/dir pulse generation and sleep management for TMC2209 stepper drivers
//! configured over UART, with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **One-time register setup**: fixed GCONF sequence at startup
//! - **Sleep management**: SLEEP pin follows "movement outstanding", with a
//!   1 ms settle wait on every wake edge
//! - **Pulse generation**: at most one STEP pulse per control tick, DIR
//!   settled before the rising edge, 5 µs high time
//! - **embedded-hal 1.0**: Uses `OutputPin` for STEP/DIR/SLEEP, `DelayNs` for timing
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tmc2209_stepper::{SystemConfig, Tmc2209Builder};
//!
//! let config: SystemConfig = tmc2209_stepper::load_config("steppers.toml")?;
//!
//! let mut stepper = Tmc2209Builder::new()
//!     .from_config(&config, "x_axis")?
//!     .step_pin(step_pin)
//!     .dir_pin(dir_pin)
//!     .sleep_pin(sleep_pin)
//!     .delay(delay)
//!     .build::<TmcUart>()?;
//!
//! stepper.setup(|rsense, address| TmcUart::open(uart, rsense, address))?;
//!
//! loop {
//!     let report = stepper.run_cycle(&mut planner)?;
//!     scheduler.set_high_frequency(report.high_frequency());
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod log;

// Core modules
pub mod config;
pub mod driver;
pub mod error;
pub mod motion;
pub mod motor;

// Re-exports for ergonomic API
pub use config::{validate_config, DriverConfig, DriverSettings, SystemConfig};
pub use driver::{Connect, DriverConfigurator, RegisterClient};
pub use error::{Error, Result};
pub use motion::{CycleReport, Direction, MotionCycle, MotionSource, StepRequest};
pub use motor::{
    NoPin, PowerState, PowerStateController, PulseEmitter, Tmc2209, Tmc2209Builder, Transition,
    STEP_PULSE_WIDTH_US, WAKE_SETTLE_US,
};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Microsteps, Milliamps, Ohms};
