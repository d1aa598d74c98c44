//! Runtime tuning for a configured driver.

use serde::Deserialize;

use super::units::{Microsteps, Milliamps};

/// Largest value the 20-bit TCOOLTHRS register holds.
pub const TCOOL_THRESHOLD_MAX: u32 = 0x000F_FFFF;

/// Optional register tuning.
///
/// Only the fields that are present are written; absent fields leave the
/// chip's current register value alone.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverSettings {
    /// Microstep resolution (MRES).
    #[serde(default)]
    pub microsteps: Option<Microsteps>,

    /// Lower velocity threshold for CoolStep and StallGuard (TCOOLTHRS).
    #[serde(default)]
    pub tcool_threshold: Option<u32>,

    /// StallGuard threshold (SGTHRS, lower is more sensitive).
    #[serde(default)]
    pub stall_threshold: Option<u8>,

    /// RMS run current.
    #[serde(default, rename = "current_ma")]
    pub current: Option<Milliamps>,
}

impl DriverSettings {
    /// Create empty settings.
    pub const fn new() -> Self {
        Self {
            microsteps: None,
            tcool_threshold: None,
            stall_threshold: None,
            current: None,
        }
    }

    /// Set microstep resolution.
    pub fn microsteps(mut self, microsteps: Microsteps) -> Self {
        self.microsteps = Some(microsteps);
        self
    }

    /// Set the CoolStep/StallGuard velocity threshold.
    pub fn tcool_threshold(mut self, threshold: u32) -> Self {
        self.tcool_threshold = Some(threshold);
        self
    }

    /// Set the StallGuard threshold.
    pub fn stall_threshold(mut self, threshold: u8) -> Self {
        self.stall_threshold = Some(threshold);
        self
    }

    /// Set the RMS run current.
    pub fn current(mut self, current: Milliamps) -> Self {
        self.current = Some(current);
        self
    }

    /// True when no field would be written.
    pub fn is_empty(&self) -> bool {
        self.microsteps.is_none()
            && self.tcool_threshold.is_none()
            && self.stall_threshold.is_none()
            && self.current.is_none()
    }
}
