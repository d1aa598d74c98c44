//! One-time register configuration.

use crate::config::{DriverConfig, DriverSettings};
use crate::error::{DriverError, Result};

use super::client::RegisterClient;

/// Brings a freshly connected driver into a known, motion-ready register state.
///
/// Writes go out in a fixed order and are never retried. The first link fault
/// aborts the sequence and is returned to the caller.
#[derive(Debug)]
pub struct DriverConfigurator<'a, C: RegisterClient> {
    client: &'a mut C,
}

impl<'a, C: RegisterClient> DriverConfigurator<'a, C> {
    /// Wrap a connected client.
    pub fn new(client: &'a mut C) -> Self {
        Self { client }
    }

    /// Run the startup sequence.
    ///
    /// 1. PDN_UART no longer powers the driver down
    /// 2. link init and chip defaults
    /// 3. current from registers, not VREF
    /// 4. external sense resistor
    /// 5. microstep resolution from MRES
    /// 6. StealthChop (SpreadCycle off) for predictable step timing
    /// 7. shaft inversion when `reverse_direction` is set
    pub fn configure(&mut self, config: &DriverConfig) -> Result<()> {
        write(self.client.pdn_disable(true), "pdn_disable")?;
        write(self.client.begin(), "begin")?;
        write(self.client.i_scale_analog(false), "I_scale_analog")?;
        write(self.client.internal_rsense(false), "internal_Rsense")?;
        write(self.client.mstep_reg_select(true), "mstep_reg_select")?;
        write(self.client.en_spread_cycle(false), "en_spreadCycle")?;

        if config.reverse_direction {
            write(self.client.shaft(true), "shaft")?;
        }

        Ok(())
    }

    /// Write the fields present in `settings`.
    ///
    /// Order: microsteps, TCOOLTHRS, SGTHRS, run current.
    pub fn apply_settings(&mut self, settings: &DriverSettings) -> Result<()> {
        if let Some(microsteps) = settings.microsteps {
            write(self.client.microsteps(microsteps), "microsteps")?;
        }

        if let Some(threshold) = settings.tcool_threshold {
            write(self.client.tcool_threshold(threshold), "TCOOLTHRS")?;
        }

        if let Some(threshold) = settings.stall_threshold {
            write(self.client.stall_threshold(threshold), "SGTHRS")?;
        }

        if let Some(current) = settings.current {
            write(self.client.rms_current(current), "rms_current")?;
        }

        Ok(())
    }
}

fn write<E: core::fmt::Debug>(
    result: core::result::Result<(), E>,
    operation: &'static str,
) -> Result<()> {
    result.map_err(|_e| {
        error!("register write {} failed", operation);
        DriverError::Link { operation }.into()
    })
}
