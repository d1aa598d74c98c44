//! Register client seam.
//!
//! The UART datagram protocol lives outside this crate. Anything that can
//! write the TMC2209 register fields below can drive a [`Tmc2209`](crate::Tmc2209).

use core::fmt::Debug;

use crate::config::units::{Microsteps, Milliamps, Ohms};

/// Register-level access to a TMC2209 over its configuration link.
///
/// Every method is a synchronous, best-effort write of an absolute value, so
/// repeating one is harmless. Acknowledgement checking and retries, if any,
/// belong to the implementation.
pub trait RegisterClient {
    /// Link error type.
    type Error: Debug;

    /// GCONF.pdn_disable: ignore the PDN_UART pin as a power-down input.
    fn pdn_disable(&mut self, disable: bool) -> Result<(), Self::Error>;

    /// Bring the link up and load the chip defaults.
    fn begin(&mut self) -> Result<(), Self::Error>;

    /// GCONF.I_scale_analog: take the current reference from VREF.
    fn i_scale_analog(&mut self, enable: bool) -> Result<(), Self::Error>;

    /// GCONF.internal_Rsense: use the internal sense resistors.
    fn internal_rsense(&mut self, enable: bool) -> Result<(), Self::Error>;

    /// GCONF.mstep_reg_select: take MRES from the register, not MS1/MS2.
    fn mstep_reg_select(&mut self, enable: bool) -> Result<(), Self::Error>;

    /// GCONF.en_SpreadCycle: select SpreadCycle instead of StealthChop.
    fn en_spread_cycle(&mut self, enable: bool) -> Result<(), Self::Error>;

    /// GCONF.shaft: invert the motor direction.
    fn shaft(&mut self, invert: bool) -> Result<(), Self::Error>;

    /// CHOPCONF.MRES: microstep resolution.
    fn microsteps(&mut self, microsteps: Microsteps) -> Result<(), Self::Error>;

    /// TCOOLTHRS: lower velocity bound for CoolStep and StallGuard.
    fn tcool_threshold(&mut self, threshold: u32) -> Result<(), Self::Error>;

    /// SGTHRS: StallGuard detection threshold.
    fn stall_threshold(&mut self, threshold: u8) -> Result<(), Self::Error>;

    /// IHOLD_IRUN: RMS run current, scaled against the sense resistor.
    fn rms_current(&mut self, current: Milliamps) -> Result<(), Self::Error>;
}

/// Creates the register client during device setup.
///
/// Construction failure is the only fatal setup error; the device stays
/// inert afterwards.
pub trait Connect {
    /// Client produced on success.
    type Client: RegisterClient;

    /// Open a client for the driver at `uart_address` with the given sense resistor.
    fn connect(self, sense_resistor: Ohms, uart_address: u8) -> Option<Self::Client>;
}

impl<F, C> Connect for F
where
    F: FnOnce(Ohms, u8) -> Option<C>,
    C: RegisterClient,
{
    type Client = C;

    fn connect(self, sense_resistor: Ohms, uart_address: u8) -> Option<C> {
        self(sense_resistor, uart_address)
    }
}
