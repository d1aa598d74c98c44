//! Shared fakes for integration tests.
//!
//! Pins, delay and register client all append to one ordered trace so tests
//! can check cross-device ordering (DIR before STEP, settle before pulse).

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin};
use tmc2209_stepper::{Microsteps, Milliamps, MotionSource, Ohms, RegisterClient, StepRequest};

/// Which output a pin event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinId {
    Step,
    Dir,
    Sleep,
}

/// One observable side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Pin(PinId, bool),
    DelayUs(u32),
    Register(&'static str),
}

/// Ordered log shared by every fake.
#[derive(Debug, Clone, Default)]
pub struct Trace(Rc<RefCell<Vec<Event>>>);

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    /// Drain and return everything recorded so far.
    pub fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn pin(&self, id: PinId) -> TracePin {
        TracePin {
            id,
            trace: self.clone(),
            fail_high: false,
        }
    }

    /// Pin whose `set_high` fails without recording anything.
    pub fn failing_pin(&self, id: PinId) -> TracePin {
        TracePin {
            fail_high: true,
            ..self.pin(id)
        }
    }

    pub fn delay(&self) -> TraceDelay {
        TraceDelay(self.clone())
    }

    pub fn client(&self) -> TraceClient {
        TraceClient {
            trace: self.clone(),
            fail_on: None,
        }
    }

    /// Client that rejects the write named `operation` and records the
    /// writes before it.
    pub fn failing_client(&self, operation: &'static str) -> TraceClient {
        TraceClient {
            trace: self.clone(),
            fail_on: Some(operation),
        }
    }
}

/// GPIO fault raised by a failing pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

impl digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

pub struct TracePin {
    id: PinId,
    trace: Trace,
    fail_high: bool,
}

impl ErrorType for TracePin {
    type Error = PinFault;
}

impl OutputPin for TracePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.trace.push(Event::Pin(self.id, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.fail_high {
            return Err(PinFault);
        }
        self.trace.push(Event::Pin(self.id, true));
        Ok(())
    }
}

pub struct TraceDelay(Trace);

impl DelayNs for TraceDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.push(Event::DelayUs((ns + 999) / 1000));
    }

    fn delay_us(&mut self, us: u32) {
        self.0.push(Event::DelayUs(us));
    }
}

pub struct TraceClient {
    trace: Trace,
    fail_on: Option<&'static str>,
}

impl TraceClient {
    fn write(&mut self, name: &'static str) -> Result<(), ()> {
        if self.fail_on == Some(name) {
            return Err(());
        }
        self.trace.push(Event::Register(name));
        Ok(())
    }
}

impl RegisterClient for TraceClient {
    type Error = ();

    fn pdn_disable(&mut self, disable: bool) -> Result<(), ()> {
        assert!(disable);
        self.write("pdn_disable")
    }
    fn begin(&mut self) -> Result<(), ()> {
        self.write("begin")
    }
    fn i_scale_analog(&mut self, enable: bool) -> Result<(), ()> {
        assert!(!enable);
        self.write("I_scale_analog")
    }
    fn internal_rsense(&mut self, enable: bool) -> Result<(), ()> {
        assert!(!enable);
        self.write("internal_Rsense")
    }
    fn mstep_reg_select(&mut self, enable: bool) -> Result<(), ()> {
        assert!(enable);
        self.write("mstep_reg_select")
    }
    fn en_spread_cycle(&mut self, enable: bool) -> Result<(), ()> {
        assert!(!enable);
        self.write("en_spreadCycle")
    }
    fn shaft(&mut self, invert: bool) -> Result<(), ()> {
        assert!(invert);
        self.write("shaft")
    }
    fn microsteps(&mut self, _: Microsteps) -> Result<(), ()> {
        self.write("microsteps")
    }
    fn tcool_threshold(&mut self, _: u32) -> Result<(), ()> {
        self.write("TCOOLTHRS")
    }
    fn stall_threshold(&mut self, _: u8) -> Result<(), ()> {
        self.write("SGTHRS")
    }
    fn rms_current(&mut self, _: Milliamps) -> Result<(), ()> {
        self.write("rms_current")
    }
}

/// Connector closure that hands out a traced client.
pub fn connector(trace: &Trace) -> impl FnOnce(Ohms, u8) -> Option<TraceClient> {
    let client = trace.client();
    move |_, _| Some(client)
}

/// Motion source whose answers are set by the test before each cycle.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    pub at_target: bool,
    pub decision: StepRequest,
    pub decisions_taken: u32,
}

impl ScriptedSource {
    pub fn set(&mut self, at_target: bool, decision: StepRequest) {
        self.at_target = at_target;
        self.decision = decision;
    }
}

impl MotionSource for ScriptedSource {
    fn at_target(&self) -> bool {
        self.at_target
    }

    fn step_decision(&mut self) -> StepRequest {
        self.decisions_taken += 1;
        self.decision
    }
}

/// The fixed startup register sequence, without shaft inversion.
pub const BASE_REGISTERS: [Event; 6] = [
    Event::Register("pdn_disable"),
    Event::Register("begin"),
    Event::Register("I_scale_analog"),
    Event::Register("internal_Rsense"),
    Event::Register("mstep_reg_select"),
    Event::Register("en_spreadCycle"),
];
