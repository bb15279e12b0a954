//! # Diagnostic error reporting
//!
//! Every failed driver call is forwarded to an [`ErrorReporter`] in addition
//! to being returned as a [`PortError`]. The reporter is an observability hook
//! only, the driver never depends on its outcome.
use crate::port::PortError;
use crate::version::{INSTANCE_ID, MODULE_ID};

/// Identifies the driver service which detected a fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ServiceId {
    Init = 0x00,
    SetPinDirection = 0x01,
    RefreshPortDirection = 0x02,
    GetVersionInfo = 0x03,
    SetPinMode = 0x04,
}

/// A single fault as seen by the diagnostic sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fault {
    pub module_id: u16,
    pub instance_id: u8,
    pub service: ServiceId,
    pub error: PortError,
}

impl Fault {
    #[inline]
    pub fn new(service: ServiceId, error: PortError) -> Self {
        Fault {
            module_id: MODULE_ID,
            instance_id: INSTANCE_ID,
            service,
            error,
        }
    }

    /// Numeric error code of the fault
    #[inline]
    pub fn code(&self) -> u8 {
        self.error.code()
    }
}

/// Sink for driver faults
pub trait ErrorReporter {
    fn report(&mut self, fault: Fault);
}

impl<E: ErrorReporter + ?Sized> ErrorReporter for &mut E {
    #[inline]
    fn report(&mut self, fault: Fault) {
        (**self).report(fault)
    }
}

/// Reporter which discards every fault
#[derive(Debug, Default, Clone, Copy)]
pub struct NoReporter;

impl ErrorReporter for NoReporter {
    #[inline]
    fn report(&mut self, _fault: Fault) {}
}

/// Reporter which prints every fault on the RTT print channel
///
/// The print channel has to be set up with `rtt_init_print!` beforehand.
#[cfg(feature = "rtt")]
#[derive(Debug, Default, Clone, Copy)]
pub struct RttReporter;

#[cfg(feature = "rtt")]
impl ErrorReporter for RttReporter {
    fn report(&mut self, fault: Fault) {
        rtt_target::rprintln!(
            "[port {}:{}] {:?} failed: {} (0x{:02X})",
            fault.module_id,
            fault.instance_id,
            fault.service,
            fault.error,
            fault.code()
        );
    }
}
