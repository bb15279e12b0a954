//! Prelude
pub use crate::diag::{ErrorReporter, Fault, NoReporter, ServiceId};
pub use crate::port::{
    Direction, Mmio, Pin, PinConfig, PinLevel, PinMode, PortConfig, PortDriver, PortError,
    PortRegisters, Resistor,
};
