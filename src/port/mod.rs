//! # Port module
//!
//! Pin configuration for the six GPIO ports of the TM4C123.
//!
//! The module is split along the three things the driver has to know:
//!
//! - [`config`]: the build-time configuration table and its entries
//! - [`id`]: where a pin lives, i.e. the register block of its port and
//!   whether it sits behind the `GPIOLOCK`/`GPIOCR` protection (PD7, PF0) or is
//!   shared with the debug interface (PC0..PC3)
//! - [`driver`]: the [`PortDriver`] which sequences the register writes for
//!   each pin
//!
//! All register access goes through the [`PortRegisters`] trait. [`Mmio`] is
//! the implementation for the real hardware.
//!
//! ## Examples
//!
//! - Port init demo: `demos/port-init.rs`
pub mod config;
pub use config::*;

pub mod driver;
pub use driver::*;

pub mod error;
pub use error::PortError;

pub mod id;
pub use id::{PinLocation, PortId, PINS_PER_PORT};

mod program;

pub mod reg;
pub use reg::{Mmio, PortRegisters, Register, LOCK_KEY};
