//! # Pin configuration data
//!
//! The configuration table is generated at build time and handed to the
//! driver as a [`PortConfig`]. Port, channel and mode are kept as the raw
//! numbers the generator emits and are only turned into typed values
//! ([`PinLocation`], [`SignalMode`]) when the driver uses them, so a bad
//! entry surfaces as a [`PortError`] instead of an access to an undefined
//! address.
use super::error::PortError;
use super::id::PinLocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

/// Level driven by an output pin after initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinLevel {
    Low,
    High,
}

/// Internal resistor of an input pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resistor {
    Off,
    PullUp,
    PullDown,
}

/// Raw signal mode identifier as emitted by the configuration generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinMode(pub u8);

impl PinMode {
    /// Digital I/O
    pub const DIO: PinMode = PinMode(0);

    /// Resolve the identifier into a mode the driver can program
    #[inline]
    pub fn signal(self) -> Result<SignalMode, PortError> {
        match self {
            PinMode::DIO => Ok(SignalMode::Dio),
            _ => Err(PortError::UnsupportedMode),
        }
    }
}

/// Signal modes the driver knows how to program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalMode {
    Dio,
}

/// Logical pin handle: the position of a pin in the configuration table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pin(pub u8);

impl Pin {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Configuration of one logical pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinConfig {
    /// Port number, 0..5 for A..F
    pub port: u8,
    /// Pin number within the port, 0..7
    pub channel: u8,
    pub mode: PinMode,
    pub direction: Direction,
    /// Only used for outputs
    pub initial_level: PinLevel,
    pub direction_changeable: bool,
    pub mode_changeable: bool,
    /// Only used for inputs
    pub resistor: Resistor,
}

impl PinConfig {
    #[inline]
    pub fn location(&self) -> Result<PinLocation, PortError> {
        PinLocation::new(self.port, self.channel)
    }
}

/// The build-time configuration table
#[derive(Debug, Clone, Copy)]
pub struct PortConfig<'a> {
    pins: &'a [PinConfig],
}

impl<'a> PortConfig<'a> {
    pub const fn new(pins: &'a [PinConfig]) -> Self {
        PortConfig { pins }
    }

    #[inline]
    pub fn pins(&self) -> &'a [PinConfig] {
        self.pins
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    #[inline]
    pub fn get(&self, pin: Pin) -> Option<&'a PinConfig> {
        self.pins.get(pin.index())
    }
}
