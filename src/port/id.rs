//! Mapping from port and pin identifiers to the hardware
use super::error::PortError;
use super::reg::RegisterBlock;
use core::convert::TryFrom;

/// Number of pins in one port block
pub const PINS_PER_PORT: u8 = 8;

/// Base addresses of the APB port blocks, indexed by [`PortId`]
const BASE_ADDRESSES: [usize; PortId::COUNT] = [
    0x4000_4000,
    0x4000_5000,
    0x4000_6000,
    0x4000_7000,
    0x4002_4000,
    0x4002_5000,
];

/// The six GPIO ports of the TM4C123
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortId {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
}

impl PortId {
    pub const COUNT: usize = 6;

    pub const ALL: [PortId; PortId::COUNT] = [
        PortId::A,
        PortId::B,
        PortId::C,
        PortId::D,
        PortId::E,
        PortId::F,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn base_address(self) -> usize {
        BASE_ADDRESSES[self.index()]
    }

    #[inline]
    pub const fn ptr(self) -> *const RegisterBlock {
        self.base_address() as *const RegisterBlock
    }
}

impl TryFrom<u8> for PortId {
    type Error = PortError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        PortId::ALL
            .get(value as usize)
            .copied()
            .ok_or(PortError::InvalidPort)
    }
}

/// Physical location of a pin: its port and the channel within the port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinLocation {
    pub port: PortId,
    pub channel: u8,
}

impl PinLocation {
    /// Resolve raw port and channel numbers
    ///
    /// Fails with [`PortError::InvalidPort`] for ports outside A..F and with
    /// [`PortError::InvalidChannel`] for channels outside 0..7.
    pub fn new(port: u8, channel: u8) -> Result<Self, PortError> {
        let port = PortId::try_from(port)?;
        if channel >= PINS_PER_PORT {
            return Err(PortError::InvalidChannel);
        }
        Ok(PinLocation { port, channel })
    }

    #[inline]
    pub const fn mask(self) -> u32 {
        1 << self.channel
    }

    /// Mask of the 4 bit function select field of this pin in `GPIOPCTL`
    #[inline]
    pub const fn pctl_mask(self) -> u32 {
        0x0F << (self.channel as u32 * 4)
    }

    /// PD7 and PF0 are behind `GPIOLOCK`/`GPIOCR`
    #[inline]
    pub const fn requires_unlock(self) -> bool {
        matches!(
            (self.port, self.channel),
            (PortId::D, 7) | (PortId::F, 0)
        )
    }

    /// PC0..PC3 carry JTAG/SWD and are never reconfigured
    #[inline]
    pub const fn is_debug_reserved(self) -> bool {
        matches!(self.port, PortId::C) && self.channel < 4
    }

    /// Reject pins which must not be written
    #[inline]
    pub fn writable(self) -> Result<Self, PortError> {
        if self.is_debug_reserved() {
            Err(PortError::ReservedPin)
        } else {
            Ok(self)
        }
    }
}
