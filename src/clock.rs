use crate::port::PortId;
use vcell::VolatileCell;

/// `SYSCTL.RCGCGPIO`, the run mode clock gating register of the GPIO ports
const RCGCGPIO: *const VolatileCell<u32> = 0x400F_E608 as *const VolatileCell<u32>;

/// Enable the run mode clock of a GPIO port
pub(crate) fn enable_gpio_clock(port: PortId) {
    // Safety: RCGCGPIO is always mapped, and only the bit for this port is set
    let rcgcgpio = unsafe { &*RCGCGPIO };
    rcgcgpio.set(rcgcgpio.get() | (1 << port.index()));
}

/// Set of ports whose clock was already enabled during one configuration pass
///
/// Bit n stands for port n, so six bits are in use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PortClocks(u8);

impl PortClocks {
    /// Mark a port as clocked. Returns `true` if it was not marked before
    #[inline]
    pub fn insert(&mut self, port: PortId) -> bool {
        let bit = 1 << port.index();
        let new = self.0 & bit == 0;
        self.0 |= bit;
        new
    }

    #[inline]
    pub fn contains(&self, port: PortId) -> bool {
        self.0 & (1 << port.index()) != 0
    }

    #[inline]
    pub fn bits(&self) -> u8 {
        self.0
    }
}
