use super::config::{Direction, PinConfig, PinLevel, Resistor, SignalMode};
use super::id::PinLocation;
use super::reg::{PortRegisters, Register, LOCK_KEY};

/// Writes the control bits of a single pin
///
/// Each method only touches the bit (or the `GPIOPCTL` nibble) of its own
/// pin. Callers validate the pin before creating a programmer, nothing in
/// here can fail.
pub(crate) struct PinProgrammer<'r, R: PortRegisters> {
    regs: &'r mut R,
    loc: PinLocation,
}

impl<'r, R: PortRegisters> PinProgrammer<'r, R> {
    #[inline]
    pub fn new(regs: &'r mut R, loc: PinLocation) -> Self {
        PinProgrammer { regs, loc }
    }

    /// Write the key to `GPIOLOCK` and commit this pin in `GPIOCR`
    ///
    /// Must run before any other write to a protected pin, the hardware
    /// drops those writes otherwise.
    #[inline]
    pub fn unlock_if_required(&mut self) {
        if self.loc.requires_unlock() {
            self.regs.write(self.loc.port, Register::Lock, LOCK_KEY);
            self.regs
                .set_bits(self.loc.port, Register::Cr, self.loc.mask());
        }
    }

    /// Full initial setup: direction and level or resistor first, then mode
    pub fn configure(&mut self, cfg: &PinConfig, mode: SignalMode) {
        self.unlock_if_required();
        match cfg.direction {
            Direction::Output => {
                self.set_direction(Direction::Output);
                self.set_level(cfg.initial_level);
            }
            Direction::Input => {
                self.set_direction(Direction::Input);
                self.set_resistor(cfg.resistor);
            }
        }
        self.set_mode(mode);
    }

    #[inline]
    pub fn set_direction(&mut self, direction: Direction) {
        self.write_bit(Register::Dir, direction == Direction::Output);
    }

    #[inline]
    pub fn set_level(&mut self, level: PinLevel) {
        self.write_bit(Register::Data, level == PinLevel::High);
    }

    /// Pull-up and pull-down are never set at the same time. The bit being
    /// enabled is written first and the opposite one cleared afterwards.
    pub fn set_resistor(&mut self, resistor: Resistor) {
        match resistor {
            Resistor::PullUp => {
                self.write_bit(Register::Pur, true);
                self.write_bit(Register::Pdr, false);
            }
            Resistor::PullDown => {
                self.write_bit(Register::Pdr, true);
                self.write_bit(Register::Pur, false);
            }
            Resistor::Off => (),
        }
    }

    /// Route the pin to the given signal mode
    ///
    /// The digital enable bit is set last, the pin only goes live once every
    /// other field is settled.
    pub fn set_mode(&mut self, mode: SignalMode) {
        match mode {
            SignalMode::Dio => {
                let port = self.loc.port;
                self.write_bit(Register::Amsel, false);
                self.write_bit(Register::Afsel, false);
                self.regs
                    .clear_bits(port, Register::Pctl, self.loc.pctl_mask());
                self.write_bit(Register::Den, true);
            }
        }
    }

    #[inline]
    fn write_bit(&mut self, register: Register, set: bool) {
        let (port, mask) = (self.loc.port, self.loc.mask());
        if set {
            self.regs.set_bits(port, register, mask);
        } else {
            self.regs.clear_bits(port, register, mask);
        }
    }
}
