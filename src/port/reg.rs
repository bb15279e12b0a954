use super::id::PortId;
use crate::clock;
use core::mem::offset_of;
use vcell::VolatileCell;

/// Value which has to be written to `GPIOLOCK` before `GPIOCR` accepts writes
pub const LOCK_KEY: u32 = 0x4C4F_434B;

//==================================================================================================
// Register Block
//==================================================================================================

/// Memory layout of one GPIO port block (APB aperture)
///
/// Only the registers the port driver touches are named. The data register is
/// placed at the end of the address-mask window (offset `0x3FC`) so that reads
/// and writes cover all eight bits.
#[repr(C)]
pub struct RegisterBlock {
    _reserved0: [u32; 255],
    pub data: VolatileCell<u32>,
    pub dir: VolatileCell<u32>,
    pub is: VolatileCell<u32>,
    pub ibe: VolatileCell<u32>,
    pub iev: VolatileCell<u32>,
    pub im: VolatileCell<u32>,
    pub ris: VolatileCell<u32>,
    pub mis: VolatileCell<u32>,
    pub icr: VolatileCell<u32>,
    pub afsel: VolatileCell<u32>,
    _reserved1: [u32; 55],
    pub dr2r: VolatileCell<u32>,
    pub dr4r: VolatileCell<u32>,
    pub dr8r: VolatileCell<u32>,
    pub odr: VolatileCell<u32>,
    pub pur: VolatileCell<u32>,
    pub pdr: VolatileCell<u32>,
    pub slr: VolatileCell<u32>,
    pub den: VolatileCell<u32>,
    pub lock: VolatileCell<u32>,
    pub cr: VolatileCell<u32>,
    pub amsel: VolatileCell<u32>,
    pub pctl: VolatileCell<u32>,
    pub adcctl: VolatileCell<u32>,
    pub dmactl: VolatileCell<u32>,
}

const _: () = {
    assert!(offset_of!(RegisterBlock, data) == 0x3FC);
    assert!(offset_of!(RegisterBlock, dir) == 0x400);
    assert!(offset_of!(RegisterBlock, afsel) == 0x420);
    assert!(offset_of!(RegisterBlock, pur) == 0x510);
    assert!(offset_of!(RegisterBlock, pdr) == 0x514);
    assert!(offset_of!(RegisterBlock, den) == 0x51C);
    assert!(offset_of!(RegisterBlock, lock) == 0x520);
    assert!(offset_of!(RegisterBlock, cr) == 0x524);
    assert!(offset_of!(RegisterBlock, amsel) == 0x528);
    assert!(offset_of!(RegisterBlock, pctl) == 0x52C);
};

impl RegisterBlock {
    #[inline]
    fn cell(&self, register: Register) -> &VolatileCell<u32> {
        match register {
            Register::Data => &self.data,
            Register::Dir => &self.dir,
            Register::Afsel => &self.afsel,
            Register::Pur => &self.pur,
            Register::Pdr => &self.pdr,
            Register::Den => &self.den,
            Register::Lock => &self.lock,
            Register::Cr => &self.cr,
            Register::Amsel => &self.amsel,
            Register::Pctl => &self.pctl,
        }
    }
}

/// Registers of a port block which the driver programs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    Data,
    Dir,
    Afsel,
    Pur,
    Pdr,
    Den,
    Lock,
    Cr,
    Amsel,
    Pctl,
}

impl Register {
    pub const COUNT: usize = 10;

    pub const ALL: [Register; Register::COUNT] = [
        Register::Data,
        Register::Dir,
        Register::Afsel,
        Register::Pur,
        Register::Pdr,
        Register::Den,
        Register::Lock,
        Register::Cr,
        Register::Amsel,
        Register::Pctl,
    ];

    /// Register offset from the port base address
    pub const fn offset(self) -> usize {
        match self {
            Register::Data => 0x3FC,
            Register::Dir => 0x400,
            Register::Afsel => 0x420,
            Register::Pur => 0x510,
            Register::Pdr => 0x514,
            Register::Den => 0x51C,
            Register::Lock => 0x520,
            Register::Cr => 0x524,
            Register::Amsel => 0x528,
            Register::Pctl => 0x52C,
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

//==================================================================================================
// Register Interface
//==================================================================================================

/// Register access used by the port driver
///
/// The driver never dereferences an address itself. Every access goes through
/// this trait, identified by a [`PortId`] and a named [`Register`], so the same
/// sequencing logic runs against the memory mapped hardware ([`Mmio`]) or any
/// other backend, for example a recording model of the port blocks.
///
/// # Safety
///
/// Implementers must guarantee that they have exclusive control over the
/// registers of all six port blocks and the GPIO clock gate, and that
/// [`read`](Self::read) and [`write`](Self::write) reach the register named by
/// the arguments in program order. [`free`](Self::free) must run its closure
/// without being interleaved with any other access to the port registers.
pub unsafe trait PortRegisters {
    /// Read the current value of a register
    fn read(&self, port: PortId, register: Register) -> u32;

    /// Write a full register value
    fn write(&mut self, port: PortId, register: Register, value: u32);

    /// Enable the run mode clock gate of a port
    fn enable_clock(&mut self, port: PortId);

    /// Run a sequence of accesses as one critical section
    #[inline]
    fn free<T, F>(&mut self, f: F) -> T
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> T,
    {
        f(self)
    }

    #[inline]
    fn modify<F>(&mut self, port: PortId, register: Register, f: F)
    where
        Self: Sized,
        F: FnOnce(u32) -> u32,
    {
        let value = self.read(port, register);
        self.write(port, register, f(value));
    }

    #[inline]
    fn set_bits(&mut self, port: PortId, register: Register, mask: u32)
    where
        Self: Sized,
    {
        self.modify(port, register, |r| r | mask);
    }

    #[inline]
    fn clear_bits(&mut self, port: PortId, register: Register, mask: u32)
    where
        Self: Sized,
    {
        self.modify(port, register, |r| r & !mask);
    }
}

/// Memory mapped access to the GPIO port blocks and the GPIO clock gate
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Create the register interface
    ///
    /// # Safety
    ///
    /// There must be at most one instance of [`Mmio`] at any given time, and no
    /// other code may write the GPIO port registers or `RCGCGPIO` while it
    /// exists.
    #[inline]
    pub unsafe fn new() -> Self {
        Mmio { _private: () }
    }

    #[inline]
    fn block(&self, port: PortId) -> &RegisterBlock {
        // Safety: The base address comes from the fixed memory map and the
        // block stays mapped for the lifetime of the program
        unsafe { &*port.ptr() }
    }
}

// [`Mmio`] is a singleton by construction, see [`Mmio::new`]
unsafe impl PortRegisters for Mmio {
    #[inline]
    fn read(&self, port: PortId, register: Register) -> u32 {
        self.block(port).cell(register).get()
    }

    #[inline]
    fn write(&mut self, port: PortId, register: Register, value: u32) {
        self.block(port).cell(register).set(value);
    }

    #[inline]
    fn enable_clock(&mut self, port: PortId) {
        clock::enable_gpio_clock(port);
    }

    #[inline]
    fn free<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut Self) -> T,
    {
        cortex_m::interrupt::free(|_| f(self))
    }
}
