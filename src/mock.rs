//! Recording model of the GPIO port blocks for host tests
//!
//! The model keeps the register values of all six ports and mimics the commit
//! protection of the hardware: bits of `AFSEL`, `PUR`, `PDR` and `DEN` which
//! are clear in `CR` ignore writes, and `CR` itself only accepts writes after
//! the key was written to `LOCK`. Every write and every clock enable is
//! appended to a trace.
//!
//! [`MockPorts`] is a handle. Clones share the same model, so a test can keep
//! one clone to inspect or disturb the registers while the driver owns another.
use crate::diag::{ErrorReporter, Fault};
use crate::port::{PortId, PortRegisters, Register, LOCK_KEY};
use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

pub type Snapshot = [[u32; Register::COUNT]; PortId::COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Write {
        port: PortId,
        register: Register,
        value: u32,
    },
    Clock(PortId),
}

struct Model {
    regs: Snapshot,
    unlocked: [bool; PortId::COUNT],
    rcgcgpio: u32,
    trace: Vec<Access>,
}

#[derive(Clone)]
pub struct MockPorts {
    model: Rc<RefCell<Model>>,
}

impl MockPorts {
    /// Port registers with their reset values
    pub fn new() -> Self {
        let mut regs = [[0; Register::COUNT]; PortId::COUNT];
        for port in regs.iter_mut() {
            port[Register::Cr.index()] = 0xFF;
        }
        regs[PortId::D.index()][Register::Cr.index()] = 0x7F;
        regs[PortId::F.index()][Register::Cr.index()] = 0xFE;
        // PC0..PC3 come out of reset routed to JTAG
        let portc = &mut regs[PortId::C.index()];
        portc[Register::Afsel.index()] = 0x0F;
        portc[Register::Den.index()] = 0x0F;
        portc[Register::Pur.index()] = 0x0F;
        portc[Register::Pctl.index()] = 0x0000_1111;
        MockPorts {
            model: Rc::new(RefCell::new(Model {
                regs,
                unlocked: [false; PortId::COUNT],
                rcgcgpio: 0,
                trace: Vec::new(),
            })),
        }
    }

    pub fn get(&self, port: PortId, register: Register) -> u32 {
        self.model.borrow().regs[port.index()][register.index()]
    }

    pub fn bit(&self, port: PortId, register: Register, channel: u8) -> bool {
        self.get(port, register) & (1 << channel) != 0
    }

    /// Overwrite a register behind the driver's back, bypassing the trace
    pub fn poke(&self, port: PortId, register: Register, value: u32) {
        self.model.borrow_mut().regs[port.index()][register.index()] = value;
    }

    pub fn snapshot(&self) -> Snapshot {
        self.model.borrow().regs
    }

    pub fn rcgcgpio(&self) -> u32 {
        self.model.borrow().rcgcgpio
    }

    pub fn trace(&self) -> Vec<Access> {
        self.model.borrow().trace.clone()
    }

    pub fn trace_len(&self) -> usize {
        self.model.borrow().trace.len()
    }

    /// Registers of `port` written from trace position `start` on, in order
    pub fn writes_to(&self, port: PortId, start: usize) -> Vec<Register> {
        self.model.borrow().trace[start..]
            .iter()
            .filter_map(|access| match *access {
                Access::Write {
                    port: p, register, ..
                } if p == port => Some(register),
                _ => None,
            })
            .collect()
    }

    pub fn clock_enables(&self, port: PortId) -> usize {
        self.model
            .borrow()
            .trace
            .iter()
            .filter(|access| **access == Access::Clock(port))
            .count()
    }

    pub fn write_count(&self) -> usize {
        self.model
            .borrow()
            .trace
            .iter()
            .filter(|access| matches!(access, Access::Write { .. }))
            .count()
    }
}

unsafe impl PortRegisters for MockPorts {
    fn read(&self, port: PortId, register: Register) -> u32 {
        match register {
            Register::Lock => !self.model.borrow().unlocked[port.index()] as u32,
            _ => self.get(port, register),
        }
    }

    fn write(&mut self, port: PortId, register: Register, value: u32) {
        let mut model = self.model.borrow_mut();
        model.trace.push(Access::Write {
            port,
            register,
            value,
        });
        let p = port.index();
        match register {
            Register::Lock => model.unlocked[p] = value == LOCK_KEY,
            Register::Cr => {
                if model.unlocked[p] {
                    model.regs[p][Register::Cr.index()] = value & 0xFF;
                }
            }
            Register::Afsel | Register::Pur | Register::Pdr | Register::Den => {
                let cr = model.regs[p][Register::Cr.index()];
                let old = model.regs[p][register.index()];
                model.regs[p][register.index()] = (old & !cr) | (value & cr);
            }
            _ => model.regs[p][register.index()] = value,
        }
    }

    fn enable_clock(&mut self, port: PortId) {
        let mut model = self.model.borrow_mut();
        model.trace.push(Access::Clock(port));
        model.rcgcgpio |= 1 << port.index();
    }
}

/// Reporter which keeps every fault
#[derive(Default)]
pub struct RecordingReporter {
    pub faults: Vec<Fault>,
}

impl ErrorReporter for RecordingReporter {
    fn report(&mut self, fault: Fault) {
        self.faults.push(fault);
    }
}
