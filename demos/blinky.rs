//! Simple blinky example
//!
//! The port driver has no level service, so LED1 is driven by switching its
//! direction: as output it drives the configured high level, as input the
//! pin floats and the LED goes dark.
#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_halt as _;
use tm4c_port::{
    board::{self, LED1},
    prelude::*,
};

#[entry]
fn main() -> ! {
    let mut port = PortDriver::new(unsafe { Mmio::new() });
    if port.initialize(Some(&board::LAUNCHPAD)).is_err() {
        loop {
            cortex_m::asm::wfi();
        }
    }
    let mut lit = true;
    loop {
        cortex_m::asm::delay(8_000_000);
        lit = !lit;
        let direction = if lit {
            Direction::Output
        } else {
            Direction::Input
        };
        port.set_direction(LED1, direction).ok();
    }
}
