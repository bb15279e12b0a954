//! Initializes the LaunchPad pins and logs the outcome over RTT
//!
//! After the configuration pass the fixed pin directions are refreshed
//! periodically. A call which is not allowed, like changing the direction of
//! the switch input, shows up on the RTT channel.
#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};
use tm4c_port::{
    board::{self, SW1},
    diag::RttReporter,
    prelude::*,
    version::VersionInfo,
};

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("-- TM4C123 port init demo --");

    let mut port = PortDriver::with_reporter(unsafe { Mmio::new() }, RttReporter);
    let mut info = VersionInfo::default();
    if port.get_version_info(Some(&mut info)).is_ok() {
        rprintln!(
            "Port driver {}.{}.{} (vendor {}, module {})",
            info.sw_major_version,
            info.sw_minor_version,
            info.sw_patch_version,
            info.vendor_id,
            info.module_id
        );
    }

    match port.initialize(Some(&board::LAUNCHPAD)) {
        Ok(report) if report.is_complete() => rprintln!("All pins configured"),
        Ok(report) => {
            for pin in report.skipped() {
                rprintln!("Pin {} skipped", pin.0);
            }
        }
        Err(e) => rprintln!("Initialization failed: {}", e),
    }

    // Rejected and reported, SW1 has a fixed direction
    port.set_direction(SW1, Direction::Output).ok();

    let mut counter: u32 = 0;
    loop {
        cortex_m::asm::delay(25_000_000);
        if port.refresh_directions().is_ok() {
            rprintln!("{}: directions refreshed", counter);
        }
        counter = counter.wrapping_add(1);
    }
}
