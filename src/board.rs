//! Build-time configuration tables
use crate::port::{Direction, Pin, PinConfig, PinLevel, PinMode, PortConfig, Resistor};

/// Red user LED of the EK-TM4C123GXL
pub const LED1: Pin = Pin(0);
/// Left user switch of the EK-TM4C123GXL
pub const SW1: Pin = Pin(1);

const LAUNCHPAD_PINS: [PinConfig; 2] = [
    // LED1: PF1
    PinConfig {
        port: 5,
        channel: 1,
        mode: PinMode::DIO,
        direction: Direction::Output,
        initial_level: PinLevel::High,
        direction_changeable: true,
        mode_changeable: true,
        resistor: Resistor::Off,
    },
    // SW1: PF4, active low
    PinConfig {
        port: 5,
        channel: 4,
        mode: PinMode::DIO,
        direction: Direction::Input,
        initial_level: PinLevel::Low,
        direction_changeable: false,
        mode_changeable: true,
        resistor: Resistor::PullUp,
    },
];

/// Pin configuration of the EK-TM4C123GXL LaunchPad
pub static LAUNCHPAD: PortConfig<'static> = PortConfig::new(&LAUNCHPAD_PINS);
