//! # Port driver
//!
//! [`PortDriver`] owns the register interface, the diagnostic reporter and the
//! binding to the configuration table. It is driven by one
//! [`initialize`](PortDriver::initialize) call which programs every pin of the
//! table, and by the runtime services
//! [`set_direction`](PortDriver::set_direction),
//! [`set_mode`](PortDriver::set_mode) and
//! [`refresh_directions`](PortDriver::refresh_directions).
//!
//! ```no_run
//! use tm4c_port::{board, port::{Direction, Mmio, Pin, PortDriver}};
//!
//! let mut port = PortDriver::new(unsafe { Mmio::new() });
//! port.initialize(Some(&board::LAUNCHPAD)).unwrap();
//! port.set_direction(Pin(0), Direction::Input).unwrap();
//! ```
//!
//! Every failed call returns the [`PortError`] and also forwards it to the
//! [`ErrorReporter`]. A failed call never writes a register for the affected
//! pin.
//!
//! Initialization is best-effort: pins with an invalid location, an
//! unsupported mode or a reserved debug pin are skipped, the remaining pins
//! are programmed and the driver ends up initialized. The skipped pins are
//! listed in the returned [`InitReport`] and are left alone by
//! [`refresh_directions`](PortDriver::refresh_directions).
use super::config::{Direction, Pin, PinConfig, PinMode, PortConfig};
use super::error::PortError;
use super::id::{PinLocation, PortId};
use super::program::PinProgrammer;
use super::reg::PortRegisters;
use crate::clock::PortClocks;
use crate::diag::{ErrorReporter, Fault, NoReporter, ServiceId};
use crate::version::{self, VersionInfo};
use core::convert::TryFrom;
use once_cell::unsync::OnceCell;

/// Largest configuration table the driver accepts
pub const MAX_PINS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Uninitialized,
    Initialized,
}

/// Outcome of the configuration pass, one bit per logical pin
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InitReport {
    skipped: u64,
}

impl InitReport {
    #[inline]
    fn skip(&mut self, idx: usize) {
        self.skipped |= 1 << idx;
    }

    /// `true` if every pin of the table was programmed
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.skipped == 0
    }

    #[inline]
    pub fn is_skipped(&self, pin: Pin) -> bool {
        pin.index() < MAX_PINS && self.skipped & (1 << pin.index()) != 0
    }

    #[inline]
    pub fn skipped_count(&self) -> u32 {
        self.skipped.count_ones()
    }

    /// Logical pins which were not programmed
    pub fn skipped(&self) -> impl Iterator<Item = Pin> + '_ {
        (0..MAX_PINS as u8)
            .map(Pin)
            .filter(move |pin| self.is_skipped(*pin))
    }
}

pub struct PortDriver<'a, R: PortRegisters, E: ErrorReporter = NoReporter> {
    regs: R,
    reporter: E,
    config: OnceCell<&'a PortConfig<'a>>,
    report: InitReport,
    state: DriverState,
}

impl<'a, R: PortRegisters> PortDriver<'a, R> {
    /// Create an uninitialized driver which does not report faults
    pub fn new(regs: R) -> Self {
        Self::with_reporter(regs, NoReporter)
    }
}

impl<'a, R: PortRegisters, E: ErrorReporter> PortDriver<'a, R, E> {
    /// Create an uninitialized driver which reports faults to `reporter`
    pub fn with_reporter(regs: R, reporter: E) -> Self {
        PortDriver {
            regs,
            reporter,
            config: OnceCell::new(),
            report: InitReport::default(),
            state: DriverState::Uninitialized,
        }
    }

    #[inline]
    pub fn state(&self) -> DriverState {
        self.state
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.state == DriverState::Initialized
    }

    /// The bound configuration table, if any
    #[inline]
    pub fn config(&self) -> Option<&'a PortConfig<'a>> {
        self.config.get().copied()
    }

    /// Outcome of the last configuration pass
    #[inline]
    pub fn init_report(&self) -> InitReport {
        self.report
    }

    #[inline]
    pub fn registers(&self) -> &R {
        &self.regs
    }

    #[inline]
    pub fn reporter(&self) -> &E {
        &self.reporter
    }

    /// Release the register interface and the reporter
    pub fn release(self) -> (R, E) {
        (self.regs, self.reporter)
    }

    //==============================================================================================
    // Services
    //==============================================================================================

    /// Bind the configuration table and program every pin in it
    ///
    /// The clock of each port referenced by the table is enabled exactly once.
    /// Fails without touching any register if `config` is absent, if it holds
    /// more than [`MAX_PINS`] entries or if a table is already bound.
    pub fn initialize(
        &mut self,
        config: Option<&'a PortConfig<'a>>,
    ) -> Result<InitReport, PortError> {
        let result = self.try_initialize(config);
        self.reported(ServiceId::Init, result)
    }

    /// Change the direction of a pin whose direction is changeable
    ///
    /// Only the direction bit moves, level and resistor are not re-applied.
    pub fn set_direction(&mut self, pin: Pin, direction: Direction) -> Result<(), PortError> {
        let result = self.try_set_direction(pin, direction);
        self.reported(ServiceId::SetPinDirection, result)
    }

    /// Change the signal mode of a pin whose mode is changeable
    pub fn set_mode(&mut self, pin: Pin, mode: PinMode) -> Result<(), PortError> {
        let result = self.try_set_mode(pin, mode);
        self.reported(ServiceId::SetPinMode, result)
    }

    /// Re-apply the configured direction of every pin whose direction is not
    /// changeable
    ///
    /// Pins with a changeable direction are left untouched. Calling this
    /// repeatedly yields the same hardware state as calling it once.
    pub fn refresh_directions(&mut self) -> Result<(), PortError> {
        let config = match self.bound_config() {
            Ok(config) => config,
            Err(error) => return Err(self.fault(ServiceId::RefreshPortDirection, error)),
        };
        for (idx, cfg) in config.pins().iter().enumerate() {
            if cfg.direction_changeable || self.report.is_skipped(Pin(idx as u8)) {
                continue;
            }
            match cfg.location().and_then(PinLocation::writable) {
                Ok(loc) => self.regs.free(|regs| {
                    let mut pin = PinProgrammer::new(regs, loc);
                    pin.unlock_if_required();
                    pin.set_direction(cfg.direction);
                }),
                Err(error) => {
                    self.fault(ServiceId::RefreshPortDirection, error);
                }
            }
        }
        Ok(())
    }

    /// Copy the module version information into `out`
    ///
    /// Does not depend on the driver state.
    pub fn get_version_info(&mut self, out: Option<&mut VersionInfo>) -> Result<(), PortError> {
        match out {
            Some(info) => {
                *info = version::version_info();
                Ok(())
            }
            None => Err(self.fault(ServiceId::GetVersionInfo, PortError::NullOutParam)),
        }
    }

    //==============================================================================================
    // Internals
    //==============================================================================================

    fn try_initialize(&mut self, config: Option<&'a PortConfig<'a>>) -> Result<InitReport, PortError> {
        let config = config.ok_or(PortError::NullConfig)?;
        if config.len() > MAX_PINS {
            return Err(PortError::TableTooLarge);
        }
        self.config
            .set(config)
            .map_err(|_| PortError::AlreadyInitialized)?;

        let mut clocks = PortClocks::default();
        let mut report = InitReport::default();
        for (idx, cfg) in config.pins().iter().enumerate() {
            if let Err(error) = self.configure_one(cfg, &mut clocks) {
                self.fault(ServiceId::Init, error);
                report.skip(idx);
            }
        }
        self.report = report;
        self.state = DriverState::Initialized;
        Ok(report)
    }

    fn configure_one(&mut self, cfg: &PinConfig, clocks: &mut PortClocks) -> Result<(), PortError> {
        let port = PortId::try_from(cfg.port)?;
        if clocks.insert(port) {
            self.regs.enable_clock(port);
        }
        let loc = cfg.location()?.writable()?;
        let mode = cfg.mode.signal()?;
        self.regs
            .free(|regs| PinProgrammer::new(regs, loc).configure(cfg, mode));
        Ok(())
    }

    fn try_set_direction(&mut self, pin: Pin, direction: Direction) -> Result<(), PortError> {
        let cfg = self.bound_pin(pin)?;
        if !cfg.direction_changeable {
            return Err(PortError::DirectionUnchangeable);
        }
        let loc = cfg.location()?.writable()?;
        self.regs.free(|regs| {
            let mut pin = PinProgrammer::new(regs, loc);
            pin.unlock_if_required();
            pin.set_direction(direction);
        });
        Ok(())
    }

    fn try_set_mode(&mut self, pin: Pin, mode: PinMode) -> Result<(), PortError> {
        let cfg = self.bound_pin(pin)?;
        if !cfg.mode_changeable {
            return Err(PortError::ModeUnchangeable);
        }
        let mode = mode.signal()?;
        let loc = cfg.location()?.writable()?;
        self.regs.free(|regs| {
            let mut pin = PinProgrammer::new(regs, loc);
            pin.unlock_if_required();
            pin.set_mode(mode);
        });
        Ok(())
    }

    fn bound_config(&self) -> Result<&'a PortConfig<'a>, PortError> {
        match (self.state, self.config.get()) {
            (DriverState::Initialized, Some(config)) => Ok(*config),
            _ => Err(PortError::Uninitialized),
        }
    }

    fn bound_pin(&self, pin: Pin) -> Result<&'a PinConfig, PortError> {
        self.bound_config()?.get(pin).ok_or(PortError::InvalidPin)
    }

    fn fault(&mut self, service: ServiceId, error: PortError) -> PortError {
        self.reporter.report(Fault::new(service, error));
        error
    }

    #[inline]
    fn reported<T>(&mut self, service: ServiceId, result: Result<T, PortError>) -> Result<T, PortError> {
        result.map_err(|error| self.fault(service, error))
    }
}
