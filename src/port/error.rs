use thiserror::Error;

/// Port driver error type
///
/// Every error is detected before any register write for the affected pin or
/// field, so a failed call leaves the hardware untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PortError {
    /// `initialize` was called without a configuration
    #[error("no configuration supplied")]
    NullConfig,
    /// The configuration holds more pins than the init report can track
    #[error("configuration table exceeds 64 pins")]
    TableTooLarge,
    /// Port number outside A..F
    #[error("invalid port")]
    InvalidPort,
    /// Channel number outside 0..7
    #[error("invalid channel")]
    InvalidChannel,
    /// Logical pin index outside the configuration table
    #[error("invalid pin")]
    InvalidPin,
    /// Pin is shared with the debug interface and is never reconfigured
    #[error("pin is reserved for the debug interface")]
    ReservedPin,
    #[error("pin direction is not changeable")]
    DirectionUnchangeable,
    #[error("pin mode is not changeable")]
    ModeUnchangeable,
    #[error("unsupported pin mode")]
    UnsupportedMode,
    #[error("driver is not initialized")]
    Uninitialized,
    #[error("driver is already initialized")]
    AlreadyInitialized,
    /// An output parameter was absent
    #[error("output parameter is absent")]
    NullOutParam,
}

impl PortError {
    /// Development error code reported to the diagnostic sink
    pub const fn code(self) -> u8 {
        match self {
            PortError::InvalidPort
            | PortError::InvalidChannel
            | PortError::InvalidPin
            | PortError::ReservedPin => 0x0A,
            PortError::DirectionUnchangeable => 0x0B,
            PortError::NullConfig | PortError::TableTooLarge => 0x0C,
            PortError::UnsupportedMode => 0x0D,
            PortError::ModeUnchangeable => 0x0E,
            PortError::Uninitialized | PortError::AlreadyInitialized => 0x0F,
            PortError::NullOutParam => 0x10,
        }
    }
}
