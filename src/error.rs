//! Error types for the l293d library.
//!
//! Provides unified error handling across configuration, pin allocation,
//! line I/O and motor commands.

use core::fmt;

use crate::config::PinNumbering;
use crate::lines::LineId;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all l293d operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Pin selection error raised while constructing a motor
    Pin(PinError),
    /// I/O capability error
    Line(LineError),
    /// Motor command error
    Motor(MotorError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Pin numbering is neither `BOARD` nor `BCM`
    InvalidScheme(heapless::String<32>),
    /// Motor name not found in configuration
    MotorNotFound(heapless::String<32>),
    /// Motor builder finished without one of its lines
    MissingPin(&'static str),
    /// File I/O error
    IoError(heapless::String<128>),
}

/// Pin selection errors.
///
/// All of these are raised before any line is configured or registered,
/// and the caller recovers by choosing different lines.
#[derive(Debug, Clone, PartialEq)]
pub enum PinError {
    /// Line is not in the valid set of the active numbering
    InvalidPin {
        /// Offending line
        line: LineId,
        /// Numbering the line was checked against
        numbering: PinNumbering,
    },
    /// Same line given twice for one motor
    DuplicatePin(LineId),
    /// Line already owned by another motor
    PinConflict(LineId),
}

/// Errors reported by a [`LineDriver`](crate::lines::LineDriver).
#[derive(Debug, Clone, PartialEq)]
pub enum LineError {
    /// No physical line is attached for this identifier
    Unavailable(LineId),
    /// Line was written before being configured as an output
    NotConfigured(LineId),
    /// The underlying pin rejected the write
    WriteFailed(LineId),
    /// One or more lines could not be released
    ReleaseFailed,
}

/// Motor command errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorError {
    /// The timed stop thread could not be started
    SpawnFailed,
    /// The timed stop thread panicked before stopping the motor
    StopPanicked,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Pin(e) => write!(f, "Pin error: {}", e),
            Error::Line(e) => write!(f, "Line error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidScheme(name) => {
                write!(f, "Invalid pin numbering '{}'. Must be either 'BOARD' or 'BCM'", name)
            }
            ConfigError::MotorNotFound(name) => write!(f, "Motor '{}' not found", name),
            ConfigError::MissingPin(role) => write!(f, "{} pin is required", role),
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinError::InvalidPin { line, numbering } => {
                write!(f, "GPIO pin {} is not valid in {} numbering. Valid pins: ", line, numbering)?;
                for (i, valid) in numbering.valid_lines().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", valid)?;
                }
                f.write_str(". To use it anyway, set force_selection")
            }
            PinError::DuplicatePin(line) => write!(f, "GPIO pin {} given more than once", line),
            PinError::PinConflict(line) => write!(f, "GPIO pin {} already in use", line),
        }
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::Unavailable(line) => write!(f, "No output attached to line {}", line),
            LineError::NotConfigured(line) => write!(f, "Line {} is not configured as an output", line),
            LineError::WriteFailed(line) => write!(f, "Write to line {} failed", line),
            LineError::ReleaseFailed => write!(f, "Failed to release configured lines"),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::SpawnFailed => write!(f, "Could not start timed stop"),
            MotorError::StopPanicked => write!(f, "Timed stop panicked"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<PinError> for Error {
    fn from(e: PinError) -> Self {
        Error::Pin(e)
    }
}

impl From<LineError> for Error {
    fn from(e: LineError) -> Self {
        Error::Line(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl std::error::Error for Error {}

impl std::error::Error for ConfigError {}

impl std::error::Error for PinError {}

impl std::error::Error for LineError {}

impl std::error::Error for MotorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pin_lists_valid_lines() {
        let err = PinError::InvalidPin {
            line: LineId(3),
            numbering: PinNumbering::Board,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("GPIO pin 3 is not valid in BOARD numbering"));
        assert!(msg.contains("7, 11, 12, 13, 15, 16, 18, 22, 29, 31, 32, 33, 36, 37"));
        assert!(msg.ends_with("set force_selection"));
    }

    #[test]
    fn test_conversion_wraps_variant() {
        let err: Error = PinError::PinConflict(LineId(11)).into();
        assert_eq!(err, Error::Pin(PinError::PinConflict(LineId(11))));
        assert_eq!(err.to_string(), "Pin error: GPIO pin 11 already in use");
    }
}
