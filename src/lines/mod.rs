//! Digital output lines.
//!
//! The core never touches hardware directly. Every write goes through a
//! [`LineDriver`], which is either backed by embedded-hal pins
//! ([`HalLines`]) or a no-op simulation ([`SimulatedLines`]).

mod hal;
mod registry;
mod simulated;

use core::fmt;
use std::sync::Arc;

pub use embedded_hal::digital::PinState;
use parking_lot::Mutex;
use serde::Deserialize;

use crate::error::LineError;

pub use hal::{HalLines, MAX_LINES};
pub use registry::LineRegistry;
pub use simulated::SimulatedLines;

/// Identifier of an I/O line, relative to the active pin numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u8);

impl LineId {
    /// Create a new line identifier.
    #[inline]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for LineId {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mode a line is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMode {
    /// Push-pull digital output.
    Output,
}

/// Capability to configure and drive digital lines.
pub trait LineDriver: Send {
    /// Configure a line before it is first written.
    fn configure_line(&mut self, id: LineId, mode: LineMode) -> Result<(), LineError>;

    /// Drive a configured line to the given level.
    fn write_line(&mut self, id: LineId, level: PinState) -> Result<(), LineError>;

    /// Release every configured line.
    fn release_all(&mut self) -> Result<(), LineError>;

    /// Whether writes are discarded instead of reaching hardware.
    fn is_simulated(&self) -> bool {
        false
    }
}

impl<T: LineDriver + ?Sized> LineDriver for Box<T> {
    fn configure_line(&mut self, id: LineId, mode: LineMode) -> Result<(), LineError> {
        (**self).configure_line(id, mode)
    }

    fn write_line(&mut self, id: LineId, level: PinState) -> Result<(), LineError> {
        (**self).write_line(id, level)
    }

    fn release_all(&mut self) -> Result<(), LineError> {
        (**self).release_all()
    }

    fn is_simulated(&self) -> bool {
        (**self).is_simulated()
    }
}

/// Line driver shared by every motor of a system.
pub type SharedLines = Arc<Mutex<Box<dyn LineDriver>>>;

/// Wrap a line driver so it can be shared between motors and timed stops.
pub fn shared<L: LineDriver + 'static>(lines: L) -> SharedLines {
    Arc::new(Mutex::new(Box::new(lines)))
}

/// Registry shared by a system and the builders it hands out.
pub type SharedRegistry = Arc<Mutex<LineRegistry>>;
