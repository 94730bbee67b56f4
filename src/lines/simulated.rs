//! No-op line driver used when no GPIO capability is available.

use tracing::trace;

use crate::error::LineError;

use super::{LineDriver, LineId, LineMode, PinState};

/// Line driver that accepts every call and touches no hardware.
///
/// Commands stay observable through `trace` level logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedLines;

impl SimulatedLines {
    /// Create a new simulated driver.
    pub fn new() -> Self {
        Self
    }
}

impl LineDriver for SimulatedLines {
    fn configure_line(&mut self, id: LineId, mode: LineMode) -> Result<(), LineError> {
        trace!(line = id.0, ?mode, "simulated configure");
        Ok(())
    }

    fn write_line(&mut self, id: LineId, level: PinState) -> Result<(), LineError> {
        trace!(line = id.0, ?level, "simulated write");
        Ok(())
    }

    fn release_all(&mut self) -> Result<(), LineError> {
        trace!("simulated release");
        Ok(())
    }

    fn is_simulated(&self) -> bool {
        true
    }
}
