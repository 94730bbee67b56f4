//! Deferred stop running on its own thread.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::warn;

use crate::error::{MotorError, Result};

use super::driver::Motor;

/// A stop scheduled by a timed spin.
///
/// The stop runs on a dedicated thread and cannot be cancelled. Dropping the
/// handle detaches the thread; the motor is still stopped when the duration
/// elapses. A failed write inside the thread is logged, never returned.
#[derive(Debug)]
pub struct TimedStop {
    after: Duration,
    handle: JoinHandle<()>,
}

impl TimedStop {
    pub(crate) fn spawn(motor: Motor, after: Duration) -> Result<Self> {
        let handle = thread::Builder::new()
            .name(format!("l293d-stop-{}", motor.pins().enable))
            .spawn(move || {
                if let Err(e) = motor.stop(after) {
                    warn!(pins = %motor.pins(), error = %e, "timed stop failed");
                }
            })
            .map_err(|_| MotorError::SpawnFailed)?;

        Ok(Self { after, handle })
    }

    /// Delay before the stop is issued.
    #[inline]
    pub fn after(&self) -> Duration {
        self.after
    }

    /// Check if the stop has already run.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the stop has run.
    ///
    /// # Errors
    ///
    /// [`MotorError::StopPanicked`] if the stop thread panicked.
    pub fn join(self) -> Result<()> {
        self.handle
            .join()
            .map_err(|_| MotorError::StopPanicked.into())
    }
}
