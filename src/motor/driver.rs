//! DC motor driven through one L293D channel.

use std::sync::{Arc, Weak};
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::config::PinNumbering;
use crate::error::Result;
use crate::lines::{LineDriver, PinState, SharedLines};

use super::pins::MotorPins;
use super::state::Direction;
use super::timed::TimedStop;

/// What the motor's lines were last driven to.
#[derive(Debug, Default)]
struct DriveState {
    /// Logical direction, follows the enable line.
    direction: Direction,
    /// Direction the forward/reverse pair was last set for.
    lines_set_for: Option<Direction>,
}

struct MotorShared {
    pins: MotorPins,
    numbering: PinNumbering,
    verbose: bool,
    lines: SharedLines,
    state: Mutex<DriveState>,
}

/// A DC motor on one L293D channel.
///
/// Cloning is cheap and yields a handle to the same motor, which is how
/// [`TimedStop`] reaches it from its own thread. Lines stay claimed for the
/// life of the owning [`MotorSystem`](super::MotorSystem) and are only
/// released by its cleanup.
///
/// Timed stops are never cancelled. If two overlap on the same motor,
/// whichever fires last decides the final state.
#[derive(Clone)]
pub struct Motor {
    shared: Arc<MotorShared>,
}

/// Weak reference a system keeps to every motor it built.
#[derive(Clone)]
pub(crate) struct MotorHandle(Weak<MotorShared>);

impl MotorHandle {
    pub(crate) fn upgrade(&self) -> Option<Motor> {
        self.0.upgrade().map(|shared| Motor { shared })
    }
}

/// Motors built by one system, shared with its builders.
pub(crate) type SharedMotors = Arc<Mutex<Vec<MotorHandle>>>;

/// Run `release` while every motor's drive state is held.
///
/// On success all lines are low, so each motor is marked stopped with its
/// direction lines unset. On failure the states are left as they were.
pub(crate) fn release_with<E>(
    motors: &[Motor],
    release: impl FnOnce() -> core::result::Result<(), E>,
) -> core::result::Result<(), E> {
    let mut states: Vec<_> = motors.iter().map(|m| m.shared.state.lock()).collect();
    release()?;
    for state in states.iter_mut() {
        **state = DriveState::default();
    }
    Ok(())
}

impl Motor {
    pub(crate) fn new(
        pins: MotorPins,
        numbering: PinNumbering,
        verbose: bool,
        lines: SharedLines,
    ) -> Self {
        Self {
            shared: Arc::new(MotorShared {
                pins,
                numbering,
                verbose,
                lines,
                state: Mutex::new(DriveState::default()),
            }),
        }
    }

    pub(crate) fn handle(&self) -> MotorHandle {
        MotorHandle(Arc::downgrade(&self.shared))
    }

    /// Get the motor's lines.
    #[inline]
    pub fn pins(&self) -> MotorPins {
        self.shared.pins
    }

    /// Get the numbering the lines were validated against.
    #[inline]
    pub fn numbering(&self) -> PinNumbering {
        self.shared.numbering
    }

    /// Get the current logical direction.
    pub fn direction(&self) -> Direction {
        self.shared.state.lock().direction
    }

    /// Check if the enable line is high.
    pub fn is_running(&self) -> bool {
        self.direction().is_running()
    }

    /// Drive the lines for `direction`.
    ///
    /// - `Stopped`: enable low, direction lines untouched.
    /// - `Clockwise`: forward high, reverse low, then enable high.
    /// - `Anticlockwise`: reverse high, forward low, then enable high.
    ///
    /// When the direction lines were last set the other way round, enable is
    /// first dropped (if running) and the old high line pulled low, so the
    /// chip never sees forward and reverse high together.
    ///
    /// # Errors
    ///
    /// Returns the first [`LineError`](crate::error::LineError); later writes
    /// of the sequence are skipped.
    pub fn drive(&self, direction: Direction) -> Result<()> {
        let pins = self.shared.pins;
        let mut state = self.shared.state.lock();
        let mut lines = self.shared.lines.lock();

        let (high, low) = match pins.direction_lines(direction) {
            Some(pair) => pair,
            None => {
                lines.write_line(pins.enable, PinState::Low)?;
                state.direction = Direction::Stopped;
                return Ok(());
            }
        };

        if state.lines_set_for == Some(direction.opposite()) {
            if state.direction.is_running() {
                lines.write_line(pins.enable, PinState::Low)?;
                state.direction = Direction::Stopped;
            }
            lines.write_line(low, PinState::Low)?;
            state.lines_set_for = None;
        }

        lines.write_line(high, PinState::High)?;
        state.lines_set_for = Some(direction);
        lines.write_line(low, PinState::Low)?;
        lines.write_line(pins.enable, PinState::High)?;
        state.direction = direction;
        Ok(())
    }

    /// Spin clockwise, optionally stopping after `duration`.
    ///
    /// With `wait` the call blocks until the motor has stopped and returns
    /// `None`. Without it the pending stop is returned and runs on its own
    /// thread. A zero duration stops immediately without spawning anything.
    pub fn spin_clockwise(
        &self,
        duration: Option<Duration>,
        wait: bool,
    ) -> Result<Option<TimedStop>> {
        self.spin(Direction::Clockwise, duration, wait)
    }

    /// Spin anticlockwise, optionally stopping after `duration`.
    ///
    /// See [`spin_clockwise`](Self::spin_clockwise).
    pub fn spin_anticlockwise(
        &self,
        duration: Option<Duration>,
        wait: bool,
    ) -> Result<Option<TimedStop>> {
        self.spin(Direction::Anticlockwise, duration, wait)
    }

    /// Alias of [`spin_clockwise`](Self::spin_clockwise).
    #[inline]
    pub fn clockwise(
        &self,
        duration: Option<Duration>,
        wait: bool,
    ) -> Result<Option<TimedStop>> {
        self.spin_clockwise(duration, wait)
    }

    /// Alias of [`spin_anticlockwise`](Self::spin_anticlockwise).
    #[inline]
    pub fn anticlockwise(
        &self,
        duration: Option<Duration>,
        wait: bool,
    ) -> Result<Option<TimedStop>> {
        self.spin_anticlockwise(duration, wait)
    }

    /// Stop the motor, first sleeping for `after` if it is non-zero.
    pub fn stop(&self, after: Duration) -> Result<()> {
        if !after.is_zero() {
            thread::sleep(after);
        }
        self.report("stopping motor", Direction::Stopped);
        self.drive(Direction::Stopped)
    }

    fn spin(
        &self,
        direction: Direction,
        duration: Option<Duration>,
        wait: bool,
    ) -> Result<Option<TimedStop>> {
        self.report("spinning motor", direction);
        self.drive(direction)?;

        match duration {
            None => Ok(None),
            Some(after) if after.is_zero() => {
                self.stop(Duration::ZERO)?;
                Ok(None)
            }
            Some(after) => {
                let pending = TimedStop::spawn(self.clone(), after)?;
                if wait {
                    pending.join()?;
                    Ok(None)
                } else {
                    Ok(Some(pending))
                }
            }
        }
    }

    fn report(&self, action: &str, direction: Direction) {
        let shared = &self.shared;
        if shared.verbose {
            info!(numbering = %shared.numbering, pins = %shared.pins, %direction, "{}", action);
        } else {
            debug!(numbering = %shared.numbering, pins = %shared.pins, %direction, "{}", action);
        }
    }
}

impl core::fmt::Debug for Motor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Motor")
            .field("pins", &self.shared.pins)
            .field("numbering", &self.shared.numbering)
            .field("direction", &self.direction())
            .finish()
    }
}

impl core::fmt::Display for Motor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "motor at {} pins {}", self.shared.numbering, self.shared.pins)
    }
}
