//! Motor system facade.
//!
//! Owns the pin numbering, the line driver and the line registry that every
//! motor built from it shares.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{info, warn};

use crate::config::{truncated, validate_config, PinNumbering, SystemConfig};
use crate::error::{ConfigError, Error, LineError, Result};
use crate::lines::{
    self, LineDriver, LineId, LineRegistry, SharedLines, SharedRegistry, SimulatedLines,
};

use super::builder::MotorBuilder;
use super::driver::{self, Motor, SharedMotors};
use super::pins::MotorPins;

/// A facade for building L293D motors on one I/O capability.
///
/// `MotorSystem` provides:
/// - A numbering fixed for its lifetime
/// - Either a real line driver or the no-op simulation, chosen up front
/// - Motor construction with exclusive line ownership
/// - Global cleanup
///
/// # Example
///
/// ```rust,ignore
/// use l293d::{LineId, MotorSystem, PinNumbering};
/// use std::time::Duration;
///
/// let system = MotorSystem::simulated(PinNumbering::Board);
/// let motor = system.motor(LineId(7), LineId(11), LineId(12))?;
///
/// motor.spin_clockwise(Some(Duration::from_secs(2)), true)?;
/// system.cleanup();
/// ```
pub struct MotorSystem {
    numbering: PinNumbering,
    simulated: bool,
    verbose: bool,
    lines: SharedLines,
    registry: SharedRegistry,
    motors: SharedMotors,
    config: SystemConfig,
}

impl MotorSystem {
    /// Create a system driving real lines.
    pub fn new<L: LineDriver + 'static>(numbering: PinNumbering, lines: L) -> Self {
        let config = SystemConfig {
            pin_numbering: name_of(numbering),
            ..SystemConfig::default()
        };
        Self::with_lines(numbering, config, lines::shared(lines))
    }

    /// Create a system whose writes go nowhere.
    pub fn simulated(numbering: PinNumbering) -> Self {
        Self::new(numbering, SimulatedLines)
    }

    /// Create a system from configuration.
    ///
    /// The simulation is used when `test_mode` is set or when `lines` is
    /// `None`, which is how a missing GPIO capability is reported.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidScheme`] for an unknown numbering, or a
    /// pin error if the configured motors are wired inconsistently.
    pub fn from_config(config: SystemConfig, lines: Option<Box<dyn LineDriver>>) -> Result<Self> {
        let numbering = config.numbering()?;
        validate_config(&config)?;

        let lines = match lines {
            Some(_) if config.test_mode => {
                info!("test mode enabled, GPIO calls disabled");
                lines::shared(SimulatedLines)
            }
            Some(lines) => Arc::new(Mutex::new(lines)),
            None => {
                warn!("GPIO unavailable, falling back to simulated lines");
                lines::shared(SimulatedLines)
            }
        };

        Ok(Self::with_lines(numbering, config, lines))
    }

    fn with_lines(numbering: PinNumbering, config: SystemConfig, lines: SharedLines) -> Self {
        let simulated = lines.lock().is_simulated();
        info!(
            version = env!("CARGO_PKG_VERSION"),
            %numbering,
            simulated,
            "L293D driver ready"
        );

        Self {
            numbering,
            simulated,
            verbose: config.verbose,
            lines,
            registry: Arc::new(Mutex::new(LineRegistry::new())),
            motors: SharedMotors::default(),
            config,
        }
    }

    /// Get the active pin numbering.
    #[inline]
    pub fn numbering(&self) -> PinNumbering {
        self.numbering
    }

    /// Check if line writes are simulated.
    #[inline]
    pub fn is_simulated(&self) -> bool {
        self.simulated
    }

    /// Get the system configuration.
    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Lines currently owned by motors, ascending.
    pub fn lines_in_use(&self) -> Vec<LineId> {
        self.registry.lock().iter().collect()
    }

    /// Start building a motor, e.g. to set `force_selection`.
    pub fn builder(&self) -> MotorBuilder {
        MotorBuilder::new(self.numbering, self.lines.clone(), self.registry.clone())
            .verbose(self.verbose)
            .tracked(self.motors.clone())
    }

    /// Build a motor on `enable` (pinA), `reverse` (pinB) and `forward` (pinC).
    ///
    /// # Errors
    ///
    /// See [`MotorBuilder::build`].
    pub fn motor(&self, enable: LineId, reverse: LineId, forward: LineId) -> Result<Motor> {
        self.builder()
            .pins(MotorPins::new(enable, reverse, forward))
            .build()
    }

    /// Build a motor described in the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MotorNotFound`] if the name is unknown, otherwise
    /// see [`MotorBuilder::build`].
    pub fn motor_from_config(&self, name: &str) -> Result<Motor> {
        let motor_config = self.config.motor(name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(truncated(name)))
        })?;

        self.builder().from_motor_config(motor_config).build()
    }

    /// Release every line and forget every claim.
    ///
    /// Never fails: a driver that cannot release its lines is logged and the
    /// registry is cleared anyway. When the release succeeds every motor built
    /// here reports [`Direction::Stopped`](super::Direction::Stopped). Existing
    /// [`Motor`] handles keep their lines but those lines may now be handed to
    /// new motors.
    pub fn cleanup(&self) {
        let mut registry = self.registry.lock();
        let motors = self.live_motors();

        if self.simulated {
            info!("cleanup not needed in simulation mode");
            let _ = driver::release_with(&motors, || Ok::<(), LineError>(()));
        } else {
            match driver::release_with(&motors, || self.lines.lock().release_all()) {
                Ok(()) => info!(motors = motors.len(), "GPIO cleanup successful"),
                Err(e) => warn!(error = %e, "GPIO cleanup failed"),
            }
        }
        registry.release_all();
    }

    /// Motors still held somewhere, dropping handles to the rest.
    fn live_motors(&self) -> Vec<Motor> {
        let mut handles = self.motors.lock();
        let motors: Vec<Motor> = handles.iter().filter_map(|h| h.upgrade()).collect();
        handles.retain(|h| h.upgrade().is_some());
        motors
    }
}

fn name_of(numbering: PinNumbering) -> heapless::String<32> {
    let mut name = heapless::String::new();
    let _ = name.push_str(numbering.as_str());
    name
}
