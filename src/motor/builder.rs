//! Builder pattern for Motor.

use tracing::debug;

use crate::config::{MotorConfig, PinNumbering};
use crate::error::{ConfigError, Error, LineError, Result};
use crate::lines::{LineDriver, LineId, LineMode, SharedLines, SharedRegistry};

use super::driver::{Motor, SharedMotors};
use super::pins::MotorPins;

/// Builder for creating Motor instances.
///
/// Obtained from [`MotorSystem::builder`](super::MotorSystem::builder), or
/// created directly around a registry and line driver of your own.
pub struct MotorBuilder {
    numbering: PinNumbering,
    verbose: bool,
    lines: SharedLines,
    registry: SharedRegistry,
    motors: SharedMotors,
    enable: Option<LineId>,
    reverse: Option<LineId>,
    forward: Option<LineId>,
    force_selection: bool,
}

impl MotorBuilder {
    /// Create a new builder.
    pub fn new(numbering: PinNumbering, lines: SharedLines, registry: SharedRegistry) -> Self {
        Self {
            numbering,
            verbose: true,
            lines,
            registry,
            motors: SharedMotors::default(),
            enable: None,
            reverse: None,
            forward: None,
            force_selection: false,
        }
    }

    /// Set the enable line (pinA).
    pub fn enable(mut self, line: LineId) -> Self {
        self.enable = Some(line);
        self
    }

    /// Set the anticlockwise-positive line (pinB).
    pub fn reverse(mut self, line: LineId) -> Self {
        self.reverse = Some(line);
        self
    }

    /// Set the clockwise-positive line (pinC).
    pub fn forward(mut self, line: LineId) -> Self {
        self.forward = Some(line);
        self
    }

    /// Set all three lines.
    pub fn pins(self, pins: MotorPins) -> Self {
        self.enable(pins.enable)
            .reverse(pins.reverse)
            .forward(pins.forward)
    }

    /// Accept lines that are not in the numbering's valid table.
    pub fn force_selection(mut self, force: bool) -> Self {
        self.force_selection = force;
        self
    }

    /// Record built motors so a system cleanup can reset them.
    pub(crate) fn tracked(mut self, motors: SharedMotors) -> Self {
        self.motors = motors;
        self
    }

    /// Log commands at info level instead of debug.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Configure from a MotorConfig.
    pub fn from_motor_config(self, config: &MotorConfig) -> Self {
        self.pins(config.pins()).force_selection(config.force_selection)
    }

    /// Validate, claim and configure the lines, then build the Motor.
    ///
    /// Nothing is claimed or configured unless every check passes. If a line
    /// cannot be configured the claim is undone.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingPin`] if a line was never set
    /// - [`PinError::InvalidPin`](crate::error::PinError::InvalidPin) for a line outside the numbering
    /// - [`PinError::DuplicatePin`](crate::error::PinError::DuplicatePin) for a repeated line
    /// - [`PinError::PinConflict`](crate::error::PinError::PinConflict) for a line owned by another motor
    /// - [`LineError`] if the line driver refuses a line
    pub fn build(self) -> Result<Motor> {
        let enable = self.enable.ok_or(ConfigError::MissingPin("enable"))?;
        let reverse = self.reverse.ok_or(ConfigError::MissingPin("reverse"))?;
        let forward = self.forward.ok_or(ConfigError::MissingPin("forward"))?;
        let pins = MotorPins::new(enable, reverse, forward);

        pins.validate(self.numbering, self.force_selection)?;

        let mut registry = self.registry.lock();
        registry.claim(&pins.lines())?;
        if let Err(e) = configure(&self.lines, &pins) {
            registry.release(&pins.lines());
            return Err(Error::Line(e));
        }
        let motor = Motor::new(pins, self.numbering, self.verbose, self.lines);
        self.motors.lock().push(motor.handle());
        drop(registry);

        debug!(
            numbering = %self.numbering,
            %pins,
            forced = self.force_selection,
            "motor configured"
        );
        Ok(motor)
    }
}

fn configure(lines: &SharedLines, pins: &MotorPins) -> core::result::Result<(), LineError> {
    let mut lines = lines.lock();
    for line in pins.lines() {
        lines.configure_line(line, LineMode::Output)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PinError;
    use crate::lines::{self, HalLines, LineRegistry, SimulatedLines};
    use embedded_hal_mock::eh1::digital::Mock as PinMock;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn registry() -> SharedRegistry {
        Arc::new(Mutex::new(LineRegistry::new()))
    }

    fn simulated(numbering: PinNumbering, registry: &SharedRegistry) -> MotorBuilder {
        MotorBuilder::new(numbering, lines::shared(SimulatedLines), registry.clone())
    }

    #[test]
    fn test_missing_pin() {
        let result = simulated(PinNumbering::Board, &registry())
            .enable(LineId(7))
            .forward(LineId(12))
            .build();

        assert!(matches!(result, Err(Error::Config(ConfigError::MissingPin("reverse")))));
    }

    #[test]
    fn test_build_claims_lines() {
        let registry = registry();
        let motor = simulated(PinNumbering::Board, &registry)
            .pins(MotorPins::new(LineId(7), LineId(11), LineId(12)))
            .build()
            .unwrap();

        assert_eq!(motor.pins().lines(), [LineId(7), LineId(11), LineId(12)]);
        assert_eq!(registry.lock().len(), 3);
    }

    #[test]
    fn test_invalid_pin_claims_nothing() {
        let registry = registry();
        let result = simulated(PinNumbering::Bcm, &registry)
            .pins(MotorPins::new(LineId(4), LineId(5), LineId(7)))
            .build();

        assert!(matches!(
            result,
            Err(Error::Pin(PinError::InvalidPin { line: LineId(7), .. }))
        ));
        assert!(registry.lock().is_empty());
    }

    #[test]
    fn test_configure_failure_rolls_back() {
        let pin = PinMock::new(&[]);
        let mut done = pin.clone();
        // only the enable line has a pin
        let hal = HalLines::new().with_line(LineId(7), pin);
        let registry = registry();

        let result = MotorBuilder::new(PinNumbering::Board, lines::shared(hal), registry.clone())
            .pins(MotorPins::new(LineId(7), LineId(11), LineId(12)))
            .build();

        assert_eq!(result.unwrap_err(), Error::Line(LineError::Unavailable(LineId(11))));
        assert!(registry.lock().is_empty());
        done.done();
    }
}
