//! Configuration validation.

use tracing::debug;

use crate::error::Result;
use crate::lines::LineRegistry;

use super::SystemConfig;

/// Validate a system configuration.
///
/// Checks:
/// - Pin numbering is `BOARD` or `BCM`
/// - Each motor's lines are valid for the numbering unless `force_selection` is set
/// - No motor uses the same line twice
/// - No line is shared between motors
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    let numbering = config.numbering()?;
    let mut claimed = LineRegistry::new();

    for (name, motor) in config.motors.iter() {
        let pins = motor.pins();
        pins.validate(numbering, motor.force_selection)?;
        claimed.claim(&pins.lines())?;
        debug!(motor = name.as_str(), %pins, "motor wiring valid");
    }

    Ok(())
}
