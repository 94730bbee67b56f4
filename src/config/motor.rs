//! Motor configuration from TOML.

use serde::Deserialize;

use crate::lines::LineId;
use crate::motor::MotorPins;

/// Wiring of one motor to the L293D.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MotorConfig {
    /// Line wired to the channel enable input (L293D pin 1 or 9).
    #[serde(alias = "pin_a")]
    pub enable: LineId,

    /// Line that is high when spinning anticlockwise (L293D pin 2 or 10).
    #[serde(alias = "pin_b")]
    pub reverse: LineId,

    /// Line that is high when spinning clockwise (L293D pin 7 or 15).
    #[serde(alias = "pin_c")]
    pub forward: LineId,

    /// Accept lines outside the numbering's valid table.
    #[serde(default)]
    pub force_selection: bool,
}

impl MotorConfig {
    /// The three lines of this motor.
    pub fn pins(&self) -> MotorPins {
        MotorPins::new(self.enable, self.reverse, self.forward)
    }
}

#[cfg(all(test, feature = "toml"))]
mod tests {
    use super::*;

    #[test]
    fn test_pin_aliases() {
        let config: MotorConfig = toml::from_str("pin_a = 7\npin_b = 11\npin_c = 12\n").unwrap();

        assert_eq!(config.pins(), MotorPins::new(LineId(7), LineId(11), LineId(12)));
        assert!(!config.force_selection);
    }
}
