//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use crate::error::ConfigError;

use super::motor::MotorConfig;
use super::scheme::PinNumbering;

/// Maximum number of motors in one configuration.
pub const MAX_MOTORS: usize = 8;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Pin numbering name, `BOARD` or `BCM`.
    #[serde(default = "default_pin_numbering")]
    pub pin_numbering: String<32>,

    /// Use the simulated line driver even when hardware is available.
    #[serde(default)]
    pub test_mode: bool,

    /// Report every motor command at info level.
    #[serde(default = "default_verbose")]
    pub verbose: bool,

    /// Named motor wirings.
    #[serde(default)]
    pub motors: FnvIndexMap<String<32>, MotorConfig, MAX_MOTORS>,
}

fn default_pin_numbering() -> String<32> {
    let mut name = String::new();
    let _ = name.push_str(PinNumbering::Board.as_str());
    name
}

fn default_verbose() -> bool {
    true
}

impl SystemConfig {
    /// Resolve the configured pin numbering.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidScheme`] for anything but `BOARD` or `BCM`.
    pub fn numbering(&self) -> Result<PinNumbering, ConfigError> {
        self.pin_numbering.parse()
    }

    /// Get a motor configuration by name.
    pub fn motor(&self, name: &str) -> Option<&MotorConfig> {
        self.motors
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all motor names.
    pub fn motor_names(&self) -> impl Iterator<Item = &str> {
        self.motors.keys().map(|s| s.as_str())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            pin_numbering: default_pin_numbering(),
            test_mode: false,
            verbose: default_verbose(),
            motors: FnvIndexMap::new(),
        }
    }
}
