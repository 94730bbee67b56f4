//! # l293d
//!
//! Drive DC motors through an L293D H-bridge from digital output lines.
//!
//! ## Features
//!
//! - **Exclusive lines**: every motor owns three lines, no two motors share one
//! - **Safe sequencing**: direction lines are set before enable, forward and
//!   reverse are never high together
//! - **Timed stops**: spin for a duration, blocking or in the background
//! - **embedded-hal 1.0**: real lines are any `OutputPin`
//! - **Simulation**: a no-op line driver when no GPIO is available
//! - **Configuration-driven**: numbering and motor wiring from TOML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use l293d::{LineId, MotorSystem, PinNumbering};
//!
//! let system = MotorSystem::simulated(PinNumbering::Board);
//! let motor = system.motor(LineId(7), LineId(11), LineId(12))?;
//!
//! // Blocks for two seconds, then stops
//! motor.spin_clockwise(Some(Duration::from_secs(2)), true)?;
//!
//! // Returns at once, stops on its own thread
//! let pending = motor.spin_anticlockwise(Some(Duration::from_secs(1)), false)?;
//!
//! system.cleanup();
//! ```
//!
//! ## Feature Flags
//!
//! - `toml` (default): Enables file I/O and TOML parsing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod config;
pub mod error;
pub mod lines;
pub mod motor;

use std::time::Duration;

// Re-exports for ergonomic API
pub use config::{validate_config, MotorConfig, PinNumbering, SystemConfig};
pub use error::{Error, Result};
pub use lines::{HalLines, LineDriver, LineId, LineMode, LineRegistry, PinState, SimulatedLines};
pub use motor::{Direction, Motor, MotorBuilder, MotorPins, MotorSystem, TimedStop};

// Configuration loading
#[cfg(feature = "toml")]
pub use config::{load_config, parse_config};

/// Convert seconds from an untyped source into a duration.
///
/// Negative and NaN values become zero, i.e. an immediate stop.
pub fn duration_from_secs(secs: f32) -> Duration {
    if secs.is_nan() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f32(secs).unwrap_or(Duration::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_from_secs() {
        assert_eq!(duration_from_secs(1.5), Duration::from_millis(1500));
        assert_eq!(duration_from_secs(-2.0), Duration::ZERO);
        assert_eq!(duration_from_secs(f32::NAN), Duration::ZERO);
        assert_eq!(duration_from_secs(f32::INFINITY), Duration::MAX);
    }
}
