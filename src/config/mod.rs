//! Configuration module for l293d.
//!
//! Provides the pin numbering tables and the types for loading and validating
//! motor wiring from TOML files (with the `toml` feature) or pre-built data.

#[cfg(feature = "toml")]
mod loader;
mod motor;
pub mod scheme;
mod system;
mod validation;

pub use motor::MotorConfig;
pub use scheme::PinNumbering;
pub use system::{SystemConfig, MAX_MOTORS};
pub use validation::validate_config;

#[cfg(feature = "toml")]
pub use loader::{load_config, parse_config};

/// Copy `msg` into a fixed-capacity string, cutting it at a char boundary.
pub(crate) fn truncated<const N: usize>(msg: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in msg.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
