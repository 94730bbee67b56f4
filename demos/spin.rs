//! Spin two motors from a TOML configuration.
//!
//! No GPIO capability is attached here, so the system falls back to the
//! simulated line driver and every command is visible in the log output.
//!
//! Run with: `cargo run --example spin`
//! Set `RUST_LOG=l293d=trace` to see each simulated line write.

use std::time::Duration;

use l293d::{duration_from_secs, parse_config, MotorSystem, Result};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
pin_numbering = "BOARD"
verbose = true

[motors.left]
enable = 7
reverse = 11
forward = 12

[motors.right]
enable = 13
reverse = 15
forward = 16
"#;

fn main() -> Result<()> {
    let config = parse_config(CONFIG)?;

    let default_level = if config.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let system = MotorSystem::from_config(config, None)?;
    let left = system.motor_from_config("left")?;
    let right = system.motor_from_config("right")?;

    // Both run at once: the left stop is pending while the right blocks.
    let pending = left.spin_clockwise(Some(Duration::from_millis(500)), false)?;
    right.spin_anticlockwise(Some(duration_from_secs(0.25)), true)?;

    if let Some(stop) = pending {
        stop.join()?;
    }
    println!("left: {}, right: {}", left.direction(), right.direction());

    // Negative durations from untyped input stop at once.
    left.spin_anticlockwise(Some(duration_from_secs(-1.0)), true)?;

    system.cleanup();
    Ok(())
}
