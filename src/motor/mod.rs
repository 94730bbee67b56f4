//! Motor module for l293d.
//!
//! Provides the motor driver, its direction state, timed stops and the
//! system facade that owns lines and registry.

mod builder;
mod driver;
mod pins;
pub mod state;
mod system;
mod timed;

pub use builder::MotorBuilder;
pub use driver::Motor;
pub use pins::MotorPins;
pub use state::Direction;
pub use system::MotorSystem;
pub use timed::TimedStop;
