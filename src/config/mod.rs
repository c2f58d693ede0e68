//! Configuration module for coil-stepper.
//!
//! Provides types for loading and validating motor and timer configurations
//! from TOML files (with `std` feature) or pre-parsed data.

mod motor;
mod system;
mod timer;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use motor::{MotorConfig, DEFAULT_PHASE_DELAY_US};
pub use system::{SystemConfig, MAX_CONFIGURED_MOTORS};
pub use timer::{TimerConfig, DEFAULT_TICK_PERIOD_US};
pub use validation::{validate_config, validate_motor, MAX_PHASE_DELAY_US};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, Micros};
