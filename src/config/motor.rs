//! Motor configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::units::{Degrees, Micros, FULL_REVOLUTION};

/// Default minimum time between two phase advances.
pub const DEFAULT_PHASE_DELAY_US: u32 = 1300;

/// Complete motor configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct MotorConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Mechanical steps per shaft revolution (e.g. 2048.0 for a geared 28BYJ-48).
    pub steps_per_revolution: f32,

    /// Minimum delay between phase advances; smaller is faster but weaker.
    #[serde(default = "default_phase_delay", rename = "phase_delay_us")]
    pub phase_delay: Micros,

    /// De-energize the coils while idle.
    #[serde(default)]
    pub power_saver: bool,

    /// Let a new step request replace one that is still running.
    #[serde(default = "default_interruptible")]
    pub interruptible: bool,
}

fn default_phase_delay() -> Micros {
    Micros(DEFAULT_PHASE_DELAY_US)
}

fn default_interruptible() -> bool {
    true
}

impl MotorConfig {
    /// Shaft rotation produced by one completed sequence walk.
    pub fn degree_per_step(&self) -> Degrees {
        Degrees(FULL_REVOLUTION / self.steps_per_revolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_per_step() {
        let config = MotorConfig {
            name: String::try_from("test").unwrap(),
            steps_per_revolution: 200.0,
            phase_delay: default_phase_delay(),
            power_saver: false,
            interruptible: true,
        };

        assert!((config.degree_per_step().value() - 1.8).abs() < 1e-6);
    }
}
