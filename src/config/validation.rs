//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{MotorConfig, SystemConfig};

/// Longest accepted phase delay (one second per phase).
pub const MAX_PHASE_DELAY_US: u32 = 1_000_000;

/// Validate a system configuration.
///
/// Checks:
/// - The timer period is non-zero
/// - Every motor has a finite, positive steps-per-revolution
/// - Phase delays stay within [`MAX_PHASE_DELAY_US`]
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    if config.timer.period.value() == 0 {
        return Err(Error::Config(ConfigError::InvalidTickPeriod(0)));
    }

    for (_, motor) in config.motors.iter() {
        validate_motor(motor)?;
    }

    Ok(())
}

/// Validate a single motor configuration.
pub fn validate_motor(config: &MotorConfig) -> Result<()> {
    let steps = config.steps_per_revolution;
    if !steps.is_finite() || steps <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(steps)));
    }

    if config.phase_delay.value() > MAX_PHASE_DELAY_US {
        return Err(Error::Config(ConfigError::InvalidPhaseDelay(
            config.phase_delay.value(),
        )));
    }

    Ok(())
}
