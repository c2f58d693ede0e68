//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use crate::error::{ConfigError, Error, Result};

use super::motor::MotorConfig;
use super::timer::TimerConfig;

/// Maximum number of motors a configuration file may describe.
///
/// More motors can be described than the dispatcher will drive at once; the
/// extra ones simply stay unattached.
pub const MAX_CONFIGURED_MOTORS: usize = 8;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemConfig {
    /// Shared tick timer settings.
    #[serde(default)]
    pub timer: TimerConfig,

    /// Named motor configurations.
    pub motors: FnvIndexMap<String<32>, MotorConfig, MAX_CONFIGURED_MOTORS>,
}

impl SystemConfig {
    /// Get a motor configuration by name.
    pub fn motor(&self, name: &str) -> Option<&MotorConfig> {
        self.motors
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Get a motor configuration by name, failing if it is not configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MotorNotFound`] if no motor has that name.
    pub fn require_motor(&self, name: &str) -> Result<&MotorConfig> {
        self.motor(name).ok_or_else(|| {
            let mut missing = String::new();
            for c in name.chars() {
                if missing.push(c).is_err() {
                    break;
                }
            }
            Error::Config(ConfigError::MotorNotFound(missing))
        })
    }

    /// List all motor names.
    pub fn motor_names(&self) -> impl Iterator<Item = &str> {
        self.motors.keys().map(|s| s.as_str())
    }
}
