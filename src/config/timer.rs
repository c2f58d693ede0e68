//! Shared tick timer configuration.

use serde::Deserialize;

use super::units::Micros;

/// Default tick period: an 8-bit timer at clk/32 on a 16 MHz part overflows
/// every 256 * 2 us.
pub const DEFAULT_TICK_PERIOD_US: u32 = 512;

/// Settings for the periodic interrupt that drives every attached motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TimerConfig {
    /// Interval between two dispatcher invocations.
    #[serde(default = "default_period", rename = "period_us")]
    pub period: Micros,
}

fn default_period() -> Micros {
    Micros(DEFAULT_TICK_PERIOD_US)
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            period: default_period(),
        }
    }
}
