//! Phase rate limiting.

/// Time gate between two phase advances of one motor.
///
/// The tick path asks the gate before moving the sequence cursor. While the
/// gate is closed the current pattern simply stays on the coils and the
/// question is asked again on the next tick, so no caller ever waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeedGovernor {
    last_phase_us: u32,
}

impl SpeedGovernor {
    /// Create a governor whose last phase happened at time zero.
    #[inline]
    pub const fn new() -> Self {
        Self { last_phase_us: 0 }
    }

    /// Open the gate if at least `min_delay_us` elapsed since the last
    /// advance, recording `now_us` as the new reference.
    ///
    /// The clock is allowed to wrap around `u32::MAX`.
    #[inline]
    pub fn try_advance(&mut self, now_us: u32, min_delay_us: u32) -> bool {
        if now_us.wrapping_sub(self.last_phase_us) < min_delay_us {
            return false;
        }
        self.last_phase_us = now_us;
        true
    }

    /// Timestamp of the last advance.
    #[inline]
    pub fn last_phase_us(&self) -> u32 {
        self.last_phase_us
    }
}
