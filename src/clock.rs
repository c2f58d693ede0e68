//! Monotonic microsecond time source.

/// Something which counts elapsed microseconds.
///
/// The count is allowed to wrap around `u32::MAX`; consumers only ever look
/// at differences. This uses shared references because the same clock may
/// be read by several motors inside one tick.
pub trait MicrosClock {
    /// Microseconds since a clock-specific reference point, wrapping.
    fn micros(&self) -> u32;
}

impl<'a, C: MicrosClock + ?Sized> MicrosClock for &'a C {
    fn micros(&self) -> u32 {
        (**self).micros()
    }
}

/// A clock backed by the operating system's monotonic timer.
///
/// Requires the `std` feature.
#[cfg(feature = "std")]
#[derive(Debug, Clone, PartialEq)]
pub struct StdClock {
    created_at: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Start counting from now.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self {
            created_at: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl MicrosClock for StdClock {
    fn micros(&self) -> u32 {
        // Truncation is the intended wrap
        self.created_at.elapsed().as_micros() as u32
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn test_std_clock_is_monotonic() {
        let clock = StdClock::new();
        let a = clock.micros();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = clock.micros();
        assert!(b.wrapping_sub(a) >= 2000);
    }

    #[test]
    fn test_reference_forwards() {
        let clock = StdClock::new();
        let by_ref: &dyn MicrosClock = &clock;
        assert!(by_ref.micros() < 1_000_000);
    }
}
