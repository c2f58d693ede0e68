//! Hardware timer seam.

use crate::config::units::Micros;

/// The periodic timer whose interrupt calls
/// [`TimerDispatcher::on_tick`](super::TimerDispatcher::on_tick).
///
/// Implementations configure the peripheral (prescaler, compare value,
/// interrupt enable); the dispatcher only needs to know whether it is
/// already running and how to start it.
pub trait TickTimer {
    /// Whether the timer is configured and its interrupt enabled.
    fn is_enabled(&self) -> bool;

    /// Configure the timer to fire every `period` and enable its interrupt.
    fn enable(&mut self, period: Micros);
}

impl<T: TickTimer + ?Sized> TickTimer for &mut T {
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }

    fn enable(&mut self, period: Micros) {
        (**self).enable(period)
    }
}

/// Start the timer unless it already runs; an already running timer is left
/// untouched so other users of the same peripheral keep their setup.
///
/// Returns `true` if the timer had to be started.
pub fn ensure_enabled<T: TickTimer + ?Sized>(timer: &mut T, period: Micros) -> bool {
    if timer.is_enabled() {
        return false;
    }
    timer.enable(period);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingTimer {
        period: Option<Micros>,
        enables: usize,
    }

    impl TickTimer for CountingTimer {
        fn is_enabled(&self) -> bool {
            self.period.is_some()
        }

        fn enable(&mut self, period: Micros) {
            self.period = Some(period);
            self.enables += 1;
        }
    }

    #[test]
    fn test_ensure_enabled_is_idempotent() {
        let mut timer = CountingTimer::default();
        assert!(ensure_enabled(&mut timer, Micros(512)));
        assert!(!ensure_enabled(&mut timer, Micros(64)));
        assert_eq!(timer.enables, 1);
        assert_eq!(timer.period, Some(Micros(512)));
    }
}
