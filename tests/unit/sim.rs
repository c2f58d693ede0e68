//! Simulated timer, clock and coils for host-side tests.

use std::cell::{Cell, RefCell};

use coil_stepper::error::MotorError;
use coil_stepper::{CoilDriver, CoilPattern, Micros, MicrosClock, MotorControl, TickTimer, TimerDispatcher};

/// Clock the test moves by hand.
#[derive(Default)]
pub struct SimClock(Cell<u32>);

impl SimClock {
    pub fn starting_at(us: u32) -> Self {
        Self(Cell::new(us))
    }

    pub fn advance(&self, us: u32) {
        self.0.set(self.0.get().wrapping_add(us));
    }
}

impl MicrosClock for SimClock {
    fn micros(&self) -> u32 {
        self.0.get()
    }
}

/// Timer that records how it was enabled.
#[derive(Default)]
pub struct SimTimer {
    pub period: Option<Micros>,
    pub enables: usize,
}

impl TickTimer for SimTimer {
    fn is_enabled(&self) -> bool {
        self.period.is_some()
    }

    fn enable(&mut self, period: Micros) {
        self.period = Some(period);
        self.enables += 1;
    }
}

/// Coils that remember the last pattern and append their id to a shared log
/// on every write.
pub struct SimCoils<'l> {
    pub id: u8,
    pub last: Option<CoilPattern>,
    log: Option<&'l RefCell<Vec<u8>>>,
    fail: Option<&'l Cell<bool>>,
}

impl<'l> SimCoils<'l> {
    pub fn new(id: u8) -> Self {
        Self {
            id,
            last: None,
            log: None,
            fail: None,
        }
    }

    pub fn logging(id: u8, log: &'l RefCell<Vec<u8>>) -> Self {
        Self {
            log: Some(log),
            ..Self::new(id)
        }
    }

    pub fn failing_when(id: u8, fail: &'l Cell<bool>) -> Self {
        Self {
            fail: Some(fail),
            ..Self::new(id)
        }
    }
}

impl CoilDriver for SimCoils<'_> {
    fn apply(&mut self, pattern: CoilPattern) -> Result<(), MotorError> {
        if self.fail.map_or(false, Cell::get) {
            return Err(MotorError::PinError);
        }
        if let Some(log) = self.log {
            log.borrow_mut().push(self.id);
        }
        self.last = Some(pattern);
        Ok(())
    }
}

pub type SimDispatcher<'a> = TimerDispatcher<'a, SimCoils<'a>, SimTimer, &'a SimClock>;

pub fn dispatcher(clock: &SimClock) -> SimDispatcher<'_> {
    TimerDispatcher::new(SimTimer::default(), clock)
}

/// Tick until `control` stops moving, moving the clock by its phase delay
/// between ticks. Returns the number of ticks, or panics after `max_ticks`.
pub fn run_until_idle<'a, C, T, const N: usize>(
    dispatcher: &mut TimerDispatcher<'a, C, T, &'a SimClock, N>,
    control: &MotorControl,
    max_ticks: usize,
) -> usize
where
    C: CoilDriver,
    T: TickTimer,
{
    let mut ticks = 0;
    while control.is_moving() {
        assert!(ticks < max_ticks, "motor still moving after {} ticks", max_ticks);
        dispatcher.on_tick();
        dispatcher.clock().advance(control.phase_delay().value());
        ticks += 1;
    }
    ticks
}

pub fn assert_degrees(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {} degrees, got {}",
        expected,
        actual
    );
}
