//! Timer interrupt dispatch.
//!
//! One periodic interrupt drives every attached motor. The
//! [`TimerDispatcher`] owns the registry, the timer and the clock, and its
//! [`on_tick`](TimerDispatcher::on_tick) is what the interrupt handler calls.

mod registry;
mod timer;

pub use registry::{MotorRegistry, Registration, MAX_MOTORS};
pub use timer::{ensure_enabled, TickTimer};

use crate::clock::MicrosClock;
use crate::config::units::Micros;
use crate::config::{MotorConfig, TimerConfig, DEFAULT_TICK_PERIOD_US};
use crate::motor::{CoilDriver, MotorControl, StepSequencer};

/// What one dispatch did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DispatchSummary {
    /// Motors ticked.
    pub ticked: usize,
    /// Motors whose coil write failed during this tick.
    pub pin_faults: usize,
}

/// Drives every registered motor from a single periodic interrupt.
///
/// # Example
///
/// ```rust,ignore
/// use core::cell::RefCell;
/// use critical_section::Mutex;
/// use coil_stepper::{Coils, MotorControl, TimerDispatcher};
///
/// static PAN: MotorControl = MotorControl::new();
/// static DISPATCHER: Mutex<RefCell<Option<Dispatcher>>> = Mutex::new(RefCell::new(None));
///
/// let mut dispatcher = TimerDispatcher::new(timer2, clock);
/// dispatcher.attach(&PAN, 2048.0, Coils::new(in1, in2, in3, in4));
/// critical_section::with(|cs| DISPATCHER.borrow_ref_mut(cs).replace(dispatcher));
///
/// #[interrupt]
/// fn TIMER2_COMPB() {
///     critical_section::with(|cs| {
///         if let Some(d) = DISPATCHER.borrow_ref_mut(cs).as_mut() {
///             d.on_tick();
///         }
///     });
/// }
///
/// PAN.set_position(Degrees(90.0));
/// ```
pub struct TimerDispatcher<'a, C, T, K, const N: usize = MAX_MOTORS> {
    registry: MotorRegistry<'a, C, N>,
    timer: T,
    clock: K,
    period: Micros,
}

impl<'a, C, T, K> TimerDispatcher<'a, C, T, K, MAX_MOTORS>
where
    C: CoilDriver,
    T: TickTimer,
    K: MicrosClock,
{
    /// Create a dispatcher for [`MAX_MOTORS`] motors with the default tick
    /// period. The timer is not touched until the first motor is attached.
    pub fn new(timer: T, clock: K) -> Self {
        Self::with_period(timer, clock, Micros(DEFAULT_TICK_PERIOD_US))
    }

    /// Create a dispatcher for [`MAX_MOTORS`] motors from the timer section
    /// of a configuration.
    pub fn from_config(config: &TimerConfig, timer: T, clock: K) -> Self {
        Self::with_period(timer, clock, config.period)
    }
}

impl<'a, C, T, K, const N: usize> TimerDispatcher<'a, C, T, K, N>
where
    C: CoilDriver,
    T: TickTimer,
    K: MicrosClock,
{
    /// Create a dispatcher that starts the timer with `period`.
    ///
    /// Other capacities than [`MAX_MOTORS`] are picked here, e.g.
    /// `TimerDispatcher::<_, _, _, 2>::with_period(timer, clock, period)`.
    pub fn with_period(timer: T, clock: K, period: Micros) -> Self {
        Self {
            registry: MotorRegistry::new(),
            timer,
            clock,
            period,
        }
    }

    /// Make sure the timer runs, then bind `coils` to `control`, drive them
    /// low and register the motor.
    ///
    /// A control block that is already attached is left exactly as it was;
    /// when every slot is taken the motor stays inert. In both cases the
    /// coils are handed back inside the [`Registration`], and the timer is
    /// still started if it was not running.
    pub fn attach(
        &mut self,
        control: &'a MotorControl,
        steps_per_revolution: f32,
        coils: C,
    ) -> Registration<C> {
        if ensure_enabled(&mut self.timer, self.period) {
            debug!("tick timer enabled, period {} us", self.period.value());
        }

        if self.registry.contains(control) {
            warn!("attach ignored: motor already attached");
            return Registration::Duplicate(coils);
        }

        if self.registry.is_full() {
            warn!("attach ignored: all {} motor slots in use", N);
            return Registration::Full(coils);
        }

        let mut coils = coils;
        if coils.release().is_err() {
            warn!("coil release failed while attaching");
        }

        let registration = self
            .registry
            .add(StepSequencer::new(control, coils))
            .map(StepSequencer::into_coils);

        match registration {
            Registration::Registered => {
                control.bind(steps_per_revolution);
                debug!("motor attached in slot {}", self.registry.len() - 1);
            }
            _ => warn!("attach ignored: motor not registered"),
        }

        registration
    }

    /// Apply `config` to `control`, then [`attach`](Self::attach) it.
    pub fn attach_configured(
        &mut self,
        control: &'a MotorControl,
        config: &MotorConfig,
        coils: C,
    ) -> Registration<C> {
        control.configure(config);
        self.attach(control, config.steps_per_revolution, coils)
    }

    /// Unregister `control` and return its coils. Pending steps are
    /// dropped; the shaft angle is kept.
    pub fn detach(&mut self, control: &MotorControl) -> Option<C> {
        let sequencer = self.registry.remove(control)?;
        debug!("motor detached, {} remaining", self.registry.len());
        Some(sequencer.into_coils())
    }

    /// Tick every registered motor once, in registration order.
    ///
    /// Call this from the timer interrupt. It never blocks; a coil fault on
    /// one motor is counted and the others are still ticked.
    pub fn on_tick(&mut self) -> DispatchSummary {
        let mut summary = DispatchSummary::default();
        for sequencer in self.registry.iter_mut() {
            summary.ticked += 1;
            if sequencer.tick(&self.clock).is_err() {
                summary.pin_faults += 1;
            }
        }
        if summary.pin_faults > 0 {
            warn!("{} coil write(s) failed this tick", summary.pin_faults);
        }
        summary
    }

    /// The registered motors.
    #[inline]
    pub fn registry(&self) -> &MotorRegistry<'a, C, N> {
        &self.registry
    }

    /// The tick timer.
    #[inline]
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// The tick timer, mutably.
    #[inline]
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// The clock.
    #[inline]
    pub fn clock(&self) -> &K {
        &self.clock
    }

    /// Period the timer is started with.
    #[inline]
    pub fn period(&self) -> Micros {
        self.period
    }

    /// Take the dispatcher apart.
    pub fn release(self) -> (MotorRegistry<'a, C, N>, T, K) {
        (self.registry, self.timer, self.clock)
    }
}
