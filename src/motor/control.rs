//! Shared command block of a motor.
//!
//! A [`MotorControl`] is the part of a motor that both execution contexts
//! touch: application code issues commands through it while the timer
//! interrupt consumes pending steps and publishes the shaft angle. Every
//! field is its own atomic, loaded and stored with `Relaxed` ordering, and no
//! operation ever waits.
//!
//! Transitions that span several fields (the tick reading the pending count
//! and then starting a sub-sequence, or `set_position` reading the angle and
//! then requesting steps) are not atomic as a unit. A command landing between
//! the two halves is picked up on the following tick.

use core::sync::atomic::Ordering;

use portable_atomic::{AtomicBool, AtomicF32, AtomicI32, AtomicU32};

use crate::config::units::{Degrees, Micros, FULL_REVOLUTION};
use crate::config::{MotorConfig, DEFAULT_PHASE_DELAY_US};

use super::position::{steps_to_target, wrap_once};
use super::state::Direction;

/// Commands and observable state of one stepper motor.
///
/// `MotorControl::new` is `const`, so a control block can live in a `static`
/// and be shared by reference with the dispatcher running in the timer
/// interrupt.
///
/// # Example
///
/// ```rust
/// use coil_stepper::{Degrees, MotorControl};
///
/// static PAN: MotorControl = MotorControl::new();
///
/// // Not attached to a dispatcher yet: step requests are dropped.
/// PAN.request_steps(10);
/// assert!(!PAN.is_moving());
/// assert_eq!(PAN.position(), Degrees(0.0));
/// ```
#[derive(Debug)]
pub struct MotorControl {
    steps_per_revolution: AtomicF32,
    degree_per_step: AtomicF32,
    remaining_steps: AtomicI32,
    position: AtomicF32,
    phase_delay_us: AtomicU32,
    power_saver: AtomicBool,
    interruptible: AtomicBool,
    attached: AtomicBool,
}

impl Default for MotorControl {
    fn default() -> Self {
        Self::new()
    }
}

impl MotorControl {
    /// Create an unattached motor: idle at the origin, interruptible, power
    /// saver off, default phase delay.
    pub const fn new() -> Self {
        Self {
            steps_per_revolution: AtomicF32::new(0.0),
            degree_per_step: AtomicF32::new(0.0),
            remaining_steps: AtomicI32::new(0),
            position: AtomicF32::new(0.0),
            phase_delay_us: AtomicU32::new(DEFAULT_PHASE_DELAY_US),
            power_saver: AtomicBool::new(false),
            interruptible: AtomicBool::new(true),
            attached: AtomicBool::new(false),
        }
    }

    /// Apply speed and mode settings from configuration.
    pub fn configure(&self, config: &MotorConfig) {
        self.set_speed(config.phase_delay);
        self.power_saver_mode(config.power_saver);
        self.interruptible(config.interruptible);
    }

    /// De-energize the coils while idle (`true`), or keep holding torque
    /// with the last pattern (`false`).
    #[inline]
    pub fn power_saver_mode(&self, enabled: bool) {
        self.power_saver.store(enabled, Ordering::Relaxed);
    }

    /// Whether power saver mode is on.
    #[inline]
    pub fn is_power_saver(&self) -> bool {
        self.power_saver.load(Ordering::Relaxed)
    }

    /// Allow (`true`) or forbid (`false`) a new step request from replacing
    /// one that is still running.
    #[inline]
    pub fn interruptible(&self, enabled: bool) {
        self.interruptible.store(enabled, Ordering::Relaxed);
    }

    /// Whether running movements may be replaced.
    #[inline]
    pub fn is_interruptible(&self) -> bool {
        self.interruptible.load(Ordering::Relaxed)
    }

    /// Set the minimum time between two phase advances.
    #[inline]
    pub fn set_speed(&self, phase_delay: Micros) {
        self.phase_delay_us.store(phase_delay.value(), Ordering::Relaxed);
    }

    /// Current minimum time between two phase advances.
    #[inline]
    pub fn phase_delay(&self) -> Micros {
        Micros(self.phase_delay_us.load(Ordering::Relaxed))
    }

    /// Request `steps` mechanical steps; negative values turn backward.
    ///
    /// Dropped without notice when the motor is not attached, or when it is
    /// not interruptible and still moving.
    pub fn request_steps(&self, steps: i32) {
        if !self.is_attached() {
            debug!("step request dropped: motor not attached");
            return;
        }

        if self.is_interruptible() {
            self.remaining_steps.store(steps, Ordering::Relaxed);
        } else if self
            .remaining_steps
            .compare_exchange(0, steps, Ordering::Relaxed, Ordering::Relaxed)
            .is_err()
        {
            debug!("step request dropped: motor busy and not interruptible");
        }
    }

    /// Turn to an absolute angle relative to the origin.
    ///
    /// The target is normalized into `[0, 360)` and the move never crosses
    /// the origin: going from 350 to 10 degrees turns 340 degrees backward.
    pub fn set_position(&self, target: Degrees) {
        let target = target.normalized();
        let steps = steps_to_target(self.position(), target, self.steps_per_revolution());
        self.request_steps(steps);
    }

    /// Make the current shaft angle the origin without moving.
    #[inline]
    pub fn set_origin(&self) {
        self.position.store(0.0, Ordering::Relaxed);
    }

    /// Shaft angle relative to the origin, in `[0, 360)`.
    #[inline]
    pub fn position(&self) -> Degrees {
        Degrees(self.position.load(Ordering::Relaxed))
    }

    /// Drop all pending steps, whatever the interruptible setting.
    ///
    /// Motion ends at the next tick boundary. A half-finished sequence walk
    /// keeps its place and resumes with the next request.
    #[inline]
    pub fn stop(&self) {
        self.remaining_steps.store(0, Ordering::Relaxed);
    }

    /// Whether any steps are pending.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.remaining_steps() != 0
    }

    /// Pending steps; positive forward, negative backward.
    #[inline]
    pub fn remaining_steps(&self) -> i32 {
        self.remaining_steps.load(Ordering::Relaxed)
    }

    /// Steps per revolution bound at attach time (0 before).
    #[inline]
    pub fn steps_per_revolution(&self) -> f32 {
        self.steps_per_revolution.load(Ordering::Relaxed)
    }

    /// Shaft rotation of one step (0 before attach).
    #[inline]
    pub fn degree_per_step(&self) -> Degrees {
        Degrees(self.degree_per_step.load(Ordering::Relaxed))
    }

    /// Whether the motor currently sits in a dispatcher's registry.
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::Relaxed)
    }

    pub(crate) fn bind(&self, steps_per_revolution: f32) {
        self.steps_per_revolution
            .store(steps_per_revolution, Ordering::Relaxed);
        self.degree_per_step
            .store(FULL_REVOLUTION / steps_per_revolution, Ordering::Relaxed);
    }

    pub(crate) fn set_attached(&self, attached: bool) {
        self.attached.store(attached, Ordering::Relaxed);
    }

    /// Book one finished sequence walk: one step fewer pending, shaft angle
    /// moved by one step.
    pub(crate) fn complete_step(&self, direction: Direction) {
        let sign = direction.sign();
        // A stop() that raced the walk wins; the counter stays at zero.
        // Saturates so an extreme request reversed mid-walk stays put.
        let _ = self
            .remaining_steps
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |remaining| {
                (remaining != 0).then(|| remaining.saturating_sub(sign))
            });

        let delta = sign as f32 * self.degree_per_step.load(Ordering::Relaxed);
        let position = wrap_once(self.position.load(Ordering::Relaxed) + delta);
        self.position.store(position, Ordering::Relaxed);
    }
}
