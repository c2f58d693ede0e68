//! Per-tick step sequencing.
//!
//! A [`StepSequencer`] is the interrupt-owned half of a motor: it holds the
//! coils and the cursor into the sequence table, and each call to
//! [`StepSequencer::tick`] moves the motor forward by at most what the speed
//! governor allows. Nothing in here waits; a mechanical step is spread over
//! as many ticks as the phase delay requires.

use crate::clock::MicrosClock;
use crate::error::MotorError;
use crate::sequence::{pattern, PHASE_COUNT};

use super::coils::CoilDriver;
use super::control::MotorControl;
use super::governor::SpeedGovernor;
use super::state::{Direction, MotionState, TickOutcome};

const FIRST_PHASE: u8 = 0;
const LAST_PHASE: u8 = (PHASE_COUNT - 1) as u8;

/// Progress of one sub-sequence call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
    Pending,
    Complete,
}

/// Tick-driven state machine for one motor.
pub struct StepSequencer<'a, C> {
    control: &'a MotorControl,
    coils: C,
    forward_active: bool,
    backward_active: bool,
    forward_index: u8,
    backward_index: u8,
    governor: SpeedGovernor,
}

impl<'a, C> StepSequencer<'a, C>
where
    C: CoilDriver,
{
    /// Pair a control block with the coils it drives.
    pub fn new(control: &'a MotorControl, coils: C) -> Self {
        Self {
            control,
            coils,
            forward_active: false,
            backward_active: false,
            forward_index: FIRST_PHASE,
            backward_index: LAST_PHASE,
            governor: SpeedGovernor::new(),
        }
    }

    /// The control block this sequencer serves.
    #[inline]
    pub fn control(&self) -> &'a MotorControl {
        self.control
    }

    /// The coil outputs.
    #[inline]
    pub fn coils(&self) -> &C {
        &self.coils
    }

    /// Give the coils back.
    pub fn into_coils(self) -> C {
        self.coils
    }

    /// Cursor of the forward walk, `0..8`.
    #[inline]
    pub fn forward_index(&self) -> usize {
        self.forward_index as usize
    }

    /// Cursor of the backward walk, `0..8`.
    #[inline]
    pub fn backward_index(&self) -> usize {
        self.backward_index as usize
    }

    /// Whether a forward walk is part-way through.
    #[inline]
    pub fn is_forward_active(&self) -> bool {
        self.forward_active
    }

    /// Whether a backward walk is part-way through.
    #[inline]
    pub fn is_backward_active(&self) -> bool {
        self.backward_active
    }

    /// Current motion state.
    pub fn state(&self) -> MotionState {
        let remaining = self.control.remaining_steps();
        if remaining == 0 {
            MotionState::Idle
        } else if self.forward_active {
            MotionState::SteppingForward
        } else if self.backward_active || remaining < 0 {
            MotionState::SteppingBackward
        } else {
            MotionState::SteppingForward
        }
    }

    /// Advance the motor by whatever the governor allows right now.
    ///
    /// Must be called periodically, typically by the
    /// [`TimerDispatcher`](crate::dispatch::TimerDispatcher). A walk that has
    /// started in one direction always finishes before the other direction
    /// is taken up.
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::PinError`] if a coil write fails. Cursor and
    /// counters are left as they were before the failed write.
    pub fn tick<K>(&mut self, clock: &K) -> Result<TickOutcome, MotorError>
    where
        K: MicrosClock + ?Sized,
    {
        let remaining = self.control.remaining_steps();

        if remaining == 0 {
            if self.control.is_power_saver() {
                self.coils.release()?;
                return Ok(TickOutcome::Released);
            }
            return Ok(TickOutcome::Holding);
        }

        let min_delay = self.control.phase_delay().value();

        let direction = if self.forward_active || (!self.backward_active && remaining > 0) {
            self.forward_active = true;
            if self.walk_forward(clock, min_delay)? == Walk::Pending {
                return Ok(TickOutcome::InProgress);
            }
            self.forward_active = false;
            Direction::Forward
        } else {
            self.backward_active = true;
            if self.walk_backward(clock, min_delay)? == Walk::Pending {
                return Ok(TickOutcome::InProgress);
            }
            self.backward_active = false;
            Direction::Backward
        };

        self.control.complete_step(direction);
        trace!("step completed, {} pending", self.control.remaining_steps());
        Ok(TickOutcome::Stepped(direction))
    }

    fn walk_forward<K>(&mut self, clock: &K, min_delay: u32) -> Result<Walk, MotorError>
    where
        K: MicrosClock + ?Sized,
    {
        loop {
            self.coils.apply(pattern(self.forward_index as usize))?;
            if !self.governor.try_advance(clock.micros(), min_delay) {
                return Ok(Walk::Pending);
            }
            if self.forward_index == LAST_PHASE {
                self.forward_index = FIRST_PHASE;
                return Ok(Walk::Complete);
            }
            self.forward_index += 1;
        }
    }

    fn walk_backward<K>(&mut self, clock: &K, min_delay: u32) -> Result<Walk, MotorError>
    where
        K: MicrosClock + ?Sized,
    {
        loop {
            self.coils.apply(pattern(self.backward_index as usize))?;
            if !self.governor.try_advance(clock.micros(), min_delay) {
                return Ok(Walk::Pending);
            }
            if self.backward_index == FIRST_PHASE {
                self.backward_index = LAST_PHASE;
                return Ok(Walk::Complete);
            }
            self.backward_index -= 1;
        }
    }
}
