//! Motion state of a motor as seen from the tick path.

/// Direction of a sub-sequence walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Sequence table walked upward, position grows.
    Forward,
    /// Sequence table walked downward, position shrinks.
    Backward,
}

impl Direction {
    /// +1 for forward, -1 for backward.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Derived state of one motor; never stored, always computed from the
/// pending step count and the active sub-sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionState {
    /// No steps pending.
    Idle,
    /// Walking the sequence table upward.
    SteppingForward,
    /// Walking the sequence table downward.
    SteppingBackward,
}

/// What a single tick did to a motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Idle in power-saver mode: all coils driven low.
    Released,
    /// Idle: the last pattern is left on the coils.
    Holding,
    /// A sub-sequence is under way but not finished.
    InProgress,
    /// A sub-sequence finished: one mechanical step was taken.
    Stepped(Direction),
}
