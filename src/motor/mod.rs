//! Motor module for coil-stepper.
//!
//! A motor is split in two: the [`MotorControl`] command block shared with
//! application code, and the [`StepSequencer`] owned by the tick path.

mod coils;
mod control;
mod governor;
pub mod position;
mod sequencer;
mod state;

pub use coils::{CoilDriver, Coils};
pub use control::MotorControl;
pub use governor::SpeedGovernor;
pub use sequencer::StepSequencer;
pub use state::{Direction, MotionState, TickOutcome};
