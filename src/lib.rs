//! # coil-stepper
//!
//! Non-blocking, interrupt-driven sequencing for four-coil stepper motors
//! (28BYJ-48 on a ULN2003 board and the like) with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Interrupt driven**: one periodic timer interrupt ticks up to
//!   [`MAX_MOTORS`] motors; nothing in the tick path ever waits
//! - **Lock-free commands**: [`MotorControl`] is a `static`-friendly block of
//!   atomics shared between application code and the interrupt
//! - **Half-step sequence**: an explicit eight-entry [`SEQUENCE`] of coil levels
//! - **Position tracking**: shaft angle kept in `[0, 360)` degrees
//! - **Configuration-driven**: motors and tick period from TOML files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coil_stepper::{Coils, Degrees, MotorControl, TimerDispatcher};
//!
//! static PAN: MotorControl = MotorControl::new();
//!
//! let mut dispatcher = TimerDispatcher::new(timer, clock);
//! dispatcher.attach(&PAN, 2048.0, Coils::new(in1, in2, in3, in4));
//!
//! // Hand `dispatcher` to the timer interrupt, which calls
//! // `dispatcher.on_tick()` every period. Then, from application code:
//! PAN.set_position(Degrees(90.0));
//! while PAN.is_moving() {}
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets
//! - `critical-section`: Atomics through `critical-section` on targets
//!   without compare-and-swap

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Must come first: the logging macros are textually scoped
#[macro_use]
mod fmt;

// Core modules
pub mod clock;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod motor;
pub mod sequence;

// Re-exports for ergonomic API
pub use clock::MicrosClock;
pub use config::{validate_config, MotorConfig, SystemConfig, TimerConfig};
pub use dispatch::{DispatchSummary, MotorRegistry, Registration, TickTimer, TimerDispatcher, MAX_MOTORS};
pub use error::{Error, Result};
pub use motor::{CoilDriver, Coils, Direction, MotionState, MotorControl, StepSequencer, TickOutcome};
pub use sequence::{CoilPattern, SEQUENCE};

#[cfg(feature = "std")]
pub use clock::StdClock;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Degrees, Micros};
