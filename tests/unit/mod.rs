//! Unit test harness for coil-stepper.
//!
//! Simulated collaborators plus per-component tests that drive them.

pub mod sim;

mod coil_outputs;
mod config_parsing;
