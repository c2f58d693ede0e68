//! Coil outputs.

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::MotorError;
use crate::sequence::CoilPattern;

/// Something that can put a [`CoilPattern`] on a motor's four inputs.
pub trait CoilDriver {
    /// Drive IN1..IN4 to the levels in `pattern`.
    fn apply(&mut self, pattern: CoilPattern) -> Result<(), MotorError>;

    /// Drive every input low so the coils stop drawing current.
    fn release(&mut self) -> Result<(), MotorError> {
        self.apply(CoilPattern::RELEASED)
    }
}

/// Four embedded-hal output pins wired to IN1..IN4 of a driver board.
///
/// The pins are bound once and never reassigned; [`Coils::into_pins`] hands
/// them back when the motor is detached.
#[derive(Debug)]
pub struct Coils<IN1, IN2, IN3, IN4> {
    in1: IN1,
    in2: IN2,
    in3: IN3,
    in4: IN4,
}

impl<IN1, IN2, IN3, IN4> Coils<IN1, IN2, IN3, IN4>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
{
    /// Bind the four coil pins in IN1..IN4 order.
    pub fn new(in1: IN1, in2: IN2, in3: IN3, in4: IN4) -> Self {
        Self { in1, in2, in3, in4 }
    }

    /// Give the pins back.
    pub fn into_pins(self) -> (IN1, IN2, IN3, IN4) {
        (self.in1, self.in2, self.in3, self.in4)
    }
}

fn drive<P: OutputPin>(pin: &mut P, level: bool) -> Result<(), MotorError> {
    pin.set_state(PinState::from(level))
        .map_err(|_| MotorError::PinError)
}

impl<IN1, IN2, IN3, IN4> CoilDriver for Coils<IN1, IN2, IN3, IN4>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
{
    fn apply(&mut self, pattern: CoilPattern) -> Result<(), MotorError> {
        drive(&mut self.in1, pattern.in1)?;
        drive(&mut self.in2, pattern.in2)?;
        drive(&mut self.in3, pattern.in3)?;
        drive(&mut self.in4, pattern.in4)
    }
}
