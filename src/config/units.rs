//! Unit types for physical quantities.
//!
//! Keeps shaft angles and time intervals apart from bare numbers in the
//! public API.

use core::ops::{Add, Sub};

use serde::Deserialize;

/// Degrees in one full shaft revolution.
pub const FULL_REVOLUTION: f32 = 360.0;

/// Angular position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Degrees(pub f32);

impl Degrees {
    /// Create a new Degrees value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Normalize into `[0, 360)`, however many turns away the value is.
    #[inline]
    pub fn normalized(self) -> Self {
        let r = libm::fmodf(self.0, FULL_REVOLUTION);
        let r = if r < 0.0 { r + FULL_REVOLUTION } else { r };
        // -1e-9 % 360 + 360 rounds to exactly 360.0 in f32
        Self(if r >= FULL_REVOLUTION { 0.0 } else { r })
    }
}

impl Add for Degrees {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// A time interval in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Micros(pub u32);

impl Micros {
    /// Create a new Micros value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_in_range() {
        assert_eq!(Degrees(90.0).normalized(), Degrees(90.0));
        assert_eq!(Degrees(360.0).normalized(), Degrees(0.0));
        assert_eq!(Degrees(-90.0).normalized(), Degrees(270.0));
        assert_eq!(Degrees(725.0).normalized(), Degrees(5.0));
        assert_eq!(Degrees(-725.0).normalized(), Degrees(355.0));
    }

    #[test]
    fn test_tiny_negative_normalizes_below_full_turn() {
        let d = Degrees(-1.0e-9).normalized();
        assert!(d.value() >= 0.0 && d.value() < FULL_REVOLUTION);
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Degrees::new(45.0), Degrees(45.0));
        assert_eq!(Micros::new(1300).value(), 1300);
    }
}
