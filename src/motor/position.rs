//! Shaft angle bookkeeping.
//!
//! Positions are tracked in degrees within a single revolution. A completed
//! step moves the angle by at most one `degree_per_step`, so one correction
//! brings it back into `[0, 360)`.

use crate::config::units::{Degrees, FULL_REVOLUTION};

/// Bring an angle that drifted by less than one turn back into `[0, 360)`.
#[inline]
pub fn wrap_once(degrees: f32) -> f32 {
    if degrees >= FULL_REVOLUTION {
        degrees - FULL_REVOLUTION
    } else if degrees < 0.0 {
        let wrapped = degrees + FULL_REVOLUTION;
        // -tiny + 360 rounds up to 360 in f32
        if wrapped >= FULL_REVOLUTION {
            0.0
        } else {
            wrapped
        }
    } else {
        degrees
    }
}

/// Signed step count that moves the shaft from `current` to `target`.
///
/// The angle difference is taken as a fraction of a revolution and scaled by
/// the steps in a revolution, truncated toward zero. No shortest-path choice
/// is made: a target below the current angle always turns backward.
#[inline]
pub fn steps_to_target(current: Degrees, target: Degrees, steps_per_revolution: f32) -> i32 {
    ((target.0 - current.0) / FULL_REVOLUTION * steps_per_revolution) as i32
}
