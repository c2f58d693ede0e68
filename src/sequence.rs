//! Coil energizing sequence.
//!
//! One full electrical cycle is eight half-step patterns over the four coil
//! inputs IN1..IN4. Walking the table forwards turns the shaft one way,
//! walking it backwards turns it the other way; a complete walk is one
//! mechanical step.

/// Number of patterns in one full electrical cycle.
pub const PHASE_COUNT: usize = 8;

/// Number of coil inputs driven per motor.
pub const COIL_COUNT: usize = 4;

/// Output levels for the four coil inputs, `true` meaning driven high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CoilPattern {
    /// Level of IN1.
    pub in1: bool,
    /// Level of IN2.
    pub in2: bool,
    /// Level of IN3.
    pub in3: bool,
    /// Level of IN4.
    pub in4: bool,
}

impl CoilPattern {
    /// All four inputs low: coils de-energized.
    pub const RELEASED: Self = Self::new(false, false, false, false);

    /// Create a pattern from the IN1..IN4 levels.
    #[inline]
    pub const fn new(in1: bool, in2: bool, in3: bool, in4: bool) -> Self {
        Self { in1, in2, in3, in4 }
    }

    /// Levels in pin order IN1..IN4.
    #[inline]
    pub const fn levels(self) -> [bool; COIL_COUNT] {
        [self.in1, self.in2, self.in3, self.in4]
    }

    /// Number of inputs driven high.
    #[inline]
    pub fn high_count(self) -> usize {
        self.levels().iter().filter(|&&level| level).count()
    }
}

/// The energizing table, indexed by phase.
///
/// Adjacent entries differ in exactly one input, so every transition
/// (including 7 -> 0) is a half step.
pub const SEQUENCE: [CoilPattern; PHASE_COUNT] = [
    CoilPattern::new(false, true, true, true),
    CoilPattern::new(false, false, true, true),
    CoilPattern::new(true, false, true, true),
    CoilPattern::new(true, false, false, true),
    CoilPattern::new(true, true, false, true),
    CoilPattern::new(true, true, false, false),
    CoilPattern::new(true, true, true, false),
    CoilPattern::new(false, true, true, false),
];

/// Pattern for a phase index. Indices wrap modulo [`PHASE_COUNT`].
#[inline]
pub fn pattern(phase: usize) -> CoilPattern {
    SEQUENCE[phase % PHASE_COUNT]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn differing_inputs(a: CoilPattern, b: CoilPattern) -> usize {
        a.levels()
            .iter()
            .zip(b.levels().iter())
            .filter(|(x, y)| x != y)
            .count()
    }

    #[test]
    fn test_neighbouring_phases_differ_by_one_input() {
        for phase in 0..PHASE_COUNT {
            let next = (phase + 1) % PHASE_COUNT;
            assert_eq!(differing_inputs(SEQUENCE[phase], SEQUENCE[next]), 1, "phase {}", phase);
        }
    }

    #[test]
    fn test_alternating_two_and_three_coils() {
        for (phase, p) in SEQUENCE.iter().enumerate() {
            let expected = if phase % 2 == 0 { 3 } else { 2 };
            assert_eq!(p.high_count(), expected, "phase {}", phase);
        }
    }

    #[test]
    fn test_every_pattern_is_distinct() {
        for a in 0..PHASE_COUNT {
            for b in (a + 1)..PHASE_COUNT {
                assert_ne!(SEQUENCE[a], SEQUENCE[b]);
            }
        }
    }

    #[test]
    fn test_pattern_wraps() {
        assert_eq!(pattern(8), SEQUENCE[0]);
        assert_eq!(pattern(15), SEQUENCE[7]);
        assert_eq!(CoilPattern::RELEASED.high_count(), 0);
    }
}
