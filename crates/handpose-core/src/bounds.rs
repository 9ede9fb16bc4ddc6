//! Bounded scalar ranges and the directional membership test.

use serde::{Deserialize, Serialize};

/// A closed interval [min, max] over an angle in degrees.
///
/// No ordering invariant is enforced: min > max is a legal configuration
/// whose inclusive-membership test is false for every value ("never
/// satisfied" under [`RecognitionMode::Inside`], "always satisfied" under
/// [`RecognitionMode::Outside`]).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundedRange {
    pub min: f64,
    pub max: f64,
}

impl BoundedRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive membership: `min <= value <= max`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// The sign-flipped-and-swapped range `[-max, -min]`.
    ///
    /// The swap keeps the result well-ordered when the input was.
    pub fn negated(&self) -> Self {
        Self {
            min: -self.max,
            max: -self.min,
        }
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Whether membership in a range counts as valid (Inside) or values outside
/// the range count as valid (Outside).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecognitionMode {
    /// Allow everything within [min, max]
    #[default]
    Inside,
    /// Allow everything that is not within [min, max]
    Outside,
}

/// One angular constraint: a range plus the recognition policy applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DirectionalTest {
    pub range: BoundedRange,
    pub mode: RecognitionMode,
}

impl DirectionalTest {
    pub fn new(range: BoundedRange, mode: RecognitionMode) -> Self {
        Self { range, mode }
    }

    pub fn inside(min: f64, max: f64) -> Self {
        Self::new(BoundedRange::new(min, max), RecognitionMode::Inside)
    }

    pub fn outside(min: f64, max: f64) -> Self {
        Self::new(BoundedRange::new(min, max), RecognitionMode::Outside)
    }

    /// Whether `value` satisfies this test.
    ///
    /// Let A = value in range, I = mode is Inside. Fulfillment is
    /// (A ∧ I) ∨ (¬A ∧ ¬I), which reduces to A == I. The equality form is
    /// the contract: Inside and Outside are exact complements for every
    /// value, boundaries included.
    pub fn satisfies(&self, value: f64) -> bool {
        self.range.contains(value) == (self.mode == RecognitionMode::Inside)
    }

    /// Same test against the negated-and-swapped range (mirror helper)
    pub fn negated(&self) -> Self {
        Self {
            range: self.range.negated(),
            mode: self.mode,
        }
    }
}
