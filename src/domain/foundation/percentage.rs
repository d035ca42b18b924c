//! Percentage value object with two decimal places.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::rounding::round_to;

/// A share of a whole, stored on the 0-100 scale rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// Creates a Percentage, rounding to 2 decimals.
    pub fn new(value: f64) -> Self {
        Self(round_to(value, 2))
    }

    /// Computes `part / whole × 100`, rounded to 2 decimals.
    ///
    /// A non-positive `whole` yields zero.
    pub fn of(part: f64, whole: f64) -> Self {
        if whole <= 0.0 {
            return Self::ZERO;
        }
        Self::new(part / whole * 100.0)
    }

    /// Returns the value on the 0-100 scale.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        self.0 / 100.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}
