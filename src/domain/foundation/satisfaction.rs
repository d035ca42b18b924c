//! Satisfaction score value object (1 to 10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Citizen satisfaction with a budget topic: 1 (worst) to 10 (best).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Satisfaction(u8);

impl Satisfaction {
    /// Lowest accepted score.
    pub const MIN: u8 = 1;

    /// Highest accepted score.
    pub const MAX: u8 = 10;

    /// Creates a Satisfaction, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(ValidationError::out_of_range(
                "satisfaction",
                i64::from(Self::MIN),
                i64::from(Self::MAX),
                value,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Satisfaction {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Satisfaction> for i64 {
    fn from(value: Satisfaction) -> Self {
        i64::from(value.0)
    }
}

impl fmt::Display for Satisfaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn satisfaction_accepts_full_range() {
        for value in 1..=10 {
            assert_eq!(Satisfaction::try_new(value).unwrap().value() as i64, value);
        }
    }

    #[test]
    fn satisfaction_rejects_out_of_range() {
        assert!(Satisfaction::try_new(0).is_err());
        assert!(Satisfaction::try_new(11).is_err());
        assert!(Satisfaction::try_new(-3).is_err());
    }

    #[test]
    fn satisfaction_rejection_reports_bounds() {
        match Satisfaction::try_new(42) {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "satisfaction");
                assert_eq!((min, max, actual), (1, 10, 42));
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn satisfaction_deserializes_with_validation() {
        let ok: Satisfaction = serde_json::from_str("7").unwrap();
        assert_eq!(ok.value(), 7);
        assert!(serde_json::from_str::<Satisfaction>("12").is_err());
    }

    #[test]
    fn satisfaction_displays_out_of_ten() {
        assert_eq!(Satisfaction::try_new(3).unwrap().to_string(), "3/10");
    }
}
