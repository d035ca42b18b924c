//! Random perturbation of base sector percentages.
//!
//! The magnitude and precision of the perturbation belong to the
//! [`JitterPolicy`]; the randomness itself comes from an injected
//! [`JitterSource`] so tests can pin the output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::round_to;

/// Lower bound applied to every perturbed percentage.
pub const MIN_SECTOR_PERCENTAGE: f64 = 5.0;

/// Source of signed unit offsets in `[-1.0, 1.0]`.
pub trait JitterSource: Send {
    /// Returns the next offset. Values outside `[-1.0, 1.0]` are clamped by callers.
    fn next_offset(&mut self) -> f64;
}

/// Jitter source that never perturbs anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroJitter;

impl JitterSource for ZeroJitter {
    fn next_offset(&mut self) -> f64 {
        0.0
    }
}

/// Jitter source backed by a seedable `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: StdRng,
}

impl SeededJitter {
    /// Creates a reproducible source from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded from system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl JitterSource for SeededJitter {
    fn next_offset(&mut self) -> f64 {
        self.rng.gen_range(-1.0..=1.0)
    }
}

/// Replays a fixed list of offsets, then zeros.
#[derive(Debug, Clone, Default)]
pub struct ScriptedJitter {
    offsets: Vec<f64>,
    position: usize,
}

impl ScriptedJitter {
    pub fn new(offsets: Vec<f64>) -> Self {
        Self {
            offsets,
            position: 0,
        }
    }
}

impl JitterSource for ScriptedJitter {
    fn next_offset(&mut self) -> f64 {
        let offset = self.offsets.get(self.position).copied().unwrap_or(0.0);
        self.position += 1;
        offset
    }
}

/// How far and how precisely a base percentage is perturbed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterPolicy {
    /// Maximum absolute perturbation in percentage points.
    pub magnitude: f64,
    /// Decimals kept on the drawn perturbation.
    pub offset_decimals: u32,
    /// Decimals kept on the perturbed percentage, if it is rounded at all.
    pub value_decimals: Option<u32>,
}

impl JitterPolicy {
    /// General distribution: ±1.0, one decimal.
    pub const GENERAL: Self = Self {
        magnitude: 1.0,
        offset_decimals: 1,
        value_decimals: None,
    };

    /// Forecast distribution: ±0.5, two decimals.
    pub const FORECAST: Self = Self {
        magnitude: 0.5,
        offset_decimals: 2,
        value_decimals: Some(2),
    };

    /// Perturbs `base` with the next offset from `source`, floored at
    /// [`MIN_SECTOR_PERCENTAGE`].
    pub fn perturb(&self, base: f64, source: &mut dyn JitterSource) -> f64 {
        let offset = round_to(
            source.next_offset().clamp(-1.0, 1.0) * self.magnitude,
            self.offset_decimals,
        );
        let mut perturbed = base + offset;
        if let Some(decimals) = self.value_decimals {
            perturbed = round_to(perturbed, decimals);
        }
        perturbed.max(MIN_SECTOR_PERCENTAGE)
    }
}

/// How a distribution came to be.
///
/// `Manual` marks distributions rebuilt from stored amounts; it has no jitter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionPolicy {
    #[default]
    General,
    Forecast,
    Manual,
}

impl DistributionPolicy {
    pub fn jitter(&self) -> Option<JitterPolicy> {
        match self {
            DistributionPolicy::General => Some(JitterPolicy::GENERAL),
            DistributionPolicy::Forecast => Some(JitterPolicy::FORECAST),
            DistributionPolicy::Manual => None,
        }
    }
}
