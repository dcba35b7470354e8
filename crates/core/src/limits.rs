//! Per-write delta limits
//!
//! The engine accepts unbounded cumulative scores but bounds each individual
//! delta. Violations are rejected with `ScoreOutOfRange` before any state is
//! touched, which is what gives writes their all-or-nothing semantics.

use crate::error::{Error, Result};
use crate::types::Score;
use rust_decimal::Decimal;

/// Inclusive bounds on a single score delta
///
/// The default bounds are [-1000, 1000]. Custom bounds exist mainly so tests
/// can exercise the validation path with small values.
#[derive(Debug, Clone, Copy)]
pub struct DeltaLimits {
    /// Inclusive lower bound
    pub min: Score,
    /// Inclusive upper bound
    pub max: Score,
}

impl Default for DeltaLimits {
    fn default() -> Self {
        DeltaLimits {
            min: Decimal::from(-1000),
            max: Decimal::from(1000),
        }
    }
}

impl DeltaLimits {
    /// Create limits with explicit bounds
    pub fn new(min: Score, max: Score) -> Self {
        DeltaLimits { min, max }
    }

    /// Validate a delta against the bounds
    ///
    /// Returns `Ok(())` when `min <= delta <= max`, otherwise
    /// `Err(Error::ScoreOutOfRange)` carrying the rejected delta and both
    /// bounds.
    pub fn validate(&self, delta: Score) -> Result<()> {
        if delta < self.min || delta > self.max {
            return Err(Error::ScoreOutOfRange {
                delta,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}
