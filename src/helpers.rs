//! Input-size enumeration for complexity assertions.
//!
//! A complexity assertion runs the unit of work once per size. [`SizeRange`]
//! turns an inclusive `[lo, hi]` range into the strictly increasing size
//! sequence the sampler visits.
//!
//! # Example
//!
//! ```ignore
//! use perf_oracle::helpers::SizeRange;
//!
//! // 1, 101, 201, ..., 9901, 10000
//! let sizes = SizeRange::new(1, 10_000)?.step_by(100).sizes()?;
//!
//! // 1, 8, 64, 512, 4096, 10000
//! let sizes = SizeRange::new(1, 10_000)?.ratio(8).sizes()?;
//! ```
//!
//! Both policies always end on `hi`, so the upper bound is measured even
//! when the steps do not land on it.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_GEOMETRIC_RATIO;
use crate::error::UsageError;

/// How sizes advance from `lo` to `hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Steps {
    /// Add a fixed step.
    Linear(usize),
    /// Multiply by a fixed ratio.
    Geometric(usize),
}

impl Default for Steps {
    fn default() -> Self {
        Steps::Geometric(DEFAULT_GEOMETRIC_RATIO)
    }
}

/// Inclusive, positive range of input sizes.
///
/// Deserialization runs the same bounds check as [`SizeRange::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSizeRange")]
pub struct SizeRange {
    lo: usize,
    hi: usize,
    steps: Steps,
}

#[derive(Deserialize)]
struct RawSizeRange {
    lo: usize,
    hi: usize,
    #[serde(default)]
    steps: Steps,
}

impl TryFrom<RawSizeRange> for SizeRange {
    type Error = UsageError;

    fn try_from(raw: RawSizeRange) -> Result<Self, Self::Error> {
        let range = SizeRange {
            lo: raw.lo,
            hi: raw.hi,
            steps: raw.steps,
        };
        range.validate()?;
        Ok(range)
    }
}

impl SizeRange {
    /// Create a range using the default geometric ratio.
    ///
    /// # Errors
    ///
    /// [`UsageError::InvalidRange`] unless `0 < lo < hi`.
    pub fn new(lo: usize, hi: usize) -> Result<Self, UsageError> {
        if lo == 0 || lo >= hi {
            return Err(UsageError::InvalidRange { lo, hi });
        }
        Ok(Self {
            lo,
            hi,
            steps: Steps::default(),
        })
    }

    /// Advance by a fixed `step`.
    pub fn step_by(mut self, step: usize) -> Self {
        self.steps = Steps::Linear(step);
        self
    }

    /// Advance by multiplying with `ratio`.
    pub fn ratio(mut self, ratio: usize) -> Self {
        self.steps = Steps::Geometric(ratio);
        self
    }

    /// Lower bound.
    pub fn lo(&self) -> usize {
        self.lo
    }

    /// Upper bound.
    pub fn hi(&self) -> usize {
        self.hi
    }

    /// Stepping policy.
    pub fn steps(&self) -> Steps {
        self.steps
    }

    /// Check the bounds and that the stepping policy advances.
    pub fn validate(&self) -> Result<(), UsageError> {
        if self.lo == 0 || self.lo >= self.hi {
            return Err(UsageError::InvalidRange {
                lo: self.lo,
                hi: self.hi,
            });
        }
        match self.steps {
            Steps::Linear(0) => Err(UsageError::InvalidStep),
            Steps::Geometric(ratio) if ratio < 2 => Err(UsageError::InvalidStep),
            _ => Ok(()),
        }
    }

    /// Strictly increasing sizes from `lo` to `hi`, both included.
    ///
    /// # Errors
    ///
    /// [`UsageError::InvalidRange`] unless `0 < lo < hi`,
    /// [`UsageError::InvalidStep`] for a zero step or a ratio below 2.
    pub fn sizes(&self) -> Result<Vec<usize>, UsageError> {
        self.validate()?;

        let mut sizes = Vec::new();
        let mut current = self.lo;
        while current < self.hi {
            sizes.push(current);
            let next = match self.steps {
                Steps::Linear(step) => current.checked_add(step),
                Steps::Geometric(ratio) => current.checked_mul(ratio),
            };
            match next {
                Some(next) => current = next,
                None => break,
            }
        }
        sizes.push(self.hi);
        Ok(sizes)
    }
}
