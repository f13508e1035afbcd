//! Verdict types handed back to the assertion layer.

use serde::{Deserialize, Serialize};

use crate::analysis::FitResult;
use crate::output::message;
use crate::statistics::ConfidenceInterval;
use crate::types::{Expectation, GrowthModel};

/// Result of a threshold assertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingVerdict {
    /// Whether the assertion holds.
    pub passed: bool,
    /// Direction of the assertion.
    pub expectation: Expectation,
    /// Threshold in seconds.
    pub threshold_secs: f64,
    /// Unrounded interval the decision was made on.
    pub interval: ConfidenceInterval,
    /// Observed mean, rounded to `DIAGNOSTIC_DECIMALS` places.
    pub mean_secs: f64,
    /// Observed margin, rounded to `DIAGNOSTIC_DECIMALS` places.
    pub margin_secs: f64,
}

impl TimingVerdict {
    /// Whether the upper bound of the interval is within the threshold.
    pub fn within_threshold(&self) -> bool {
        self.interval.upper() <= self.threshold_secs
    }

    /// Message describing why the assertion failed.
    pub fn failure_message(&self) -> String {
        message::timing_failure(self)
    }
}

/// Result of a complexity assertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityVerdict {
    /// Whether the assertion holds.
    pub passed: bool,
    /// Direction of the assertion.
    pub expectation: Expectation,
    /// Growth model the caller expected.
    pub expected: GrowthModel,
    /// Growth model the classifier selected.
    pub observed: GrowthModel,
    /// Every candidate fit, in tie-break order.
    pub fits: Vec<FitResult>,
    /// Input sizes the unit of work was run at.
    pub sizes: Vec<usize>,
}

impl ComplexityVerdict {
    /// Fit of the observed model.
    pub fn observed_fit(&self) -> Option<&FitResult> {
        self.fits.iter().find(|fit| fit.model == self.observed)
    }

    /// Message describing why the assertion failed.
    pub fn failure_message(&self) -> String {
        message::complexity_failure(self)
    }
}

/// Verdict from either assertion kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Verdict {
    /// Threshold assertion.
    Timing(TimingVerdict),
    /// Complexity assertion.
    Complexity(ComplexityVerdict),
}

impl Verdict {
    /// Whether the assertion holds.
    pub fn passed(&self) -> bool {
        match self {
            Verdict::Timing(v) => v.passed,
            Verdict::Complexity(v) => v.passed,
        }
    }

    /// Direction of the assertion.
    pub fn expectation(&self) -> Expectation {
        match self {
            Verdict::Timing(v) => v.expectation,
            Verdict::Complexity(v) => v.expectation,
        }
    }

    /// Message describing why the assertion failed.
    pub fn failure_message(&self) -> String {
        match self {
            Verdict::Timing(v) => v.failure_message(),
            Verdict::Complexity(v) => v.failure_message(),
        }
    }
}

impl From<TimingVerdict> for Verdict {
    fn from(verdict: TimingVerdict) -> Self {
        Verdict::Timing(verdict)
    }
}

impl From<ComplexityVerdict> for Verdict {
    fn from(verdict: ComplexityVerdict) -> Self {
        Verdict::Complexity(verdict)
    }
}
