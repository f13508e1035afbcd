//! Failure messages in the wording assertion layers expect.

use crate::constants::DIAGNOSTIC_DECIMALS;
use crate::result::{ComplexityVerdict, TimingVerdict};
use crate::types::Expectation;

/// Render seconds with the diagnostic precision.
pub fn format_secs(secs: f64) -> String {
    format!("{:.*}", DIAGNOSTIC_DECIMALS as usize, secs)
}

/// Failure message for a threshold assertion.
pub fn timing_failure(verdict: &TimingVerdict) -> String {
    let mean = format_secs(verdict.mean_secs);
    let margin = format_secs(verdict.margin_secs);
    match verdict.expectation {
        Expectation::To => format!(
            "expected block to perform under {} threshold, but performed above {} (± {}) secs",
            verdict.threshold_secs, mean, margin
        ),
        Expectation::NotTo => format!(
            "expected block to not perform under {} threshold, but performed {} (± {}) secs under",
            verdict.threshold_secs, mean, margin
        ),
    }
}

/// Failure message for a complexity assertion.
pub fn complexity_failure(verdict: &ComplexityVerdict) -> String {
    match verdict.expectation {
        Expectation::To => format!(
            "expected block to perform {}, but performed {}",
            verdict.expected, verdict.observed
        ),
        Expectation::NotTo => format!(
            "expected block not to perform {}, but performed {}",
            verdict.expected, verdict.observed
        ),
    }
}
