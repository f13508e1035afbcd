//! # perf-oracle
//!
//! Statistical performance assertions for tests.
//!
//! Two questions can be asked about a unit of work:
//! - **Threshold**: does it run under a time budget? The work is timed `k`
//!   times and the assertion passes when `mean + margin <= threshold`.
//! - **Complexity**: how does its run time grow with input size? The work
//!   is timed once per size and every candidate growth model (constant,
//!   logarithmic, linear, linearithmic, quadratic, cubic, power,
//!   exponential) is fitted by least squares; the best R² wins.
//!
//! Classification is best-effort: wall-clock samples are noisy, and two
//! runs near a boundary may disagree.
//!
//! ## Quick Start
//!
//! ```ignore
//! use perf_oracle::{perform, perform_under, GrowthModel, SizeRange};
//!
//! let verdict = perform_under(0.006, || "x".repeat(10 * 1024))?;
//! assert!(verdict.passed, "{}", verdict.failure_message());
//!
//! let range = SizeRange::new(1, 25)?.step_by(1);
//! let verdict = perform(GrowthModel::Exponential, range, |n| fibonacci(n as u64))?;
//! assert!(verdict.passed, "{}", verdict.failure_message());
//! ```
//!
//! Use [`PerfOracle`] to configure sample counts, warmup, repeats and
//! tie-breaking, to negate assertions, or to run fallible work.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod error;
mod oracle;
mod result;
mod types;

// Functional modules
pub mod analysis;
pub mod helpers;
pub mod measurement;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use config::Config;
pub use constants::{
    DEFAULT_CONFIDENCE_MULTIPLIER, DEFAULT_GEOMETRIC_RATIO, DEFAULT_REPEAT, DEFAULT_SAMPLES,
    DEFAULT_TIE_EPSILON, DIAGNOSTIC_DECIMALS, MIN_RESOLUTION_MULTIPLE,
};
pub use error::{OracleError, UsageError};
pub use helpers::{SizeRange, Steps};
pub use measurement::{black_box, Clock, Sampler};
pub use oracle::PerfOracle;
pub use result::{ComplexityVerdict, TimingVerdict, Verdict};
pub use statistics::ConfidenceInterval;
pub use types::{Expectation, GrowthModel, Sample, SampleSet};

/// Assert that `work` runs under `threshold_secs` with default configuration.
///
/// Takes a single sample; use [`PerfOracle::samples`] for more.
pub fn perform_under<F, T>(threshold_secs: f64, work: F) -> Result<TimingVerdict, UsageError>
where
    F: FnMut() -> T,
{
    PerfOracle::new().assert_within_threshold(threshold_secs, Expectation::To, work)
}

/// Assert that `work` grows like `expected` over `range` with default
/// configuration.
///
/// `work` receives each size in turn and builds its own input.
pub fn perform<F, T>(
    expected: GrowthModel,
    range: SizeRange,
    work: F,
) -> Result<ComplexityVerdict, UsageError>
where
    F: FnMut(usize) -> T,
{
    PerfOracle::new().assert_complexity(range, expected, Expectation::To, work)
}
