//! Main `PerfOracle` entry point and builder.

use std::convert::Infallible;

use crate::analysis::classify_with;
use crate::config::Config;
use crate::constants::DIAGNOSTIC_DECIMALS;
use crate::error::{OracleError, UsageError};
use crate::helpers::SizeRange;
use crate::measurement::{Clock, Sampler};
use crate::result::{ComplexityVerdict, TimingVerdict};
use crate::statistics::{round_secs, summarize};
use crate::types::{Expectation, GrowthModel};

/// Main entry point for performance assertions.
///
/// Every assertion draws a fresh sample set; nothing is shared between
/// calls, so a positive and a negated assertion at the same threshold are
/// two independent measurements and may both fail near the boundary.
///
/// # Example
///
/// ```ignore
/// use perf_oracle::{Expectation, GrowthModel, PerfOracle, SizeRange};
///
/// let oracle = PerfOracle::new().samples(10);
///
/// let verdict = oracle.assert_within_threshold(0.006, Expectation::To, || {
///     "x".repeat(1024 * 10)
/// })?;
/// assert!(verdict.passed, "{}", verdict.failure_message());
///
/// let range = SizeRange::new(1, 25)?.step_by(1);
/// let verdict = oracle.assert_complexity(range, GrowthModel::Exponential, Expectation::To, |n| {
///     fibonacci(n)
/// })?;
/// ```
#[derive(Debug, Clone)]
pub struct PerfOracle {
    config: Config,
    /// Calibrated once and reused by every assertion.
    clock: Clock,
}

impl Default for PerfOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl PerfOracle {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create with an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            clock: Clock::new(),
        }
    }

    /// Create with defaults overlaid by `PERF_ORACLE_*` environment variables.
    pub fn from_env() -> Self {
        Self::with_config(Config::from_env())
    }

    /// Set the timing-mode sample count.
    pub fn samples(mut self, n: usize) -> Self {
        self.config.samples = n;
        self
    }

    /// Set the number of unmeasured timing-mode calls.
    pub fn warmup(mut self, n: usize) -> Self {
        self.config.warmup = n;
        self
    }

    /// Set the number of complexity-mode calls per size.
    pub fn repeat(mut self, n: usize) -> Self {
        self.config.repeat = n;
        self
    }

    /// Set the margin-of-error multiplier.
    pub fn confidence_multiplier(mut self, z: f64) -> Self {
        self.config.confidence_multiplier = z;
        self
    }

    /// Set the classifier tie window.
    pub fn tie_epsilon(mut self, epsilon: f64) -> Self {
        self.config.tie_epsilon = epsilon;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn sampler(&self) -> Sampler {
        Sampler::new(self.clock.clone())
            .with_warmup(self.config.warmup)
            .with_repeat(self.config.repeat)
    }

    /// Assert that fallible `work` completes within `threshold_secs`.
    ///
    /// Passes when `mean + margin <= threshold`; a negated assertion passes
    /// when `mean + margin > threshold`.
    ///
    /// # Errors
    ///
    /// `Usage` for a non-positive threshold or zero samples, `Work(e)` for
    /// the first error `work` returns.
    pub fn try_assert_within_threshold<F, T, E>(
        &self,
        threshold_secs: f64,
        expectation: Expectation,
        work: F,
    ) -> Result<TimingVerdict, OracleError<E>>
    where
        F: FnMut() -> Result<T, E>,
    {
        if !(threshold_secs > 0.0 && threshold_secs.is_finite()) {
            return Err(UsageError::NonPositiveThreshold(threshold_secs).into());
        }

        let samples = self.sampler().try_collect_timing(self.config.samples, work)?;
        let interval = summarize(&samples, self.config.confidence_multiplier);

        let within = interval.upper() <= threshold_secs;
        let passed = match expectation {
            Expectation::To => within,
            Expectation::NotTo => !within,
        };

        tracing::info!(
            passed,
            ?expectation,
            threshold_secs,
            mean_secs = interval.mean,
            margin_secs = interval.margin,
            "timing assertion"
        );

        Ok(TimingVerdict {
            passed,
            expectation,
            threshold_secs,
            interval,
            mean_secs: round_secs(interval.mean, DIAGNOSTIC_DECIMALS),
            margin_secs: round_secs(interval.margin, DIAGNOSTIC_DECIMALS),
        })
    }

    /// Assert that infallible `work` completes within `threshold_secs`.
    pub fn assert_within_threshold<F, T>(
        &self,
        threshold_secs: f64,
        expectation: Expectation,
        mut work: F,
    ) -> Result<TimingVerdict, UsageError>
    where
        F: FnMut() -> T,
    {
        self.try_assert_within_threshold(threshold_secs, expectation, || {
            Ok::<T, Infallible>(work())
        })
        .map_err(OracleError::into_usage)
    }

    /// Assert that fallible `work` grows like `expected` over `range`.
    ///
    /// # Errors
    ///
    /// `Usage` for an invalid stepping policy or repeat count, `Work(e)`
    /// for the first error `work` returns.
    pub fn try_assert_complexity<F, T, E>(
        &self,
        range: SizeRange,
        expected: GrowthModel,
        expectation: Expectation,
        work: F,
    ) -> Result<ComplexityVerdict, OracleError<E>>
    where
        F: FnMut(usize) -> Result<T, E>,
    {
        let sizes = range.sizes()?;
        self.try_assert_complexity_over(&sizes, expected, expectation, work)
    }

    /// Assert that infallible `work` grows like `expected` over `range`.
    pub fn assert_complexity<F, T>(
        &self,
        range: SizeRange,
        expected: GrowthModel,
        expectation: Expectation,
        mut work: F,
    ) -> Result<ComplexityVerdict, UsageError>
    where
        F: FnMut(usize) -> T,
    {
        self.try_assert_complexity(range, expected, expectation, |n| {
            Ok::<T, Infallible>(work(n))
        })
        .map_err(OracleError::into_usage)
    }

    /// Assert growth over an explicit, strictly increasing size list.
    ///
    /// # Errors
    ///
    /// `Usage` if fewer than two sizes are given or they do not increase,
    /// `Work(e)` for the first error `work` returns.
    pub fn try_assert_complexity_over<F, T, E>(
        &self,
        sizes: &[usize],
        expected: GrowthModel,
        expectation: Expectation,
        work: F,
    ) -> Result<ComplexityVerdict, OracleError<E>>
    where
        F: FnMut(usize) -> Result<T, E>,
    {
        let samples = self.sampler().try_collect_complexity(sizes, work)?;
        let classification = classify_with(&samples, self.config.tie_epsilon);
        let observed = classification.model;

        let passed = (observed == expected) != expectation.is_negated();

        tracing::info!(
            passed,
            ?expectation,
            %expected,
            %observed,
            sizes = sizes.len(),
            "complexity assertion"
        );

        Ok(ComplexityVerdict {
            passed,
            expectation,
            expected,
            observed,
            fits: classification.fits,
            sizes: samples.sizes(),
        })
    }

    /// Infallible form of [`PerfOracle::try_assert_complexity_over`].
    pub fn assert_complexity_over<F, T>(
        &self,
        sizes: &[usize],
        expected: GrowthModel,
        expectation: Expectation,
        mut work: F,
    ) -> Result<ComplexityVerdict, UsageError>
    where
        F: FnMut(usize) -> T,
    {
        self.try_assert_complexity_over(sizes, expected, expectation, |n| {
            Ok::<T, Infallible>(work(n))
        })
        .map_err(OracleError::into_usage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_builder_settings() {
        let oracle = PerfOracle::new()
            .samples(10)
            .warmup(2)
            .repeat(3)
            .confidence_multiplier(2.58)
            .tie_epsilon(1e-9);
        let config = oracle.config();
        assert_eq!(config.samples, 10);
        assert_eq!(config.warmup, 2);
        assert_eq!(config.repeat, 3);
        assert!((config.confidence_multiplier - 2.58).abs() < 1e-12);
        assert!((config.tie_epsilon - 1e-9).abs() < 1e-18);
    }

    #[test]
    fn test_non_positive_threshold_rejected() {
        let oracle = PerfOracle::new();
        let mut calls = 0;
        for threshold in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = oracle
                .assert_within_threshold(threshold, Expectation::To, || calls += 1)
                .unwrap_err();
            assert!(matches!(err, UsageError::NonPositiveThreshold(_)));
        }
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_sleep_above_threshold() {
        let oracle = PerfOracle::new().samples(2);
        let verdict = oracle
            .assert_within_threshold(0.001, Expectation::To, || {
                std::thread::sleep(Duration::from_millis(10))
            })
            .unwrap();
        assert!(!verdict.passed);
        assert!(!verdict.within_threshold());
        assert!(verdict.mean_secs >= 0.01);

        let negated = oracle
            .assert_within_threshold(0.001, Expectation::NotTo, || {
                std::thread::sleep(Duration::from_millis(10))
            })
            .unwrap();
        assert!(negated.passed);
    }

    #[test]
    fn test_complexity_negation_flips() {
        let oracle = PerfOracle::new();
        let sizes = [1, 2, 3];
        let positive = oracle
            .assert_complexity_over(&sizes, GrowthModel::Cubic, Expectation::To, |_| ())
            .unwrap();
        let negated = oracle
            .assert_complexity_over(&sizes, GrowthModel::Cubic, Expectation::NotTo, |_| ())
            .unwrap();
        // Both runs observe some model; at most one of them can match cubic
        // and the negated verdict is the complement of its own observation.
        assert_eq!(positive.passed, positive.observed == GrowthModel::Cubic);
        assert_eq!(negated.passed, negated.observed != GrowthModel::Cubic);
    }

    #[test]
    fn test_work_error_propagates_unchanged() {
        let oracle = PerfOracle::new().samples(5);
        let err = oracle
            .try_assert_within_threshold(1.0, Expectation::To, || {
                Err::<(), _>(std::io::Error::other("boom"))
            })
            .unwrap_err();
        let inner = err.into_work().unwrap();
        assert_eq!(inner.to_string(), "boom");
    }
}
