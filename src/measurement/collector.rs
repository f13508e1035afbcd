//! Sample collection in timing and complexity mode.
//!
//! The sampler invokes the unit of work sequentially on the calling thread.
//! - Timing mode: `k` calls with no input, one sample per call.
//! - Complexity mode: one sample per size, each size called `repeat` times
//!   and recorded as the mean of those calls.
//!
//! The first error from the unit of work aborts the run; nothing collected
//! so far is reported.

use std::convert::Infallible;

use crate::constants::MIN_RESOLUTION_MULTIPLE;
use crate::error::{OracleError, UsageError};
use crate::types::{validate_sizes, SampleSet};

use super::timer::{black_box, Clock};

/// Collector for timed executions.
#[derive(Debug, Clone)]
pub struct Sampler {
    /// The clock used for measurements.
    clock: Clock,
    /// Unmeasured timing-mode calls before sampling.
    warmup: usize,
    /// Complexity-mode calls per size.
    repeat: usize,
}

impl Sampler {
    /// Create a sampler with no warmup and one call per size.
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            warmup: 0,
            repeat: 1,
        }
    }

    /// Set the number of unmeasured timing-mode calls.
    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }

    /// Set the number of complexity-mode calls per size.
    pub fn with_repeat(mut self, repeat: usize) -> Self {
        self.repeat = repeat;
        self
    }

    /// Get a reference to the internal clock.
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Collect `samples` timing-mode measurements of fallible `work`.
    ///
    /// # Errors
    ///
    /// `Usage(ZeroSamples)` if `samples == 0`; `Work(e)` for the first error
    /// returned by `work` (including during warmup).
    pub fn try_collect_timing<F, T, E>(
        &self,
        samples: usize,
        mut work: F,
    ) -> Result<SampleSet, OracleError<E>>
    where
        F: FnMut() -> Result<T, E>,
    {
        if samples == 0 {
            return Err(UsageError::ZeroSamples.into());
        }

        for _ in 0..self.warmup {
            black_box(work().map_err(OracleError::Work)?);
        }

        let mut elapsed = Vec::with_capacity(samples);
        for index in 0..samples {
            let secs = self.clock.measure(&mut work).map_err(OracleError::Work)?;
            tracing::trace!(index, elapsed = secs, "timing sample");
            elapsed.push(secs);
        }

        self.check_resolution(&elapsed);
        Ok(SampleSet::timing(elapsed)?)
    }

    /// Collect `samples` timing-mode measurements of infallible `work`.
    pub fn collect_timing<F, T>(&self, samples: usize, mut work: F) -> Result<SampleSet, UsageError>
    where
        F: FnMut() -> T,
    {
        self.try_collect_timing(samples, || Ok::<T, Infallible>(work()))
            .map_err(OracleError::into_usage)
    }

    /// Collect one complexity-mode sample per entry of `sizes`.
    ///
    /// `work` receives the current size and is responsible for building
    /// size-proportional input itself. Sizes are visited in the given order.
    ///
    /// # Errors
    ///
    /// `Usage` if fewer than two sizes are given, sizes are not strictly
    /// increasing, or `repeat == 0`; `Work(e)` for the first error returned
    /// by `work`.
    pub fn try_collect_complexity<F, T, E>(
        &self,
        sizes: &[usize],
        mut work: F,
    ) -> Result<SampleSet, OracleError<E>>
    where
        F: FnMut(usize) -> Result<T, E>,
    {
        validate_sizes(sizes)?;
        if self.repeat == 0 {
            return Err(UsageError::ZeroRepeat.into());
        }

        let mut points = Vec::with_capacity(sizes.len());
        for &size in sizes {
            let mut total = 0.0;
            for _ in 0..self.repeat {
                total += self
                    .clock
                    .measure(|| work(size))
                    .map_err(OracleError::Work)?;
            }
            let mean = total / self.repeat as f64;
            tracing::trace!(size, elapsed = mean, repeat = self.repeat, "complexity sample");
            points.push((size, mean));
        }

        Ok(SampleSet::complexity(points)?)
    }

    /// Collect one complexity-mode sample per size of infallible `work`.
    pub fn collect_complexity<F, T>(&self, sizes: &[usize], mut work: F) -> Result<SampleSet, UsageError>
    where
        F: FnMut(usize) -> T,
    {
        self.try_collect_complexity(sizes, |size| Ok::<T, Infallible>(work(size)))
            .map_err(OracleError::into_usage)
    }

    /// Warn when the measured work is too fast for the clock.
    fn check_resolution(&self, elapsed: &[f64]) {
        let mean = elapsed.iter().sum::<f64>() / elapsed.len() as f64;
        let floor = self.clock.resolution_secs() * MIN_RESOLUTION_MULTIPLE;
        if mean < floor {
            tracing::warn!(
                mean_secs = mean,
                resolution_secs = self.clock.resolution_secs(),
                "operation too fast to measure reliably"
            );
        }
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new(Clock::new())
    }
}
