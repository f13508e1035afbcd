//! Wall-clock measurement of a single call.
//!
//! Uses `std::time::Instant`, the monotonic wall clock, so any blocking
//! inside the unit of work counts towards its elapsed time.

use std::hint::black_box as std_black_box;
use std::time::Instant;

/// Wrapper around `std::hint::black_box` for preventing compiler optimizations.
///
/// Use this to wrap values produced by the measured work so the compiler
/// cannot optimize the computation away or move it outside the timed region.
#[inline]
pub fn black_box<T>(x: T) -> T {
    std_black_box(x)
}

/// Empirically measure clock resolution by finding the minimum non-zero
/// difference between consecutive reads.
fn measure_resolution_secs() -> f64 {
    let mut min_diff = f64::MAX;

    for _ in 0..200 {
        let start = Instant::now();
        let mut now = Instant::now();
        // Spin until the clock ticks at least once.
        for _ in 0..10_000 {
            if now > start {
                break;
            }
            now = Instant::now();
        }
        let diff = now.duration_since(start).as_secs_f64();
        if diff > 0.0 && diff < min_diff {
            min_diff = diff;
        }
    }

    if min_diff == f64::MAX {
        1e-9
    } else {
        min_diff
    }
}

/// Clock used by the sampler.
#[derive(Debug, Clone)]
pub struct Clock {
    /// Smallest observable tick in seconds.
    resolution_secs: f64,
}

impl Clock {
    /// Create a clock, measuring its resolution.
    pub fn new() -> Self {
        Self {
            resolution_secs: measure_resolution_secs(),
        }
    }

    /// Create a clock with a known resolution.
    ///
    /// Useful for testing or when calibration has already been done.
    pub fn with_resolution(resolution_secs: f64) -> Self {
        Self { resolution_secs }
    }

    /// Smallest observable tick in seconds.
    pub fn resolution_secs(&self) -> f64 {
        self.resolution_secs
    }

    /// Run `work` exactly once and return its elapsed seconds.
    ///
    /// An error from `work` is returned unchanged; no time is reported.
    #[inline]
    pub fn measure<F, T, E>(&self, work: F) -> Result<f64, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let start = Instant::now();
        let outcome = black_box(work());
        let elapsed = start.elapsed().as_secs_f64();
        outcome.map(|_| elapsed)
    }

    /// Run infallible `work` exactly once and return its elapsed seconds.
    #[inline]
    pub fn measure_secs<F, T>(&self, work: F) -> f64
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        black_box(work());
        start.elapsed().as_secs_f64()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_measure_sleep() {
        let clock = Clock::with_resolution(1e-9);
        let secs = clock.measure_secs(|| std::thread::sleep(Duration::from_millis(5)));
        assert!(secs >= 0.005, "elapsed = {}", secs);
    }

    #[test]
    fn test_measure_propagates_error() {
        let clock = Clock::with_resolution(1e-9);
        let result: Result<f64, &str> = clock.measure(|| Err::<(), _>("boom"));
        assert_eq!(result, Err("boom"));
    }

    #[test]
    fn test_measure_runs_once() {
        let clock = Clock::with_resolution(1e-9);
        let mut calls = 0;
        let secs = clock
            .measure(|| {
                calls += 1;
                Ok::<_, ()>(calls)
            })
            .unwrap();
        assert_eq!(calls, 1);
        assert!(secs >= 0.0);
    }

    #[test]
    fn test_resolution_reasonable() {
        let clock = Clock::new();
        // Anything between a nanosecond tick and a coarse 20ms tick.
        assert!(
            clock.resolution_secs() > 0.0 && clock.resolution_secs() < 0.02,
            "resolution = {}",
            clock.resolution_secs()
        );
    }
}
