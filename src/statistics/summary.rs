//! Summary statistics over a timing-mode sample set.

use serde::{Deserialize, Serialize};

use crate::types::SampleSet;

/// Mean elapsed time with a symmetric margin of error.
///
/// True latency is asserted to lie in `[mean - margin, mean + margin]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Arithmetic mean in seconds.
    pub mean: f64,
    /// Half-width of the interval in seconds (never negative).
    pub margin: f64,
    /// Sample standard deviation in seconds (0 for a single sample).
    pub std_dev: f64,
    /// Number of samples the interval was computed from.
    pub sample_count: usize,
}

impl ConfidenceInterval {
    /// Lower bound of the interval.
    pub fn lower(&self) -> f64 {
        self.mean - self.margin
    }

    /// Upper bound of the interval.
    pub fn upper(&self) -> f64 {
        self.mean + self.margin
    }
}

/// Summarize a sample set into a confidence interval.
///
/// The margin is `multiplier * s / sqrt(k)` with `s` the sample standard
/// deviation. A fixed multiplier stands in for a t-distribution critical
/// value; with `k = 1` the margin is 0.
pub fn summarize(samples: &SampleSet, multiplier: f64) -> ConfidenceInterval {
    interval_from(&samples.elapsed(), multiplier)
}

/// Confidence interval of raw elapsed seconds.
pub fn interval_from(elapsed: &[f64], multiplier: f64) -> ConfidenceInterval {
    let n = elapsed.len();
    if n == 0 {
        return ConfidenceInterval {
            mean: 0.0,
            margin: 0.0,
            std_dev: 0.0,
            sample_count: 0,
        };
    }

    let mean = elapsed.iter().sum::<f64>() / n as f64;

    let std_dev = if n < 2 {
        0.0
    } else {
        let variance = elapsed.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        variance.sqrt()
    };

    let margin = (multiplier.abs() * std_dev / (n as f64).sqrt()).max(0.0);

    ConfidenceInterval {
        mean,
        margin,
        std_dev,
        sample_count: n,
    }
}

/// Round seconds to `decimals` decimal places for diagnostics.
pub fn round_secs(secs: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (secs * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_interval() {
        let ci = interval_from(&[1.0, 2.0, 3.0, 4.0, 5.0], 1.96);
        assert!((ci.mean - 3.0).abs() < 1e-12);
        // s = sqrt(2.5)
        assert!((ci.std_dev - 2.5f64.sqrt()).abs() < 1e-12);
        let expected = 1.96 * 2.5f64.sqrt() / 5f64.sqrt();
        assert!((ci.margin - expected).abs() < 1e-12);
        assert!((ci.upper() - (3.0 + expected)).abs() < 1e-12);
        assert!((ci.lower() - (3.0 - expected)).abs() < 1e-12);
    }

    #[test]
    fn test_single_sample_zero_margin() {
        let set = SampleSet::timing(vec![0.25]).unwrap();
        let ci = summarize(&set, 1.96);
        assert_eq!(ci.margin, 0.0);
        assert_eq!(ci.mean, 0.25);
        assert_eq!(ci.sample_count, 1);
    }

    #[test]
    fn test_margin_non_negative() {
        for samples in [vec![0.1, 0.1], vec![0.1, 0.9, 0.3], vec![5.0; 30]] {
            let ci = interval_from(&samples, 1.96);
            assert!(ci.margin >= 0.0);
        }
        let ci = interval_from(&[0.1, 0.3], -1.96);
        assert!(ci.margin >= 0.0);
    }

    #[test]
    fn test_identical_samples() {
        let ci = interval_from(&[0.0005; 10], 1.96);
        assert!((ci.mean - 0.0005).abs() < 1e-15);
        assert!(ci.margin < 1e-15);
    }

    #[test]
    fn test_round_secs() {
        assert_eq!(round_secs(0.000_512_345, 6), 0.000_512);
        assert_eq!(round_secs(1.234_567_89, 3), 1.235);
    }
}
