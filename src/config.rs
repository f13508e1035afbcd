//! Configuration for sampling and classification.

use std::env;

use crate::constants::{
    DEFAULT_CONFIDENCE_MULTIPLIER, DEFAULT_REPEAT, DEFAULT_SAMPLES, DEFAULT_TIE_EPSILON,
};

/// Configuration options for `PerfOracle`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Timing-mode sample count (default: 1).
    pub samples: usize,

    /// Unmeasured timing-mode calls before sampling (default: 0).
    pub warmup: usize,

    /// Complexity-mode calls per size (default: 1).
    ///
    /// The recorded elapsed time for a size is the mean of its calls.
    pub repeat: usize,

    /// Multiplier applied to the standard error to get the margin of error
    /// (default: 1.96).
    pub confidence_multiplier: f64,

    /// Fits whose R² differ by less than this are tied (default: 1e-6).
    pub tie_epsilon: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            warmup: 0,
            repeat: DEFAULT_REPEAT,
            confidence_multiplier: DEFAULT_CONFIDENCE_MULTIPLIER,
            tie_epsilon: DEFAULT_TIE_EPSILON,
        }
    }
}

impl Config {
    /// Default configuration overlaid with environment variables.
    ///
    /// Reads `PERF_ORACLE_SAMPLES`, `PERF_ORACLE_WARMUP`, `PERF_ORACLE_REPEAT`,
    /// `PERF_ORACLE_CONFIDENCE` and `PERF_ORACLE_TIE_EPSILON`. Unparsable
    /// values are ignored.
    pub fn from_env() -> Self {
        Self::default().merge_env()
    }

    /// Overlay environment variables onto this configuration.
    pub fn merge_env(mut self) -> Self {
        if let Some(samples) = parse_env("PERF_ORACLE_SAMPLES") {
            self.samples = samples;
        }
        if let Some(warmup) = parse_env("PERF_ORACLE_WARMUP") {
            self.warmup = warmup;
        }
        if let Some(repeat) = parse_env("PERF_ORACLE_REPEAT") {
            self.repeat = repeat;
        }
        if let Some(z) = parse_env::<f64>("PERF_ORACLE_CONFIDENCE").filter(|z| *z >= 0.0) {
            self.confidence_multiplier = z;
        }
        if let Some(eps) = parse_env::<f64>("PERF_ORACLE_TIE_EPSILON").filter(|e| *e >= 0.0) {
            self.tie_epsilon = eps;
        }
        self
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.samples, 1);
        assert_eq!(config.warmup, 0);
        assert_eq!(config.repeat, 1);
        assert!((config.confidence_multiplier - 1.96).abs() < 1e-12);
        assert!((config.tie_epsilon - 1e-6).abs() < 1e-18);
    }

    #[test]
    fn test_env_overlay() {
        // Only this test touches these variables.
        env::set_var("PERF_ORACLE_SAMPLES", "12");
        env::set_var("PERF_ORACLE_TIE_EPSILON", "not-a-number");
        let config = Config::from_env();
        env::remove_var("PERF_ORACLE_SAMPLES");
        env::remove_var("PERF_ORACLE_TIE_EPSILON");

        assert_eq!(config.samples, 12);
        assert!((config.tie_epsilon - DEFAULT_TIE_EPSILON).abs() < 1e-18);
    }
}
