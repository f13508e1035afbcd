//! Statistical methods for timing analysis.
//!
//! Mean, sample standard deviation and a fixed-multiplier margin of error
//! over timing-mode samples.

mod summary;

pub use summary::{interval_from, round_secs, summarize, ConfidenceInterval};
