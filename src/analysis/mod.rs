//! Complexity analysis.
//!
//! 1. **Regression** ([`regression`]): least-squares fit of every growth model
//!    in its linearizing coordinates, scored by R²
//! 2. **Classification** ([`classifier`]): best score wins, near-ties go to
//!    the simpler model

mod classifier;
mod regression;

pub use classifier::{classify, classify_with, select, Classification};
pub use regression::{fit, fit_all, FitResult};
