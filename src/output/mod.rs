//! Rendering of verdicts.
//!
//! - [`message`]: one-line failure messages for assertion layers
//! - [`terminal`]: coloured multi-line report
//! - [`json`]: machine-readable output

pub mod json;
pub mod message;
pub mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::format_verdict;
