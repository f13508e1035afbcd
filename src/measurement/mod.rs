//! Measurement infrastructure.
//!
//! This module provides:
//! - A wall-clock [`Clock`] that times a single call of the unit of work
//! - A [`Sampler`] that drives repeated calls in timing or complexity mode
//!
//! Calls happen sequentially on the calling thread. There is no timeout: if
//! the unit of work never returns, neither does the sampler.

mod collector;
mod timer;

pub use collector::Sampler;
pub use timer::{black_box, Clock};
