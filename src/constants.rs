//! Default values shared across the engine.

/// Timing-mode sample count when none is configured.
pub const DEFAULT_SAMPLES: usize = 1;

/// Complexity-mode calls per size when none is configured.
pub const DEFAULT_REPEAT: usize = 1;

/// Fixed multiplier applied to the standard error (≈95% normal quantile).
pub const DEFAULT_CONFIDENCE_MULTIPLIER: f64 = 1.96;

/// Two fits closer than this are considered tied.
pub const DEFAULT_TIE_EPSILON: f64 = 1e-6;

/// Decimal places kept in rounded diagnostic seconds.
pub const DIAGNOSTIC_DECIMALS: u32 = 6;

/// Growth ratio used by [`crate::helpers::SizeRange`] when no step is given.
pub const DEFAULT_GEOMETRIC_RATIO: usize = 2;

/// A mean closer than this many clock ticks is reported as unreliable.
pub const MIN_RESOLUTION_MULTIPLE: f64 = 10.0;
