//! Least-squares fitting of growth models.
//!
//! Each model maps `(size, elapsed)` into `(x, y)` where it is a straight
//! line, so every candidate is fitted with the same ordinary least squares:
//!
//! - linear:       x = n,        y = t
//! - logarithmic:  x = ln n,     y = t
//! - linearithmic: x = n ln n,   y = t
//! - quadratic:    x = n²,       y = t
//! - cubic:        x = n³,       y = t
//! - power:        x = ln n,     y = ln t
//! - exponential:  x = n,        y = ln t
//! - constant:     x = n,        y = t with the slope fixed at zero
//!
//! Goodness of fit is R² against the transformed `y` values. Points whose
//! transform is undefined (log of a non-positive value) are dropped; a model
//! left with fewer than two points scores 0 instead of failing.

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::types::{GrowthModel, SampleSet};

/// Outcome of fitting one model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Model that was fitted.
    pub model: GrowthModel,
    /// Coefficient of determination in transformed space, in [0, 1].
    pub r_squared: f64,
    /// Fitted slope in transformed space.
    pub slope: f64,
    /// Fitted intercept in transformed space.
    pub intercept: f64,
    /// Points that survived the transform.
    pub points: usize,
}

impl FitResult {
    /// Worst possible fit, used when the model cannot be evaluated.
    fn degenerate(model: GrowthModel, points: usize, reason: &'static str) -> Self {
        tracing::debug!(%model, points, reason, "degenerate fit scored 0");
        Self {
            model,
            r_squared: 0.0,
            slope: 0.0,
            intercept: 0.0,
            points,
        }
    }

    /// Evaluate the fitted curve at `size`, back in seconds.
    ///
    /// Returns `None` where the model's transform is undefined.
    pub fn predict(&self, size: f64) -> Option<f64> {
        let y = self.intercept + self.slope * self.model.transform_x(size)?;
        match self.model {
            GrowthModel::Power | GrowthModel::Exponential => Some(y.exp()),
            _ => Some(y),
        }
    }
}

/// Fit `model` to the sized samples of `samples`.
pub fn fit(samples: &SampleSet, model: GrowthModel) -> FitResult {
    let (xs, ys): (Vec<f64>, Vec<f64>) = samples
        .points()
        .into_iter()
        .filter_map(|(size, elapsed)| Some((model.transform_x(size)?, model.transform_y(elapsed)?)))
        .unzip();

    let result = fit_transformed(model, &xs, &ys);
    tracing::debug!(
        model = %result.model,
        r_squared = result.r_squared,
        slope = result.slope,
        intercept = result.intercept,
        points = result.points,
        "fitted growth model"
    );
    result
}

/// Fit every model, in tie-break order.
pub fn fit_all(samples: &SampleSet) -> Vec<FitResult> {
    GrowthModel::ALL
        .into_iter()
        .map(|model| fit(samples, model))
        .collect()
}

/// Ordinary least squares on already-transformed coordinates.
///
/// Works on centered coordinates so large `x` (cubic sizes) keep precision.
fn fit_transformed(model: GrowthModel, xs: &[f64], ys: &[f64]) -> FitResult {
    let n = xs.len();
    if n < 2 {
        return FitResult::degenerate(model, n, "fewer than 2 points survive the transform");
    }

    let x = DVector::from_column_slice(xs);
    let y = DVector::from_column_slice(ys);
    let x_mean = x.mean();
    let y_mean = y.mean();
    let dy = y.add_scalar(-y_mean);
    let ss_tot = dy.norm_squared();
    let flat = is_flat(ss_tot, y_mean, n);

    if !model.has_slope() {
        return FitResult {
            model,
            r_squared: if flat { 1.0 } else { 0.0 },
            slope: 0.0,
            intercept: y_mean,
            points: n,
        };
    }

    let dx = x.add_scalar(-x_mean);
    let sxx = dx.norm_squared();
    if !(sxx > 0.0 && sxx.is_finite()) {
        return FitResult::degenerate(model, n, "no spread in transformed sizes");
    }

    let slope = dx.dot(&dy) / sxx;
    let intercept = y_mean - slope * x_mean;

    let r_squared = if flat {
        1.0
    } else {
        let residuals = &dy - &dx * slope;
        let r2 = 1.0 - residuals.norm_squared() / ss_tot;
        if r2.is_finite() {
            r2.clamp(0.0, 1.0)
        } else {
            0.0
        }
    };

    FitResult {
        model,
        r_squared,
        slope,
        intercept,
        points: n,
    }
}

/// True when `y` has no variance beyond rounding of its mean.
fn is_flat(ss_tot: f64, y_mean: f64, n: usize) -> bool {
    let tolerance = 4.0 * f64::EPSILON * y_mean.abs();
    ss_tot <= n as f64 * tolerance * tolerance
}
