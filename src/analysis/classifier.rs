//! Best-fit model selection.
//!
//! The winner is the model with the highest R². Models within `epsilon` of
//! the best score are tied, and the tie goes to the model earliest in
//! [`GrowthModel::ALL`]: on noisy data a higher-order model can fit
//! marginally better by accident.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TIE_EPSILON;
use crate::types::{GrowthModel, SampleSet};

use super::regression::{fit_all, FitResult};

/// Outcome of classifying one sample set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Selected growth model.
    pub model: GrowthModel,
    /// Every candidate fit, in tie-break order.
    pub fits: Vec<FitResult>,
    /// True when a simpler model beat a strictly higher score by tie-break.
    pub tie_broken: bool,
}

impl Classification {
    /// Fit of the selected model.
    pub fn best_fit(&self) -> Option<&FitResult> {
        self.fit_for(self.model)
    }

    /// Fit of a particular model.
    pub fn fit_for(&self, model: GrowthModel) -> Option<&FitResult> {
        self.fits.iter().find(|fit| fit.model == model)
    }
}

/// Classify with the default tie epsilon.
pub fn classify(samples: &SampleSet) -> GrowthModel {
    classify_with(samples, DEFAULT_TIE_EPSILON).model
}

/// Fit every model and select the best one.
pub fn classify_with(samples: &SampleSet, epsilon: f64) -> Classification {
    let fits = fit_all(samples);
    let (model, tie_broken) = select(&fits, epsilon);
    tracing::debug!(%model, tie_broken, "classified growth");
    Classification {
        model,
        fits,
        tie_broken,
    }
}

/// Pick the winning model from fits given in tie-break order.
///
/// An empty slice selects [`GrowthModel::Constant`].
pub fn select(fits: &[FitResult], epsilon: f64) -> (GrowthModel, bool) {
    let score = |fit: &FitResult| if fit.r_squared.is_finite() { fit.r_squared } else { 0.0 };
    let best = fits.iter().map(score).fold(0.0_f64, f64::max);
    let epsilon = epsilon.abs();

    match fits.iter().find(|fit| score(*fit) >= best - epsilon) {
        Some(fit) => (fit.model, score(fit) < best),
        None => (GrowthModel::Constant, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(model: GrowthModel, r_squared: f64) -> FitResult {
        FitResult {
            model,
            r_squared,
            slope: 0.0,
            intercept: 0.0,
            points: 3,
        }
    }

    #[test]
    fn test_highest_score_wins() {
        let fits = vec![
            fit(GrowthModel::Constant, 0.0),
            fit(GrowthModel::Linear, 0.7),
            fit(GrowthModel::Exponential, 0.95),
        ];
        assert_eq!(select(&fits, 1e-6), (GrowthModel::Exponential, false));
    }

    #[test]
    fn test_tie_prefers_simpler_model() {
        let fits = vec![
            fit(GrowthModel::Linear, 0.999_999_5),
            fit(GrowthModel::Power, 1.0),
        ];
        assert_eq!(select(&fits, 1e-6), (GrowthModel::Linear, true));
        assert_eq!(select(&fits, 1e-9), (GrowthModel::Power, false));
    }

    #[test]
    fn test_nan_scores_ignored() {
        let fits = vec![
            fit(GrowthModel::Constant, f64::NAN),
            fit(GrowthModel::Linear, 0.5),
        ];
        assert_eq!(select(&fits, 1e-6).0, GrowthModel::Linear);
    }

    #[test]
    fn test_all_zero_scores_pick_constant() {
        let fits: Vec<FitResult> = GrowthModel::ALL.iter().map(|m| fit(*m, 0.0)).collect();
        assert_eq!(select(&fits, 1e-6).0, GrowthModel::Constant);
    }

    #[test]
    fn test_flat_data_is_constant() {
        let samples = SampleSet::complexity((1..=10).map(|n| (n * 10, 0.002)).collect()).unwrap();
        assert_eq!(classify(&samples), GrowthModel::Constant);
    }

    #[test]
    fn test_linear_beats_power_on_tie() {
        let samples = SampleSet::complexity((1..=50).map(|n| (n, n as f64)).collect()).unwrap();
        let result = classify_with(&samples, DEFAULT_TIE_EPSILON);
        assert_eq!(result.model, GrowthModel::Linear);
        let power = result.fit_for(GrowthModel::Power).unwrap();
        assert!((power.r_squared - 1.0).abs() < 1e-9);
        assert_eq!(result.best_fit().unwrap().model, GrowthModel::Linear);
    }
}
