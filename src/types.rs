//! Core data types: samples, sample sets and growth models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UsageError;

/// One timed execution of the unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Input size passed to the unit of work (absent in timing mode).
    pub size: Option<usize>,
    /// Wall-clock duration in seconds.
    pub elapsed: f64,
}

impl Sample {
    /// A timing-mode sample.
    pub fn timing(elapsed: f64) -> Self {
        Self { size: None, elapsed }
    }

    /// A complexity-mode sample at `size`.
    pub fn sized(size: usize, elapsed: f64) -> Self {
        Self {
            size: Some(size),
            elapsed,
        }
    }
}

/// Ordered, immutable samples from one sampler run.
///
/// Constructors and deserialization enforce the mode invariants: at least
/// one sample for timing mode, at least two strictly increasing sizes for
/// complexity mode, and no mixing of the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSampleSet")]
pub struct SampleSet {
    samples: Vec<Sample>,
}

#[derive(Deserialize)]
struct RawSampleSet {
    samples: Vec<Sample>,
}

impl TryFrom<RawSampleSet> for SampleSet {
    type Error = UsageError;

    fn try_from(raw: RawSampleSet) -> Result<Self, Self::Error> {
        let sized = raw.samples.iter().filter(|s| s.size.is_some()).count();
        if sized == 0 {
            if raw.samples.is_empty() {
                return Err(UsageError::ZeroSamples);
            }
        } else if sized == raw.samples.len() {
            let sizes: Vec<usize> = raw.samples.iter().filter_map(|s| s.size).collect();
            validate_sizes(&sizes)?;
        } else {
            return Err(UsageError::MixedSamples);
        }
        Ok(Self {
            samples: raw.samples,
        })
    }
}

impl SampleSet {
    /// Build a timing-mode set from elapsed seconds.
    pub fn timing(elapsed: Vec<f64>) -> Result<Self, UsageError> {
        if elapsed.is_empty() {
            return Err(UsageError::ZeroSamples);
        }
        Ok(Self {
            samples: elapsed.into_iter().map(Sample::timing).collect(),
        })
    }

    /// Build a complexity-mode set from `(size, elapsed)` pairs.
    pub fn complexity(points: Vec<(usize, f64)>) -> Result<Self, UsageError> {
        let sizes: Vec<usize> = points.iter().map(|(size, _)| *size).collect();
        validate_sizes(&sizes)?;
        Ok(Self {
            samples: points
                .into_iter()
                .map(|(size, elapsed)| Sample::sized(size, elapsed))
                .collect(),
        })
    }

    /// All samples in collection order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false for a constructed set; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Elapsed seconds in collection order.
    pub fn elapsed(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.elapsed).collect()
    }

    /// `(size, elapsed)` pairs for sized samples.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.samples
            .iter()
            .filter_map(|s| s.size.map(|n| (n as f64, s.elapsed)))
            .collect()
    }

    /// Sizes of the sized samples.
    pub fn sizes(&self) -> Vec<usize> {
        self.samples.iter().filter_map(|s| s.size).collect()
    }
}

/// Check that `sizes` holds at least two strictly increasing values.
pub(crate) fn validate_sizes(sizes: &[usize]) -> Result<(), UsageError> {
    if sizes.len() < 2 {
        return Err(UsageError::InsufficientSizes(sizes.len()));
    }
    if let Some(index) = sizes.windows(2).position(|w| w[1] <= w[0]) {
        return Err(UsageError::NonIncreasingSizes { index: index + 1 });
    }
    Ok(())
}

/// Asymptotic growth class of elapsed time against input size.
///
/// Variants are declared in tie-break order: simpler models first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthModel {
    /// O(1)
    Constant,
    /// O(log n)
    Logarithmic,
    /// O(n)
    Linear,
    /// O(n log n)
    Linearithmic,
    /// O(n²)
    Quadratic,
    /// O(n³)
    Cubic,
    /// O(n^k), fitted in log-log space
    Power,
    /// O(bⁿ), fitted in semi-log space
    Exponential,
}

impl GrowthModel {
    /// Every model, in tie-break order.
    pub const ALL: [GrowthModel; 8] = [
        GrowthModel::Constant,
        GrowthModel::Logarithmic,
        GrowthModel::Linear,
        GrowthModel::Linearithmic,
        GrowthModel::Quadratic,
        GrowthModel::Cubic,
        GrowthModel::Power,
        GrowthModel::Exponential,
    ];

    /// Lowercase token used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            GrowthModel::Constant => "constant",
            GrowthModel::Logarithmic => "logarithmic",
            GrowthModel::Linear => "linear",
            GrowthModel::Linearithmic => "linearithmic",
            GrowthModel::Quadratic => "quadratic",
            GrowthModel::Cubic => "cubic",
            GrowthModel::Power => "power",
            GrowthModel::Exponential => "exponential",
        }
    }

    /// Position in the tie-break ordering (0 = simplest).
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Map an input size onto the regression x axis.
    ///
    /// Returns `None` when the transform is undefined for `size`.
    pub fn transform_x(self, size: f64) -> Option<f64> {
        let x = match self {
            GrowthModel::Constant | GrowthModel::Linear | GrowthModel::Exponential => size,
            GrowthModel::Logarithmic | GrowthModel::Power => positive(size)?.ln(),
            GrowthModel::Linearithmic => positive(size)? * size.ln(),
            GrowthModel::Quadratic => size.powi(2),
            GrowthModel::Cubic => size.powi(3),
        };
        x.is_finite().then_some(x)
    }

    /// Map an elapsed time onto the regression y axis.
    pub fn transform_y(self, elapsed: f64) -> Option<f64> {
        let y = match self {
            GrowthModel::Power | GrowthModel::Exponential => positive(elapsed)?.ln(),
            _ => elapsed,
        };
        y.is_finite().then_some(y)
    }

    /// Whether the fitted line may have a non-zero slope.
    pub fn has_slope(self) -> bool {
        self != GrowthModel::Constant
    }
}

fn positive(value: f64) -> Option<f64> {
    (value > 0.0).then_some(value)
}

impl fmt::Display for GrowthModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GrowthModel {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GrowthModel::ALL
            .into_iter()
            .find(|model| model.name() == s)
            .ok_or_else(|| UsageError::UnknownModel(s.to_string()))
    }
}

/// Direction of an assertion: positive or negated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expectation {
    /// Positive assertion.
    #[default]
    To,
    /// Negated assertion.
    NotTo,
}

impl Expectation {
    /// True for [`Expectation::NotTo`].
    pub fn is_negated(self) -> bool {
        self == Expectation::NotTo
    }
}
