//! Error types.

/// Invalid parameters supplied by the caller.
///
/// Usage errors are raised before any sampling starts and are never retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UsageError {
    /// Threshold must be a positive, finite number of seconds.
    #[error("threshold must be a positive number of seconds, got {0}")]
    NonPositiveThreshold(f64),

    /// Timing mode needs at least one sample.
    #[error("sample count must be at least 1")]
    ZeroSamples,

    /// Complexity mode needs at least one call per size.
    #[error("repeat count must be at least 1")]
    ZeroRepeat,

    /// Size range bounds must be positive with `lo < hi`.
    #[error("size range must be positive with lo < hi, got {lo}..={hi}")]
    InvalidRange {
        /// Lower bound supplied.
        lo: usize,
        /// Upper bound supplied.
        hi: usize,
    },

    /// Linear step of zero or geometric ratio below 2.
    #[error("size step must advance the range (linear step >= 1, geometric ratio >= 2)")]
    InvalidStep,

    /// Fewer than two sizes were produced for complexity mode.
    #[error("complexity mode needs at least 2 distinct sizes, got {0}")]
    InsufficientSizes(usize),

    /// Sizes must be strictly increasing.
    #[error("input sizes must be strictly increasing (violated at index {index})")]
    NonIncreasingSizes {
        /// Index of the first size not greater than its predecessor.
        index: usize,
    },

    /// A sample set mixes sized and unsized samples.
    #[error("sample set must not mix timing and complexity samples")]
    MixedSamples,

    /// Token does not name a growth model.
    #[error("'{0}' is not a recognized growth model")]
    UnknownModel(String),
}

/// Failure of an assertion run.
///
/// `Work` carries the error returned by the caller's unit of work unchanged.
#[derive(Debug, thiserror::Error)]
pub enum OracleError<E> {
    /// Invalid parameters.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// The unit of work failed; the run was abandoned.
    #[error("unit of work failed: {0}")]
    Work(#[source] E),
}

impl<E> OracleError<E> {
    /// Returns the unit-of-work error, if that is what failed.
    pub fn into_work(self) -> Option<E> {
        match self {
            OracleError::Work(err) => Some(err),
            OracleError::Usage(_) => None,
        }
    }
}

impl OracleError<std::convert::Infallible> {
    /// Narrow an infallible run's error to the usage error it must be.
    pub fn into_usage(self) -> UsageError {
        match self {
            OracleError::Usage(err) => err,
            OracleError::Work(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_model_message() {
        let err = UsageError::UnknownModel("error".to_string());
        assert_eq!(err.to_string(), "'error' is not a recognized growth model");
    }

    #[test]
    fn test_work_error_preserved() {
        let err: OracleError<std::io::Error> =
            OracleError::Work(std::io::Error::other("boom"));
        assert!(err.to_string().contains("boom"));
        let inner = err.into_work().unwrap();
        assert_eq!(inner.to_string(), "boom");
    }

    #[test]
    fn test_usage_from() {
        let err: OracleError<std::io::Error> = UsageError::ZeroSamples.into();
        assert!(matches!(err, OracleError::Usage(UsageError::ZeroSamples)));
        assert!(err.into_work().is_none());
    }
}
