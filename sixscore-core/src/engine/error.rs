//! Errors raised at the analyzer boundary, before any evaluator runs.

use thiserror::Error;

/// Why an analysis was refused.
///
/// `series` names the offending input: `prices`, `volumes`, or one of the
/// dotted indicator names from `IndicatorSet::named_series`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalysisError {
    #[error("insufficient history in {series}: need {required} periods, got {actual}")]
    InsufficientHistory {
        series: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("misaligned series {series}: expected length {expected}, got {actual}")]
    MisalignedSeries {
        series: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("non-finite value in {series} at index {index}: {value}")]
    NonFiniteInput {
        series: &'static str,
        index: usize,
        value: f64,
    },
}

impl AnalysisError {
    /// Name of the series that failed validation.
    pub fn series(&self) -> &'static str {
        match self {
            AnalysisError::InsufficientHistory { series, .. }
            | AnalysisError::MisalignedSeries { series, .. }
            | AnalysisError::NonFiniteInput { series, .. } => series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_series() {
        let err = AnalysisError::NonFiniteInput {
            series: "kdj.d",
            index: 41,
            value: f64::NAN,
        };
        assert_eq!(err.to_string(), "non-finite value in kdj.d at index 41: NaN");
        assert_eq!(err.series(), "kdj.d");
    }

    #[test]
    fn insufficient_history_message() {
        let err = AnalysisError::InsufficientHistory {
            series: "prices",
            required: 60,
            actual: 12,
        };
        assert_eq!(
            err.to_string(),
            "insufficient history in prices: need 60 periods, got 12"
        );
    }
}
