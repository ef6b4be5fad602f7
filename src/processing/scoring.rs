// src/processing/scoring.rs
//! Error sequence and mean-squared error

use serde::{Deserialize, Serialize};

use crate::error::{ProcessingStage, WienerError, WienerResult};
use crate::error_context;

/// Pointwise error and its mean square
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// `desired - output` over the common prefix
    pub error: Vec<f64>,
    pub mmse: f64,
}

/// Scores a filter output against the desired signal
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorScorer;

impl ErrorScorer {
    /// Truncate both sequences to the shorter length, then score
    pub fn score(desired: &[f64], output: &[f64]) -> WienerResult<Score> {
        if desired.is_empty() {
            return Err(WienerError::EmptySignal {
                signal: "desired",
                context: error_context!(ProcessingStage::Scoring, "score"),
            });
        }
        if output.is_empty() {
            return Err(WienerError::EmptySignal {
                signal: "output",
                context: error_context!(ProcessingStage::Scoring, "score"),
            });
        }

        let error: Vec<f64> = desired
            .iter()
            .zip(output.iter())
            .map(|(d, y)| d - y)
            .collect();
        let mmse = mean_square(&error);

        Ok(Score { error, mmse })
    }
}

/// Arithmetic mean of squared values; callers guarantee a non-empty slice
pub(crate) fn mean_square(values: &[f64]) -> f64 {
    values.iter().map(|e| e * e).sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_output_scores_zero() {
        let d = [1.0, 2.0, 3.0, 4.0];
        let score = ErrorScorer::score(&d, &d).unwrap();
        assert_eq!(score.mmse, 0.0);
        assert_eq!(score.error, vec![0.0; 4]);
    }

    #[test]
    fn test_truncates_to_shorter() {
        let score = ErrorScorer::score(&[1.0, 2.0, 3.0], &[0.0, 0.0]).unwrap();
        assert_eq!(score.error, vec![1.0, 2.0]);
        assert!((score.mmse - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_inputs_rejected() {
        assert!(matches!(
            ErrorScorer::score(&[], &[1.0]),
            Err(WienerError::EmptySignal { signal: "desired", .. })
        ));
        assert!(matches!(
            ErrorScorer::score(&[1.0], &[]),
            Err(WienerError::EmptySignal { signal: "output", .. })
        ));
    }
}
