// src/processing/filter_apply.rs
//! FIR application by direct-summation convolution

use tracing::trace;

use crate::config::{ConvolutionAlignment, FilterConfig};
use crate::error::{ProcessingStage, WienerError, WienerResult};
use crate::error_context;

/// Applies solved taps to an input signal
#[derive(Debug, Clone, Default)]
pub struct FilterApplier {
    config: FilterConfig,
}

impl FilterApplier {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn alignment(&self) -> ConvolutionAlignment {
        self.config.alignment
    }

    /// Filter `input` with `coefficients`, returning exactly `input.len()` samples
    ///
    /// With causal alignment `y[n] = Σ_k h[k]·x[n - k]` over taps with `n - k >= 0`.
    pub fn apply(&self, input: &[f64], coefficients: &[f64]) -> WienerResult<Vec<f64>> {
        if input.is_empty() {
            return Err(WienerError::EmptySignal {
                signal: "input",
                context: error_context!(ProcessingStage::Filtering, "apply"),
            });
        }
        if coefficients.is_empty() {
            return Err(WienerError::InvalidOrder {
                order: 0,
                max: input.len(),
                context: error_context!(ProcessingStage::Filtering, "apply")
                    .add_info("reason", "no coefficients"),
            });
        }

        let full = convolve_full(input, coefficients);
        let start = match self.config.alignment {
            ConvolutionAlignment::Causal => 0,
            ConvolutionAlignment::Centered => (coefficients.len() - 1) / 2,
        };

        trace!(start, taps = coefficients.len(), "truncating full convolution");
        Ok(full[start..start + input.len()].to_vec())
    }
}

/// Full linear convolution, length `a.len() + b.len() - 1`
///
/// Returns an empty vector when either operand is empty.
pub fn convolve_full(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &h) in b.iter().enumerate() {
            out[i + j] += x * h;
        }
    }
    out
}
