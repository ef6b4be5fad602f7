// src/processing/solver.rs
//! Wiener–Hopf solver
//!
//! Builds the M×M Toeplitz autocorrelation matrix `R[l][k] = rxx[zero + (l - k)]`
//! of the input and the cross-correlation vector `γ[l] = rdx[zero + l]` between
//! desired and input, then solves `R·h = γ` for the optimal FIR taps.

use ndarray::{Array1, Array2};
use serde::Serialize;
use tracing::debug;

use super::correlation::{full_correlation, lag_value, lag_window, zero_lag_index};
use super::linalg::LuDecomposition;
use crate::config::constants::sweep::MAX_ORDER_LIMIT;
use crate::config::{LagPolicy, SolverConfig};
use crate::error::{ProcessingStage, WienerError, WienerResult};
use crate::error_context;

/// Solved filter and the normal equations it came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WienerSolution {
    pub order: usize,
    /// Optimal taps `h`, length `order`
    pub coefficients: Vec<f64>,
    /// Autocorrelation matrix `R`
    pub autocorrelation: Array2<f64>,
    /// Cross-correlation vector `γ`
    pub cross_correlation: Array1<f64>,
}

/// Optimal FIR solver for a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct WienerSolver {
    config: SolverConfig,
}

impl WienerSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve for `order` taps mapping `input` onto `desired`
    pub fn solve(&self, input: &[f64], desired: &[f64], order: usize) -> WienerResult<WienerSolution> {
        validate_pair(input, desired, ProcessingStage::Solve)?;
        self.validate_order(order, input.len())?;

        let autocorrelation = self.autocorrelation_matrix(input, order)?;
        let cross_correlation = self.cross_correlation_vector(input, desired, order)?;

        let lu = LuDecomposition::new(&autocorrelation, self.config.singular_tolerance)?;
        let coefficients = lu.solve(&cross_correlation)?.to_vec();

        debug!(order, samples = input.len(), ?coefficients, "wiener taps solved");

        Ok(WienerSolution {
            order,
            coefficients,
            autocorrelation,
            cross_correlation,
        })
    }

    /// Build the `order × order` Toeplitz autocorrelation matrix of `input`
    pub fn autocorrelation_matrix(&self, input: &[f64], order: usize) -> WienerResult<Array2<f64>> {
        let rxx = full_correlation(input, input)?;
        let zero = zero_lag_index(input.len());

        // Only 2M - 1 distinct lags; look each up once and fill the diagonals
        let lags: Vec<f64> = (-(order as isize - 1)..order as isize)
            .map(|lag| lag_value(&rxx, zero, lag, self.config.lag_policy))
            .collect::<WienerResult<_>>()?;

        let offset = order - 1;
        Ok(Array2::from_shape_fn((order, order), |(l, k)| {
            lags[offset + l - k]
        }))
    }

    /// Cross-correlation of `desired` against `input` at lags `0..order`
    pub fn cross_correlation_vector(
        &self,
        input: &[f64],
        desired: &[f64],
        order: usize,
    ) -> WienerResult<Array1<f64>> {
        let rdx = full_correlation(desired, input)?;
        let zero = zero_lag_index(input.len());
        let gamma = lag_window(&rdx, zero, order, self.config.lag_policy)?;
        Ok(Array1::from(gamma))
    }

    fn validate_order(&self, order: usize, samples: usize) -> WienerResult<()> {
        let max = match self.config.lag_policy {
            LagPolicy::Strict => samples,
            LagPolicy::ZeroPad => MAX_ORDER_LIMIT,
        };

        if order == 0 || order > max {
            return Err(WienerError::InvalidOrder {
                order,
                max,
                context: error_context!(ProcessingStage::Solve, "validate_order")
                    .add_info("lag_policy", format!("{:?}", self.config.lag_policy)),
            });
        }
        Ok(())
    }
}

/// Check the shared preconditions of an input/desired pair
pub(crate) fn validate_pair(input: &[f64], desired: &[f64], stage: ProcessingStage) -> WienerResult<()> {
    if input.is_empty() {
        return Err(WienerError::EmptySignal {
            signal: "input",
            context: error_context!(stage, "validate_pair"),
        });
    }
    if desired.is_empty() {
        return Err(WienerError::EmptySignal {
            signal: "desired",
            context: error_context!(stage, "validate_pair"),
        });
    }
    if input.len() != desired.len() {
        return Err(WienerError::LengthMismatch {
            input: input.len(),
            desired: desired.len(),
            context: error_context!(stage, "validate_pair"),
        });
    }
    check_finite(input, "input", stage)?;
    check_finite(desired, "desired", stage)
}

fn check_finite(samples: &[f64], signal: &'static str, stage: ProcessingStage) -> WienerResult<()> {
    match samples.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(WienerError::NonFiniteSample {
            signal,
            index,
            value: samples[index],
            context: error_context!(stage, "validate_pair"),
        }),
        None => Ok(()),
    }
}
