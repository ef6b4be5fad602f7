// src/processing/sweep.rs
//! Filter-length sweep
//!
//! Runs the solver chain for every order `1..=min(max_order, N)`. An order
//! whose autocorrelation matrix is singular is left out of the results and the
//! sweep carries on; any other failure aborts the sweep.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::pipeline::{WienerPipeline, WienerReport};
use super::solver::validate_pair;
use crate::config::{constants::output::SWEEP_LOG_PRECISION, SweepConfig};
use crate::error::{ProcessingStage, WienerResult};

/// MMSE reached at one filter order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub order: usize,
    pub mmse: f64,
}

/// Ordered sweep outcome
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SweepResult {
    /// Solvable orders in increasing order
    pub points: Vec<SweepPoint>,
    /// Orders skipped because the matrix was singular
    pub skipped: Vec<usize>,
    /// Highest order attempted
    pub max_order: usize,
}

impl SweepResult {
    /// Point with the lowest MMSE, earliest order on ties
    pub fn best(&self) -> Option<SweepPoint> {
        self.points
            .iter()
            .copied()
            .fold(None, |best: Option<SweepPoint>, p| match best {
                Some(b) if b.mmse <= p.mmse => Some(b),
                _ => Some(p),
            })
    }

    pub fn orders(&self) -> Vec<usize> {
        self.points.iter().map(|p| p.order).collect()
    }

    pub fn mmse_values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.mmse).collect()
    }
}

/// Repeats the solver chain across filter orders
pub struct SweepDriver<'a> {
    pipeline: &'a WienerPipeline,
    config: &'a SweepConfig,
}

impl<'a> SweepDriver<'a> {
    pub fn new(pipeline: &'a WienerPipeline, config: &'a SweepConfig) -> Self {
        Self { pipeline, config }
    }

    pub fn sweep(&self, input: &[f64], desired: &[f64]) -> WienerResult<SweepResult> {
        validate_pair(input, desired, ProcessingStage::Sweep)?;

        let max_order = self.config.max_order.min(input.len());
        info!(max_order, parallel = self.config.parallel, "starting filter-length sweep");

        let runs: Vec<(usize, WienerResult<WienerReport>)> = if self.config.parallel {
            (1..=max_order)
                .into_par_iter()
                .map(|order| (order, self.pipeline.run(input, desired, order)))
                .collect()
        } else {
            (1..=max_order)
                .map(|order| (order, self.pipeline.run(input, desired, order)))
                .collect()
        };

        let mut result = SweepResult {
            max_order,
            ..SweepResult::default()
        };

        for (order, run) in runs {
            match run {
                Ok(report) => {
                    info!(
                        order,
                        mmse = %format!("{:.*}", SWEEP_LOG_PRECISION, report.mmse),
                        "order solved"
                    );
                    result.points.push(SweepPoint {
                        order,
                        mmse: report.mmse,
                    });
                }
                Err(err) if err.is_recoverable() => {
                    warn!(order, error = %err, "skipping singular order");
                    result.skipped.push(order);
                }
                Err(err) => return Err(err),
            }
        }

        Ok(result)
    }
}
