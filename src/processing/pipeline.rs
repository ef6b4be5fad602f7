// src/processing/pipeline.rs
//! Solve → apply → score for one filter order

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::filter_apply::FilterApplier;
use super::scoring::ErrorScorer;
use super::solver::{WienerSolution, WienerSolver};
use super::sweep::{SweepDriver, SweepResult};
use crate::config::{SweepConfig, WienerConfig};
use crate::error::WienerResult;

/// Everything one Wiener run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WienerReport {
    pub order: usize,
    pub coefficients: Vec<f64>,
    pub output: Vec<f64>,
    pub error: Vec<f64>,
    pub mmse: f64,
}

/// Configured solver chain
#[derive(Debug, Clone, Default)]
pub struct WienerPipeline {
    solver: WienerSolver,
    applier: FilterApplier,
    sweep_config: SweepConfig,
}

impl WienerPipeline {
    pub fn new(config: &WienerConfig) -> Self {
        Self {
            solver: WienerSolver::new(config.solver.clone()),
            applier: FilterApplier::new(config.filter.clone()),
            sweep_config: config.sweep.clone(),
        }
    }

    pub fn solver(&self) -> &WienerSolver {
        &self.solver
    }

    pub fn applier(&self) -> &FilterApplier {
        &self.applier
    }

    /// Solve only, keeping R and γ for inspection
    pub fn solve(&self, input: &[f64], desired: &[f64], order: usize) -> WienerResult<WienerSolution> {
        self.solver.solve(input, desired, order)
    }

    /// Run the full chain for one order
    pub fn run(&self, input: &[f64], desired: &[f64], order: usize) -> WienerResult<WienerReport> {
        let solution = self.solver.solve(input, desired, order)?;
        let output = self.applier.apply(input, &solution.coefficients)?;
        let score = ErrorScorer::score(desired, &output)?;

        debug!(order, mmse = score.mmse, "wiener run complete");

        Ok(WienerReport {
            order,
            coefficients: solution.coefficients,
            output,
            error: score.error,
            mmse: score.mmse,
        })
    }

    /// Sweep orders `1..=min(sweep.max_order, N)`
    pub fn sweep(&self, input: &[f64], desired: &[f64]) -> WienerResult<SweepResult> {
        let result = SweepDriver::new(self, &self.sweep_config).sweep(input, desired)?;
        info!(
            solved = result.points.len(),
            skipped = result.skipped.len(),
            "sweep complete"
        );
        Ok(result)
    }
}
