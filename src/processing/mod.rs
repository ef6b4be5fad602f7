// src/processing/mod.rs
//! Wiener solver chain: correlation, normal equations, FIR application and scoring

pub mod correlation;
pub mod filter_apply;
pub mod linalg;
pub mod pipeline;
pub mod scoring;
pub mod solver;
pub mod sweep;

pub use correlation::{full_correlation, lag_value, lag_window, zero_lag_index};
pub use filter_apply::{convolve_full, FilterApplier};
pub use linalg::{solve_linear_system, LuDecomposition};
pub use pipeline::{WienerPipeline, WienerReport};
pub use scoring::{ErrorScorer, Score};
pub use solver::{WienerSolution, WienerSolver};
pub use sweep::{SweepDriver, SweepPoint, SweepResult};
