//! Wiener-Core: optimal FIR Wiener filter solver and offline analysis tooling
//!
//! Given a noisy input signal and a desired reference of the same length,
//! this library derives the M-tap FIR filter minimising the mean-squared
//! error between the filtered input and the reference. It features:
//!
//! - Full cross-correlation and Toeplitz normal-equation construction
//! - Dense LU solve (nalgebra) with typed singular-matrix reporting
//! - Causal FIR application and MMSE scoring
//! - Filter-length sweeps, optionally on a rayon pool
//! - Text signal/result files, synthetic test cases and plot-ready series
//!
//! # Quick Start
//!
//! ```rust
//! use wiener_core::WienerPipeline;
//!
//! let input = [1.0, 2.0, 3.0, 4.0];
//! let desired = [1.0, 2.0, 3.0, 4.0];
//!
//! let report = WienerPipeline::default().run(&input, &desired, 1)?;
//! assert_eq!(report.coefficients, vec![1.0]);
//! assert_eq!(report.mmse, 0.0);
//! # Ok::<(), wiener_core::WienerError>(())
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod generation;
pub mod io;
pub mod logging;
pub mod processing;

// Re-export commonly used types for convenience
pub use config::{ConfigLoader, ConvolutionAlignment, LagPolicy, WienerConfig};
pub use error::{ErrorContext, ProcessingStage, WienerError, WienerResult};
pub use processing::{
    ErrorScorer, FilterApplier, SweepPoint, SweepResult, WienerPipeline, WienerReport,
    WienerSolution, WienerSolver,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn version_info() -> VersionInfo {
    VersionInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: "Optimal FIR Wiener filter solver with MMSE scoring".to_string(),
        features: vec![
            "Toeplitz normal equations".to_string(),
            "nalgebra LU solve with relative singular threshold".to_string(),
            "Filter-length sweep".to_string(),
            "Synthetic test-case generation".to_string(),
            "Result file summaries".to_string(),
        ],
    }
}

/// Library version information
#[derive(Debug, Clone)]
pub struct VersionInfo {
    /// Library name
    pub name: String,
    /// Version string
    pub version: String,
    /// Description
    pub description: String,
    /// List of features
    pub features: Vec<String>,
}

impl std::fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} {}", self.name, self.version)?;
        writeln!(f, "{}", self.description)?;
        for feature in &self.features {
            writeln!(f, "  - {}", feature)?;
        }
        Ok(())
    }
}
