// src/config/mod.rs
//! Configuration for the solver chain and its collaborators
//!
//! Every section deserialises with per-field defaults so a partial TOML file
//! only needs to name what it changes.

pub mod constants;
pub mod loader;

pub use constants::*;
pub use loader::{ConfigError, ConfigLoader};

use serde::{Deserialize, Serialize};

/// Complete Wiener analysis configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct WienerConfig {
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub sweep: SweepConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How correlation lags outside the computed sequence are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LagPolicy {
    /// Orders above the signal length are rejected and a missing lag is an error
    Strict,
    /// Missing lags read as 0.0 and orders above the signal length are allowed
    ZeroPad,
}

/// Which window of the full convolution becomes the output signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvolutionAlignment {
    /// First N samples: direct-form FIR with zero initial conditions
    Causal,
    /// N samples centred on the full convolution, starting at (M - 1) / 2
    Centered,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SolverConfig {
    #[serde(default = "defaults::lag_policy")]
    pub lag_policy: LagPolicy,

    #[serde(default = "defaults::singular_tolerance")]
    pub singular_tolerance: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FilterConfig {
    #[serde(default = "defaults::alignment")]
    pub alignment: ConvolutionAlignment,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SweepConfig {
    #[serde(default = "defaults::max_order")]
    pub max_order: usize,

    #[serde(default = "defaults::parallel")]
    pub parallel: bool,
}

/// Decimal places used by the textual result format
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "defaults::sample_precision")]
    pub sample_precision: usize,

    #[serde(default = "defaults::mmse_precision")]
    pub mmse_precision: usize,
}

/// Synthetic test-data parameters
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GenerationConfig {
    #[serde(default = "defaults::sample_count")]
    pub sample_count: usize,

    #[serde(default = "defaults::noise_std")]
    pub noise_std: f64,

    #[serde(default = "defaults::colored_noise_amplitude")]
    pub colored_noise_amplitude: f64,

    #[serde(default = "defaults::colored_noise_frequency")]
    pub colored_noise_frequency: f64,

    #[serde(default = "defaults::duration")]
    pub duration: f64,

    #[serde(default = "defaults::generation_precision")]
    pub precision: usize,

    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "defaults::log_level")]
    pub level: String,

    #[serde(default = "defaults::ansi")]
    pub ansi: bool,
}

/// Default value providers using constants
mod defaults {
    use super::{ConvolutionAlignment, LagPolicy};
    use crate::config::constants::*;

    pub fn lag_policy() -> LagPolicy { LagPolicy::Strict }
    pub fn singular_tolerance() -> f64 { solver::DEFAULT_SINGULAR_TOLERANCE }

    pub fn alignment() -> ConvolutionAlignment { ConvolutionAlignment::Causal }

    pub fn max_order() -> usize { sweep::DEFAULT_MAX_ORDER }
    pub fn parallel() -> bool { cfg!(feature = "parallel_sweep") }

    pub fn sample_precision() -> usize { output::DEFAULT_SAMPLE_PRECISION }
    pub fn mmse_precision() -> usize { output::DEFAULT_MMSE_PRECISION }

    pub fn sample_count() -> usize { generation::DEFAULT_SAMPLE_COUNT }
    pub fn noise_std() -> f64 { generation::DEFAULT_NOISE_STD }
    pub fn colored_noise_amplitude() -> f64 { generation::DEFAULT_COLORED_NOISE_AMPLITUDE }
    pub fn colored_noise_frequency() -> f64 { generation::DEFAULT_COLORED_NOISE_FREQUENCY }
    pub fn duration() -> f64 { generation::DEFAULT_DURATION }
    pub fn generation_precision() -> usize { generation::DEFAULT_PRECISION }

    pub fn log_level() -> String { logging::DEFAULT_LEVEL.to_string() }
    pub fn ansi() -> bool { true }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            lag_policy: defaults::lag_policy(),
            singular_tolerance: defaults::singular_tolerance(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            alignment: defaults::alignment(),
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            max_order: defaults::max_order(),
            parallel: defaults::parallel(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            sample_precision: defaults::sample_precision(),
            mmse_precision: defaults::mmse_precision(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            sample_count: defaults::sample_count(),
            noise_std: defaults::noise_std(),
            colored_noise_amplitude: defaults::colored_noise_amplitude(),
            colored_noise_frequency: defaults::colored_noise_frequency(),
            duration: defaults::duration(),
            precision: defaults::generation_precision(),
            seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
            ansi: defaults::ansi(),
        }
    }
}

impl WienerConfig {
    /// Validate configuration consistency, collecting every problem found
    pub fn validate_consistency(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let tol = self.solver.singular_tolerance;
        if !tol.is_finite()
            || !(solver::MIN_SINGULAR_TOLERANCE..=solver::MAX_SINGULAR_TOLERANCE).contains(&tol)
        {
            errors.push(format!(
                "solver.singular_tolerance ({}) must lie in [{}, {}]",
                tol,
                solver::MIN_SINGULAR_TOLERANCE,
                solver::MAX_SINGULAR_TOLERANCE
            ));
        }

        if self.sweep.max_order < solver::MIN_FILTER_ORDER
            || self.sweep.max_order > sweep::MAX_ORDER_LIMIT
        {
            errors.push(format!(
                "sweep.max_order ({}) must lie in [{}, {}]",
                self.sweep.max_order,
                solver::MIN_FILTER_ORDER,
                sweep::MAX_ORDER_LIMIT
            ));
        }

        for (field, value) in [
            ("output.sample_precision", self.output.sample_precision),
            ("output.mmse_precision", self.output.mmse_precision),
            ("generation.precision", self.generation.precision),
        ] {
            if value > output::MAX_PRECISION {
                errors.push(format!(
                    "{} ({}) must not exceed {}",
                    field,
                    value,
                    output::MAX_PRECISION
                ));
            }
        }

        let synth = &self.generation;
        if synth.sample_count == 0 || synth.sample_count > generation::MAX_SAMPLE_COUNT {
            errors.push(format!(
                "generation.sample_count ({}) must lie in [1, {}]",
                synth.sample_count,
                generation::MAX_SAMPLE_COUNT
            ));
        }
        if !synth.noise_std.is_finite() || synth.noise_std < 0.0 {
            errors.push(format!(
                "generation.noise_std ({}) must be a non-negative number",
                synth.noise_std
            ));
        }
        if !synth.duration.is_finite() || synth.duration <= 0.0 {
            errors.push(format!(
                "generation.duration ({}) must be positive",
                synth.duration
            ));
        }
        if !synth.colored_noise_amplitude.is_finite() || !synth.colored_noise_frequency.is_finite() {
            errors.push("generation colored noise parameters must be finite".to_string());
        }

        if !logging::VALID_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            errors.push(format!(
                "logging.level '{}' must be one of [{}]",
                self.logging.level,
                logging::VALID_LEVELS.join(", ")
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Get configuration summary
    pub fn get_summary(&self) -> ConfigSummary {
        ConfigSummary {
            lag_policy: self.solver.lag_policy,
            alignment: self.filter.alignment,
            max_order: self.sweep.max_order,
            parallel_sweep: self.sweep.parallel,
            mmse_precision: self.output.mmse_precision,
        }
    }
}

/// Configuration summary for display/logging
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    pub lag_policy: LagPolicy,
    pub alignment: ConvolutionAlignment,
    pub max_order: usize,
    pub parallel_sweep: bool,
    pub mmse_precision: usize,
}
