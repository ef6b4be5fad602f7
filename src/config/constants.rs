// src/config/constants.rs
//! System-wide configuration constants

/// Solver constants
pub mod solver {
    /// Pivots at or below this fraction of the largest matrix entry are singular
    pub const DEFAULT_SINGULAR_TOLERANCE: f64 = 1e-12;
    pub const MIN_SINGULAR_TOLERANCE: f64 = 0.0;
    pub const MAX_SINGULAR_TOLERANCE: f64 = 1e-3;
    pub const MIN_FILTER_ORDER: usize = 1;
}

/// Filter-length sweep constants
pub mod sweep {
    pub const DEFAULT_MAX_ORDER: usize = 15;
    pub const MAX_ORDER_LIMIT: usize = 4096;
}

/// Textual output constants
pub mod output {
    pub const DEFAULT_SAMPLE_PRECISION: usize = 1;
    pub const DEFAULT_MMSE_PRECISION: usize = 1;
    /// Precision used by sweep progress logging
    pub const SWEEP_LOG_PRECISION: usize = 4;
    pub const MAX_PRECISION: usize = 17;

    pub const FILTERED_OUTPUT_PREFIX: &str = "Filtered output:";
    pub const MMSE_PREFIX: &str = "MMSE:";
}

/// Test-data synthesis constants
pub mod generation {
    pub const DEFAULT_SAMPLE_COUNT: usize = 500;
    pub const DEFAULT_NOISE_STD: f64 = 0.5;
    pub const DEFAULT_COLORED_NOISE_AMPLITUDE: f64 = 0.2;
    pub const DEFAULT_COLORED_NOISE_FREQUENCY: f64 = 10.0;
    pub const DEFAULT_DURATION: f64 = 10.0;
    pub const DEFAULT_PRECISION: usize = 1;
    pub const MAX_SAMPLE_COUNT: usize = 10_000_000;
}

/// Analysis series constants
pub mod analysis {
    pub const DEFAULT_HISTOGRAM_BINS: usize = 20;
}

/// File layout constants
pub mod paths {
    pub const DEFAULT_CONFIG_FILE: &str = "wiener.toml";
    pub const LOCAL_CONFIG_FILE: &str = "config/wiener.toml";
    pub const ENV_PREFIX: &str = "WIENER_";

    pub const INPUT_FILE: &str = "input.txt";
    pub const DESIRED_FILE: &str = "desired.txt";
    pub const EXPECTED_FILE: &str = "expected.txt";
    pub const TEST_DIR_PREFIX: &str = "test_";
}

/// Logging constants
pub mod logging {
    pub const DEFAULT_LEVEL: &str = "info";
    pub const VALID_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
}
