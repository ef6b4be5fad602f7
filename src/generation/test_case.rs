//! Desired/input pairs for the three synthetic scenarios
//! Location: src/generation/test_case.rs

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::signal_generator::SignalGenerator;
use crate::config::constants::paths::{DESIRED_FILE, INPUT_FILE};
use crate::config::GenerationConfig;
use crate::error::{WienerError, WienerResult};
use crate::io::signal_file::write_signal;
use crate::io::format_value;

/// Synthetic scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestCaseKind {
    /// Desired is standard normal, input adds white noise
    WhiteNoiseDesired,
    /// Sine desired, white noise on the input
    SineWhite,
    /// Sine desired, narrowband sinusoidal interference on the input
    SineColored,
}

impl fmt::Display for TestCaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TestCaseKind::WhiteNoiseDesired => "white",
            TestCaseKind::SineWhite => "sine",
            TestCaseKind::SineColored => "colored",
        };
        f.write_str(name)
    }
}

impl FromStr for TestCaseKind {
    type Err = WienerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" | "white_noise_desired" => Ok(TestCaseKind::WhiteNoiseDesired),
            "sine" | "sine_white" => Ok(TestCaseKind::SineWhite),
            "colored" | "sine_colored" => Ok(TestCaseKind::SineColored),
            other => Err(WienerError::parse(
                "test case kind",
                0,
                format!("unknown kind '{}', expected white, sine or colored", other),
            )),
        }
    }
}

/// Generated desired/input pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub kind: TestCaseKind,
    pub desired: Vec<f64>,
    pub input: Vec<f64>,
}

impl TestCase {
    pub fn generate(kind: TestCaseKind, config: &GenerationConfig, source: &mut SignalGenerator) -> Self {
        let n = config.sample_count;

        let desired = match kind {
            TestCaseKind::WhiteNoiseDesired => source.white_noise(n, 1.0),
            TestCaseKind::SineWhite | TestCaseKind::SineColored => source.sine(n, config.duration),
        };

        let noise = match kind {
            TestCaseKind::WhiteNoiseDesired | TestCaseKind::SineWhite => {
                source.white_noise(n, config.noise_std)
            }
            TestCaseKind::SineColored => source.colored_noise(
                n,
                config.duration,
                config.colored_noise_amplitude,
                config.colored_noise_frequency,
            ),
        };

        let input = desired.iter().zip(&noise).map(|(d, v)| d + v).collect();

        Self {
            kind,
            desired,
            input,
        }
    }

    /// Quantise both signals exactly as a `precision`-decimal file write would
    pub fn round_to(&self, precision: usize) -> Self {
        let quantise = |values: &[f64]| -> Vec<f64> {
            values
                .iter()
                .map(|&v| format_value(v, precision).parse().unwrap_or(v))
                .collect()
        };

        Self {
            kind: self.kind,
            desired: quantise(&self.desired),
            input: quantise(&self.input),
        }
    }

    pub fn len(&self) -> usize {
        self.desired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.desired.is_empty()
    }
}

/// Write `desired.txt` and `input.txt` into `dir`, creating it if needed
pub fn write_test_case(dir: &Path, case: &TestCase, precision: usize) -> WienerResult<()> {
    fs::create_dir_all(dir).map_err(|e| WienerError::io(dir, e))?;
    write_signal(&dir.join(DESIRED_FILE), &case.desired, precision)?;
    write_signal(&dir.join(INPUT_FILE), &case.input, precision)?;

    info!(dir = %dir.display(), kind = %case.kind, samples = case.len(), "wrote test case");
    Ok(())
}

/// Write desired samples followed by input samples into one file
pub fn write_combined(path: &Path, case: &TestCase, precision: usize) -> WienerResult<()> {
    let mut combined = Vec::with_capacity(case.desired.len() + case.input.len());
    combined.extend_from_slice(&case.desired);
    combined.extend_from_slice(&case.input);
    write_signal(path, &combined, precision)
}
