// src/io/summary.rs
//! Batch handling of `test_*` case directories

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::result_format::{read_result, write_result};
use super::signal_file::read_signal;
use crate::config::constants::paths::{DESIRED_FILE, EXPECTED_FILE, INPUT_FILE, TEST_DIR_PREFIX};
use crate::config::OutputConfig;
use crate::error::{WienerError, WienerResult};
use crate::processing::{scoring::mean_square, WienerPipeline, WienerReport};

/// Recomputed error for one case directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseSummary {
    pub name: String,
    /// MMSE recomputed from `desired.txt` and the stored output
    pub mmse: f64,
    /// MMSE recorded in `expected.txt`, if present
    pub file_mmse: Option<f64>,
    pub error: Vec<f64>,
}

/// Case directory left out of the summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedCase {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub cases: Vec<CaseSummary>,
    pub skipped: Vec<SkippedCase>,
}

impl Summary {
    pub fn to_json(&self) -> WienerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Summarise every `test_*` directory under `tests_dir`, in name order
pub fn collect_summary(tests_dir: &Path) -> WienerResult<Summary> {
    let entries = fs::read_dir(tests_dir).map_err(|e| WienerError::io(tests_dir, e))?;

    let mut dirs: Vec<(String, std::path::PathBuf)> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| WienerError::io(tests_dir, e))?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if path.is_dir() && name.starts_with(TEST_DIR_PREFIX) {
            dirs.push((name, path));
        }
    }
    dirs.sort_by(|a, b| a.0.cmp(&b.0));

    info!(count = dirs.len(), dir = %tests_dir.display(), "collecting test summaries");

    let mut summary = Summary::default();
    for (name, path) in dirs {
        match summarize_case(&name, &path) {
            Ok(case) => summary.cases.push(case),
            Err(reason) => {
                warn!(case = %name, %reason, "skipping test case");
                summary.skipped.push(SkippedCase { name, reason });
            }
        }
    }

    Ok(summary)
}

fn summarize_case(name: &str, dir: &Path) -> Result<CaseSummary, String> {
    let desired_path = dir.join(DESIRED_FILE);
    let expected_path = dir.join(EXPECTED_FILE);
    if !desired_path.is_file() || !expected_path.is_file() {
        return Err(format!("missing {} or {}", DESIRED_FILE, EXPECTED_FILE));
    }

    let desired = read_signal(&desired_path).map_err(|e| e.to_string())?;
    let expected = read_result(&expected_path).map_err(|e| e.to_string())?;

    let len = desired.len().min(expected.output.len());
    if len == 0 {
        return Err("no samples to compare".to_string());
    }

    let error: Vec<f64> = desired[..len]
        .iter()
        .zip(&expected.output[..len])
        .map(|(d, y)| d - y)
        .collect();

    Ok(CaseSummary {
        name: name.to_string(),
        mmse: mean_square(&error),
        file_mmse: expected.mmse,
        error,
    })
}

/// Solve one case directory and write its `expected.txt`
pub fn run_directory(
    dir: &Path,
    pipeline: &WienerPipeline,
    order: usize,
    output: &OutputConfig,
) -> WienerResult<WienerReport> {
    let input = read_signal(&dir.join(INPUT_FILE))?;
    let desired = read_signal(&dir.join(DESIRED_FILE))?;

    let report = pipeline.run(&input, &desired, order)?;
    write_result(&dir.join(EXPECTED_FILE), &report, output)?;

    info!(dir = %dir.display(), order, mmse = report.mmse, "case solved");
    Ok(report)
}
