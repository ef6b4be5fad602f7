// src/io/result_format.rs
//! `expected.txt` result files
//!
//! ```text
//! Filtered output: 1.0 2.0 3.0 4.0
//! MMSE: 0.0
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::constants::output::{FILTERED_OUTPUT_PREFIX, MMSE_PREFIX};
use crate::config::OutputConfig;
use crate::error::{WienerError, WienerResult};
use crate::processing::WienerReport;

/// Parsed contents of a result file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpectedResult {
    /// Empty when the file has no `Filtered output:` line
    pub output: Vec<f64>,
    /// `None` when the file has no `MMSE:` line
    pub mmse: Option<f64>,
}

/// Fixed-point formatting that never prints a negative zero
pub fn format_value(value: f64, precision: usize) -> String {
    let text = format!("{:.*}", precision, value);
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => text,
    }
}

/// Render the two result lines for `report`
pub fn render_result(report: &WienerReport, config: &OutputConfig) -> String {
    let samples: Vec<String> = report
        .output
        .iter()
        .map(|&v| format_value(v, config.sample_precision))
        .collect();

    format!(
        "{} {}\n{} {}\n",
        FILTERED_OUTPUT_PREFIX,
        samples.join(" "),
        MMSE_PREFIX,
        format_value(report.mmse, config.mmse_precision)
    )
}

pub fn write_result(path: &Path, report: &WienerReport, config: &OutputConfig) -> WienerResult<()> {
    fs::write(path, render_result(report, config)).map_err(|e| WienerError::io(path, e))?;
    debug!(path = %path.display(), samples = report.output.len(), "wrote result file");
    Ok(())
}

pub fn read_result(path: &Path) -> WienerResult<ExpectedResult> {
    let content = fs::read_to_string(path).map_err(|e| WienerError::io(path, e))?;
    parse_result(&content, &path.display().to_string())
}

/// Parse result text; both lines may appear anywhere and in any order
pub fn parse_result(content: &str, source_name: &str) -> WienerResult<ExpectedResult> {
    let mut result = ExpectedResult::default();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;

        if let Some((_, rest)) = line.split_once(FILTERED_OUTPUT_PREFIX) {
            result.output = rest
                .split_whitespace()
                .map(|token| {
                    token
                        .parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite())
                        .ok_or_else(|| {
                            WienerError::parse(source_name, line_no, format!("invalid sample '{}'", token))
                        })
                })
                .collect::<WienerResult<Vec<f64>>>()?;
        }

        if let Some((_, rest)) = line.split_once(MMSE_PREFIX) {
            let value = rest.trim();
            let mmse = value.parse::<f64>().map_err(|_| {
                WienerError::parse(source_name, line_no, format!("invalid MMSE '{}'", value))
            })?;
            result.mmse = Some(mmse);
        }
    }

    Ok(result)
}
