// src/io/signal_file.rs
//! Plain-text signal files
//!
//! Reading accepts whitespace or newline separated finite decimals and skips lines
//! starting with `#`. Writing emits one value per line.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::result_format::format_value;
use crate::error::{WienerError, WienerResult};

pub fn read_signal(path: &Path) -> WienerResult<Vec<f64>> {
    let content = fs::read_to_string(path).map_err(|e| WienerError::io(path, e))?;
    let values = parse_signal(&content, &path.display().to_string())?;
    debug!(path = %path.display(), samples = values.len(), "loaded signal");
    Ok(values)
}

/// Parse signal text, reporting the 1-based line of the first bad token
pub fn parse_signal(content: &str, source_name: &str) -> WienerResult<Vec<f64>> {
    let mut values = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        for token in trimmed.split_whitespace() {
            let value = token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    WienerError::parse(source_name, idx + 1, format!("invalid value '{}'", token))
                })?;
            values.push(value);
        }
    }

    Ok(values)
}

pub fn write_signal(path: &Path, values: &[f64], precision: usize) -> WienerResult<()> {
    let mut out = String::with_capacity(values.len() * (precision + 4));
    for &v in values {
        // Writing into a String cannot fail
        let _ = writeln!(out, "{}", format_value(v, precision));
    }
    fs::write(path, out).map_err(|e| WienerError::io(path, e))?;
    debug!(path = %path.display(), samples = values.len(), "wrote signal");
    Ok(())
}

/// Split a combined file body into `(desired, input)` halves
pub fn split_combined(values: &[f64], source_name: &str) -> WienerResult<(Vec<f64>, Vec<f64>)> {
    if values.len() % 2 != 0 {
        return Err(WienerError::parse(
            source_name,
            0,
            format!("combined signal has odd sample count {}", values.len()),
        ));
    }

    let (desired, input) = values.split_at(values.len() / 2);
    Ok((desired.to_vec(), input.to_vec()))
}

/// Load a combined file holding desired samples followed by input samples
pub fn read_combined(path: &Path) -> WienerResult<(Vec<f64>, Vec<f64>)> {
    let values = read_signal(path)?;
    split_combined(&values, &path.display().to_string())
}
