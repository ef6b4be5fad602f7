// src/analysis.rs
//! Numeric series for offline plotting
//!
//! Error histograms and magnitude spectra of a finished run, bundled into an
//! [`AnalysisReport`] that serializes to JSON for an external plotter.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;
use serde::{Deserialize, Serialize};

use crate::config::constants::analysis::DEFAULT_HISTOGRAM_BINS;
use crate::error::{ProcessingStage, WienerError, WienerResult};
use crate::error_context;
use crate::processing::WienerReport;

/// Equal-width histogram; `edges.len() == counts.len() + 1`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

/// Magnitude spectrum over the non-negative frequency bins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    /// Normalised frequency in cycles per sample
    pub frequencies: Vec<f64>,
    pub magnitudes: Vec<f64>,
}

/// Histogram of `values` over `[min, max]` with the last bin closed on the right
///
/// A degenerate range `min == max` is widened to `[v - 0.5, v + 0.5]`.
pub fn error_histogram(values: &[f64], bins: usize) -> WienerResult<Histogram> {
    if values.is_empty() {
        return Err(WienerError::EmptySignal {
            signal: "error",
            context: error_context!(ProcessingStage::Analysis, "error_histogram"),
        });
    }
    if bins == 0 {
        return Err(WienerError::InvalidArgument {
            reason: "histogram bin count must be positive".to_string(),
            context: error_context!(ProcessingStage::Analysis, "error_histogram"),
        });
    }

    let (mut lo, mut hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();

    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - lo) / (hi - lo)) * bins as f64) as usize;
        counts[idx.min(bins - 1)] += 1;
    }

    Ok(Histogram { edges, counts })
}

/// `|FFT(signal)|` at bins `k / N` for `k < (N + 1) / 2`
pub fn magnitude_spectrum(signal: &[f64]) -> Spectrum {
    let n = signal.len();
    if n == 0 {
        return Spectrum {
            frequencies: Vec::new(),
            magnitudes: Vec::new(),
        };
    }

    let mut buffer: Vec<Complex<f64>> = signal.iter().map(|&v| Complex::new(v, 0.0)).collect();
    let mut planner = FftPlanner::<f64>::new();
    planner.plan_fft_forward(n).process(&mut buffer);

    let half = (n + 1) / 2;
    Spectrum {
        frequencies: (0..half).map(|k| k as f64 / n as f64).collect(),
        magnitudes: buffer[..half].iter().map(|c| c.norm()).collect(),
    }
}

/// Plot-ready series for one Wiener run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub order: usize,
    pub mmse: f64,
    pub error_histogram: Histogram,
    pub input_spectrum: Spectrum,
    pub desired_spectrum: Spectrum,
    pub output_spectrum: Spectrum,
}

impl AnalysisReport {
    pub fn from_report(input: &[f64], desired: &[f64], report: &WienerReport) -> WienerResult<Self> {
        Ok(Self {
            order: report.order,
            mmse: report.mmse,
            error_histogram: error_histogram(&report.error, DEFAULT_HISTOGRAM_BINS)?,
            input_spectrum: magnitude_spectrum(input),
            desired_spectrum: magnitude_spectrum(desired),
            output_spectrum: magnitude_spectrum(&report.output),
        })
    }

    pub fn to_json(&self) -> WienerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
