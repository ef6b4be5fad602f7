// src/processing/correlation.rs
//! Full-lag discrete correlation
//!
//! `full_correlation(a, b)` slides `b` across `a` and sums products at every
//! alignment. Index `i` of the result holds lag `i - (len(b) - 1)`, so lags run
//! from `-(len(b) - 1)` to `len(a) - 1` and lag 0 sits at [`zero_lag_index`].

use tracing::trace;

use crate::config::LagPolicy;
use crate::error::{ProcessingStage, WienerError, WienerResult};
use crate::error_context;

/// Compute the full cross-correlation of `a` against `b`
///
/// The value at lag `k` is `Σ_n a[n + k] · b[n]` over every `n` where both
/// indices are in range. With `a == b` this is the autocorrelation.
pub fn full_correlation(a: &[f64], b: &[f64]) -> WienerResult<Vec<f64>> {
    if a.is_empty() {
        return Err(empty("a"));
    }
    if b.is_empty() {
        return Err(empty("b"));
    }

    let len_a = a.len() as isize;
    let len_b = b.len() as isize;
    let mut out = Vec::with_capacity(a.len() + b.len() - 1);

    for lag in -(len_b - 1)..len_a {
        // n ranges over indices with 0 <= n < len_b and 0 <= n + lag < len_a
        let start = (-lag).max(0);
        let end = len_b.min(len_a - lag);
        let sum: f64 = (start..end)
            .map(|n| a[(n + lag) as usize] * b[n as usize])
            .sum();
        out.push(sum);
    }

    trace!(len_a = a.len(), len_b = b.len(), "full correlation computed");
    Ok(out)
}

/// Index of lag 0 in a full correlation whose second operand has `len_b` samples
///
/// For the equal-length signals the solver correlates this is also `len(a) - 1`.
pub fn zero_lag_index(len_b: usize) -> usize {
    len_b.saturating_sub(1)
}

/// Read the correlation value at `lag` relative to `zero_lag`
///
/// A lag outside the sequence is an error under [`LagPolicy::Strict`] and
/// reads as 0.0 under [`LagPolicy::ZeroPad`].
pub fn lag_value(
    correlation: &[f64],
    zero_lag: usize,
    lag: isize,
    policy: LagPolicy,
) -> WienerResult<f64> {
    let index = zero_lag as isize + lag;
    if index >= 0 && (index as usize) < correlation.len() {
        return Ok(correlation[index as usize]);
    }

    match policy {
        LagPolicy::ZeroPad => Ok(0.0),
        LagPolicy::Strict => Err(WienerError::LagOutOfRange {
            lag,
            len: correlation.len(),
            context: error_context!(ProcessingStage::Correlation, "lag_value")
                .add_info("zero_lag", zero_lag),
        }),
    }
}

/// Extract `count` consecutive lags starting from lag 0
pub fn lag_window(
    correlation: &[f64],
    zero_lag: usize,
    count: usize,
    policy: LagPolicy,
) -> WienerResult<Vec<f64>> {
    (0..count)
        .map(|lag| lag_value(correlation, zero_lag, lag as isize, policy))
        .collect()
}

fn empty(signal: &'static str) -> WienerError {
    WienerError::EmptySignal {
        signal,
        context: error_context!(ProcessingStage::Correlation, "full_correlation"),
    }
}
