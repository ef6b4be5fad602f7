// src/error.rs
//! Unified error handling for Wiener Core
//!
//! Every failure in the solver chain is surfaced as a typed [`WienerError`]
//! to the immediate caller. Each variant carries an [`ErrorContext`] naming the
//! processing stage and operation that raised it, so a failure deep inside a
//! sweep can still be traced back to the order and stage that produced it.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;

/// Unified error type for the solver chain and its collaborators
#[derive(Debug, Error)]
pub enum WienerError {
    /// Input and desired signals differ in length
    #[error("[DATA] Signal length mismatch: input has {input} samples, desired has {desired} ({context})")]
    LengthMismatch {
        input: usize,
        desired: usize,
        context: ErrorContext,
    },

    /// Autocorrelation matrix could not be factorised
    #[error("[SOLVER] Singular autocorrelation matrix for order {order}: pivot {pivot:e} at column {column} ({context})")]
    SingularMatrix {
        order: usize,
        column: usize,
        pivot: f64,
        context: ErrorContext,
    },

    /// Zero-length signal where samples are required
    #[error("[DATA] Empty {signal} signal ({context})")]
    EmptySignal {
        signal: &'static str,
        context: ErrorContext,
    },

    /// Sample that is NaN or infinite
    #[error("[DATA] Non-finite {signal} sample {value} at index {index} ({context})")]
    NonFiniteSample {
        signal: &'static str,
        index: usize,
        value: f64,
        context: ErrorContext,
    },

    /// Filter order outside 1..=max
    #[error("[ORDER] Invalid filter order {order}: expected 1 <= M <= {max} ({context})")]
    InvalidOrder {
        order: usize,
        max: usize,
        context: ErrorContext,
    },

    /// Argument outside the domain of an operation
    #[error("[ARG] {reason} ({context})")]
    InvalidArgument {
        reason: String,
        context: ErrorContext,
    },

    /// A correlation lag fell outside the computed sequence under the strict lag policy
    #[error("[SOLVER] Lag {lag} outside correlation of length {len} ({context})")]
    LagOutOfRange {
        lag: isize,
        len: usize,
        context: ErrorContext,
    },

    /// File system failure while reading or writing signals and results
    #[error("[IO] {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed signal or result file
    #[error("[PARSE] {source_name}:{line}: {reason}")]
    Parse {
        source_name: String,
        line: usize,
        reason: String,
    },

    /// JSON encoding of a report or summary failed
    #[error("[SERIALIZE] {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration loading or validation failure
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl WienerError {
    /// Whether a sweep may skip this failure and continue with the next order
    pub fn is_recoverable(&self) -> bool {
        matches!(self, WienerError::SingularMatrix { .. })
    }

    /// Processing stage that raised the error, if it came from the solver chain
    pub fn stage(&self) -> Option<ProcessingStage> {
        self.context().map(|ctx| ctx.stage)
    }

    /// Attached error context, if any
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            WienerError::LengthMismatch { context, .. }
            | WienerError::SingularMatrix { context, .. }
            | WienerError::EmptySignal { context, .. }
            | WienerError::NonFiniteSample { context, .. }
            | WienerError::InvalidOrder { context, .. }
            | WienerError::InvalidArgument { context, .. }
            | WienerError::LagOutOfRange { context, .. } => Some(context),
            WienerError::Io { .. }
            | WienerError::Parse { .. }
            | WienerError::Serialization(_)
            | WienerError::Config(_) => None,
        }
    }

    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WienerError::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a parse error for `source_name` at a 1-based line
    pub fn parse(source_name: impl Into<String>, line: usize, reason: impl Into<String>) -> Self {
        WienerError::Parse {
            source_name: source_name.into(),
            line,
            reason: reason.into(),
        }
    }
}

/// Solver chain stages for error tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessingStage {
    Correlation,
    Solve,
    Filtering,
    Scoring,
    Sweep,
    Analysis,
}

impl fmt::Display for ProcessingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProcessingStage::Correlation => "correlation",
            ProcessingStage::Solve => "solve",
            ProcessingStage::Filtering => "filtering",
            ProcessingStage::Scoring => "scoring",
            ProcessingStage::Sweep => "sweep",
            ProcessingStage::Analysis => "analysis",
        };
        f.write_str(name)
    }
}

/// Error context for debugging and analysis
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    pub stage: ProcessingStage,
    pub operation: String,
    pub file: Option<&'static str>,
    pub line: Option<u32>,
    pub details: BTreeMap<String, String>,
}

impl ErrorContext {
    /// Create a new error context
    pub fn new(stage: ProcessingStage, operation: &str) -> Self {
        Self {
            stage,
            operation: operation.to_string(),
            file: None,
            line: None,
            details: BTreeMap::new(),
        }
    }

    /// Create error context with file and line information
    pub fn with_location(
        stage: ProcessingStage,
        operation: &str,
        file: &'static str,
        line: u32,
    ) -> Self {
        let mut context = Self::new(stage, operation);
        context.file = Some(file);
        context.line = Some(line);
        context
    }

    /// Add a key/value detail to the context
    pub fn add_info<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Self {
        self.details.insert(key.into(), value.to_string());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.stage, self.operation)?;
        if let (Some(file), Some(line)) = (self.file, self.line) {
            write!(f, " at {}:{}", file, line)?;
        }
        for (key, value) in &self.details {
            write!(f, " {}={}", key, value)?;
        }
        Ok(())
    }
}

/// Macro for creating error context with file and line info
#[macro_export]
macro_rules! error_context {
    ($stage:expr, $operation:expr) => {
        $crate::error::ErrorContext::with_location($stage, $operation, file!(), line!())
    };
}

/// Result type alias for Wiener operations
pub type WienerResult<T> = Result<T, WienerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_context_creation() {
        let context = ErrorContext::new(ProcessingStage::Solve, "lu_decompose");
        assert_eq!(context.stage, ProcessingStage::Solve);
        assert_eq!(context.operation, "lu_decompose");
        assert!(context.file.is_none());
    }

    #[test]
    fn test_error_context_macro_records_location() {
        let context = error_context!(ProcessingStage::Filtering, "apply");
        assert_eq!(context.file, Some(file!()));
        assert!(context.line.is_some());
    }

    #[test]
    fn test_error_display() {
        let err = WienerError::LengthMismatch {
            input: 10,
            desired: 8,
            context: ErrorContext::new(ProcessingStage::Solve, "validate").add_info("order", 3),
        };

        let display = err.to_string();
        assert!(display.contains("10"));
        assert!(display.contains("8"));
        assert!(display.contains("solve::validate"));
        assert!(display.contains("order=3"));
    }

    #[test]
    fn test_only_singular_is_recoverable() {
        let singular = WienerError::SingularMatrix {
            order: 2,
            column: 0,
            pivot: 0.0,
            context: ErrorContext::new(ProcessingStage::Solve, "lu_decompose"),
        };
        let empty = WienerError::EmptySignal {
            signal: "input",
            context: ErrorContext::new(ProcessingStage::Scoring, "score"),
        };

        assert!(singular.is_recoverable());
        assert!(!empty.is_recoverable());
        assert_eq!(empty.stage(), Some(ProcessingStage::Scoring));
    }

    #[test]
    fn test_non_finite_sample_is_not_recoverable() {
        let err = WienerError::NonFiniteSample {
            signal: "input",
            index: 3,
            value: f64::NAN,
            context: ErrorContext::new(ProcessingStage::Sweep, "validate_pair"),
        };
        assert!(!err.is_recoverable());
        assert_eq!(err.stage(), Some(ProcessingStage::Sweep));
        assert!(err.to_string().contains("index 3"));
    }

    #[test]
    fn test_json_failure_converts_to_serialization() {
        let json_err = serde_json::from_str::<f64>("not json").unwrap_err();
        let err = WienerError::from(json_err);
        assert!(matches!(err, WienerError::Serialization(_)));
        assert!(err.stage().is_none());
        assert!(err.to_string().starts_with("[SERIALIZE]"));
    }

    #[test]
    fn test_io_error_has_no_stage() {
        let err = WienerError::io(
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.stage().is_none());
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WienerError>();
    }
}
