//! Synthetic test-case generation
//! Location: src/generation/mod.rs

pub mod signal_generator;
pub mod test_case;

pub use signal_generator::{linspace, SignalGenerator};
pub use test_case::{write_combined, write_test_case, TestCase, TestCaseKind};
