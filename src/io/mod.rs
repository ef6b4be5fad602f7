// src/io/mod.rs
//! Signal files, result files and test-directory summaries
//!
//! Everything that touches the file system lives here so the solver chain in
//! [`crate::processing`] stays pure.

pub mod result_format;
pub mod signal_file;
pub mod summary;

pub use result_format::{format_value, parse_result, read_result, render_result, write_result, ExpectedResult};
pub use signal_file::{parse_signal, read_combined, read_signal, split_combined, write_signal};
pub use summary::{collect_summary, run_directory, CaseSummary, Summary};
