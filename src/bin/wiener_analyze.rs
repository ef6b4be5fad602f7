//! wiener-analyze: command-line front end for the Wiener solver
//!
//! ```text
//! wiener-analyze [--config <path>] solve   <input> <desired> [order]
//! wiener-analyze [--config <path>] sweep   <input> <desired> [max_order]
//! wiener-analyze [--config <path>] analyze <input> <desired> [order]
//! wiener-analyze [--config <path>] generate <dir> [white|sine|colored]
//! wiener-analyze [--config <path>] run     <test_dir> [order]
//! wiener-analyze [--config <path>] summary <tests_dir>
//! wiener-analyze --version
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use thiserror::Error;
use tracing::{error, info};

use wiener_core::analysis::AnalysisReport;
use wiener_core::generation::{write_test_case, SignalGenerator, TestCase, TestCaseKind};
use wiener_core::io::{collect_summary, read_signal, render_result, run_directory};
use wiener_core::logging::init_logging;
use wiener_core::{version_info, ConfigLoader, WienerConfig, WienerError, WienerPipeline};

const USAGE: &str =
    "usage: wiener-analyze [--config <path>] <solve|sweep|analyze|generate|run|summary> [args...] | --version";

/// Default order for single runs when none is given
const DEFAULT_RUN_ORDER: usize = 4;

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Wiener(#[from] WienerError),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--version" || arg == "-V") {
        print!("{}", version_info());
        return ExitCode::SUCCESS;
    }

    let (config_path, rest) = match split_config_flag(args) {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let config = match load_config(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };
    init_logging(&config.logging);

    match run(&config, &rest) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}\n{USAGE}");
            ExitCode::from(2)
        }
        Err(e) => {
            error!(error = %e, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn split_config_flag(args: Vec<String>) -> Result<(Option<PathBuf>, Vec<String>), CliError> {
    let mut config_path = None;
    let mut rest = Vec::with_capacity(args.len());
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        if arg == "--config" {
            let path = iter
                .next()
                .ok_or_else(|| CliError::Usage("--config requires a path".to_string()))?;
            config_path = Some(PathBuf::from(path));
        } else {
            rest.push(arg);
        }
    }

    Ok((config_path, rest))
}

fn load_config(path: Option<&Path>) -> Result<WienerConfig, CliError> {
    let loader = match path {
        Some(path) => {
            if !path.is_file() {
                return Err(WienerError::from(wiener_core::config::ConfigError::FileNotFound(
                    path.display().to_string(),
                ))
                .into());
            }
            ConfigLoader::with_paths(vec![path.to_path_buf()])
        }
        None => ConfigLoader::new(),
    };
    Ok(loader.load().map_err(WienerError::from)?)
}

fn run(config: &WienerConfig, args: &[String]) -> Result<(), CliError> {
    let (command, params) = args
        .split_first()
        .ok_or_else(|| CliError::Usage("missing command".to_string()))?;
    let pipeline = WienerPipeline::new(config);

    match command.as_str() {
        "solve" => {
            let (input, desired) = load_pair(params)?;
            let order = optional_usize(params.get(2), DEFAULT_RUN_ORDER)?;
            let report = pipeline.run(&input, &desired, order)?;
            print!("{}", render_result(&report, &config.output));
        }
        "sweep" => {
            let (input, desired) = load_pair(params)?;
            let mut sweep_config = config.clone();
            sweep_config.sweep.max_order = optional_usize(params.get(2), config.sweep.max_order)?;
            let result = WienerPipeline::new(&sweep_config).sweep(&input, &desired)?;
            if let Some(best) = result.best() {
                info!(order = best.order, mmse = best.mmse, "best filter length");
            }
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        "analyze" => {
            let (input, desired) = load_pair(params)?;
            let order = optional_usize(params.get(2), DEFAULT_RUN_ORDER)?;
            let report = pipeline.run(&input, &desired, order)?;
            let analysis = AnalysisReport::from_report(&input, &desired, &report)?;
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        "generate" => {
            let dir = required(params, 0, "output directory")?;
            let kind: TestCaseKind = match params.get(1) {
                Some(name) => name.parse()?,
                None => TestCaseKind::WhiteNoiseDesired,
            };
            let mut source = SignalGenerator::from_config(&config.generation);
            let case = TestCase::generate(kind, &config.generation, &mut source);
            write_test_case(Path::new(dir), &case, config.generation.precision)?;
        }
        "run" => {
            let dir = required(params, 0, "test directory")?;
            let order = optional_usize(params.get(1), DEFAULT_RUN_ORDER)?;
            let report = run_directory(Path::new(dir), &pipeline, order, &config.output)?;
            print!("{}", render_result(&report, &config.output));
        }
        "summary" => {
            let dir = required(params, 0, "tests directory")?;
            let summary = collect_summary(Path::new(dir))?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        other => return Err(CliError::Usage(format!("unknown command '{other}'"))),
    }

    Ok(())
}

fn required<'a>(params: &'a [String], idx: usize, what: &str) -> Result<&'a str, CliError> {
    params
        .get(idx)
        .map(String::as_str)
        .ok_or_else(|| CliError::Usage(format!("missing {what}")))
}

fn optional_usize(value: Option<&String>, default: usize) -> Result<usize, CliError> {
    match value {
        Some(text) => text
            .parse()
            .map_err(|_| CliError::Usage(format!("expected a positive integer, got '{text}'"))),
        None => Ok(default),
    }
}

fn load_pair(params: &[String]) -> Result<(Vec<f64>, Vec<f64>), CliError> {
    let input = read_signal(Path::new(required(params, 0, "input file")?))?;
    let desired = read_signal(Path::new(required(params, 1, "desired file")?))?;
    Ok((input, desired))
}
