//! Generate a sine-plus-noise case, solve it at one order and sweep the filter length

use wiener_core::analysis::AnalysisReport;
use wiener_core::config::LoggingConfig;
use wiener_core::generation::{SignalGenerator, TestCase, TestCaseKind};
use wiener_core::logging::init_logging;
use wiener_core::{WienerConfig, WienerPipeline, WienerResult};

fn main() -> WienerResult<()> {
    init_logging(&LoggingConfig::default());

    let mut config = WienerConfig::default();
    config.generation.sample_count = 200;
    config.generation.seed = Some(2024);

    let mut source = SignalGenerator::from_config(&config.generation);
    let case = TestCase::generate(TestCaseKind::SineWhite, &config.generation, &mut source)
        .round_to(config.generation.precision);

    let pipeline = WienerPipeline::new(&config);

    let report = pipeline.run(&case.input, &case.desired, 4)?;
    println!("M = 4 coefficients: {:?}", report.coefficients);
    println!("M = 4 MMSE: {:.4}", report.mmse);

    let sweep = pipeline.sweep(&case.input, &case.desired)?;
    for point in &sweep.points {
        println!("M = {:2}  MMSE = {:.4}", point.order, point.mmse);
    }
    if let Some(best) = sweep.best() {
        println!("best order: {} (MMSE {:.4})", best.order, best.mmse);
    }

    let analysis = AnalysisReport::from_report(&case.input, &case.desired, &report)?;
    println!("error histogram counts: {:?}", analysis.error_histogram.counts);

    Ok(())
}
