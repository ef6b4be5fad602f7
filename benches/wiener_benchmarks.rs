// benches/wiener_benchmarks.rs
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wiener_core::config::{GenerationConfig, WienerConfig};
use wiener_core::generation::{SignalGenerator, TestCase, TestCaseKind};
use wiener_core::processing::{convolve_full, full_correlation};
use wiener_core::WienerPipeline;

const SAMPLE_COUNTS: &[usize] = &[100, 500, 2000];
const FILTER_ORDERS: &[usize] = &[1, 4, 15, 32];

fn white_case(n: usize) -> TestCase {
    let config = GenerationConfig {
        sample_count: n,
        seed: Some(7),
        ..GenerationConfig::default()
    };
    let mut source = SignalGenerator::from_config(&config);
    TestCase::generate(TestCaseKind::WhiteNoiseDesired, &config, &mut source)
}

fn benchmark_correlation(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation");

    for &n in SAMPLE_COUNTS {
        let case = white_case(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("full_correlation", n), &case, |b, case| {
            b.iter(|| full_correlation(black_box(&case.desired), black_box(&case.input)))
        });

        group.bench_with_input(BenchmarkId::new("convolve_full_4tap", n), &case, |b, case| {
            let taps = [0.4, 0.3, 0.2, 0.1];
            b.iter(|| convolve_full(black_box(&case.input), black_box(&taps)))
        });
    }

    group.finish();
}

fn benchmark_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let pipeline = WienerPipeline::default();

    for &n in SAMPLE_COUNTS {
        let case = white_case(n);
        for &order in FILTER_ORDERS {
            group.bench_with_input(
                BenchmarkId::new("run", format!("{}n_{}m", n, order)),
                &(order, &case),
                |b, &(order, case)| {
                    b.iter(|| pipeline.run(black_box(&case.input), black_box(&case.desired), order))
                },
            );
        }
    }

    group.finish();
}

fn benchmark_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    let case = white_case(500);

    for parallel in [false, true] {
        let mut config = WienerConfig::default();
        config.sweep.parallel = parallel;
        let pipeline = WienerPipeline::new(&config);

        let label = if parallel { "parallel" } else { "sequential" };
        group.bench_function(BenchmarkId::new("max_order_15", label), |b| {
            b.iter(|| pipeline.sweep(black_box(&case.input), black_box(&case.desired)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_correlation, benchmark_pipeline, benchmark_sweep);
criterion_main!(benches);
