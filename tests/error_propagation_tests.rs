// tests/error_propagation_tests.rs
//! Error propagation through the solver chain
//!
//! Checks that each failure reaches the caller as the right variant with its
//! stage and location context intact, and that only singular matrices are
//! treated as skippable.

use wiener_core::config::constants::sweep::MAX_ORDER_LIMIT;
use wiener_core::config::{ConfigError, SolverConfig};
use wiener_core::io::parse_signal;
use wiener_core::processing::{full_correlation, lag_value, FilterApplier, LuDecomposition, WienerSolver};
use wiener_core::{LagPolicy, ProcessingStage, WienerError, WienerPipeline};

#[test]
fn test_length_mismatch_reports_both_lengths() {
    let err = WienerPipeline::default()
        .run(&[1.0; 10], &[1.0; 8], 2)
        .unwrap_err();

    match &err {
        WienerError::LengthMismatch { input, desired, context } => {
            assert_eq!(*input, 10);
            assert_eq!(*desired, 8);
            assert_eq!(context.stage, ProcessingStage::Solve);
            assert!(context.file.is_some());
        }
        other => panic!("expected LengthMismatch, got {other:?}"),
    }

    let message = err.to_string();
    assert!(message.contains("[DATA]"));
    assert!(message.contains("10"));
    assert!(message.contains("8"));
    assert!(!err.is_recoverable());
}

#[test]
fn test_empty_signals_rejected_before_solving() {
    let pipeline = WienerPipeline::default();

    let err = pipeline.run(&[], &[], 1).unwrap_err();
    assert!(matches!(err, WienerError::EmptySignal { signal: "input", .. }));

    let err = pipeline.run(&[1.0], &[], 1).unwrap_err();
    assert!(matches!(err, WienerError::EmptySignal { signal: "desired", .. }));

    assert!(matches!(
        full_correlation(&[], &[1.0]),
        Err(WienerError::EmptySignal { .. })
    ));
}

#[test]
fn test_non_finite_desired_produces_no_report() {
    let err = WienerPipeline::default()
        .run(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, f64::INFINITY, 0.5, 0.2, 0.1], 2)
        .unwrap_err();

    match &err {
        WienerError::NonFiniteSample { signal, index, value, context } => {
            assert_eq!(*signal, "desired");
            assert_eq!(*index, 1);
            assert!(value.is_infinite());
            assert_eq!(context.stage, ProcessingStage::Solve);
        }
        other => panic!("expected NonFiniteSample, got {other:?}"),
    }
    assert!(err.to_string().contains("[DATA]"));
}

#[test]
fn test_non_finite_text_never_reaches_sweep() {
    let err = parse_signal("nan\n1.0\n2.0\n3.0\n4.0\n5.0\n", "input.txt").unwrap_err();
    assert!(matches!(err, WienerError::Parse { line: 1, .. }));

    let input = [f64::NAN, 1.0, 2.0, 3.0, 4.0, 5.0];
    let desired = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let err = WienerPipeline::default().sweep(&input, &desired).unwrap_err();
    assert!(matches!(err, WienerError::NonFiniteSample { signal: "input", .. }));
}

#[test]
fn test_zero_pad_huge_order_is_invalid_not_a_panic() {
    let config = SolverConfig {
        lag_policy: LagPolicy::ZeroPad,
        ..SolverConfig::default()
    };
    let err = WienerSolver::new(config)
        .solve(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], usize::MAX)
        .unwrap_err();
    assert!(matches!(err, WienerError::InvalidOrder { max: MAX_ORDER_LIMIT, .. }));
}

#[test]
fn test_zero_order_is_invalid() {
    let err = WienerPipeline::default()
        .run(&[1.0, 2.0], &[1.0, 2.0], 0)
        .unwrap_err();
    assert!(matches!(err, WienerError::InvalidOrder { order: 0, .. }));
    assert_eq!(err.stage(), Some(ProcessingStage::Solve));
}

#[test]
fn test_singular_error_carries_order_and_pivot() {
    let err = WienerSolver::default()
        .solve(&[0.0; 5], &[1.0; 5], 2)
        .unwrap_err();

    match &err {
        WienerError::SingularMatrix { order, column, pivot, .. } => {
            assert_eq!(*order, 2);
            assert_eq!(*column, 0);
            assert_eq!(*pivot, 0.0);
        }
        other => panic!("expected SingularMatrix, got {other:?}"),
    }
    assert!(err.is_recoverable());
    assert!(err.to_string().contains("[SOLVER]"));
}

#[test]
fn test_tolerance_controls_singular_detection() {
    let nearly_dependent = ndarray::array![[1.0, 1.0], [1.0, 1.0 + 1e-9]];

    assert!(LuDecomposition::new(&nearly_dependent, 1e-12).is_ok());
    assert!(matches!(
        LuDecomposition::new(&nearly_dependent, 1e-6),
        Err(WienerError::SingularMatrix { .. })
    ));
}

#[test]
fn test_strict_lag_lookup_out_of_range() {
    let corr = full_correlation(&[1.0, 2.0], &[1.0, 2.0]).unwrap();

    let err = lag_value(&corr, 1, 2, LagPolicy::Strict).unwrap_err();
    match err {
        WienerError::LagOutOfRange { lag, len, context } => {
            assert_eq!(lag, 2);
            assert_eq!(len, 3);
            assert_eq!(context.stage, ProcessingStage::Correlation);
            assert_eq!(context.details.get("zero_lag").map(String::as_str), Some("1"));
        }
        other => panic!("expected LagOutOfRange, got {other:?}"),
    }

    assert_eq!(lag_value(&corr, 1, 2, LagPolicy::ZeroPad).unwrap(), 0.0);
}

#[test]
fn test_solver_config_is_respected() {
    let solver = WienerSolver::new(SolverConfig {
        lag_policy: LagPolicy::ZeroPad,
        ..SolverConfig::default()
    });
    assert_eq!(solver.config().lag_policy, LagPolicy::ZeroPad);
    assert!(solver.solve(&[1.0, 2.0], &[1.0, 2.0], 3).is_ok());
}

#[test]
fn test_filter_errors_have_filtering_stage() {
    let err = FilterApplier::default().apply(&[], &[1.0]).unwrap_err();
    assert_eq!(err.stage(), Some(ProcessingStage::Filtering));
}

#[test]
fn test_sweep_aborts_on_fatal_error() {
    let err = WienerPipeline::default()
        .sweep(&[], &[])
        .unwrap_err();
    assert!(matches!(err, WienerError::EmptySignal { .. }));
    assert_eq!(err.stage(), Some(ProcessingStage::Sweep));
}

#[test]
fn test_config_errors_convert_transparently() {
    let err: WienerError = ConfigError::ValidationError(vec!["bad".to_string()]).into();
    assert!(matches!(err, WienerError::Config(_)));
    assert!(err.to_string().contains("bad"));
    assert!(err.stage().is_none());
}

#[test]
fn test_io_errors_keep_path() {
    let err = wiener_core::io::read_signal(std::path::Path::new("/nonexistent/wiener/input.txt"))
        .unwrap_err();
    match err {
        WienerError::Io { path, .. } => assert!(path.ends_with("input.txt")),
        other => panic!("expected Io, got {other:?}"),
    }
}
