// tests/solver_tests.rs
//! End-to-end solver chain behaviour
//!
//! Covers the reference scenario, the closed form at M = 1, identity fits,
//! agreement with a direct-summation FIR and the lag-policy options.

use ndarray::array;
use proptest::prelude::*;
use wiener_core::config::{SolverConfig, WienerConfig};
use wiener_core::processing::{convolve_full, full_correlation};
use wiener_core::{ConvolutionAlignment, LagPolicy, WienerError, WienerPipeline};

/// Reference scenario `[1, 2, 3, 4]` through every stage
#[test]
fn test_reference_scenario_intermediates() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let pipeline = WienerPipeline::default();

    let solution = pipeline.solve(&x, &x, 1).unwrap();
    assert_eq!(solution.autocorrelation, array![[30.0]]);
    assert_eq!(solution.cross_correlation, array![30.0]);
    assert_eq!(solution.coefficients, vec![1.0]);

    let report = pipeline.run(&x, &x, 1).unwrap();
    assert_eq!(report.output, vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(report.error, vec![0.0; 4]);
    assert_eq!(report.mmse, 0.0);
}

/// Two-tap system built by hand from the correlation sequences
#[test]
fn test_two_tap_normal_equations() {
    let x = [1.0, -1.0, 2.0];
    let d = [0.5, 1.0, 0.0];
    let solution = WienerPipeline::default().solve(&x, &d, 2).unwrap();

    // rxx lags 0, 1 = 6, -3; rdx lags 0, 1 = -0.5, 1.0
    assert_eq!(solution.autocorrelation, array![[6.0, -3.0], [-3.0, 6.0]]);
    assert_eq!(solution.cross_correlation, array![-0.5, 1.0]);

    let h = &solution.coefficients;
    assert!((6.0 * h[0] - 3.0 * h[1] + 0.5).abs() < 1e-12);
    assert!((-3.0 * h[0] + 6.0 * h[1] - 1.0).abs() < 1e-12);
}

#[test]
fn test_constant_zero_signal_is_singular() {
    let err = WienerPipeline::default()
        .run(&[0.0; 8], &[1.0; 8], 3)
        .unwrap_err();

    match err {
        WienerError::SingularMatrix { order, .. } => assert_eq!(order, 3),
        other => panic!("expected SingularMatrix, got {other:?}"),
    }
}

#[test]
fn test_nonzero_constant_signal_solves() {
    let report = WienerPipeline::default()
        .run(&[2.0; 8], &[2.0; 8], 3)
        .unwrap();
    assert!(report.mmse < 1e-12);
}

#[test]
fn test_strict_policy_rejects_order_beyond_length() {
    let err = WienerPipeline::default()
        .run(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], 4)
        .unwrap_err();
    assert!(matches!(err, WienerError::InvalidOrder { order: 4, max: 3, .. }));
}

#[test]
fn test_zero_pad_policy_allows_long_filters() {
    let mut config = WienerConfig::default();
    config.solver = SolverConfig {
        lag_policy: LagPolicy::ZeroPad,
        ..SolverConfig::default()
    };

    let x = [1.0, 2.0, 3.0];
    let report = WienerPipeline::new(&config).run(&x, &x, 5).unwrap();
    assert_eq!(report.coefficients.len(), 5);
    assert_eq!(report.output.len(), 3);
    assert!(report.mmse < 1e-12);
}

#[test]
fn test_centered_alignment_changes_output_window() {
    let x = [0.5, -1.0, 2.0, 1.5, -0.5, 0.25];
    let d = [0.0, 1.0, -1.0, 0.5, 2.0, -0.5];

    let causal = WienerPipeline::default().run(&x, &d, 3).unwrap();

    let mut config = WienerConfig::default();
    config.filter.alignment = ConvolutionAlignment::Centered;
    let centered = WienerPipeline::new(&config).run(&x, &d, 3).unwrap();

    assert_eq!(causal.coefficients, centered.coefficients);
    let full = convolve_full(&x, &causal.coefficients);
    assert_eq!(centered.output, full[1..7].to_vec());
    assert_eq!(causal.output, full[..6].to_vec());
}

proptest! {
    #[test]
    fn prop_autocorrelation_symmetric(x in prop::collection::vec(-5.0f64..5.0, 1..40)) {
        let r = full_correlation(&x, &x).unwrap();
        let n = x.len();
        prop_assert_eq!(r.len(), 2 * n - 1);
        for k in 0..n {
            prop_assert!((r[n - 1 + k] - r[n - 1 - k]).abs() < 1e-9);
        }
        let energy: f64 = x.iter().map(|v| v * v).sum();
        prop_assert!((r[n - 1] - energy).abs() < 1e-9);
    }

    #[test]
    fn prop_single_tap_closed_form(
        x in prop::collection::vec(0.5f64..5.0, 2..30),
        scale in -3.0f64..3.0,
    ) {
        let d: Vec<f64> = x.iter().map(|v| scale * v + 0.1).collect();
        let solution = WienerPipeline::default().solve(&x, &d, 1).unwrap();
        let expected = solution.cross_correlation[0] / solution.autocorrelation[[0, 0]];
        prop_assert!((solution.coefficients[0] - expected).abs() < 1e-9 * expected.abs().max(1.0));
    }

    #[test]
    fn prop_identity_fit_is_unit_impulse(
        x in prop::collection::vec(-5.0f64..5.0, 4..24)
            .prop_filter("needs energy", |v| v.iter().map(|s| s * s).sum::<f64>() > 1.0),
        order in 1usize..4,
    ) {
        let report = WienerPipeline::default().run(&x, &x, order).unwrap();
        prop_assert!((report.coefficients[0] - 1.0).abs() < 1e-6);
        for tap in &report.coefficients[1..] {
            prop_assert!(tap.abs() < 1e-6);
        }
        prop_assert!(report.mmse < 1e-9);
    }

    #[test]
    fn prop_output_matches_direct_sum(
        x in prop::collection::vec(-5.0f64..5.0, 8..32),
        d in prop::collection::vec(-5.0f64..5.0, 8..32),
    ) {
        let n = x.len().min(d.len());
        let (x, d) = (&x[..n], &d[..n]);
        prop_assume!(x.iter().map(|s| s * s).sum::<f64>() > 1.0);

        let report = WienerPipeline::default().run(x, d, 3).unwrap();
        for i in 0..n {
            let direct: f64 = (0..3)
                .filter(|k| *k <= i)
                .map(|k| report.coefficients[k] * x[i - k])
                .sum();
            prop_assert!((report.output[i] - direct).abs() < 1e-9 * direct.abs().max(1.0));
        }
    }
}
