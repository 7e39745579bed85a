use riskbench::{RegressionEstimator, RiskbenchError};

#[test]
fn test_recovers_exact_linear_relationship() {
    let market = [0.01, -0.02, 0.03, 0.0, 0.015];
    // strategy = 1.5 * market + 0.002 exactly
    let strategy: Vec<f64> = market.iter().map(|&m| 1.5 * m + 0.002).collect();

    let fit = RegressionEstimator::estimate(&strategy, &market).unwrap();

    assert!((fit.beta - 1.5).abs() < 1e-9);
    assert!((fit.alpha - 0.002).abs() < 1e-9);
}

#[test]
fn test_results_are_rounded_to_three_decimals() {
    // Two points determine the line exactly: slope 1.23456, intercept 0
    let market = [0.0, 0.01];
    let strategy = [0.0, 0.0123456];

    let fit = RegressionEstimator::estimate(&strategy, &market).unwrap();

    assert!((fit.beta - 1.235).abs() < 1e-12);
    assert!((fit.alpha - 0.0).abs() < 1e-12);
}

#[test]
fn test_constant_market_is_degenerate() {
    // Zero market variance leaves the OLS slope undefined
    let market = [0.01, 0.01, 0.01, 0.01];
    let strategy = [0.02, -0.01, 0.03, 0.0];

    let err = RegressionEstimator::estimate(&strategy, &market).unwrap_err();
    assert!(matches!(err, RiskbenchError::DegenerateInput(_)));
}

#[test]
fn test_unequal_lengths_rejected() {
    let err = RegressionEstimator::estimate(&[0.01, 0.02], &[0.01]).unwrap_err();
    assert!(matches!(
        err,
        RiskbenchError::ShapeMismatch {
            strategy: 2,
            market: 1
        }
    ));
}

#[test]
fn test_single_observation_rejected() {
    // A degree-1 fit is underdetermined with fewer than 2 points
    let err = RegressionEstimator::estimate(&[0.01], &[0.02]).unwrap_err();
    assert!(matches!(
        err,
        RiskbenchError::TooShort {
            required: 2,
            actual: 1
        }
    ));
}

#[test]
fn test_deterministic_across_calls() {
    let market = [0.012, -0.008, 0.02, -0.015, 0.005];
    let strategy = [0.01, -0.01, 0.025, -0.02, 0.004];

    let first = RegressionEstimator::estimate(&strategy, &market).unwrap();
    let second = RegressionEstimator::estimate(&strategy, &market).unwrap();

    assert_eq!(first, second);
}
