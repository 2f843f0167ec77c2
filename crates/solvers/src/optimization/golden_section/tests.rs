use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error;

use bufferstock_core::{Model, OptimizationProblem};

use super::{Config, Error, Status, maximize, minimize};

/// A simple polynomial: f(x) = x³ - 4x.
struct Polynomial;

impl Model for Polynomial {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(x.powi(3) - 4.0 * x)
    }
}

/// Quadratic model: f(x) = (x - 5)².
struct Quadratic;

impl Model for Quadratic {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok((x - 5.0).powi(2))
    }
}

/// Always produces NaN.
struct Undefined;

impl Model for Undefined {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, _x: &f64) -> Result<f64, Self::Error> {
        Ok(f64::NAN)
    }
}

/// Objective: just use the model output as the objective.
struct ObjectiveOutput;

impl OptimizationProblem<1> for ObjectiveOutput {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn objective(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

#[test]
fn minimizes_polynomial() {
    // Local minimum at x = 2/sqrt(3) ≈ 1.1547.
    let expected_x = 2.0 / 3.0_f64.sqrt();

    let solution = minimize(&Polynomial, &ObjectiveOutput, [-2.0, 2.0], &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, expected_x, epsilon = 1e-7);
    assert_relative_eq!(solution.snapshot.input, solution.x);
    assert_relative_eq!(solution.objective, solution.snapshot.output);
}

#[test]
fn maximizes_polynomial() {
    // Local maximum at x = -2/sqrt(3) ≈ -1.1547.
    let expected_x = -2.0 / 3.0_f64.sqrt();

    let solution = maximize(&Polynomial, &ObjectiveOutput, [-2.0, 2.0], &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, expected_x, epsilon = 1e-7);

    // The reported objective is the model's value, not its negation.
    assert!(solution.objective > 0.0);
}

#[test]
fn reversed_bounds_find_the_same_minimum() {
    let config = Config::absolute(100, 1e-9).unwrap();

    let forward = minimize(&Quadratic, &ObjectiveOutput, [0.0, 10.0], &config).unwrap();
    let reversed = minimize(&Quadratic, &ObjectiveOutput, [10.0, 0.0], &config).unwrap();

    assert_eq!(forward.x, reversed.x);
    assert_relative_eq!(forward.x, 5.0, epsilon = 1e-8);
}

#[test]
fn converges_when_bracket_width_reaches_tolerance() {
    // Width 10 shrinks by 1/φ per iteration: 10·0.618^20 ≈ 6.6e-4 ≤ 1e-3,
    // while 10·0.618^19 ≈ 1.07e-3 is still too wide.
    let config = Config::absolute(100, 1e-3).unwrap();

    let solution = minimize(&Quadratic, &ObjectiveOutput, [0.0, 10.0], &config).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 20);
    assert_relative_eq!(solution.x, 5.0, epsilon = 1e-3);
}

#[test]
fn reports_max_iters_when_budget_runs_out() {
    let config = Config::absolute(5, 1e-12).unwrap();

    let solution = minimize(&Quadratic, &ObjectiveOutput, [0.0, 10.0], &config).unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 5);
    assert!((0.0..=10.0).contains(&solution.x));
}

#[test]
fn degenerate_bracket_returns_the_single_point() {
    let config = Config::absolute(100, 1e-8).unwrap();

    let solution = minimize(&Quadratic, &ObjectiveOutput, [2.0, 2.0], &config).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.x, 2.0);
    assert_relative_eq!(solution.objective, 9.0);
}

#[test]
fn bracket_narrower_than_tolerance_returns_immediately() {
    let config = Config::absolute(100, 1e-8).unwrap();

    let solution = minimize(&Quadratic, &ObjectiveOutput, [1e-9, 2e-9], &config).unwrap();

    assert_eq!(solution.iters, 0);
    assert!((1e-9..=2e-9).contains(&solution.x));
}

#[test]
fn nan_objective_stays_inside_bracket() {
    let config = Config::absolute(100, 1e-6).unwrap();

    let solution = minimize(&Undefined, &ObjectiveOutput, [0.0, 10.0], &config)
        .expect("NaN is a value, not an error");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.objective.is_nan());
    assert!((0.0..=10.0).contains(&solution.x));
}

/// `(x - 2)^2`, undefined above `x = 5`.
struct PartlyUndefined;

impl Model for PartlyUndefined {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(if *x > 5.0 { f64::NAN } else { (x - 2.0).powi(2) })
    }
}

#[test]
fn nan_region_is_shrunk_away() {
    let config = Config::absolute(100, 1e-8).unwrap();

    let solution = minimize(&PartlyUndefined, &ObjectiveOutput, [0.0, 10.0], &config).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-6);
    assert!(solution.objective.is_finite());
}

#[test]
fn repeated_searches_are_bit_identical() {
    let config = Config::absolute(100, 1e-10).unwrap();

    let first = minimize(&Polynomial, &ObjectiveOutput, [0.0, 3.0], &config).unwrap();
    let second = minimize(&Polynomial, &ObjectiveOutput, [0.0, 3.0], &config).unwrap();

    assert_eq!(first.x.to_bits(), second.x.to_bits());
    assert_eq!(first.iters, second.iters);
}

/// Model that fails when x exceeds a threshold.
struct ThresholdModel {
    threshold: f64,
}

#[derive(Debug, Clone, Error)]
#[error("model failed at x={x} (threshold={threshold})")]
struct ThresholdError {
    x: f64,
    threshold: f64,
}

impl Model for ThresholdModel {
    type Input = f64;
    type Output = f64;
    type Error = ThresholdError;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        if *x > self.threshold {
            Err(ThresholdError {
                x: *x,
                threshold: self.threshold,
            })
        } else {
            Ok((x - 2.0).powi(2))
        }
    }
}

#[test]
fn model_failure_is_returned() {
    // Bracket [0, 10] probes ~3.82 and ~6.18 first; the second fails.
    let model = ThresholdModel { threshold: 5.0 };

    let result = minimize(&model, &ObjectiveOutput, [0.0, 10.0], &Config::default());

    match result {
        Err(Error::Model(err)) => assert!(err.to_string().contains("threshold=5")),
        other => panic!("expected a model error, got {other:?}"),
    }
}

#[test]
fn model_that_never_fails_inside_bracket_converges() {
    let model = ThresholdModel { threshold: 5.0 };

    let solution = minimize(&model, &ObjectiveOutput, [0.0, 4.0], &Config::default())
        .expect("all probes are below the threshold");

    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-6);
}
