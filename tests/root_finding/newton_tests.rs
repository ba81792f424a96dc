//! tests for the Newton-Raphson root-finding algorithm
use rivulet::root_finding::{RootFinder, RootFindingError};

type TestResult = Result<(), RootFindingError<f64>>;

const DEFAULT_TOL: f64 = 1e-10;
const DEFAULT_MAX_ITER: usize = 100;

const TEN_DIGITS_PI: f64 = 3.1415926535;

#[test]
fn finds_pi() -> TestResult {
    let finder = RootFinder::new(DEFAULT_TOL, DEFAULT_MAX_ITER);
    let res = finder.newton(|x: f64| x.sin(), |x: f64| x.cos(), 2.90002)?;

    assert!((TEN_DIGITS_PI - res.root).abs() < 10.0 * DEFAULT_TOL);
    assert!(res.iterations() > 0);
    Ok(())
}

#[test]
fn seeds_with_starting_guess() -> TestResult {
    let x0 = 2.90002;
    let finder = RootFinder::new(DEFAULT_TOL, DEFAULT_MAX_ITER);
    let res = finder.newton(|x: f64| x.sin(), |x: f64| x.cos(), x0)?;

    assert_eq!(res.iterates[0], x0);
    assert_eq!(res.iterates.len(), res.errors.len() + 1);
    Ok(())
}

#[test]
fn zero_tolerance() {
    let finder = RootFinder::new(0.0, DEFAULT_MAX_ITER);
    let err = finder
        .newton(|x: f64| x.sin(), |x: f64| x.cos(), 2.90002)
        .unwrap_err();

    assert_eq!(err, RootFindingError::InvalidTolerance { tol: 0.0 });
}

#[test]
fn zero_derivative_at_seed() {
    let finder = RootFinder::new(DEFAULT_TOL, DEFAULT_MAX_ITER);
    let err = finder
        .newton(|x: f64| x * x, |x: f64| 2.0 * x, 0.0)
        .unwrap_err();

    assert_eq!(err, RootFindingError::ZeroDerivative { best: 0.0 });
}

#[test]
fn zero_derivative_carries_best_iterate() {
    // derivative collapses on the second step; the error must report the
    // last accepted iterate, not the seed
    let mut calls = 0;
    let df = move |_x: f64| {
        calls += 1;
        if calls == 1 {
            1.0
        } else {
            0.0
        }
    };

    let finder = RootFinder::new(DEFAULT_TOL, DEFAULT_MAX_ITER);
    let err = finder.newton(|x: f64| x - 2.0, df, 0.0).unwrap_err();

    assert_eq!(err, RootFindingError::ZeroDerivative { best: 2.0 });
}

#[test]
fn root_is_last_iterate() -> TestResult {
    let finder = RootFinder::new(DEFAULT_TOL, DEFAULT_MAX_ITER);
    let res = finder.newton(|x: f64| x.sin(), |x: f64| x.cos(), 2.90002)?;

    assert_eq!(Some(&res.root), res.iterates.last());
    Ok(())
}

#[test]
fn uses_max_iter() -> TestResult {
    // double root at 0: Newton converges only linearly, halving each step
    let niter = 10;
    let finder = RootFinder::new(1e-12, niter);
    let res = finder.newton(|x: f64| x * x, |x: f64| 2.0 * x, 1.0)?;

    assert_eq!(res.iterations(), niter);
    assert_eq!(res.iterates.len() - 1, niter);
    assert!(res.final_error().unwrap() > 1e-12);
    Ok(())
}
