//! Correlation estimator tests.

use dq_profile::correlate;
use proptest::prelude::*;

#[test]
fn empty_input_is_zero() {
    assert_eq!(correlate(&[], &[]), 0.0);
}

#[test]
fn perfect_positive_correlation() {
    let x = [1.0, 2.0, 3.0];
    let y = [2.0, 4.0, 6.0];
    assert_eq!(correlate(&x, &y), 1.0);
}

#[test]
fn perfect_negative_correlation() {
    let x = [1.0, 2.0, 3.0];
    let y = [3.0, 2.0, 1.0];
    assert_eq!(correlate(&x, &y), -1.0);
}

#[test]
fn constant_column_is_zero() {
    let x = [5.0, 5.0, 5.0];
    let y = [1.0, 2.0, 3.0];
    assert_eq!(correlate(&x, &y), 0.0);
    assert_eq!(correlate(&y, &x), 0.0);
}

#[test]
fn nan_elements_substitute_zero() {
    // NaN is folded in as 0, not excluded pairwise: with x = [1, 2, 0]
    // the coefficient is -0.5, not the pairwise-deleted value.
    let x = [1.0, 2.0, f64::NAN];
    let y = [1.0, 2.0, 3.0];
    assert_eq!(correlate(&x, &y), -0.5);
}

proptest! {
    #[test]
    fn self_correlation_is_one(values in prop::collection::vec(-100.0f64..100.0, 2..32)) {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assume!(max - min > 1.0);
        let r = correlate(&values, &values);
        prop_assert!((r - 1.0).abs() < 1e-9, "r = {r}");
    }

    #[test]
    fn correlation_is_symmetric(pairs in prop::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 0..32)) {
        let x: Vec<f64> = pairs.iter().map(|(a, _)| *a).collect();
        let y: Vec<f64> = pairs.iter().map(|(_, b)| *b).collect();
        prop_assert_eq!(correlate(&x, &y), correlate(&y, &x));
    }

    #[test]
    fn constant_column_always_zero(constant in -50i32..50, other in prop::collection::vec(-100.0f64..100.0, 1..32)) {
        let x = vec![f64::from(constant); other.len()];
        prop_assert_eq!(correlate(&x, &other), 0.0);
    }
}
