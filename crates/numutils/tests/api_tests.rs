#![cfg(feature = "dev")]
//! Tests for the fluent comparison API.
//!
//! ## Test Organization
//!
//! 1. **Builder** - Defaults, configuration, validation errors
//! 2. **Scalar Comparison** - Tolerance and NaN policy
//! 3. **Sequence Comparison** - Boolean checks and reports

use approx::assert_relative_eq;

use numutils::internals::api::{ComparatorBuilder, Comparison, NumUtilsError};
use numutils::internals::math::tolerance::default_tolerance;

// ============================================================================
// Builder Tests
// ============================================================================

/// Test builder defaults.
#[test]
fn test_builder_defaults() {
    let cmp = ComparatorBuilder::<f64>::new().build().unwrap();
    assert_eq!(cmp.tolerance(), default_tolerance::<f64>());
    assert!(!cmp.is_nan_equal());

    let cmp = ComparatorBuilder::<f32>::default().build().unwrap();
    assert_eq!(cmp.tolerance(), default_tolerance::<f32>());
}

/// Test builder configuration.
#[test]
fn test_builder_configuration() {
    let cmp = ComparatorBuilder::new()
        .tolerance(1e-4)
        .nan_equal()
        .build()
        .unwrap();
    assert_relative_eq!(cmp.tolerance(), 1e-4);
    assert!(cmp.is_nan_equal());

    let cmp = ComparatorBuilder::new().tolerance(0.0).build().unwrap();
    assert_eq!(cmp.tolerance(), 0.0);
}

/// Test that invalid tolerances are rejected at build time.
#[test]
fn test_builder_invalid_tolerance() {
    let res = ComparatorBuilder::new().tolerance(-1.0).build();
    assert_eq!(res, Err(NumUtilsError::InvalidTolerance(-1.0)));

    let res = ComparatorBuilder::new().tolerance(f64::INFINITY).build();
    assert!(matches!(res, Err(NumUtilsError::InvalidTolerance(_))));
}

/// Test that setting a parameter twice is rejected at build time.
#[test]
fn test_builder_duplicate_parameter() {
    let res = ComparatorBuilder::new().tolerance(0.1).tolerance(0.2).build();
    assert_eq!(
        res,
        Err(NumUtilsError::DuplicateParameter {
            parameter: "tolerance"
        })
    );

    let res = ComparatorBuilder::<f64>::new().nan_equal().nan_equal().build();
    assert_eq!(
        res,
        Err(NumUtilsError::DuplicateParameter {
            parameter: "nan_equal"
        })
    );
}

// ============================================================================
// Scalar Comparison Tests
// ============================================================================

/// Test scalar comparison with and without NaN equality.
#[test]
fn test_comparator_approx_eq() {
    let strict = ComparatorBuilder::new().tolerance(1e-4).build().unwrap();
    assert!(strict.approx_eq(1.0001, 1.0));
    assert!(!strict.approx_eq(1.001, 1.0));
    assert!(!strict.approx_eq(f64::NAN, f64::NAN));

    let lenient = ComparatorBuilder::new()
        .tolerance(1e-4)
        .nan_equal()
        .build()
        .unwrap();
    assert!(lenient.approx_eq(f64::NAN, f64::NAN));
    assert!(!lenient.approx_eq(f64::NAN, 1.0));
}

// ============================================================================
// Sequence Comparison Tests
// ============================================================================

/// Test element-wise comparison.
#[test]
fn test_comparator_elements_approx_eq() {
    let v1 = [1.0, 2.0, 3.0];
    let v2 = [1.1, 2.1, 3.1];

    let loose = ComparatorBuilder::new().tolerance(0.15).build().unwrap();
    assert_eq!(loose.elements_approx_eq(&v1, &v2), Ok(true));

    let tight = ComparatorBuilder::<f64>::new().build().unwrap();
    assert_eq!(tight.elements_approx_eq(&v1, &v2), Ok(false));
    assert_eq!(tight.elements_approx_eq(&v1, &v1), Ok(true));
    assert_eq!(tight.elements_approx_eq(&[], &[]), Ok(true));
}

/// Test that mismatched lengths are an error.
#[test]
fn test_comparator_length_mismatch() {
    let cmp = ComparatorBuilder::<f64>::new().build().unwrap();

    assert_eq!(
        cmp.elements_approx_eq(&[1.0, 2.0], &[1.0]),
        Err(NumUtilsError::MismatchedInputs { a_len: 2, b_len: 1 })
    );
    assert!(matches!(
        cmp.compare(&[1.0], &[1.0, 2.0, 3.0]),
        Err(NumUtilsError::MismatchedInputs { a_len: 1, b_len: 3 })
    ));
}

/// Test the full comparison report.
#[test]
fn test_comparator_compare() {
    let cmp = ComparatorBuilder::new().tolerance(0.05).build().unwrap();
    let report: Comparison<f64> = cmp
        .compare(&[1.0, 2.0, 3.0, 4.0], &[1.0, 2.1, 3.0, 3.5])
        .unwrap();

    assert_eq!(report.len, 4);
    assert_relative_eq!(report.tolerance, 0.05);
    assert_relative_eq!(report.max_abs_diff, 0.5, epsilon = 1e-12);
    assert_eq!(report.mismatches, vec![1, 3]);
    assert!(!report.is_equal());
}

/// Test that the report honors the NaN policy.
#[test]
fn test_comparator_compare_nan_equal() {
    let a = [1.0, f64::NAN];
    let b = [1.0, f64::NAN];

    let strict = ComparatorBuilder::new().tolerance(0.0).build().unwrap();
    assert_eq!(strict.compare(&a, &b).unwrap().mismatches, vec![1]);

    let report = strict.compare(&a, &b).unwrap();
    assert!(report.max_abs_diff.is_nan());

    let lenient = ComparatorBuilder::new().tolerance(0.0).nan_equal().build().unwrap();
    let report = lenient.compare(&a, &b).unwrap();
    assert!(report.is_equal());
    assert_eq!(report.max_abs_diff, 0.0);
    assert!(report.to_string().contains("  Max abs diff: 0\n"));
}
