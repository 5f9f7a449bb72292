//! R bindings for numutils.
//!
//! Provides R access to the numutils Rust library via extendr. The exported
//! names (`sqr`, `approx_equal`, `elements_are_equal`) are the ones the R
//! package has always used.

use extendr_api::prelude::*;

use numutils::prelude::{Approx, Comparator, Comparison, NumUtilsError, square};

// ============================================================================
// Helper Functions
// ============================================================================

/// Build a validated comparator from R arguments.
///
/// A `NULL` tolerance selects the default (`sqrt(.Machine$double.eps)`).
fn comparator(tolerance: Nullable<f64>, nan_equal: bool) -> Result<Comparator<f64>> {
    let mut builder = Approx::<f64>::new();
    if let Nullable::NotNull(tol) = tolerance {
        builder = builder.tolerance(tol);
    }
    if nan_equal {
        builder = builder.nan_equal();
    }
    builder.build().map_err(to_r_error)
}

/// Surface a library error as an R condition.
fn to_r_error(e: NumUtilsError) -> Error {
    Error::Other(e.to_string())
}

/// Convert 0-based positions to R's 1-based positions.
///
/// Returned as doubles, which is how R represents indices into long
/// vectors (more than 2^31 - 1 elements).
fn to_r_indices(indices: &[usize]) -> Vec<f64> {
    indices.iter().map(|&i| (i + 1) as f64).collect()
}

// ============================================================================
// Exported Functions
// ============================================================================

/// Square a number.
/// @export
#[extendr]
fn sqr(x: f64) -> f64 {
    square(x)
}

/// Check whether two numbers differ by at most `tolerance`.
/// @export
#[extendr]
fn approx_equal(a: f64, b: f64, tolerance: Nullable<f64>) -> Result<bool> {
    Ok(comparator(tolerance, false)?.approx_eq(a, b))
}

/// Check whether two numeric vectors are approximately equal element by element.
///
/// Vectors of different length raise an error.
/// @export
#[extendr]
fn elements_are_equal(a: Vec<f64>, b: Vec<f64>, tolerance: Nullable<f64>) -> Result<bool> {
    comparator(tolerance, false)?
        .elements_approx_eq(&a, &b)
        .map_err(to_r_error)
}

/// Compare two numeric vectors and report where they differ.
///
/// Mismatch positions are returned as 1-based indices. Positions and the
/// length are doubles so long vectors are reported without truncation.
/// @export
#[extendr]
fn compare_elements(
    a: Vec<f64>,
    b: Vec<f64>,
    tolerance: Nullable<f64>,
    nan_equal: bool,
) -> Result<List> {
    let report = comparator(tolerance, nan_equal)?
        .compare(&a, &b)
        .map_err(to_r_error)?;

    comparison_to_list(report)
}

// ============================================================================
// Helper: Convert Comparison to R List
// ============================================================================

fn comparison_to_list(report: Comparison<f64>) -> Result<List> {
    let equal = report.is_equal();
    let mismatches = to_r_indices(&report.mismatches);

    let list_items: Vec<(&str, Robj)> = vec![
        ("equal", equal.into_robj()),
        ("length", (report.len as f64).into_robj()),
        ("tolerance", report.tolerance.into_robj()),
        ("max_abs_diff", report.max_abs_diff.into_robj()),
        ("mismatches", mismatches.into_robj()),
    ];

    let names: Vec<&str> = list_items.iter().map(|(k, _)| *k).collect();
    let values: Vec<Robj> = list_items.into_iter().map(|(_, v)| v).collect();
    List::from_names_and_values(names, values)
}

// ============================================================================
// Module Registration
// ============================================================================

extendr_module! {
    mod rnumutils;
    fn sqr;
    fn approx_equal;
    fn elements_are_equal;
    fn compare_elements;
}
