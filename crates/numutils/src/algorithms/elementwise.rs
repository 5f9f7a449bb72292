//! Element-wise approximate equality of numeric sequences.
//!
//! ## Purpose
//!
//! This module compares two ordered sequences pair by pair, using the
//! scalar rule from `math::tolerance` at every index.
//!
//! ## Design notes
//!
//! * **Total**: Functions never fail. Sequences of different length are
//!   simply not equal; the validated API in `api` reports the mismatch
//!   as an error instead.
//! * **Short-circuit**: The boolean check stops at the first failing pair.
//! * **Diagnostics**: [`mismatches`] and [`max_abs_diff`] walk the whole
//!   common prefix so a report can show every failing index.
//!
//! ## Invariants
//!
//! * Two empty sequences are equal.
//! * For equal-length `a` and `b`, `elements_approx_equal(a, b, t)` holds
//!   iff `approx_equal(a[i], b[i], t)` holds for every `i`.
//!
//! ## Non-goals
//!
//! * This module does not broadcast scalars or recycle shorter sequences.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::tolerance::{approx_equal, approx_equal_nan, default_tolerance};

// ============================================================================
// Boolean Checks
// ============================================================================

/// Check that `a` and `b` have the same length and are approximately equal
/// at every index.
pub fn elements_approx_equal<T: Float>(a: &[T], b: &[T], tolerance: T) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b.iter())
            .all(|(&ai, &bi)| approx_equal(ai, bi, tolerance))
}

/// [`elements_approx_equal`] with the default tolerance for `T`.
pub fn elements_approx_equal_default<T: Float>(a: &[T], b: &[T]) -> bool {
    elements_approx_equal(a, b, default_tolerance())
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Largest absolute difference between corresponding elements.
///
/// Only the common prefix of `a` and `b` is considered. Returns zero for
/// empty input and NaN as soon as any pair differs by NaN. Identical
/// values, infinities included, contribute zero. With `nan_equal`, a pair
/// of NaNs also contributes zero.
pub fn max_abs_diff<T: Float>(a: &[T], b: &[T], nan_equal: bool) -> T {
    let mut max = T::zero();
    for (&ai, &bi) in a.iter().zip(b.iter()) {
        if ai == bi || (nan_equal && ai.is_nan() && bi.is_nan()) {
            continue;
        }
        let d = (ai - bi).abs();
        if d.is_nan() {
            return d;
        }
        if d > max {
            max = d;
        }
    }
    max
}

/// Indices of the pairs in the common prefix that are not approximately
/// equal. With `nan_equal`, a pair of NaNs is treated as equal.
pub fn mismatches<T: Float>(a: &[T], b: &[T], tolerance: T, nan_equal: bool) -> Vec<usize> {
    let cmp: fn(T, T, T) -> bool = if nan_equal {
        approx_equal_nan::<T>
    } else {
        approx_equal::<T>
    };

    a.iter()
        .zip(b.iter())
        .enumerate()
        .filter(|&(_, (&ai, &bi))| !cmp(ai, bi, tolerance))
        .map(|(i, _)| i)
        .collect()
}
