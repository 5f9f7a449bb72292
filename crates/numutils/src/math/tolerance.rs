//! Absolute-tolerance comparison of floating-point values.
//!
//! ## Purpose
//!
//! This module decides whether two scalars are "approximately equal": their
//! absolute difference does not exceed a tolerance.
//!
//! ## Key concepts
//!
//! * **Tolerance**: Maximum allowed absolute difference, inclusive.
//! * **Default tolerance**: `sqrt(epsilon)` of the float type, the same
//!   default R's `all.equal` uses (about `1.49e-8` for `f64`).
//!
//! ## Invariants
//!
//! * `approx_equal(a, a, t)` holds for every non-NaN `a` and every `t >= 0`.
//! * For finite `a` and `b`, `approx_equal(a, b, t)` holds iff `|a - b| <= t`.
//! * A negative or NaN tolerance never admits any pair.
//! * NaN is never approximately equal to anything, including itself.
//!
//! ## Non-goals
//!
//! * This module does not implement relative or ULP-based comparison.
//! * This module does not validate the tolerance (see `engine::validator`).

// External dependencies
use num_traits::Float;

/// Default tolerance for type `T`: the square root of its machine epsilon.
#[inline]
pub fn default_tolerance<T: Float>() -> T {
    T::epsilon().sqrt()
}

/// Check whether `|a - b| <= tolerance`.
///
/// Two identical infinities are equal under any non-negative tolerance,
/// even though their difference is NaN.
#[inline]
pub fn approx_equal<T: Float>(a: T, b: T, tolerance: T) -> bool {
    if (a - b).abs() <= tolerance {
        return true;
    }
    a == b && tolerance >= T::zero()
}

/// [`approx_equal`] with [`default_tolerance`].
#[inline]
pub fn approx_equal_default<T: Float>(a: T, b: T) -> bool {
    approx_equal(a, b, default_tolerance())
}

/// Like [`approx_equal`], but a pair of NaNs also counts as equal.
#[inline]
pub fn approx_equal_nan<T: Float>(a: T, b: T, tolerance: T) -> bool {
    (a.is_nan() && b.is_nan()) || approx_equal(a, b, tolerance)
}
