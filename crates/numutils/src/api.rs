//! High-level API for approximate comparison.
//!
//! ## Purpose
//!
//! This module provides the validated, configurable entry point. A
//! [`ComparatorBuilder`] collects settings, and `build()` checks them once,
//! producing a [`Comparator`] that can be reused for any number of
//! comparisons.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ComparatorBuilder`] via `Approx::new()`.
//! 2. Chain configuration methods (`.tolerance()`, `.nan_equal()`).
//! 3. Call `.build()` to obtain a [`Comparator`].

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::elementwise::{max_abs_diff, mismatches};
use crate::engine::validator::Validator;
use crate::math::tolerance::{approx_equal, approx_equal_nan, default_tolerance};

// Publicly re-exported types
pub use crate::engine::output::Comparison;
pub use crate::primitives::errors::NumUtilsError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`Comparator`].
#[derive(Debug, Clone, Copy)]
pub struct ComparatorBuilder<T> {
    /// Maximum absolute difference (default: `sqrt(epsilon)`).
    pub tolerance: Option<T>,

    /// Treat a pair of NaNs as equal (default: false).
    pub nan_equal: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for ComparatorBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ComparatorBuilder<T> {
    /// Create a new builder with default parameters.
    pub fn new() -> Self {
        Self {
            tolerance: None,
            nan_equal: None,
            duplicate_param: None,
        }
    }

    /// Set the comparison tolerance.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Treat a pair of NaNs as equal.
    pub fn nan_equal(mut self) -> Self {
        if self.nan_equal.is_some() {
            self.duplicate_param = Some("nan_equal");
        }
        self.nan_equal = Some(true);
        self
    }

    /// Validate the configuration and build the comparator.
    pub fn build(self) -> Result<Comparator<T>, NumUtilsError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let tolerance = self.tolerance.unwrap_or_else(default_tolerance);
        Validator::validate_tolerance(tolerance)?;

        Ok(Comparator {
            tolerance,
            nan_equal: self.nan_equal.unwrap_or(false),
        })
    }
}

// ============================================================================
// Comparator
// ============================================================================

/// Validated comparison policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparator<T> {
    tolerance: T,
    nan_equal: bool,
}

impl<T: Float> Comparator<T> {
    /// Tolerance in effect.
    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// Whether a pair of NaNs counts as equal.
    pub fn is_nan_equal(&self) -> bool {
        self.nan_equal
    }

    /// Compare two scalars.
    pub fn approx_eq(&self, a: T, b: T) -> bool {
        if self.nan_equal {
            approx_equal_nan(a, b, self.tolerance)
        } else {
            approx_equal(a, b, self.tolerance)
        }
    }

    /// Compare two sequences element-wise.
    ///
    /// Unlike the free function, sequences of different length are an error.
    pub fn elements_approx_eq(&self, a: &[T], b: &[T]) -> Result<bool, NumUtilsError> {
        Validator::validate_lengths(a, b)?;
        Ok(a.iter().zip(b.iter()).all(|(&ai, &bi)| self.approx_eq(ai, bi)))
    }

    /// Compare two sequences and report every mismatch.
    pub fn compare(&self, a: &[T], b: &[T]) -> Result<Comparison<T>, NumUtilsError> {
        Validator::validate_lengths(a, b)?;
        Ok(Comparison {
            len: a.len(),
            tolerance: self.tolerance,
            max_abs_diff: max_abs_diff(a, b, self.nan_equal),
            mismatches: mismatches(a, b, self.tolerance, self.nan_equal),
        })
    }
}
