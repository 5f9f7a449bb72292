//! Output types for sequence comparisons.
//!
//! ## Purpose
//!
//! This module defines [`Comparison`], the full outcome of comparing two
//! sequences: not just whether they match, but by how much and where not.
//!
//! ## Design notes
//!
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `mismatches` is strictly increasing and every index is `< len`.
//! * `max_abs_diff` is non-negative, or NaN when a pair involves NaN and is
//!   not excused by the NaN policy.
//! * `is_equal()` implies `max_abs_diff <= tolerance`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * The report does not keep copies of the compared values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

/// Result of an element-wise comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison<T> {
    /// Number of compared pairs.
    pub len: usize,

    /// Tolerance the comparison was run with.
    pub tolerance: T,

    /// Largest absolute difference over all pairs.
    pub max_abs_diff: T,

    /// Indices of pairs outside the tolerance.
    pub mismatches: Vec<usize>,
}

impl<T: Float> Comparison<T> {
    /// Whether every pair was within tolerance.
    pub fn is_equal(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Number of pairs outside the tolerance.
    pub fn mismatch_count(&self) -> usize {
        self.mismatches.len()
    }

    /// First index outside the tolerance, if any.
    pub fn first_mismatch(&self) -> Option<usize> {
        self.mismatches.first().copied()
    }
}

impl<T: Float + Display + Debug> Display for Comparison<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Elements:     {}", self.len)?;
        writeln!(f, "  Tolerance:    {}", self.tolerance)?;
        writeln!(f, "  Max abs diff: {}", self.max_abs_diff)?;
        writeln!(f, "  Mismatches:   {}", self.mismatches.len())?;

        if self.is_equal() {
            return writeln!(f, "  Result:       equal");
        }
        writeln!(f, "  Result:       not equal")?;

        writeln!(f)?;
        writeln!(f, "Mismatched Indices:")?;
        for &i in &self.mismatches {
            writeln!(f, "  {i:>8}")?;
        }
        Ok(())
    }
}
