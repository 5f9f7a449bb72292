//! Input validation for comparison configuration and data.
//!
//! ## Purpose
//!
//! This module checks tolerances and sequence lengths before the validated
//! API runs a comparison.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * A validated tolerance is finite and non-negative.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not inspect element values; NaN and infinities are
//!   legal inputs with defined comparison semantics.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::NumUtilsError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for comparison parameters and inputs.
pub struct Validator;

impl Validator {
    /// Validate a comparison tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), NumUtilsError> {
        if !tol.is_finite() || tol < T::zero() {
            return Err(NumUtilsError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that two sequences have the same number of elements.
    pub fn validate_lengths<T>(a: &[T], b: &[T]) -> Result<(), NumUtilsError> {
        if a.len() != b.len() {
            return Err(NumUtilsError::MismatchedInputs {
                a_len: a.len(),
                b_len: b.len(),
            });
        }
        Ok(())
    }

    /// Validate that no builder parameter was set more than once.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), NumUtilsError> {
        if let Some(parameter) = duplicate_param {
            return Err(NumUtilsError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
