//! Error types for numutils operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions reported by the validated
//! comparison API. The free functions in `math` and `algorithms` are total
//! and never produce these errors.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., both sequence lengths).
//! * **Deferred**: Duplicate builder parameters are recorded and reported at `build()`.
//! * **No-std**: Variants hold only `Copy` data, so no allocation is needed.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors are reported as `f64` regardless of the input type.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for numutils operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumUtilsError {
    /// Element-wise comparison requires sequences of the same length.
    MismatchedInputs {
        /// Number of elements in the first sequence.
        a_len: usize,
        /// Number of elements in the second sequence.
        b_len: usize,
    },

    /// Tolerance must be finite and non-negative.
    InvalidTolerance(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for NumUtilsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MismatchedInputs { a_len, b_len } => {
                write!(f, "Length mismatch: a has {a_len} elements, b has {b_len}")
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be >= 0 and finite)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for NumUtilsError {}
