//! # numutils — Squaring and Approximate Equality for Rust and R
//!
//! Small numeric helpers shared by the Rust core and its R bindings:
//!
//! - [`square`](prelude::square): `x * x` for any numeric type.
//! - [`approx_equal`](prelude::approx_equal): `|a - b| <= tolerance`.
//! - [`elements_approx_equal`](prelude::elements_approx_equal): the same,
//!   pair by pair, over two equal-length sequences.
//!
//! ## Quick Start
//!
//! ```rust
//! use numutils::prelude::*;
//!
//! assert_eq!(square(-5), 25);
//! assert_eq!(square(12), 144);
//!
//! assert!(approx_equal(1.0001, 1.0, 1e-4));
//! assert!(!approx_equal(1.0001, 1.0, 1e-5));
//!
//! let v1 = [1.0, 2.0, 3.0];
//! let v2 = [1.1, 2.1, 3.1];
//! assert!(elements_approx_equal(&v1, &v2, 0.15));
//! assert!(!elements_approx_equal_default(&v1, &v2));
//! ```
//!
//! ### Default Tolerance
//!
//! Functions ending in `_default` use `sqrt(epsilon)` of the float type,
//! about `1.49e-8` for `f64` and `3.45e-4` for `f32`.
//!
//! ### Validated Comparisons
//!
//! The free functions are total: sequences of different length are simply
//! not equal. When a length mismatch or a bad tolerance should be an error,
//! build a [`Comparator`](prelude::Comparator):
//!
//! ```rust
//! use numutils::prelude::*;
//!
//! let cmp = Approx::new().tolerance(0.05).build()?;
//!
//! let report = cmp.compare(&[1.0, 2.0, 3.0], &[1.0, 2.1, 3.0])?;
//! assert!(!report.is_equal());
//! assert_eq!(report.mismatches, vec![1]);
//!
//! let err = cmp.elements_approx_eq(&[1.0, 2.0], &[1.0]).unwrap_err();
//! assert_eq!(err, NumUtilsError::MismatchedInputs { a_len: 2, b_len: 1 });
//! # Result::<(), NumUtilsError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Elements:     3
//!   Tolerance:    0.05
//!   Max abs diff: 0.10000000000000009
//!   Mismatches:   1
//!   Result:       not equal
//!
//! Mismatched Indices:
//!          1
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! numutils = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - shared types.
mod primitives;

// Layer 2: Math - scalar functions.
mod math;

// Layer 3: Algorithms - sequence comparison.
mod algorithms;

// Layer 4: Engine - validation and results.
mod engine;

// High-level fluent API.
mod api;

// Standard numutils prelude.
pub mod prelude {
    pub use crate::algorithms::elementwise::{
        elements_approx_equal, elements_approx_equal_default,
    };
    pub use crate::api::{
        Comparator, ComparatorBuilder as Approx, Comparison, NumUtilsError,
    };
    pub use crate::math::power::square;
    pub use crate::math::tolerance::{approx_equal, approx_equal_default, default_tolerance};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
