//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure scalar functions of the crate:
//! - Squaring for any numeric type
//! - Absolute-tolerance comparison for floating-point values
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Squaring.
pub mod power;

/// Scalar approximate equality.
pub mod tolerance;
