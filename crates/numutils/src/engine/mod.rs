//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates configuration and inputs, and defines the result
//! type produced by a full comparison.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input and parameter validation.
pub mod validator;

/// Comparison result types.
pub mod output;
