//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer lifts the scalar comparison of Layer 2 to sequences.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Element-wise comparison of sequences.
pub mod elementwise;
