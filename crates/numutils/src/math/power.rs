//! Squaring of numeric values.
//!
//! Generic over `num_traits::Num`, so it serves integers and floats alike.
//! Integer overflow follows the normal `Mul` semantics of the type (panics
//! in debug builds, wraps in release builds).

// External dependencies
use num_traits::Num;

/// Return `x * x`.
///
/// `square(-x) == square(x)` for every `x` whose square is representable.
#[inline]
pub fn square<T: Num + Copy>(x: T) -> T {
    x * x
}
