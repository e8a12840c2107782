//! Integer arithmetic.

use malachite::num::arithmetic::traits::{Abs, DivMod};
use malachite::num::basic::traits::One;
use malachite::num::conversion::traits::ExactFrom;
use malachite::Integer;

/// The largest power of two by which a result is scaled.
pub const MAX_SHIFT: u64 = 1 << 26;

/// The integer operations used by the fixed-point algorithms.
///
/// Implemented by [`Integer`] for plain evaluation and by
/// [`TrackedInteger`](crate::analysis::TrackedInteger) for range profiling, so
/// each algorithm is written once for both.
pub trait FixedInt: Clone {
    /// Brings a constant into the same domain as `self`.
    fn lift(&self, value: Integer) -> Self;

    fn value(&self) -> &Integer;

    fn add(&self, rhs: &Self) -> Self;

    fn sub(&self, rhs: &Self) -> Self;

    fn mul(&self, rhs: &Self) -> Self;

    /// Divides, rounding towards negative infinity.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div_floor(&self, rhs: &Self) -> Self;

    fn abs(&self) -> Self;

    /// Multiplies by 2^`bits`.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is negative or does not fit in a `u64`.
    fn shl(&self, bits: &Self) -> Self;

    /// Divides by 2^`bits`, rounding towards negative infinity.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is negative or does not fit in a `u64`.
    fn shr(&self, bits: &Self) -> Self;
}

impl FixedInt for Integer {
    fn lift(&self, value: Integer) -> Integer {
        value
    }

    fn value(&self) -> &Integer {
        self
    }

    fn add(&self, rhs: &Integer) -> Integer {
        self + rhs
    }

    fn sub(&self, rhs: &Integer) -> Integer {
        self - rhs
    }

    fn mul(&self, rhs: &Integer) -> Integer {
        self * rhs
    }

    fn div_floor(&self, rhs: &Integer) -> Integer {
        self.div_mod(rhs).0
    }

    fn abs(&self) -> Integer {
        Abs::abs(self)
    }

    fn shl(&self, bits: &Integer) -> Integer {
        self << u64::exact_from(bits)
    }

    fn shr(&self, bits: &Integer) -> Integer {
        self >> u64::exact_from(bits)
    }
}

/// Computes `n!`.
pub fn factorial(n: u64) -> Integer {
    falling_factorial(n, n)
}

/// Computes `n! / (n - k)!`, the product of the `k` largest factors of `n!`.
pub fn falling_factorial(n: u64, k: u64) -> Integer {
    (n - k.min(n) + 1..=n).fold(Integer::ONE, |acc, i| acc * Integer::from(i))
}
