//! High-precision reference values.
//!
//! Values are computed in binary fixed point carrying [`GUARD_BITS`] beyond
//! the requested number of decimal digits, and returned as exact rationals.
//! The precision is always an explicit argument.

use std::cmp::Ordering;

use malachite::num::arithmetic::traits::{Floor, Reciprocal, Sign};
use malachite::num::basic::traits::{One, OneHalf, Zero};
use malachite::num::logic::traits::SignificantBits;
use malachite::{Integer, Rational};

use crate::error::DomainError;
use crate::utils::integer::MAX_SHIFT;

const GUARD_BITS: u64 = 32;

/// Number of bits needed to carry `digits` decimal digits.
fn bits_for_digits(digits: u64) -> u64 {
    // 10/3 > log2(10)
    digits * 10 / 3 + 1
}

/// Computes e^`x` with a relative error below 10^-`digits`.
///
/// The argument is reduced to `x = k ln 2 + r` with `|r| < 1`, and the power
/// of two is applied exactly, so only the final shift grows with `x`. Fails
/// with [`DomainError::Overflow`] when `|k|` exceeds [`MAX_SHIFT`].
pub fn exp(x: &Rational, digits: u64) -> Result<Rational, DomainError> {
    if *x == Rational::ZERO {
        return Ok(Rational::ONE);
    }

    // 10^(m/3 + 3) > 2^m, so the nearest quotient is off by far less than one.
    let magnitude = u64::try_from(x.floor_log_base_2_abs() + 1).unwrap_or(0);
    let k = (x / ln2(magnitude / 3 + 3) + Rational::ONE_HALF).floor();

    let shift = i64::try_from(&k)
        .ok()
        .filter(|shift| shift.unsigned_abs() <= MAX_SHIFT)
        .ok_or_else(|| DomainError::Overflow(k.clone()))?;

    // k ln 2 must be exact to digits + 2 places; 10^(bits/3 + 1) > |k|.
    let k_digits = k.significant_bits() / 3 + 1;
    let r = x - Rational::from(&k) * ln2(digits + k_digits + 2);

    Ok(exp_reduced(&r, digits + 1) << shift)
}

fn exp_reduced(r: &Rational, digits: u64) -> Rational {
    match r.sign() {
        Ordering::Equal => Rational::ONE,
        Ordering::Greater => exp_series(r, digits),
        Ordering::Less => exp_series(&-r, digits).reciprocal(),
    }
}

fn exp_series(x: &Rational, digits: u64) -> Rational {
    // Halve the argument until it is at most 2^-8, then square the result
    // back up. Each squaring doubles the relative error.
    let halvings = u64::try_from(x.floor_log_base_2_abs() + 9).unwrap_or(0);
    let precision = bits_for_digits(digits) + halvings + GUARD_BITS;

    let y = (x << (precision - halvings)).floor();

    let mut sum = Integer::ONE << precision;
    let mut term = sum.clone();

    for k in 1u64.. {
        term = (&term * &y) >> precision;
        term /= Integer::from(k);

        if term == Integer::ZERO {
            break;
        }

        sum += &term;
    }

    for _ in 0..halvings {
        sum = (&sum * &sum) >> precision;
    }

    Rational::from(sum) >> precision
}

/// Computes ln 2 with an absolute error below 10^-`digits`.
pub fn ln2(digits: u64) -> Rational {
    let precision = bits_for_digits(digits) + GUARD_BITS;

    // ln 2 = 2 atanh(1/3) = sum over k of 2 / ((2k + 1) 3^(2k + 1))
    let mut power = (Integer::ONE << (precision + 1)) / Integer::from(3u32);
    let mut sum = power.clone();

    for k in 1u64.. {
        power /= Integer::from(9u32);

        let term = &power / Integer::from(2 * k + 1);

        if term == Integer::ZERO {
            break;
        }

        sum += term;
    }

    Rational::from(sum) >> precision
}
