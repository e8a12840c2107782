//! Conversions between `f64` and exact rationals.

use malachite::num::conversion::traits::{FromSciString, RoundingFrom};
use malachite::rounding_modes::RoundingMode;
use malachite::Rational;

use crate::error::DomainError;

/// Computes the rational denoted by the shortest decimal representation of
/// `x`.
///
/// This is the value a reader sees when `x` is printed, rather than its exact
/// binary expansion: `0.1` converts to 1/10.
pub fn real(x: f64) -> Result<Rational, DomainError> {
    if !x.is_finite() {
        return Err(DomainError::NonFinite(x));
    }

    // `Display` for floats never uses exponent notation.
    Rational::from_sci_string(&x.to_string()).ok_or(DomainError::NonFinite(x))
}

/// Converts `x` to the nearest `f64`, with ties to even.
///
/// Values beyond the range of `f64` saturate to infinity or zero.
pub fn to_f64(x: &Rational) -> f64 {
    f64::rounding_from(x, RoundingMode::Nearest).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortest_decimal() {
        assert_eq!(real(0.1).unwrap(), Rational::from_signeds(1, 10));
        assert_eq!(real(-59.201).unwrap(), Rational::from_signeds(-59201, 1000));
        assert_eq!(real(2.0).unwrap(), Rational::from(2));
        assert_eq!(real(1e-7).unwrap(), Rational::from_signeds(1, 10_000_000));
        assert_eq!(real(-0.0).unwrap(), Rational::from(0));
    }

    #[test]
    fn non_finite() {
        assert!(real(f64::NAN).is_err());
        assert!(real(f64::INFINITY).is_err());
        assert!(real(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn float_conversion() {
        assert_eq!(to_f64(&Rational::from(0)), 0.0);
        assert_eq!(to_f64(&Rational::from(3)), 3.0);
        assert_eq!(to_f64(&Rational::from_signeds(-5, 4)), -1.25);
        assert_eq!(to_f64(&Rational::from_signeds(1, 1024)), 0.0009765625);

        for x in [0.1, -2.5e-9, 123456.789, 6.02e23, -1.0 / 3.0] {
            let y = to_f64(&real(x).unwrap());

            assert!((y - x).abs() <= 2.0 * x.abs() * f64::EPSILON);
        }
    }

    #[test]
    fn nearest_with_ties_to_even() {
        let one = Rational::from(1);
        let ulp = Rational::from(1) >> 52i64;
        let above_one = 1.0 + f64::EPSILON;

        // Just above the midpoint of 1 and the next float.
        let x = &one + (&ulp >> 1i64) + (Rational::from(1) >> 100i64);
        assert_eq!(to_f64(&x), above_one);

        // Exactly on the midpoint.
        assert_eq!(to_f64(&(&one + (&ulp >> 1i64))), 1.0);
        assert_eq!(
            to_f64(&(&one + &ulp + (&ulp >> 1i64))),
            1.0 + 2.0 * f64::EPSILON
        );

        assert_eq!(to_f64(&-x), -above_one);
    }

    #[test]
    fn float_conversion_saturates() {
        let huge = Rational::from(2) << 2000i64;
        let tiny = Rational::from(2) >> 2000i64;

        assert_eq!(to_f64(&huge), f64::INFINITY);
        assert_eq!(to_f64(&-huge), f64::NEG_INFINITY);
        assert_eq!(to_f64(&tiny), 0.0);
    }
}
