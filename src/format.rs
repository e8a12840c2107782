//! Decimal fixed-point formats.

use std::fmt;

use malachite::num::arithmetic::traits::{Floor, Pow};
use malachite::{Integer, Rational};

use crate::error::{ConfigError, ConfigErrorKind, DomainError};
use crate::utils::rational::real;

/// A fixed-point number format with a scaling factor of 10^`decimals`.
///
/// A real value `x` is represented by the integer `floor(x * scale)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecimalFormat {
    decimals: u64,
    scale: Integer,
}

impl DecimalFormat {
    pub fn new(decimals: i64) -> Result<DecimalFormat, ConfigError> {
        let Ok(decimals) = u64::try_from(decimals) else {
            return Err(ConfigError::new(
                ConfigErrorKind::InvalidDecimals,
                decimals,
            ));
        };

        Ok(DecimalFormat {
            decimals,
            scale: Integer::from(10u32).pow(decimals),
        })
    }

    pub fn decimals(&self) -> u64 {
        self.decimals
    }

    /// The representation of one.
    pub fn scale(&self) -> &Integer {
        &self.scale
    }

    /// Computes the fixed-point representation of `x`, rounding towards
    /// negative infinity.
    ///
    /// The input is taken to be the decimal number printed by its shortest
    /// round-trip representation, so that `1.02` means exactly 102/100.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_exp::format::DecimalFormat;
    /// # use malachite::Integer;
    /// #
    /// let format = DecimalFormat::new(3).unwrap();
    ///
    /// assert_eq!(format.to_fixed(1.02).unwrap(), Integer::from(1020));
    /// assert_eq!(format.to_fixed(-0.0015).unwrap(), Integer::from(-2));
    /// assert!(format.to_fixed(f64::NAN).is_err());
    /// ```
    pub fn to_fixed(&self, x: f64) -> Result<Integer, DomainError> {
        Ok(self.to_fixed_exact(&real(x)?))
    }

    /// Computes the fixed-point representation of an exact rational, rounding
    /// towards negative infinity.
    pub fn to_fixed_exact(&self, x: &Rational) -> Integer {
        (x * Rational::from(&self.scale)).floor()
    }

    /// Converts a fixed-point value to the nearest `f64`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_exp::format::DecimalFormat;
    /// # use malachite::Integer;
    /// #
    /// let format = DecimalFormat::new(5).unwrap();
    ///
    /// assert_eq!(format.to_float(&Integer::from(5920100)), 59.201);
    /// assert_eq!(format.to_float(&Integer::from(-100000)), -1.0);
    /// ```
    pub fn to_float(&self, value: &Integer) -> f64 {
        // The decimal literal is exact; parsing rounds it once.
        format!("{value}e-{}", self.decimals)
            .parse()
            .unwrap_or(f64::NAN)
    }

    /// Converts a fixed-point value to the rational it represents.
    pub fn to_rational(&self, value: &Integer) -> Rational {
        Rational::from(value) / Rational::from(&self.scale)
    }
}

impl fmt::Display for DecimalFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "decimals={}", self.decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use malachite::num::basic::traits::Zero;

    #[test]
    fn scale() {
        for (decimals, scale) in [(0, 1), (3, 1_000), (4, 10_000), (5, 100_000)]
        {
            let format = DecimalFormat::new(decimals).unwrap();

            assert_eq!(*format.scale(), Integer::from(scale));
        }
    }

    #[test]
    fn invalid_decimals() {
        let err = DecimalFormat::new(-1).unwrap_err();

        assert_eq!(err.kind, ConfigErrorKind::InvalidDecimals);
        assert_eq!(err.value, -1);
    }

    #[test]
    fn to_fixed() {
        let cases = [(3, 1.02, 1020), (4, 1.0, 10000), (5, 59.201, 5920100)];

        for (decimals, x, expected) in cases {
            let format = DecimalFormat::new(decimals).unwrap();

            assert_eq!(format.to_fixed(x).unwrap(), Integer::from(expected));
        }
    }

    #[test]
    fn to_fixed_floors() {
        let format = DecimalFormat::new(2).unwrap();

        assert_eq!(format.to_fixed(0.019).unwrap(), Integer::from(1));
        assert_eq!(format.to_fixed(-0.011).unwrap(), Integer::from(-2));
        assert_eq!(format.to_fixed(-0.0).unwrap(), Integer::ZERO);
    }

    #[test]
    fn to_fixed_non_finite() {
        let format = DecimalFormat::new(2).unwrap();

        for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                format.to_fixed(x),
                Err(DomainError::NonFinite(_))
            ));
        }
    }

    #[test]
    fn to_float() {
        let cases = [(3, 1020, 1.02), (4, 10000, 1.0), (5, 5920100, 59.201)];

        for (decimals, value, expected) in cases {
            let format = DecimalFormat::new(decimals).unwrap();

            assert_eq!(format.to_float(&Integer::from(value)), expected);
        }
    }

    #[test]
    fn round_trip() {
        let values = [0i64, 1, -1, 7, -13, 1020, 5920100, -987654321012345];

        for decimals in 0..12 {
            let format = DecimalFormat::new(decimals).unwrap();

            for value in values {
                let value = Integer::from(value);

                let float = format.to_float(&value);

                assert_eq!(format.to_fixed(float).unwrap(), value);
                assert_eq!(
                    format.to_fixed_exact(&format.to_rational(&value)),
                    value
                );
            }
        }
    }

    #[test]
    fn exact_round_trip_beyond_f64() {
        let format = DecimalFormat::new(30).unwrap();
        let value = Integer::from(10u32).pow(45) + Integer::from(123456789);

        assert_eq!(format.to_fixed_exact(&format.to_rational(&value)), value);
    }
}
