use std::cmp::Ordering;
use std::fmt;

use malachite::num::arithmetic::traits::Sign;
use malachite::num::basic::traits::Zero;
use malachite::num::logic::traits::SignificantBits;
use malachite::{Integer, Rational};

use super::{
    call_fixed, evaluate_fixed, fixed_reference_digits, Exponential,
    FixedPointApproximator,
};
use crate::error::{ConfigError, ConfigErrorKind, DomainError};
use crate::format::DecimalFormat;
use crate::utils::integer::MAX_SHIFT;
use crate::utils::reference;
use crate::utils::FixedInt;

/// Digits of ln 2 computed beyond those of the format before truncation.
const LOG2_GUARD_DIGITS: u64 = 10;

/// Range reduction by multiples of ln 2.
///
/// An input `x` is split as `x = q ln 2 + r` with `|r| <= ln 2 / 2`, so that
/// `e^x = 2^q e^r`. The inner approximation only ever sees `r`, and the power
/// of two is applied as a shift. Results that would need a left shift beyond
/// [`MAX_SHIFT`] fail with [`DomainError::Overflow`].
#[derive(Debug)]
pub struct BitShift<A> {
    inner: A,
    log2: Integer,
    log2_half: Integer,
}

impl<A: FixedPointApproximator> BitShift<A> {
    /// Wraps an approximation that is accurate near zero.
    ///
    /// Fails if ln 2 is not representable in the format of `inner`.
    pub fn new(inner: A) -> Result<BitShift<A>, ConfigError> {
        let format = inner.format();

        let log2 = format.to_fixed_exact(&reference::ln2(
            format.decimals() + LOG2_GUARD_DIGITS,
        ));

        if log2 == Integer::ZERO {
            return Err(ConfigError::new(
                ConfigErrorKind::InsufficientPrecision,
                i64::try_from(format.decimals()).unwrap_or(i64::MAX),
            ));
        }

        let log2_half = &log2 >> 1u64;

        log::debug!("Range reduction by ln 2 = {log2} at {format}");

        Ok(BitShift {
            inner,
            log2,
            log2_half,
        })
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }

    /// The fixed-point representation of ln 2.
    pub fn log2(&self) -> &Integer {
        &self.log2
    }
}

impl<A: FixedPointApproximator> FixedPointApproximator for BitShift<A> {
    fn format(&self) -> &DecimalFormat {
        self.inner.format()
    }

    fn approximate<T: FixedInt>(&self, x: &T) -> Result<T, DomainError> {
        let log2 = x.lift(self.log2.clone());

        let quotient = x.add(&x.lift(self.log2_half.clone())).div_floor(&log2);
        let remainder = x.sub(&quotient.mul(&log2));

        let preshifted = self.inner.approximate(&remainder)?;

        if x.value().sign() != Ordering::Greater {
            let width = Integer::from(preshifted.value().significant_bits());
            let bits = quotient.abs();

            // Shifting out every bit leaves 0 or -1.
            if *bits.value() > width {
                return Ok(preshifted.shr(&x.lift(width)));
            }

            Ok(preshifted.shr(&bits))
        } else if *quotient.value() > MAX_SHIFT {
            Err(DomainError::Overflow(quotient.value().clone()))
        } else {
            Ok(preshifted.shl(&quotient))
        }
    }
}

impl<A: FixedPointApproximator> Exponential for BitShift<A> {
    fn evaluate(&self, x: &Rational) -> Result<Rational, DomainError> {
        evaluate_fixed(self, x)
    }

    fn reference_digits(&self) -> u64 {
        fixed_reference_digits(self.format())
    }

    fn call(&self, x: f64) -> Result<f64, DomainError> {
        call_fixed(self, x)
    }
}

impl<A: fmt::Display> fmt::Display for BitShift<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BitShift({})", self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::analysis::IntegerTracker;
    use crate::approx::{Pade, Taylor};
    use crate::utils::range::float_range;

    fn max_error(approx: &impl Exponential, xs: &[f64]) -> f64 {
        approx.benchmark(xs).into_iter().fold(0.0, f64::max)
    }

    #[test]
    fn exact_at_powers_of_two() {
        let approx = BitShift::new(Pade::new(10, 10).unwrap()).unwrap();
        let format = approx.format();

        assert_eq!(*approx.log2(), Integer::from(6931471805u64));

        for i in [-9i32, -2, 0, 3, 8, 24] {
            let x = approx.log2() * Integer::from(i);

            assert_eq!(
                approx.approximate(&x).unwrap(),
                format.to_fixed(2f64.powi(i)).unwrap(),
                "2^{i}"
            );
        }
    }

    #[test]
    fn log2_is_stable() {
        for decimals in [2, 5, 10, 16] {
            let format = DecimalFormat::new(decimals).unwrap();
            let digits = format.decimals() + LOG2_GUARD_DIGITS;

            let log2 = format.to_fixed_exact(&reference::ln2(digits));

            for extra in [10, 40] {
                let finer = reference::ln2(digits + extra);

                assert_eq!(format.to_fixed_exact(&finer), log2);
            }
        }
    }

    #[test]
    fn remainder_in_range() {
        let approx = BitShift::new(Pade::new(6, 4).unwrap()).unwrap();

        let log2 = approx.log2().clone();
        let half = &log2 >> 1u64;

        for x in (-5_000_000i64..5_000_000).step_by(77_777) {
            let x = Integer::from(x);

            let quotient = (&x + &half).div_floor(&log2);
            let remainder = &x - &quotient * &log2;

            assert!(remainder >= -half.clone() && remainder <= half, "{x}");
        }
    }

    #[test]
    fn matches_inner_near_zero() {
        let inner = Pade::new(10, 3).unwrap();
        let approx = BitShift::new(Pade::new(10, 3).unwrap()).unwrap();

        let half = approx.log2() >> 1u64;

        for divisor in 2..10 {
            let x = approx.log2() / Integer::from(divisor);

            if x <= half {
                assert_eq!(
                    approx.approximate(&x).unwrap(),
                    inner.approximate(&x).unwrap()
                );
            }

            let x = -x;

            assert_eq!(
                approx.approximate(&x).unwrap(),
                inner.approximate(&x).unwrap()
            );
        }
    }

    #[test]
    fn insufficient_precision() {
        let err = BitShift::new(Taylor::new(0, 3).unwrap()).unwrap_err();

        assert_eq!(err.kind, ConfigErrorKind::InsufficientPrecision);
        assert!(BitShift::new(Taylor::new(1, 3).unwrap()).is_ok());
    }

    #[test]
    fn bounded_error() {
        let xs = float_range(-1.0, 1.0, 0.05);

        for order in 1..=5 {
            let taylor = Taylor::new(10, order).unwrap();
            let pade = Pade::new(10, order).unwrap();

            let taylor = BitShift::new(taylor).unwrap();
            let pade = BitShift::new(pade).unwrap();

            let bound = 4.0 / (1..=order + 1).product::<u32>() as f64;

            assert!(max_error(&taylor, &xs) < bound);
            assert!(max_error(&pade, &xs) < bound);
        }
    }

    #[test]
    fn improves_on_inner() {
        let xs = float_range(-1.0, 1.0, 0.05);

        for order in 1..=3 {
            let inner = Pade::new(10, order).unwrap();
            let approx = BitShift::new(Pade::new(10, order).unwrap()).unwrap();

            assert!(max_error(&approx, &xs) < max_error(&inner, &xs));
        }
    }

    #[test]
    fn wide_inputs() {
        let approx = BitShift::new(Pade::new(10, 6).unwrap()).unwrap();
        let xs = float_range(-20.0, 20.0, 0.5);

        for (x, error) in xs.iter().zip(approx.benchmark(&xs)) {
            assert!(error.is_finite(), "{x}");

            if *x >= 0.0 {
                assert!(error < 1e-9, "{x}: {error}");
            }
        }
    }

    #[test]
    fn extreme_inputs() {
        let approx = BitShift::new(Pade::new(10, 4).unwrap()).unwrap();

        for x in [-1e20, -1e12, -1e6] {
            assert_eq!(approx.try_call(x), 0.0, "{x}");
        }

        for x in [1e12, 1e20] {
            assert!(approx.try_call(x).is_nan(), "{x}");
            assert!(matches!(approx.call(x), Err(DomainError::Overflow(_))));
        }

        let huge = approx.format().to_fixed(1e20).unwrap();

        assert_eq!(approx.approximate(&-huge).unwrap(), Integer::ZERO);
        assert_eq!(approx.benchmark(&[-1e6]), [1.0]);
    }

    #[test]
    fn saturated_shift_is_tracked() {
        let approx = BitShift::new(Taylor::new(6, 3).unwrap()).unwrap();
        let x = approx.format().to_fixed(-1e15).unwrap();

        let (result, range) = IntegerTracker::track(|tracker| {
            approx.approximate(&tracker.int(x.clone())).map(|y| y.into_inner())
        });

        assert_eq!(result.unwrap(), Integer::ZERO);
        assert!(range.signed());
        assert!(range.bits() >= x.significant_bits());
    }

    #[test]
    fn display() {
        let approx = BitShift::new(Taylor::new(10, 3).unwrap()).unwrap();

        assert_eq!(
            approx.to_string(),
            "BitShift(Taylor(decimals=10, order=3))"
        );
    }
}
