//! Approximations of the exponential function.

mod bitshift;
mod minimax;
mod pade;
mod tables;
mod taylor;

use std::fmt;

use malachite::num::arithmetic::traits::Abs;
use malachite::num::basic::traits::Zero;
use malachite::Rational;
use strum_macros::{Display, EnumString, EnumVariantNames};

use crate::analysis::IntegerTracker;
use crate::error::{ConfigError, DomainError};
use crate::format::DecimalFormat;
use crate::utils::rational::{real, to_f64};
use crate::utils::{reference, FixedInt};

pub use bitshift::BitShift;
pub use minimax::{minimax_domain, MinimaxPolynomial, MinimaxRational};
pub use pade::Pade;
pub use taylor::Taylor;

/// Digits of precision carried by reference values beyond those of the
/// fixed-point format.
const REFERENCE_GUARD_DIGITS: u64 = 20;

/// An approximation of the exponential function.
pub trait Exponential {
    /// Computes the exact value produced by the approximation at `x`.
    fn evaluate(&self, x: &Rational) -> Result<Rational, DomainError>;

    /// The number of decimal digits to which reference values are computed.
    fn reference_digits(&self) -> u64;

    fn call(&self, x: f64) -> Result<f64, DomainError> {
        Ok(to_f64(&self.evaluate(&real(x)?)?))
    }

    /// Like [`call`](Exponential::call), but returns NaN when the input is
    /// outside the domain of the approximation.
    fn try_call(&self, x: f64) -> f64 {
        match self.call(x) {
            Ok(y) => y,
            Err(err) => {
                log::debug!("{err}");

                f64::NAN
            }
        }
    }

    /// Computes e^`x` to [`reference_digits`](Exponential::reference_digits)
    /// digits.
    fn reference(&self, x: &Rational) -> Result<Rational, DomainError> {
        reference::exp(x, self.reference_digits())
    }

    fn relative_error_at(&self, x: &Rational) -> Result<Rational, DomainError> {
        let approx = self.evaluate(x)?;

        Ok(exact_relative_error(&approx, &self.reference(x)?))
    }

    /// Computes the relative error of the approximation at each input.
    ///
    /// Inputs outside the domain of the approximation yield NaN.
    fn benchmark(&self, xs: &[f64]) -> Vec<f64> {
        let errors: Vec<f64> = xs
            .iter()
            .map(|&x| {
                real(x)
                    .and_then(|x| self.relative_error_at(&x))
                    .map_or(f64::NAN, |error| to_f64(&error))
            })
            .collect();

        let failures = errors.iter().filter(|error| error.is_nan()).count();

        if failures > 0 {
            log::warn!(
                "{failures} of {} inputs are outside the domain",
                xs.len()
            );
        }

        errors
    }
}

/// An approximation computed entirely in fixed-point integer arithmetic.
pub trait FixedPointApproximator {
    fn format(&self) -> &DecimalFormat;

    /// Approximates the exponential of a fixed-point value.
    fn approximate<T: FixedInt>(&self, x: &T) -> Result<T, DomainError>;

    /// Computes the width in bits of the widest intermediate value that
    /// arises when approximating at any of the given inputs.
    fn max_bits(&self, xs: &[f64]) -> Result<u64, DomainError> {
        let mut bits = 0;

        for &x in xs {
            let x = self.format().to_fixed(x)?;

            let (result, range) = IntegerTracker::track(|tracker| {
                self.approximate(&tracker.int(x)).map(|_| ())
            });

            result?;

            bits = bits.max(range.bits());
        }

        log::debug!(
            "maximum intermediate width over {} inputs: {bits}",
            xs.len()
        );

        Ok(bits)
    }
}

fn evaluate_fixed<A: FixedPointApproximator>(
    approx: &A,
    x: &Rational,
) -> Result<Rational, DomainError> {
    let format = approx.format();
    let y = approx.approximate(&format.to_fixed_exact(x))?;

    Ok(format.to_rational(&y))
}

fn call_fixed<A: FixedPointApproximator>(
    approx: &A,
    x: f64,
) -> Result<f64, DomainError> {
    let format = approx.format();
    let y = approx.approximate(&format.to_fixed(x)?)?;

    Ok(format.to_float(&y))
}

fn fixed_reference_digits(format: &DecimalFormat) -> u64 {
    format.decimals() + REFERENCE_GUARD_DIGITS
}

/// Computes the relative error of `approx` with respect to `reference`.
///
/// The error is zero when both values are zero and infinite when only the
/// reference is. Non-finite arguments yield NaN.
///
/// # Examples
///
/// ```
/// # use fixed_exp::approx::relative_error;
/// assert_eq!(relative_error(1.5, 2.0), 0.25);
/// assert_eq!(relative_error(0.0, 0.0), 0.0);
/// assert_eq!(relative_error(1.0, 0.0), f64::INFINITY);
/// assert!(relative_error(f64::NAN, 1.0).is_nan());
/// ```
pub fn relative_error(approx: f64, reference: f64) -> f64 {
    if !approx.is_finite() || !reference.is_finite() {
        f64::NAN
    } else if reference == 0.0 {
        if approx == reference {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        (approx - reference).abs() / reference.abs()
    }
}

/// Computes the relative error of `approx` with respect to a nonzero
/// `reference` exactly.
///
/// # Panics
///
/// Panics if `reference` is zero.
pub fn exact_relative_error(
    approx: &Rational,
    reference: &Rational,
) -> Rational {
    assert!(*reference != Rational::ZERO, "relative error against zero");

    (approx - reference).abs() / reference.abs()
}

/// The available approximation strategies.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumVariantNames,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Kind {
    Taylor,
    Pade,
    #[strum(to_string = "bitshift-taylor")]
    BitShiftTaylor,
    #[strum(to_string = "bitshift-pade")]
    BitShiftPade,
    MinimaxPolynomial,
    MinimaxRational,
}

/// An approximation selected at run time.
#[derive(Debug)]
pub enum Approximator {
    Taylor(Taylor),
    Pade(Pade),
    BitShiftTaylor(BitShift<Taylor>),
    BitShiftPade(BitShift<Pade>),
    MinimaxPolynomial(MinimaxPolynomial),
    MinimaxRational(MinimaxRational),
}

impl Approximator {
    /// Constructs an approximation of the given kind.
    ///
    /// `decimals` is validated for every kind, though the minimax
    /// approximations do not use it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_exp::approx::{Approximator, Exponential, Kind};
    /// let approx = Approximator::new(Kind::BitShiftPade, 10, 4).unwrap();
    ///
    /// assert!((approx.call(1.5).unwrap() - 1.5f64.exp()).abs() < 1e-8);
    /// assert!(Approximator::new(Kind::MinimaxRational, 10, 7).is_err());
    /// ```
    pub fn new(
        kind: Kind,
        decimals: i64,
        order: u32,
    ) -> Result<Approximator, ConfigError> {
        DecimalFormat::new(decimals)?;

        let approx = match kind {
            Kind::Taylor => Approximator::Taylor(Taylor::new(decimals, order)?),
            Kind::Pade => Approximator::Pade(Pade::new(decimals, order)?),
            Kind::BitShiftTaylor => Approximator::BitShiftTaylor(BitShift::new(
                Taylor::new(decimals, order)?,
            )?),
            Kind::BitShiftPade => Approximator::BitShiftPade(BitShift::new(
                Pade::new(decimals, order)?,
            )?),
            Kind::MinimaxPolynomial => {
                Approximator::MinimaxPolynomial(MinimaxPolynomial::new(order)?)
            }
            Kind::MinimaxRational => {
                Approximator::MinimaxRational(MinimaxRational::new(order)?)
            }
        };

        Ok(approx)
    }

    fn as_exponential(&self) -> &dyn Exponential {
        match self {
            Approximator::Taylor(approx) => approx,
            Approximator::Pade(approx) => approx,
            Approximator::BitShiftTaylor(approx) => approx,
            Approximator::BitShiftPade(approx) => approx,
            Approximator::MinimaxPolynomial(approx) => approx,
            Approximator::MinimaxRational(approx) => approx,
        }
    }

    /// Computes the widest intermediate value over the given inputs, or
    /// `None` if the approximation does not use fixed-point arithmetic.
    pub fn max_bits(&self, xs: &[f64]) -> Result<Option<u64>, DomainError> {
        let bits = match self {
            Approximator::Taylor(approx) => approx.max_bits(xs)?,
            Approximator::Pade(approx) => approx.max_bits(xs)?,
            Approximator::BitShiftTaylor(approx) => approx.max_bits(xs)?,
            Approximator::BitShiftPade(approx) => approx.max_bits(xs)?,
            Approximator::MinimaxPolynomial(_)
            | Approximator::MinimaxRational(_) => return Ok(None),
        };

        Ok(Some(bits))
    }
}

impl Exponential for Approximator {
    fn evaluate(&self, x: &Rational) -> Result<Rational, DomainError> {
        self.as_exponential().evaluate(x)
    }

    fn reference_digits(&self) -> u64 {
        self.as_exponential().reference_digits()
    }

    fn call(&self, x: f64) -> Result<f64, DomainError> {
        self.as_exponential().call(x)
    }
}

impl fmt::Display for Approximator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Approximator::Taylor(approx) => approx.fmt(f),
            Approximator::Pade(approx) => approx.fmt(f),
            Approximator::BitShiftTaylor(approx) => approx.fmt(f),
            Approximator::BitShiftPade(approx) => approx.fmt(f),
            Approximator::MinimaxPolynomial(approx) => approx.fmt(f),
            Approximator::MinimaxRational(approx) => approx.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    use strum::VariantNames;

    use crate::utils::range::float_range;

    #[test]
    fn relative_error_semantics() {
        assert_eq!(relative_error(1.1, 1.0), (1.1f64 - 1.0).abs());
        assert_eq!(relative_error(-3.0, -2.0), 0.5);
        assert_eq!(relative_error(0.0, 0.0), 0.0);
        assert_eq!(relative_error(-1e-300, 0.0), f64::INFINITY);
        assert!(relative_error(1.0, f64::NAN).is_nan());
        assert!(relative_error(f64::INFINITY, 1.0).is_nan());
        assert!(relative_error(f64::NAN, 0.0).is_nan());
    }

    #[test]
    fn exact_relative_error_resolves_tiny_differences() {
        let reference = Rational::from(1);
        let approx = &reference + (Rational::from(1) >> 80u64);

        let error = exact_relative_error(&approx, &reference);

        assert_eq!(error, Rational::from(1) >> 80u64);
        assert!(to_f64(&error) > 0.0);
    }

    #[test]
    fn kind_names() {
        let cases = [
            ("taylor", Kind::Taylor),
            ("pade", Kind::Pade),
            ("bitshift-taylor", Kind::BitShiftTaylor),
            ("bitshift-pade", Kind::BitShiftPade),
            ("minimax-polynomial", Kind::MinimaxPolynomial),
            ("minimax-rational", Kind::MinimaxRational),
        ];

        for (name, kind) in cases {
            assert_eq!(Kind::from_str(name).unwrap(), kind);
            assert_eq!(kind.to_string(), name);
        }

        assert_eq!(Kind::VARIANTS.len(), cases.len());
        assert!(Kind::from_str("chebyshev").is_err());
    }

    #[test]
    fn construction_errors() {
        use crate::error::ConfigErrorKind::*;

        let cases = [
            (Kind::Taylor, -1, 3, InvalidDecimals),
            (Kind::MinimaxPolynomial, -2, 3, InvalidDecimals),
            (Kind::Taylor, 10, 0, InvalidOrder),
            (Kind::BitShiftPade, 10, 0, InvalidOrder),
            (Kind::MinimaxRational, 10, 0, UnsupportedOrder),
            (Kind::MinimaxPolynomial, 10, 7, UnsupportedOrder),
            (Kind::BitShiftTaylor, 0, 3, InsufficientPrecision),
        ];

        for (kind, decimals, order, expected) in cases {
            let err = Approximator::new(kind, decimals, order).unwrap_err();

            assert_eq!(err.kind, expected, "{kind}");
        }
    }

    #[test]
    fn exact_at_zero() {
        for kind in [
            Kind::Taylor,
            Kind::Pade,
            Kind::BitShiftTaylor,
            Kind::BitShiftPade,
        ] {
            for order in 1..6 {
                let approx = Approximator::new(kind, 10, order).unwrap();

                assert_eq!(approx.call(0.0).unwrap(), 1.0, "{approx}");
            }
        }
    }

    #[test]
    fn benchmark_length() {
        let xs = float_range(-3.0, 3.0, 0.25);

        for kind in [Kind::Pade, Kind::MinimaxRational] {
            let approx = Approximator::new(kind, 6, 1).unwrap();

            assert!(approx.benchmark(&[]).is_empty());
            assert_eq!(approx.benchmark(&xs).len(), xs.len());
        }
    }

    #[test]
    fn benchmark_marks_failures() {
        let approx = Approximator::new(Kind::Pade, 4, 1).unwrap();
        let errors = approx.benchmark(&[1.0, 2.5, f64::NAN, -2.5]);

        assert!(errors[0].is_finite());
        assert!(errors[1].is_nan());
        assert!(errors[2].is_nan());
        assert!(errors[3].is_finite());
    }

    #[test]
    fn try_call_recovers() {
        let approx = Approximator::new(Kind::Pade, 4, 1).unwrap();

        assert!(approx.call(2.0).is_err());
        assert!(approx.try_call(2.0).is_nan());
        assert!(approx.try_call(f64::INFINITY).is_nan());
        assert!(approx.try_call(1.999).is_finite());
    }

    #[test]
    fn benchmark_agrees_with_float_error() {
        let approx = Approximator::new(Kind::Taylor, 10, 3).unwrap();
        let xs = float_range(-1.0, 1.0, 0.25);

        for (&x, error) in xs.iter().zip(approx.benchmark(&xs)) {
            let float_error = relative_error(approx.try_call(x), x.exp());

            assert!((error - float_error).abs() < 1e-9, "{x}");
        }
    }

    #[test]
    fn max_bits() {
        let xs = float_range(-1.0, 1.0, 0.5);

        let fixed = Approximator::new(Kind::Taylor, 4, 2).unwrap();
        let minimax = Approximator::new(Kind::MinimaxPolynomial, 4, 2).unwrap();

        assert!(fixed.max_bits(&xs).unwrap().unwrap() > 0);
        assert_eq!(minimax.max_bits(&xs).unwrap(), None);

        let pade = Approximator::new(Kind::Pade, 4, 1).unwrap();

        assert!(pade.max_bits(&[2.0]).is_err());
    }
}
