use std::cmp::Ordering;
use std::fmt;

use malachite::num::arithmetic::traits::Sign;
use malachite::{Integer, Rational};
use smallvec::SmallVec;

use super::{
    call_fixed, evaluate_fixed, fixed_reference_digits, Exponential,
    FixedPointApproximator,
};
use crate::error::{ConfigError, ConfigErrorKind, DomainError};
use crate::format::DecimalFormat;
use crate::utils::integer::factorial;
use crate::utils::FixedInt;

/// The diagonal Padé approximant of the exponential function.
///
/// The numerator and denominator of the [N/N] approximant share coefficients
/// and differ only in the signs of the odd terms, so both are formed from the
/// same sums. Inputs are evaluated at their magnitude; negative inputs use the
/// reciprocal.
#[derive(Debug)]
pub struct Pade {
    format: DecimalFormat,
    order: u32,
    coefficients: Vec<Integer>,
    /// The leading coefficient in fixed point.
    constant: Integer,
}

impl Pade {
    pub fn new(decimals: i64, order: u32) -> Result<Pade, ConfigError> {
        let format = DecimalFormat::new(decimals)?;

        if order == 0 {
            return Err(ConfigError::new(
                ConfigErrorKind::InvalidOrder,
                i64::from(order),
            ));
        }

        let coefficients = coefficients(u64::from(order));
        let constant = &coefficients[0] * format.scale();

        log::debug!("Constructed [{order}/{order}] Padé approximant");

        Ok(Pade {
            format,
            order,
            coefficients,
            constant,
        })
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    /// Computes the weighted powers `c_k |x|^k` in fixed point.
    ///
    /// The leading coefficient of the highest power is always one.
    fn terms<T: FixedInt>(&self, abs: &T) -> SmallVec<[T; 8]> {
        let scale = abs.lift(self.format.scale().clone());

        let mut terms = SmallVec::with_capacity(self.coefficients.len());
        let mut power = abs.clone();

        terms.push(abs.lift(self.constant.clone()));

        for c in &self.coefficients[1..self.coefficients.len() - 1] {
            terms.push(power.mul(&abs.lift(c.clone())));
            power = power.mul(abs).div_floor(&scale);
        }

        terms.push(power);

        terms
    }
}

/// Computes the coefficients `(2n - k)! / (k! (n - k)!)` of the [n/n]
/// approximant for `k = 0..=n`.
fn coefficients(n: u64) -> Vec<Integer> {
    (0..=n)
        .map(|k| factorial(2 * n - k) / (factorial(k) * factorial(n - k)))
        .collect()
}

impl FixedPointApproximator for Pade {
    fn format(&self) -> &DecimalFormat {
        &self.format
    }

    fn approximate<T: FixedInt>(&self, x: &T) -> Result<T, DomainError> {
        let scale = x.lift(self.format.scale().clone());

        // At least two terms, as the order is positive.
        let terms = self.terms(&x.abs());

        let even = terms.iter().skip(2).step_by(2);
        let odd = terms.iter().skip(3).step_by(2);

        let even = even.fold(terms[0].clone(), |a, t| a.add(t));
        let odd = odd.fold(terms[1].clone(), |a, t| a.add(t));

        let numerator = even.add(&odd);
        let denominator = even.sub(&odd);

        if x.value().sign() != Ordering::Greater {
            return Ok(denominator.mul(&scale).div_floor(&numerator));
        }

        if denominator.value().sign() != Ordering::Greater {
            return Err(DomainError::CriticalPoint(x.value().clone()));
        }

        Ok(numerator.mul(&scale).div_floor(&denominator))
    }
}

impl Exponential for Pade {
    fn evaluate(&self, x: &Rational) -> Result<Rational, DomainError> {
        evaluate_fixed(self, x)
    }

    fn reference_digits(&self) -> u64 {
        fixed_reference_digits(&self.format)
    }

    fn call(&self, x: f64) -> Result<f64, DomainError> {
        call_fixed(self, x)
    }
}

impl fmt::Display for Pade {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Pade({}, order={})", self.format, self.order)
    }
}
