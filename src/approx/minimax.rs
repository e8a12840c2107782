use std::fmt;

use malachite::num::arithmetic::traits::Pow;
use malachite::num::basic::traits::Zero;
use malachite::{Integer, Rational};

use super::{tables, Exponential};
use crate::error::{ConfigError, ConfigErrorKind, DomainError};
use crate::utils::reference;

/// Digits to which reference values are computed.
const REFERENCE_DIGITS: u64 = 40;

fn lookup<E>(table: &[E], order: u32) -> Result<&E, ConfigError> {
    order
        .checked_sub(1)
        .and_then(|i| table.get(i as usize))
        .ok_or_else(|| {
            let order = i64::from(order);

            ConfigError::new(ConfigErrorKind::UnsupportedOrder, order)
        })
}

fn decode(mantissas: &[i128]) -> Vec<Rational> {
    let scale = Rational::from(Integer::from(10u32).pow(tables::DIGITS));

    mantissas
        .iter()
        .map(|&m| Rational::from(Integer::from(m)) / &scale)
        .collect()
}

/// Evaluates a polynomial with coefficients listed from the highest degree.
fn horner(coefficients: &[Rational], x: &Rational) -> Rational {
    coefficients
        .iter()
        .fold(Rational::ZERO, |acc, c| acc * x + c)
}

/// The interval on which the minimax approximations are accurate.
pub fn minimax_domain() -> (Rational, Rational) {
    let half = reference::ln2(REFERENCE_DIGITS) >> 1u64;

    (-&half, half)
}

/// A polynomial minimizing the maximum relative error with respect to the
/// exponential function on [`minimax_domain`].
///
/// Outside of that interval the error grows quickly; inputs are not checked.
#[derive(Debug)]
pub struct MinimaxPolynomial {
    order: u32,
    coefficients: Vec<Rational>,
}

impl MinimaxPolynomial {
    /// Constructs the polynomial of the given degree, between 1 and 6.
    pub fn new(order: u32) -> Result<MinimaxPolynomial, ConfigError> {
        let coefficients = decode(lookup(&tables::POLYNOMIAL, order)?);

        log::debug!("Loaded minimax polynomial of degree {order}");

        Ok(MinimaxPolynomial {
            order,
            coefficients,
        })
    }

    pub fn order(&self) -> u32 {
        self.order
    }
}

impl Exponential for MinimaxPolynomial {
    fn evaluate(&self, x: &Rational) -> Result<Rational, DomainError> {
        Ok(horner(&self.coefficients, x))
    }

    fn reference_digits(&self) -> u64 {
        REFERENCE_DIGITS
    }
}

impl fmt::Display for MinimaxPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MinimaxPolynomial(order={})", self.order)
    }
}

/// A rational function minimizing the maximum relative error with respect to
/// the exponential function on [`minimax_domain`].
#[derive(Debug)]
pub struct MinimaxRational {
    order: u32,
    numerator: Vec<Rational>,
    denominator: Vec<Rational>,
}

impl MinimaxRational {
    /// Constructs the rational function of the given order, between 1 and 6.
    pub fn new(order: u32) -> Result<MinimaxRational, ConfigError> {
        let (p, q) = lookup(&tables::RATIONAL, order)?;

        log::debug!("Loaded minimax rational function of order {order}");

        Ok(MinimaxRational {
            order,
            numerator: decode(p),
            denominator: decode(q),
        })
    }

    pub fn order(&self) -> u32 {
        self.order
    }
}

impl Exponential for MinimaxRational {
    fn evaluate(&self, x: &Rational) -> Result<Rational, DomainError> {
        let q = horner(&self.denominator, x);

        if q == Rational::ZERO {
            return Err(DomainError::Pole(x.clone()));
        }

        Ok(horner(&self.numerator, x) / q)
    }

    fn reference_digits(&self) -> u64 {
        REFERENCE_DIGITS
    }
}

impl fmt::Display for MinimaxRational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MinimaxRational(order={})", self.order)
    }
}
