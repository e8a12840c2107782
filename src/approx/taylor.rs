use std::fmt;

use malachite::{Integer, Rational};

use super::{
    call_fixed, evaluate_fixed, fixed_reference_digits, Exponential,
    FixedPointApproximator,
};
use crate::error::{ConfigError, ConfigErrorKind, DomainError};
use crate::format::DecimalFormat;
use crate::utils::integer::{factorial, falling_factorial};
use crate::utils::FixedInt;

/// The Maclaurin series of the exponential function truncated after the term
/// of the given order.
///
/// The series is evaluated by Horner's method with every coefficient scaled by
/// `order!`, so that only a single division by `order!` is needed at the end.
#[derive(Debug)]
pub struct Taylor {
    format: DecimalFormat,
    order: u32,
    factorial: Integer,
    /// The scaled coefficients `order! / i!` for `i < order`.
    weights: Vec<Integer>,
}

impl Taylor {
    pub fn new(decimals: i64, order: u32) -> Result<Taylor, ConfigError> {
        let format = DecimalFormat::new(decimals)?;

        if order == 0 {
            return Err(ConfigError::new(
                ConfigErrorKind::InvalidOrder,
                i64::from(order),
            ));
        }

        let order_u64 = u64::from(order);

        let weights = (0..order_u64)
            .map(|i| {
                falling_factorial(order_u64, order_u64 - i) * format.scale()
            })
            .collect();

        log::debug!("Constructed Taylor series of order {order}");

        Ok(Taylor {
            format,
            order,
            factorial: factorial(order_u64),
            weights,
        })
    }

    pub fn order(&self) -> u32 {
        self.order
    }
}

impl FixedPointApproximator for Taylor {
    fn format(&self) -> &DecimalFormat {
        &self.format
    }

    fn approximate<T: FixedInt>(&self, x: &T) -> Result<T, DomainError> {
        let scale = x.lift(self.format.scale().clone());

        let acc = self.weights.iter().rev().fold(scale.clone(), |acc, w| {
            acc.mul(x).div_floor(&scale).add(&x.lift(w.clone()))
        });

        Ok(acc.div_floor(&x.lift(self.factorial.clone())))
    }
}

impl Exponential for Taylor {
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

impl fmt::Display for Taylor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Taylor({}, order={})", self.format, self.order)
    }
}
