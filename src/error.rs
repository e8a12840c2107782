//! Construction and evaluation errors.

use std::{error, fmt};

use malachite::{Integer, Rational};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigErrorKind {
    InvalidDecimals,
    InvalidOrder,
    UnsupportedOrder,
    InsufficientPrecision,
}

/// An invalid configuration, rejected when an approximator or format is
/// constructed.
#[derive(Debug)]
pub struct ConfigError {
    pub kind: ConfigErrorKind,
    pub value: i64,
}

impl ConfigError {
    pub(crate) fn new(kind: ConfigErrorKind, value: i64) -> ConfigError {
        ConfigError { kind, value }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ConfigErrorKind::InvalidDecimals => write!(
                f,
                "invalid decimals {}; must be non-negative",
                self.value
            ),
            ConfigErrorKind::InvalidOrder => {
                write!(f, "invalid order {}; must be 1 or greater", self.value)
            }
            ConfigErrorKind::UnsupportedOrder => write!(
                f,
                "invalid order {}; no minimax coefficients available",
                self.value
            ),
            ConfigErrorKind::InsufficientPrecision => {
                write!(f, "ln 2 truncates to zero at {} decimals", self.value)
            }
        }
    }
}

impl error::Error for ConfigError {}

/// An input outside the range an approximation can handle.
#[derive(Debug)]
pub enum DomainError {
    /// The denominator of a rational approximant is no longer positive.
    CriticalPoint(Integer),
    /// The denominator of a rational approximation vanishes.
    Pole(Rational),
    /// A result would need to be scaled by a power of two beyond
    /// [`MAX_SHIFT`](crate::utils::integer::MAX_SHIFT).
    Overflow(Integer),
    NonFinite(f64),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DomainError::CriticalPoint(input) => {
                write!(f, "input {input} exceeds the critical point")
            }
            DomainError::Pole(input) => {
                write!(f, "input {input} is a pole of the approximation")
            }
            DomainError::Overflow(exponent) => {
                write!(f, "scaling by 2^{exponent} is out of range")
            }
            DomainError::NonFinite(input) => {
                write!(f, "input {input} is not finite")
            }
        }
    }
}

impl error::Error for DomainError {}

/// A value that an integer tracker cannot record.
#[derive(Debug, PartialEq, Eq)]
pub enum TrackingError {
    NonInteger(Rational),
    DivisionByZero,
}

impl fmt::Display for TrackingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TrackingError::NonInteger(value) => {
                write!(f, "cannot track non-integer value {value}")
            }
            TrackingError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl error::Error for TrackingError {}
