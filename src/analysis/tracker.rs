//! Dynamic range tracking for integer computations.
//!
//! An [`IntegerTracker`] records the least and greatest values among every
//! operand and result of the operations performed on the
//! [`TrackedInteger`]s it hands out. The recorded range determines how many
//! bits a hardware or fixed-width implementation of the same computation
//! would need.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;

use malachite::num::arithmetic::traits::{
    Abs, DivMod, Mod, Pow, RoundToMultiple,
};
use malachite::num::basic::traits::Zero;
use malachite::num::conversion::traits::ExactFrom;
use malachite::num::logic::traits::SignificantBits;
use malachite::rounding_modes::RoundingMode;
use malachite::{Integer, Rational};

use crate::error::TrackingError;
use crate::utils::FixedInt;

/// The extremes of the values observed by a tracker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackedRange {
    min: Option<Integer>,
    max: Option<Integer>,
}

impl TrackedRange {
    fn include(&mut self, value: &Integer) {
        if self.min.as_ref().map_or(true, |min| value < min) {
            self.min = Some(value.clone());
        }

        if self.max.as_ref().map_or(true, |max| value > max) {
            self.max = Some(value.clone());
        }
    }

    pub fn min(&self) -> Option<&Integer> {
        self.min.as_ref()
    }

    pub fn max(&self) -> Option<&Integer> {
        self.max.as_ref()
    }

    /// Whether a negative value has been observed.
    pub fn signed(&self) -> bool {
        self.min
            .as_ref()
            .is_some_and(|min| *min < Integer::ZERO)
    }

    /// The number of bits needed to represent every observed value, including
    /// a sign bit if any of them is negative.
    pub fn bits(&self) -> u64 {
        let (Some(min), Some(max)) = (&self.min, &self.max) else {
            return 0;
        };

        let magnitude = min.significant_bits().max(max.significant_bits());

        magnitude + u64::from(self.signed())
    }
}

impl fmt::Display for TrackedRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.min, &self.max) {
            (Some(min), Some(max)) => write!(f, "[{min}, {max}]"),
            _ => write!(f, "[]"),
        }
    }
}

/// Records the range of the integers derived from it.
///
/// # Examples
///
/// ```
/// # use fixed_exp::analysis::IntegerTracker;
/// # use malachite::Integer;
/// #
/// let (value, range) = IntegerTracker::track(|tracker| {
///     let x = tracker.int(10);
///
///     x.add(15).sub(30).into_inner()
/// });
///
/// assert_eq!(value, Integer::from(-5));
/// assert_eq!(range.to_string(), "[-5, 30]");
/// assert_eq!(range.bits(), 6);
/// ```
#[derive(Debug, Default)]
pub struct IntegerTracker {
    range: RefCell<TrackedRange>,
}

impl IntegerTracker {
    pub fn new() -> IntegerTracker {
        IntegerTracker::default()
    }

    /// Runs `f` with a fresh tracker and returns its result together with
    /// the range the tracker observed.
    pub fn track<R>(
        f: impl FnOnce(&IntegerTracker) -> R,
    ) -> (R, TrackedRange) {
        let tracker = IntegerTracker::new();
        let result = f(&tracker);

        (result, tracker.range.into_inner())
    }

    pub fn register(&self, value: &Integer) {
        self.range.borrow_mut().include(value);
    }

    /// Registers a rational value, which must be an integer.
    pub fn register_real(&self, value: &Rational) -> Result<(), TrackingError> {
        let value = Integer::try_from(value)
            .map_err(|_| TrackingError::NonInteger(value.clone()))?;

        self.register(&value);

        Ok(())
    }

    /// Wraps an integer so that operations on it are tracked.
    pub fn int(&self, value: impl Into<Integer>) -> TrackedInteger<'_> {
        let value = value.into();

        self.register(&value);

        TrackedInteger {
            tracker: self,
            value,
        }
    }

    /// A snapshot of the range observed so far.
    pub fn range(&self) -> TrackedRange {
        self.range.borrow().clone()
    }

    pub fn bits(&self) -> u64 {
        self.range.borrow().bits()
    }

    pub fn signed(&self) -> bool {
        self.range.borrow().signed()
    }

    pub fn min_seen(&self) -> Option<Integer> {
        self.range.borrow().min.clone()
    }

    pub fn max_seen(&self) -> Option<Integer> {
        self.range.borrow().max.clone()
    }
}

/// A value accepted as the right-hand side of a tracked operation.
pub trait Operand {
    fn into_integer(self) -> Integer;
}

impl Operand for Integer {
    fn into_integer(self) -> Integer {
        self
    }
}

impl Operand for &Integer {
    fn into_integer(self) -> Integer {
        self.clone()
    }
}

impl Operand for TrackedInteger<'_> {
    fn into_integer(self) -> Integer {
        self.value
    }
}

impl Operand for &TrackedInteger<'_> {
    fn into_integer(self) -> Integer {
        self.value.clone()
    }
}

macro_rules! primitive_operand {
    ($($t:ty),*) => {
        $(
            impl Operand for $t {
                fn into_integer(self) -> Integer {
                    Integer::from(self)
                }
            }
        )*
    };
}

primitive_operand!(i32, i64, u32, u64);

/// An integer whose operations are recorded by a tracker.
///
/// Every operand and every result of an operation is registered before the
/// result is returned, itself wrapped with the same tracker.
#[derive(Clone)]
pub struct TrackedInteger<'t> {
    tracker: &'t IntegerTracker,
    value: Integer,
}

impl<'t> TrackedInteger<'t> {
    pub fn value(&self) -> &Integer {
        &self.value
    }

    pub fn into_inner(self) -> Integer {
        self.value
    }

    fn operand(&self, rhs: impl Operand) -> Integer {
        let rhs = rhs.into_integer();

        self.tracker.register(&rhs);

        rhs
    }

    fn divisor(&self, rhs: impl Operand) -> Result<Integer, TrackingError> {
        let rhs = self.operand(rhs);

        if rhs == Integer::ZERO {
            Err(TrackingError::DivisionByZero)
        } else {
            Ok(rhs)
        }
    }

    fn wrap(&self, value: Integer) -> TrackedInteger<'t> {
        self.tracker.int(value)
    }

    pub fn add(&self, rhs: impl Operand) -> TrackedInteger<'t> {
        let rhs = self.operand(rhs);

        self.wrap(&self.value + rhs)
    }

    pub fn sub(&self, rhs: impl Operand) -> TrackedInteger<'t> {
        let rhs = self.operand(rhs);

        self.wrap(&self.value - rhs)
    }

    pub fn mul(&self, rhs: impl Operand) -> TrackedInteger<'t> {
        let rhs = self.operand(rhs);

        self.wrap(&self.value * rhs)
    }

    /// Divides, rounding towards negative infinity.
    pub fn floor_div(
        &self,
        rhs: impl Operand,
    ) -> Result<TrackedInteger<'t>, TrackingError> {
        let rhs = self.divisor(rhs)?;

        Ok(self.wrap((&self.value).div_mod(rhs).0))
    }

    /// Divides exactly, failing unless the quotient is an integer.
    pub fn true_div(
        &self,
        rhs: impl Operand,
    ) -> Result<TrackedInteger<'t>, TrackingError> {
        let rhs = self.divisor(rhs)?;
        let quotient = Rational::from_integers(self.value.clone(), rhs);

        match Integer::try_from(&quotient) {
            Ok(value) => Ok(self.wrap(value)),
            Err(_) => Err(TrackingError::NonInteger(quotient)),
        }
    }

    /// Computes the remainder of floor division, which has the sign of the
    /// divisor.
    pub fn rem(
        &self,
        rhs: impl Operand,
    ) -> Result<TrackedInteger<'t>, TrackingError> {
        let rhs = self.divisor(rhs)?;

        Ok(self.wrap((&self.value).mod_op(rhs)))
    }

    /// Computes the quotient and remainder of floor division.
    pub fn div_mod(
        &self,
        rhs: impl Operand,
    ) -> Result<(TrackedInteger<'t>, TrackedInteger<'t>), TrackingError> {
        let rhs = self.divisor(rhs)?;
        let (quotient, remainder) = (&self.value).div_mod(rhs);

        Ok((self.wrap(quotient), self.wrap(remainder)))
    }

    pub fn pow(&self, exp: u64) -> TrackedInteger<'t> {
        self.operand(exp);

        self.wrap((&self.value).pow(exp))
    }

    pub fn bitand(&self, rhs: impl Operand) -> TrackedInteger<'t> {
        let rhs = self.operand(rhs);

        self.wrap(&self.value & rhs)
    }

    pub fn bitor(&self, rhs: impl Operand) -> TrackedInteger<'t> {
        let rhs = self.operand(rhs);

        self.wrap(&self.value | rhs)
    }

    pub fn bitxor(&self, rhs: impl Operand) -> TrackedInteger<'t> {
        let rhs = self.operand(rhs);

        self.wrap(&self.value ^ rhs)
    }

    pub fn shl(&self, bits: u64) -> TrackedInteger<'t> {
        self.operand(bits);

        self.wrap(&self.value << bits)
    }

    /// Shifts right, rounding towards negative infinity.
    pub fn shr(&self, bits: u64) -> TrackedInteger<'t> {
        self.operand(bits);

        self.wrap(&self.value >> bits)
    }

    pub fn neg(&self) -> TrackedInteger<'t> {
        self.wrap(-&self.value)
    }

    pub fn pos(&self) -> TrackedInteger<'t> {
        self.wrap(self.value.clone())
    }

    /// Computes the bitwise complement, `-x - 1`.
    pub fn not(&self) -> TrackedInteger<'t> {
        self.wrap(!&self.value)
    }

    pub fn abs(&self) -> TrackedInteger<'t> {
        self.wrap(Abs::abs(&self.value))
    }

    pub fn trunc(&self) -> TrackedInteger<'t> {
        self.pos()
    }

    pub fn floor(&self) -> TrackedInteger<'t> {
        self.pos()
    }

    pub fn ceil(&self) -> TrackedInteger<'t> {
        self.pos()
    }

    pub fn int(&self) -> TrackedInteger<'t> {
        self.pos()
    }

    /// Rounds to the nearest multiple of `10^-ndigits`, with ties going to
    /// the even multiple. Non-negative `ndigits` leave the value unchanged.
    pub fn round(&self, ndigits: i64) -> TrackedInteger<'t> {
        self.operand(ndigits);

        if ndigits >= 0 {
            return self.pos();
        }

        let multiple = Integer::from(10u32).pow(ndigits.unsigned_abs());
        let (rounded, _) =
            (&self.value).round_to_multiple(multiple, RoundingMode::Nearest);

        self.wrap(rounded)
    }
}

impl fmt::Debug for TrackedInteger<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TrackedInteger({})", self.value)
    }
}

impl fmt::Display for TrackedInteger<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl PartialEq for TrackedInteger<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialEq<Integer> for TrackedInteger<'_> {
    fn eq(&self, other: &Integer) -> bool {
        self.value == *other
    }
}

impl PartialOrd for TrackedInteger<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl FixedInt for TrackedInteger<'_> {
    fn lift(&self, value: Integer) -> Self {
        self.wrap(value)
    }

    fn value(&self) -> &Integer {
        &self.value
    }

    fn add(&self, rhs: &Self) -> Self {
        TrackedInteger::add(self, rhs)
    }

    fn sub(&self, rhs: &Self) -> Self {
        TrackedInteger::sub(self, rhs)
    }

    fn mul(&self, rhs: &Self) -> Self {
        TrackedInteger::mul(self, rhs)
    }

    fn div_floor(&self, rhs: &Self) -> Self {
        let rhs = self.operand(rhs);

        self.wrap((&self.value).div_mod(rhs).0)
    }

    fn abs(&self) -> Self {
        TrackedInteger::abs(self)
    }

    fn shl(&self, bits: &Self) -> Self {
        TrackedInteger::shl(self, u64::exact_from(&bits.value))
    }

    fn shr(&self, bits: &Self) -> Self {
        TrackedInteger::shr(self, u64::exact_from(&bits.value))
    }
}
