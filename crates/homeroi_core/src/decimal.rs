//! Fixed-point decimal value types
//!
//! A single value type, [`Fixed`], wraps [`rust_decimal::Decimal`] and carries a
//! zero-sized kind tag. Arithmetic is closed over the left operand's kind, so a
//! `Money * Rate` is still `Money` and nothing ever degrades to a binary float.
//! The kind only matters for display:
//!
//! - [`Money`] renders as `$1,234.56` / `-$1,234.56`
//! - [`Rate`] is a fraction (`0.0475`) and renders as a percentage (`4.75%`)
//! - [`Percent`] already holds a percentage (`4.75`) and renders as `4.75%`
//!
//! Values keep full `Decimal` precision internally. Reported money is quantized
//! with [`Fixed::round_cents`] (half-up); level payments use
//! [`Fixed::ceil_cents`].

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::ArithmeticError;

/// Number of fractional digits in a reported amount
pub const CENT_DIGITS: u32 = 2;

/// Display behaviour attached to a [`Fixed`] value
pub trait Kind: Copy + Default + fmt::Debug + PartialEq + Eq + PartialOrd + Ord + Hash {
    const NAME: &'static str;

    fn render(value: Decimal, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoneyKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RateKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PercentKind;

impl Kind for MoneyKind {
    const NAME: &'static str = "Money";

    fn render(value: Decimal, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (negative, digits) = two_digit_grouped(value);
        if negative {
            write!(f, "-${digits}")
        } else {
            write!(f, "${digits}")
        }
    }
}

impl Kind for RateKind {
    const NAME: &'static str = "Rate";

    fn render(value: Decimal, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        PercentKind::render(value * Decimal::ONE_HUNDRED, f)
    }
}

impl Kind for PercentKind {
    const NAME: &'static str = "Percent";

    fn render(value: Decimal, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (negative, digits) = two_digit_grouped(value);
        if negative {
            write!(f, "-{digits}%")
        } else {
            write!(f, "{digits}%")
        }
    }
}

/// Quantize to two digits (half-up) and group the integer part by thousands.
/// Returns whether the quantized value is negative and the unsigned digits.
fn two_digit_grouped(value: Decimal) -> (bool, String) {
    let mut quantized =
        value.round_dp_with_strategy(CENT_DIGITS, RoundingStrategy::MidpointAwayFromZero);
    let negative = quantized.is_sign_negative() && !quantized.is_zero();
    quantized = quantized.abs();
    quantized.rescale(CENT_DIGITS);

    let text = quantized.to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    (negative, format!("{grouped}.{fraction}"))
}

/// A decimal value tagged with how it should be displayed
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fixed<K: Kind> {
    value: Decimal,
    #[serde(skip)]
    kind: PhantomData<K>,
}

pub type Money = Fixed<MoneyKind>;
pub type Rate = Fixed<RateKind>;
pub type Percent = Fixed<PercentKind>;

impl<K: Kind> Fixed<K> {
    pub const ZERO: Self = Self::new(Decimal::ZERO);
    pub const ONE: Self = Self::new(Decimal::ONE);

    pub const fn new(value: Decimal) -> Self {
        Self {
            value,
            kind: PhantomData,
        }
    }

    pub fn from_int(value: i64) -> Self {
        Self::new(Decimal::from(value))
    }

    pub const fn value(self) -> Decimal {
        self.value
    }

    /// Re-tag the same numeric value with a different kind
    pub const fn cast<T: Kind>(self) -> Fixed<T> {
        Fixed::new(self.value)
    }

    /// Round half-up (ties away from zero) to whole cents
    #[must_use]
    pub fn round_cents(self) -> Self {
        Self::new(
            self.value
                .round_dp_with_strategy(CENT_DIGITS, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Round toward positive infinity to whole cents
    #[must_use]
    pub fn ceil_cents(self) -> Self {
        Self::new(
            self.value
                .round_dp_with_strategy(CENT_DIGITS, RoundingStrategy::ToPositiveInfinity),
        )
    }

    /// Divide, reporting a zero denominator instead of panicking
    pub fn checked_div<T: Kind>(
        self,
        denominator: Fixed<T>,
        context: &'static str,
    ) -> Result<Self, ArithmeticError> {
        self.value
            .checked_div(denominator.value)
            .map(Self::new)
            .ok_or(ArithmeticError::DivisionByZero { context })
    }

    /// Multiply, reporting overflow instead of panicking
    pub fn checked_mul<T: Kind>(
        self,
        rhs: Fixed<T>,
        context: &'static str,
    ) -> Result<Self, ArithmeticError> {
        self.value
            .checked_mul(rhs.value)
            .map(Self::new)
            .ok_or(ArithmeticError::Overflow { context })
    }

    /// Raise to an integer power, reporting overflow instead of panicking
    pub fn checked_powu(self, exp: u64, context: &'static str) -> Result<Self, ArithmeticError> {
        self.value
            .checked_powu(exp)
            .map(Self::new)
            .ok_or(ArithmeticError::Overflow { context })
    }

    #[must_use]
    pub fn powu(self, exp: u64) -> Self {
        Self::new(self.value.powu(exp))
    }

    #[must_use]
    pub fn powd(self, exp: Decimal) -> Self {
        Self::new(self.value.powd(exp))
    }

    #[must_use]
    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }

    pub fn is_zero(self) -> bool {
        self.value.is_zero()
    }

    pub fn is_positive(self) -> bool {
        self.value > Decimal::ZERO
    }

    pub fn is_negative(self) -> bool {
        self.value < Decimal::ZERO
    }
}

impl Rate {
    /// `Rate::from_percent(p) == p / 100`, exactly
    pub fn from_percent(percent: Decimal) -> Self {
        Self::new(percent / Decimal::ONE_HUNDRED)
    }

    pub fn percent(self) -> Percent {
        Percent::new(self.value * Decimal::ONE_HUNDRED)
    }
}

impl Percent {
    pub fn rate(self) -> Rate {
        Rate::from_percent(self.value)
    }
}

impl<K: Kind> PartialOrd for Fixed<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Kind> Ord for Fixed<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<K: Kind> fmt::Display for Fixed<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        K::render(self.value, f)
    }
}

impl<K: Kind> fmt::Debug for Fixed<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", K::NAME, self.value)
    }
}

impl<K: Kind> From<Decimal> for Fixed<K> {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// Arithmetic (closed over the left operand's kind)
// ============================================================================

impl<K: Kind, T: Kind> Add<Fixed<T>> for Fixed<K> {
    type Output = Self;

    fn add(self, rhs: Fixed<T>) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl<K: Kind, T: Kind> Sub<Fixed<T>> for Fixed<K> {
    type Output = Self;

    fn sub(self, rhs: Fixed<T>) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl<K: Kind, T: Kind> Mul<Fixed<T>> for Fixed<K> {
    type Output = Self;

    fn mul(self, rhs: Fixed<T>) -> Self {
        Self::new(self.value * rhs.value)
    }
}

/// Panics on a zero denominator, like `Decimal`; use [`Fixed::checked_div`]
/// where the denominator comes from user input.
impl<K: Kind, T: Kind> Div<Fixed<T>> for Fixed<K> {
    type Output = Self;

    fn div(self, rhs: Fixed<T>) -> Self {
        Self::new(self.value / rhs.value)
    }
}

impl<K: Kind> Mul<Decimal> for Fixed<K> {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self {
        Self::new(self.value * rhs)
    }
}

impl<K: Kind> Div<Decimal> for Fixed<K> {
    type Output = Self;

    fn div(self, rhs: Decimal) -> Self {
        Self::new(self.value / rhs)
    }
}

impl<K: Kind> Mul<u32> for Fixed<K> {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self::new(self.value * Decimal::from(rhs))
    }
}

impl<K: Kind> Div<u32> for Fixed<K> {
    type Output = Self;

    fn div(self, rhs: u32) -> Self {
        Self::new(self.value / Decimal::from(rhs))
    }
}

impl<K: Kind> Neg for Fixed<K> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<K: Kind, T: Kind> AddAssign<Fixed<T>> for Fixed<K> {
    fn add_assign(&mut self, rhs: Fixed<T>) {
        self.value += rhs.value;
    }
}

impl<K: Kind, T: Kind> SubAssign<Fixed<T>> for Fixed<K> {
    fn sub_assign(&mut self, rhs: Fixed<T>) {
        self.value -= rhs.value;
    }
}

impl<K: Kind> Sum for Fixed<K> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}
