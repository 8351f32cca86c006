//! Unit-tagged decimal values.
//!
//! [`Quantity`] and [`Percentage`] share one representation but are distinct
//! types, so a share count can never be added to a return by accident.

use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, Neg, Sub};

/// Marker describing what a [`Numeric`] measures.
pub trait Unit {
    /// Appended to the plain decimal when displayed.
    const SUFFIX: &'static str;
}

#[derive(Debug)]
pub enum QuantityUnit {}

impl Unit for QuantityUnit {
    const SUFFIX: &'static str = "";
}

#[derive(Debug)]
pub enum PercentageUnit {}

impl Unit for PercentageUnit {
    const SUFFIX: &'static str = "%";
}

/// A decimal value tagged with its unit.
pub struct Numeric<U> {
    value: Decimal,
    unit: PhantomData<U>,
}

/// Number of units of a security.
pub type Quantity = Numeric<QuantityUnit>;

/// A return expressed in percent (`12.5` means 12.5%).
pub type Percentage = Numeric<PercentageUnit>;

impl<U> Numeric<U> {
    pub const fn new(value: Decimal) -> Self {
        Numeric {
            value,
            unit: PhantomData,
        }
    }

    pub const fn zero() -> Self {
        Self::new(Decimal::ZERO)
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_sign_negative(&self) -> bool {
        self.value.is_sign_negative() && !self.value.is_zero()
    }
}

impl<U> From<Decimal> for Numeric<U> {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl<U> From<i64> for Numeric<U> {
    fn from(value: i64) -> Self {
        Self::new(Decimal::from(value))
    }
}

impl<U> Default for Numeric<U> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<U> Clone for Numeric<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U> Copy for Numeric<U> {}

impl<U> PartialEq for Numeric<U> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<U> Eq for Numeric<U> {}

impl<U> PartialOrd for Numeric<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<U> Ord for Numeric<U> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<U> Hash for Numeric<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<U> Add for Numeric<U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl<U> Sub for Numeric<U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl<U> Neg for Numeric<U> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<U: Unit> fmt::Display for Numeric<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, U::SUFFIX)
    }
}

impl<U: Unit> fmt::Debug for Numeric<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
