//! # Money Module
//!
//! Provides the `Money` type for non-negative monetary values at a fixed
//! scale of two decimal places.
//!
//! ## Storage
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHY CENTS?                                                             │
//! │                                                                         │
//! │  Floating point:                                                        │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                  │
//! │                                                                         │
//! │  Costify stores whole cents (i64) and rounds EVERY operation back to   │
//! │  cents immediately:                                                    │
//! │    Money::of(0.1) + Money::of(0.2) = 30 cents = $0.30  ✅              │
//! │                                                                         │
//! │  Chained operations accumulate independently-rounded results, so a     │
//! │  multiply-then-divide may drift by a cent. That drift is part of the   │
//! │  contract.                                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - The amount is never negative. Any operation that would go below zero
//!   fails with [`CoreError::NegativeMoney`] instead of clamping.
//! - Rounding is half away from zero at scale 100.
//! - [`Money::approx_eq`] compares within [`Money::EPSILON`] (0.001). Code that
//!   sorts or deduplicates money must not assume anything finer.
//!
//! ## Usage
//! ```rust
//! use costify_core::money::Money;
//!
//! let price = Money::of(10.50).unwrap();
//! let total = price + Money::of(5.25).unwrap();
//! assert_eq!(total.amount(), 15.75);
//!
//! // Negative money never exists
//! assert!(Money::of(-1.0).is_err());
//! assert!(Money::of(1.0).unwrap().subtract(Money::of(2.0).unwrap()).is_err());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::error::{CoreError, CoreResult};

/// Number of cents in one currency unit.
const SCALE: f64 = 100.0;

/// Largest scaled value that still fits in `i64` cents.
const MAX_SCALED: f64 = i64::MAX as f64;

// =============================================================================
// Money Type
// =============================================================================

/// A non-negative monetary amount, stored in cents.
///
/// ## Where Money is Used
/// ```text
/// Ingredient.package_price ──► unit_cost() ──► line cost ──► IngredientCost.cost
///                                                                  │
///                                           RecipeCost.total_cost ◄┘ (sum)
///                                                  │
///                                                  ▼
///                                           Recipe.total_cost (cached)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Zero money.
    pub const ZERO: Money = Money(0);

    /// Tolerance used by [`Money::approx_eq`].
    pub const EPSILON: f64 = 0.001;

    /// Creates money from a decimal amount, rounded to two places.
    ///
    /// ## Errors
    /// - [`CoreError::NegativeMoney`] if `amount < 0`
    /// - [`CoreError::AmountOutOfRange`] if `amount` is NaN, infinite, or
    ///   too large to represent in cents
    ///
    /// ## Example
    /// ```rust
    /// use costify_core::money::Money;
    ///
    /// assert_eq!(Money::of(10.999).unwrap().amount(), 11.0);
    /// assert_eq!(Money::of(2.346).unwrap().cents(), 235);
    /// ```
    pub fn of(amount: f64) -> CoreResult<Money> {
        if amount < 0.0 {
            return Err(CoreError::NegativeMoney(
                "Money cannot be negative in business context".to_string(),
            ));
        }
        round_to_cents(amount * SCALE, amount).map(Money)
    }

    /// Creates money from whole cents.
    ///
    /// ## Errors
    /// [`CoreError::NegativeMoney`] if `cents < 0`.
    pub fn from_cents(cents: i64) -> CoreResult<Money> {
        if cents < 0 {
            return Err(CoreError::NegativeMoney(
                "Money cannot be negative in business context".to_string(),
            ));
        }
        Ok(Money(cents))
    }

    /// Returns zero money.
    #[inline]
    pub const fn zero() -> Self {
        Money::ZERO
    }

    /// The amount as a decimal number (e.g. `15.75`).
    #[inline]
    pub fn amount(&self) -> f64 {
        self.0 as f64 / SCALE
    }

    /// The amount in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Subtracts `other`, failing rather than going negative.
    ///
    /// ## Example
    /// ```rust
    /// use costify_core::money::Money;
    ///
    /// let a = Money::of(10.50).unwrap();
    /// let b = Money::of(5.25).unwrap();
    /// assert_eq!(a.subtract(b).unwrap().amount(), 5.25);
    /// assert!(b.subtract(a).is_err());
    /// ```
    pub fn subtract(&self, other: Money) -> CoreResult<Money> {
        let result = self.0 - other.0;
        if result < 0 {
            return Err(CoreError::NegativeMoney(
                "Subtraction would result in negative money".to_string(),
            ));
        }
        Ok(Money(result))
    }

    /// Multiplies by a scalar, rounding the product to cents.
    ///
    /// ## Errors
    /// - [`CoreError::NegativeMoney`] if the raw product is negative
    /// - [`CoreError::AmountOutOfRange`] for NaN/infinite scalars or overflow
    pub fn multiply(&self, multiplier: f64) -> CoreResult<Money> {
        let raw = self.0 as f64 * multiplier;
        if raw < 0.0 {
            return Err(CoreError::NegativeMoney(
                "Multiplication would result in negative money".to_string(),
            ));
        }
        round_to_cents(raw, raw / SCALE).map(Money)
    }

    /// Divides by a scalar, rounding the quotient to cents.
    ///
    /// ## Errors
    /// - [`CoreError::DivisionByZero`] if `divisor == 0`
    /// - [`CoreError::NegativeMoney`] if the raw quotient is negative
    /// - [`CoreError::AmountOutOfRange`] for NaN divisors
    ///
    /// ## Example
    /// ```rust
    /// use costify_core::money::Money;
    ///
    /// let ten = Money::of(10.0).unwrap();
    /// assert_eq!(ten.divide(3.0).unwrap().amount(), 3.33);
    /// ```
    pub fn divide(&self, divisor: f64) -> CoreResult<Money> {
        if divisor == 0.0 {
            return Err(CoreError::DivisionByZero);
        }
        let raw = self.0 as f64 / divisor;
        if raw < 0.0 {
            return Err(CoreError::NegativeMoney(
                "Division would result in negative money".to_string(),
            ));
        }
        round_to_cents(raw, raw / SCALE).map(Money)
    }

    /// Adds `other`, reporting overflow instead of clamping.
    ///
    /// ## Errors
    /// [`CoreError::AmountOutOfRange`] if the sum does not fit in `i64` cents.
    pub fn checked_add(&self, other: Money) -> CoreResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| CoreError::AmountOutOfRange(self.amount() + other.amount()))
    }

    /// Sequential sum, each step rounded at scale 100.
    ///
    /// ## Errors
    /// [`CoreError::AmountOutOfRange`] if any partial sum overflows.
    pub fn try_sum<I>(amounts: I) -> CoreResult<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |acc, m| acc.checked_add(m))
    }

    /// Strictly greater than `other`.
    #[inline]
    pub fn is_greater_than(&self, other: Money) -> bool {
        self.0 > other.0
    }

    /// Strictly less than `other`.
    #[inline]
    pub fn is_less_than(&self, other: Money) -> bool {
        self.0 < other.0
    }

    /// Equality within [`Money::EPSILON`].
    pub fn approx_eq(&self, other: Money) -> bool {
        (self.amount() - other.amount()).abs() < Money::EPSILON
    }
}

/// Rounds an already-scaled value to whole cents.
///
/// `original` is only used for the error message.
fn round_to_cents(scaled: f64, original: f64) -> CoreResult<i64> {
    if !scaled.is_finite() || scaled.abs() >= MAX_SCALED {
        return Err(CoreError::AmountOutOfRange(original));
    }
    Ok(scaled.round() as i64)
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$12.34`.
///
/// ## Note
/// Debugging aid only. Reports pick their own currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::ZERO
    }
}

/// Infallible addition for amounts known to be small (tests, literals).
///
/// Saturates at `i64::MAX` cents. Totals built from arbitrary input go
/// through [`Money::checked_add`] or [`Money::try_sum`] instead.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Serialized as the decimal amount (`15.75`), not as cents.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.amount())
    }
}

/// Deserialization runs the same validation as [`Money::of`].
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::of(amount).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
