//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In a checkout with installments:                                       │
//! │    ₺400.00 / 3 = ₺133.33 (×3 = ₺399.99)  → Lost ₺0.01!                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Kuruş (cents)                                    │
//! │    The stored total stays exact; per-installment amounts are            │
//! │    rounded for DISPLAY ONLY and never written back into the total.      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vitrin_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(10_99); // ₺10.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;                       // ₺21.98
//! let total = price + Money::from_cents(5_00);   // ₺15.99
//!
//! // NEVER do this:
//! // let bad = Money::from_float(10.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (kuruş).
///
/// ## Design Decisions
/// - **i64 (signed)**: Variant price modifiers may be negative, so
///   intermediate values can dip below zero
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// Every monetary value in checkout flows through this type:
/// line totals, the cart subtotal, the discount amount, the final
/// payable total and the per-installment display amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use vitrin_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents ₺10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (lira and kuruş).
    ///
    /// ## Example
    /// ```rust
    /// use vitrin_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99); // ₺10.99
    /// assert_eq!(price.cents(), 1099);
    ///
    /// let rebate = Money::from_major_minor(-5, 50); // -₺5.50 modifier
    /// assert_eq!(rebate.cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -₺5.50, not -₺4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (lira) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (kuruş) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use vitrin_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // ₺2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 897); // ₺8.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Calculates the discount amount for a percentage rate.
    ///
    /// Returns the amount to subtract, not the reduced price.
    ///
    /// ## Implementation
    /// Integer math with half-up rounding to the nearest cent:
    /// `(amount * bps + 5000) / 10000`. We use i128 internally to
    /// prevent overflow on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use vitrin_core::money::Money;
    /// use vitrin_core::types::DiscountRate;
    ///
    /// let subtotal = Money::from_cents(50_000); // ₺500.00
    /// let rate = DiscountRate::from_bps(2000);  // 20%
    ///
    /// let discount = subtotal.apply_rate(rate);
    /// assert_eq!(discount.cents(), 10_000); // ₺100.00
    /// ```
    pub fn apply_rate(&self, rate: DiscountRate) -> Money {
        // rate.bps() is basis points: 2000 = 20%
        let discount_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(discount_cents as i64)
    }

    /// Divides into equal parts, rounded half-up to the nearest cent.
    ///
    /// This is for DISPLAY ONLY (installment breakdowns). The rounded
    /// parts may not sum back to the original amount; the stored total
    /// is never reconstructed from them.
    ///
    /// ## Example
    /// ```rust
    /// use vitrin_core::money::Money;
    ///
    /// let total = Money::from_cents(40_000); // ₺400.00
    /// let per_month = total.div_round(3);
    /// assert_eq!(per_month.cents(), 13_333); // ₺133.33 shown per month
    /// ```
    ///
    /// ## Panics
    /// Never: a zero or negative divisor returns the amount unchanged.
    /// Divisor validity is enforced upstream by the installment plan.
    pub fn div_round(&self, parts: i64) -> Money {
        if parts <= 0 {
            return *self;
        }
        // Half-up rounding: (2a + n) / 2n
        let rounded = (self.0 as i128 * 2 + parts as i128) / (parts as i128 * 2);
        Money::from_cents(rounded as i64)
    }

    /// Clamps negative values to zero.
    ///
    /// Used when subtracting a discount: a rate above 100% smuggled in
    /// past the boundary must never produce a negative payable amount.
    #[inline]
    pub const fn clamp_non_negative(&self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            *self
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and tests. Use frontend formatting for actual
/// UI display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₺{}.{:02}", sign, self.major().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
