//! # Pricing Engine
//!
//! Pure functions computing everything the checkout screen displays:
//! discount, payable total, per-installment amounts and the shipping
//! estimate.
//!
//! ## Checkout Pricing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Checkout Pricing Flow                               │
//! │                                                                         │
//! │  Cart.subtotal() ──┬──► compute_discount(subtotal, coupon)             │
//! │                    │            │                                       │
//! │                    │            ▼                                       │
//! │                    └──► compute_final_total(subtotal, discount)        │
//! │                                 │                                       │
//! │                                 ├──► installment_amount(total, n)      │
//! │                                 │         (display only)                │
//! │                                 ▼                                       │
//! │  Cart.total_quantity() ──► shipping_estimate_days(qty)                 │
//! │                                                                         │
//! │  quote() bundles all of the above into one CheckoutQuote                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is referentially transparent: the UI calls them
//! on each keystroke and state change, and identical inputs always
//! yield identical outputs.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{Coupon, InstallmentPlan};
use crate::{BASE_SHIPPING_DAYS, MAX_SHIPPING_DAYS};

// =============================================================================
// Discount & Total
// =============================================================================

/// Computes the discount amount for an optionally applied coupon.
///
/// No coupon ⇒ zero. The `is_used` flag is NOT re-checked here:
/// validity is settled once at apply time by
/// [`crate::coupon::apply_coupon`], and the applied coupon is trusted
/// for the rest of the session until explicitly removed.
pub fn compute_discount(subtotal: Money, coupon: Option<&Coupon>) -> Money {
    match coupon {
        Some(c) => subtotal.apply_rate(c.discount_rate()),
        None => Money::zero(),
    }
}

/// Computes the final payable total: `subtotal - discount`, never
/// negative.
///
/// Discount rates are bounded at 100% by the data-entry boundary
/// ([`crate::validation::validate_discount_rate`]), but a rate above
/// that smuggled in by a caller must still not produce a negative
/// payable amount, so the result is clamped at zero.
pub fn compute_final_total(subtotal: Money, discount: Money) -> Money {
    (subtotal - discount).clamp_non_negative()
}

/// Per-installment display amount: `total / count`, rounded half-up to
/// the nearest cent.
///
/// The rounding is presentation-only; the stored total is never
/// reconstructed from installment amounts. Counts outside {1, 3, 6, 9}
/// fail with [`crate::error::CoreError::UnsupportedInstallmentCount`].
///
/// ## Example
/// ```rust
/// use vitrin_core::money::Money;
/// use vitrin_core::pricing::installment_amount;
///
/// let total = Money::from_cents(40_000); // ₺400.00
/// let per_month = installment_amount(total, 3).unwrap();
/// assert_eq!(per_month, Money::from_cents(13_333)); // ₺133.33 / month
/// ```
pub fn installment_amount(total: Money, installment_count: u32) -> CoreResult<Money> {
    let plan = InstallmentPlan::from_count(installment_count)?;
    Ok(total.div_round(i64::from(plan.count())))
}

// =============================================================================
// Shipping Estimate
// =============================================================================

/// Estimates dispatch time in business days from the total item count.
///
/// ## Policy
/// ```text
/// quantity 1-3   →  2 days  (base: ship from stock)
/// quantity 4-10  →  3 days  (+1: production/packing time)
/// quantity 11+   →  5 days  (+2 more)
/// ```
/// The result is capped at [`MAX_SHIPPING_DAYS`]. With the current
/// increments the cap is unreachable (max computed value is 5); it is
/// kept as a guard on the published "within N business days" promise
/// should a tier be added. Monotonic: more items never shorten the
/// estimate.
pub fn shipping_estimate_days(total_quantity: i64) -> u32 {
    let mut days = BASE_SHIPPING_DAYS;
    if total_quantity > 3 {
        days += 1;
    }
    if total_quantity > 10 {
        days += 2;
    }
    days.min(MAX_SHIPPING_DAYS)
}

// =============================================================================
// Checkout Quote
// =============================================================================

/// One-shot summary of everything the order-summary panel renders.
///
/// Shaped for direct consumption by the frontend: plain cent amounts
/// plus the derived counts, recomputed from scratch on every call so
/// nothing can go stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutQuote {
    /// Total quantity across all lines.
    pub total_quantity: i64,

    /// Sum of line totals, before discount.
    pub subtotal_cents: i64,

    /// Discount amount (zero without a coupon).
    pub discount_cents: i64,

    /// Final payable amount.
    pub total_cents: i64,

    /// Estimated business days before dispatch.
    pub shipping_estimate_days: u32,
}

impl CheckoutQuote {
    /// Subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Discount as Money.
    #[inline]
    pub fn discount(&self) -> Money {
        Money::from_cents(self.discount_cents)
    }

    /// Payable total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

/// Prices a cart with an optionally applied coupon.
///
/// ## Example
/// ```rust
/// use vitrin_core::cart::{Cart, CartLine};
/// use vitrin_core::pricing::quote;
///
/// let cart = Cart::new(vec![CartLine {
///     id: "line-1".to_string(),
///     name: "Engraved Mug".to_string(),
///     variant_label: None,
///     base_price_cents: 25_000,
///     variant_modifier_cents: 0,
///     quantity: 2,
/// }]);
///
/// let q = quote(&cart, None);
/// assert_eq!(q.subtotal_cents, 50_000);
/// assert_eq!(q.total_cents, 50_000);
/// assert_eq!(q.shipping_estimate_days, 2);
/// ```
pub fn quote(cart: &Cart, coupon: Option<&Coupon>) -> CheckoutQuote {
    let subtotal = cart.subtotal();
    let discount = compute_discount(subtotal, coupon);
    let total = compute_final_total(subtotal, discount);

    CheckoutQuote {
        total_quantity: cart.total_quantity(),
        subtotal_cents: subtotal.cents(),
        discount_cents: discount.cents(),
        total_cents: total.cents(),
        shipping_estimate_days: shipping_estimate_days(cart.total_quantity()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
