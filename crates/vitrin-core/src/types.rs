//! # Domain Types
//!
//! Core domain types for the Vitrin checkout.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Coupon      │   │  PaymentInput   │   │ InstallmentPlan │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  card_holder    │   │  Single         │       │
//! │  │  code (business)│   │  card_number    │   │  Three          │       │
//! │  │  discount bps   │   │  expiry / cvc   │   │  Six            │       │
//! │  │  is_used        │   │  installments   │   │  Nine           │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │  DiscountRate   │                                                   │
//! │  │  ─────────────  │                                                   │
//! │  │  bps (u32)      │                                                   │
//! │  │  2000 = 20%     │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! The coupon has:
//! - `id`: UUID - immutable, used by the issuing service
//! - `code`: business ID - human-readable, matched case-insensitively

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// Discount Rate
// =============================================================================

/// Percentage discount represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 2000 bps = 20% (a typical promotion), and no float ever touches a
/// price calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a discount rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        DiscountRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// A percentage-discount coupon issued to a customer.
///
/// Coupons are created and consumed by the external order/issuance
/// services; this crate only reads them. `is_used` flips to true when
/// an order is placed with the coupon, which happens elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    /// Unique identifier (UUID) assigned by the issuing service.
    pub id: String,

    /// Redemption code - business identifier, case-insensitive.
    pub code: String,

    /// Human-readable description shown on the account screen.
    pub description: String,

    /// Discount in basis points (2000 = 20%).
    pub discount_rate_bps: u32,

    /// Whether the coupon was already consumed by a placed order.
    pub is_used: bool,
}

impl Coupon {
    /// Returns the discount rate.
    #[inline]
    pub fn discount_rate(&self) -> DiscountRate {
        DiscountRate::from_bps(self.discount_rate_bps)
    }

    /// Checks if the coupon can still be redeemed.
    #[inline]
    pub fn is_redeemable(&self) -> bool {
        !self.is_used
    }
}

// =============================================================================
// Installment Plan
// =============================================================================

/// A supported installment plan for splitting the payable total.
///
/// The storefront offers exactly these four plans; no interest is
/// modeled, so N installments means N equal display amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum InstallmentPlan {
    /// Single payment (no split).
    Single,
    /// Three monthly installments.
    Three,
    /// Six monthly installments.
    Six,
    /// Nine monthly installments.
    Nine,
}

impl InstallmentPlan {
    /// Creates a plan from an installment count.
    ///
    /// Any count outside {1, 3, 6, 9} is a contract violation by the
    /// caller and is rejected, never coerced to a default plan.
    ///
    /// ## Example
    /// ```rust
    /// use vitrin_core::types::InstallmentPlan;
    ///
    /// assert_eq!(InstallmentPlan::from_count(3).unwrap().count(), 3);
    /// assert!(InstallmentPlan::from_count(4).is_err());
    /// ```
    pub fn from_count(count: u32) -> Result<Self, CoreError> {
        match count {
            1 => Ok(InstallmentPlan::Single),
            3 => Ok(InstallmentPlan::Three),
            6 => Ok(InstallmentPlan::Six),
            9 => Ok(InstallmentPlan::Nine),
            requested => Err(CoreError::UnsupportedInstallmentCount { requested }),
        }
    }

    /// Returns the number of installments.
    #[inline]
    pub const fn count(&self) -> u32 {
        match self {
            InstallmentPlan::Single => 1,
            InstallmentPlan::Three => 3,
            InstallmentPlan::Six => 6,
            InstallmentPlan::Nine => 9,
        }
    }

    /// Display label for the plan selector.
    pub fn label(&self) -> String {
        match self {
            InstallmentPlan::Single => "Single payment".to_string(),
            plan => format!("{} installments", plan.count()),
        }
    }

    /// All supported plans, in display order.
    pub const fn all() -> [InstallmentPlan; 4] {
        [
            InstallmentPlan::Single,
            InstallmentPlan::Three,
            InstallmentPlan::Six,
            InstallmentPlan::Nine,
        ]
    }
}

impl Default for InstallmentPlan {
    fn default() -> Self {
        InstallmentPlan::Single
    }
}

// =============================================================================
// Payment Input
// =============================================================================

/// Raw payment form state held by the UI while the customer types.
///
/// ## Security Note
/// This data is transient and display-only. It is never persisted and
/// never transmitted by this crate; the payment gateway integration
/// lives in an external service. The formatters in [`crate::format`]
/// normalize these fields for on-screen rendering only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInput {
    /// Name printed on the card, as typed.
    pub card_holder: String,

    /// Card number, possibly partially typed or already grouped.
    pub card_number: String,

    /// Expiry in (partial) MM/YY form.
    pub expiry: String,

    /// Card verification code digits.
    pub cvc: String,

    /// Selected installment count (1, 3, 6 or 9).
    pub installment_count: u32,
}

impl PaymentInput {
    /// Resolves the selected installment plan.
    ///
    /// Fails with [`CoreError::UnsupportedInstallmentCount`] if the UI
    /// submitted a count outside the supported set.
    pub fn plan(&self) -> Result<InstallmentPlan, CoreError> {
        InstallmentPlan::from_count(self.installment_count)
    }
}

/// An empty form defaults to a single payment, matching the initial
/// state of the checkout screen.
impl Default for PaymentInput {
    fn default() -> Self {
        PaymentInput {
            card_holder: String::new(),
            card_number: String::new(),
            expiry: String::new(),
            cvc: String::new(),
            installment_count: 1,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_rate_from_bps() {
        let rate = DiscountRate::from_bps(2000);
        assert_eq!(rate.bps(), 2000);
        assert!((rate.percentage() - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_discount_rate_from_percentage() {
        let rate = DiscountRate::from_percentage(12.5);
        assert_eq!(rate.bps(), 1250);
    }

    #[test]
    fn test_installment_plan_from_count() {
        assert_eq!(InstallmentPlan::from_count(1).unwrap(), InstallmentPlan::Single);
        assert_eq!(InstallmentPlan::from_count(9).unwrap(), InstallmentPlan::Nine);

        for bad in [0, 2, 4, 5, 7, 8, 10, 12] {
            assert!(InstallmentPlan::from_count(bad).is_err(), "count {bad}");
        }
    }

    #[test]
    fn test_all_plans_match_supported_counts() {
        let counts: Vec<u32> = InstallmentPlan::all().iter().map(|p| p.count()).collect();
        assert_eq!(counts, crate::SUPPORTED_INSTALLMENT_COUNTS.to_vec());

        for count in crate::SUPPORTED_INSTALLMENT_COUNTS {
            assert!(InstallmentPlan::from_count(count).is_ok());
        }
    }

    #[test]
    fn test_installment_plan_labels() {
        assert_eq!(InstallmentPlan::Single.label(), "Single payment");
        assert_eq!(InstallmentPlan::Six.label(), "6 installments");
    }

    #[test]
    fn test_coupon_redeemable() {
        let mut coupon = Coupon {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            code: "SAVE10".to_string(),
            description: "10% off your next order".to_string(),
            discount_rate_bps: 1000,
            is_used: false,
        };
        assert!(coupon.is_redeemable());
        assert_eq!(coupon.discount_rate(), DiscountRate::from_bps(1000));

        coupon.is_used = true;
        assert!(!coupon.is_redeemable());
    }

    #[test]
    fn test_coupon_serializes_camel_case() {
        let coupon = Coupon {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            code: "SAVE10".to_string(),
            description: "10% off".to_string(),
            discount_rate_bps: 1000,
            is_used: false,
        };
        let json = serde_json::to_value(&coupon).unwrap();
        assert_eq!(json["discountRateBps"], 1000);
        assert_eq!(json["isUsed"], false);
    }

    #[test]
    fn test_payment_input_plan() {
        let input = PaymentInput {
            installment_count: 3,
            ..PaymentInput::default()
        };
        assert_eq!(input.plan().unwrap(), InstallmentPlan::Three);

        let bad = PaymentInput {
            installment_count: 4,
            ..PaymentInput::default()
        };
        assert!(bad.plan().is_err());
    }
}
