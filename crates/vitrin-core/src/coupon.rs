//! # Coupon Redemption
//!
//! Matches submitted codes against the customer's coupons and tracks
//! the at-most-one applied coupon for the checkout session.
//!
//! ## Redemption Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Coupon Redemption Flow                             │
//! │                                                                         │
//! │  User types "save10" → Apply                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  apply_coupon("save10", available) ← case-insensitive, unused only     │
//! │       │                                                                 │
//! │       ├── blank code ──────► Err(EmptyCode)        → message shown     │
//! │       ├── no match / used ─► Err(InvalidOrExpired) → message shown,    │
//! │       │                       previously applied coupon kept           │
//! │       └── match ───────────► Ok(coupon) → replaces any active coupon   │
//! │                                                                         │
//! │  "Remove" clears the active coupon AND any pending error message.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Marking a coupon used is an order-placement concern and happens in
//! an external service; this module never mutates the coupon list.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CouponError;
use crate::types::{Coupon, DiscountRate};

// =============================================================================
// Redemption
// =============================================================================

/// Matches a submitted code against the customer's available coupons.
///
/// - The code is trimmed; a blank code fails with
///   [`CouponError::EmptyCode`]
/// - Matching is case-insensitive on `code` and requires
///   `is_used == false`
/// - On success the matched coupon is returned unchanged; consumption
///   is not recorded here
///
/// ## Example
/// ```rust
/// use vitrin_core::coupon::apply_coupon;
/// use vitrin_core::types::Coupon;
///
/// let available = vec![Coupon {
///     id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
///     code: "SAVE10".to_string(),
///     description: "10% off".to_string(),
///     discount_rate_bps: 1000,
///     is_used: false,
/// }];
///
/// assert!(apply_coupon("save10", &available).is_ok());
/// assert!(apply_coupon("NOPE", &available).is_err());
/// ```
pub fn apply_coupon(code: &str, available: &[Coupon]) -> Result<Coupon, CouponError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(CouponError::EmptyCode);
    }

    available
        .iter()
        .find(|c| c.is_redeemable() && c.code.eq_ignore_ascii_case(code))
        .cloned()
        .ok_or(CouponError::InvalidOrExpired)
}

// =============================================================================
// Session State
// =============================================================================

/// The checkout session's coupon slot: at most one applied coupon,
/// at most one pending error message.
///
/// ## Invariants
/// - Coupons never stack: a successful apply replaces the active one
/// - A failed apply records the error but leaves the active coupon
///   untouched, so a typo can't silently drop an earlier discount
/// - Remove clears both the coupon and the pending error
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CouponState {
    /// The currently applied coupon, if any.
    applied: Option<Coupon>,

    /// Error from the most recent failed apply, shown inline by the UI.
    error: Option<CouponError>,
}

impl CouponState {
    /// Creates an empty slot (no coupon, no pending error).
    pub fn new() -> Self {
        CouponState::default()
    }

    /// Attempts to apply a code, updating the slot accordingly.
    ///
    /// Returns the redemption result so the caller can react
    /// immediately (e.g. clear the input field on success).
    pub fn apply(&mut self, code: &str, available: &[Coupon]) -> Result<(), CouponError> {
        match apply_coupon(code, available) {
            Ok(coupon) => {
                self.applied = Some(coupon);
                self.error = None;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err);
                Err(err)
            }
        }
    }

    /// Clears the active coupon and any pending error.
    pub fn remove(&mut self) {
        self.applied = None;
        self.error = None;
    }

    /// The currently applied coupon, if any.
    pub fn applied(&self) -> Option<&Coupon> {
        self.applied.as_ref()
    }

    /// The pending error from the last failed apply, if any.
    pub fn error(&self) -> Option<CouponError> {
        self.error
    }

    /// Discount rate of the applied coupon, zero when none.
    pub fn discount_rate(&self) -> DiscountRate {
        self.applied
            .as_ref()
            .map(Coupon::discount_rate)
            .unwrap_or_default()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon(code: &str, bps: u32, is_used: bool) -> Coupon {
        Coupon {
            id: format!("id-{code}"),
            code: code.to_string(),
            description: format!("{}% off", bps / 100),
            discount_rate_bps: bps,
            is_used,
        }
    }

    #[test]
    fn test_apply_matches_case_insensitively() {
        let available = vec![coupon("SAVE10", 1000, false)];

        let matched = apply_coupon("save10", &available).unwrap();
        assert_eq!(matched.code, "SAVE10");

        let matched = apply_coupon("  Save10  ", &available).unwrap();
        assert_eq!(matched.discount_rate_bps, 1000);
    }

    #[test]
    fn test_apply_empty_code() {
        let available = vec![coupon("SAVE10", 1000, false)];
        assert_eq!(apply_coupon("", &available), Err(CouponError::EmptyCode));
        assert_eq!(apply_coupon("   ", &available), Err(CouponError::EmptyCode));
    }

    #[test]
    fn test_apply_unknown_code() {
        let available = vec![coupon("SAVE10", 1000, false)];
        assert_eq!(
            apply_coupon("WELCOME5", &available),
            Err(CouponError::InvalidOrExpired)
        );
    }

    #[test]
    fn test_apply_used_coupon_rejected() {
        let available = vec![coupon("SAVE10", 1000, true)];
        assert_eq!(
            apply_coupon("SAVE10", &available),
            Err(CouponError::InvalidOrExpired)
        );
    }

    #[test]
    fn test_apply_does_not_mark_used() {
        let available = vec![coupon("SAVE10", 1000, false)];
        let matched = apply_coupon("SAVE10", &available).unwrap();
        assert!(!matched.is_used);
        assert!(!available[0].is_used);
    }

    #[test]
    fn test_state_apply_and_remove() {
        let available = vec![coupon("SAVE10", 1000, false)];
        let mut state = CouponState::new();

        state.apply("SAVE10", &available).unwrap();
        assert_eq!(state.applied().unwrap().code, "SAVE10");
        assert_eq!(state.error(), None);
        assert_eq!(state.discount_rate(), DiscountRate::from_bps(1000));

        state.remove();
        assert!(state.applied().is_none());
        assert_eq!(state.discount_rate(), DiscountRate::zero());
    }

    #[test]
    fn test_state_new_coupon_replaces_old() {
        let available = vec![coupon("SAVE10", 1000, false), coupon("SAVE20", 2000, false)];
        let mut state = CouponState::new();

        state.apply("SAVE10", &available).unwrap();
        state.apply("SAVE20", &available).unwrap();

        // No stacking: only the latest coupon is active
        assert_eq!(state.applied().unwrap().code, "SAVE20");
        assert_eq!(state.discount_rate(), DiscountRate::from_bps(2000));
    }

    #[test]
    fn test_state_failed_apply_keeps_active_coupon() {
        let available = vec![coupon("SAVE10", 1000, false)];
        let mut state = CouponState::new();

        state.apply("SAVE10", &available).unwrap();
        let err = state.apply("TYPO", &available).unwrap_err();

        assert_eq!(err, CouponError::InvalidOrExpired);
        assert_eq!(state.error(), Some(CouponError::InvalidOrExpired));
        // The earlier discount survives the typo
        assert_eq!(state.applied().unwrap().code, "SAVE10");
    }

    #[test]
    fn test_state_remove_clears_pending_error() {
        let available = vec![coupon("SAVE10", 1000, false)];
        let mut state = CouponState::new();

        let _ = state.apply("TYPO", &available);
        assert!(state.error().is_some());

        state.remove();
        assert_eq!(state.error(), None);
        assert!(state.applied().is_none());
    }

    #[test]
    fn test_state_successful_apply_clears_pending_error() {
        let available = vec![coupon("SAVE10", 1000, false)];
        let mut state = CouponState::new();

        let _ = state.apply("", &available);
        assert_eq!(state.error(), Some(CouponError::EmptyCode));

        state.apply("save10", &available).unwrap();
        assert_eq!(state.error(), None);
    }
}
