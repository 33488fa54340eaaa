//! # Cart Snapshot
//!
//! Immutable view of the customer's cart as handed over by the external
//! cart/catalog service at checkout time.
//!
//! ## Design Notes
//! - Prices are frozen snapshots: if the catalog changes after the cart
//!   was assembled, the checkout still prices what the customer saw
//! - Mutation (add/remove/update quantity) belongs to the cart service;
//!   this crate only reads lines and computes totals
//! - The service validates lines before handing them over (non-negative
//!   unit price, quantity ≥ 1); see [`crate::validation`] for the
//!   boundary checks it is expected to run

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Cart Line
// =============================================================================

/// One product + variant + quantity entry in a purchase.
///
/// The unit price is `base_price + variant_modifier`: customizable
/// products carry a per-variant surcharge or rebate on top of the base
/// catalog price, so the modifier may be negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Cart-entry identifier (UUID) assigned by the cart service.
    pub id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Chosen variant, e.g. "#ef4444 / L" (frozen, display-only).
    pub variant_label: Option<String>,

    /// Base catalog price in cents at time of adding (frozen).
    pub base_price_cents: i64,

    /// Variant surcharge or rebate in cents (frozen, may be negative).
    pub variant_modifier_cents: i64,

    /// Quantity purchased (≥ 1).
    pub quantity: i64,
}

impl CartLine {
    /// Effective unit price: base price plus variant modifier.
    #[inline]
    pub fn unit_price_cents(&self) -> i64 {
        self.base_price_cents + self.variant_modifier_cents
    }

    /// Effective unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents())
    }

    /// Line total: unit price × quantity.
    #[inline]
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents() * self.quantity
    }

    /// Line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The cart being checked out: an ordered sequence of lines.
///
/// ## Invariants
/// - Line order is preserved (it drives the order-summary rendering)
/// - Totals are recomputed on demand; no cached state can go stale
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in the cart, in the order the customer added them.
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a cart from the lines supplied by the cart service.
    pub fn new(lines: Vec<CartLine>) -> Self {
        Cart { lines }
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    ///
    /// Drives the shipping estimate and the "N items" summary row.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the subtotal (before any discount).
    pub fn subtotal_cents(&self) -> i64 {
        self.lines.iter().map(|l| l.line_total_cents()).sum()
    }

    /// Subtotal as Money. Empty cart ⇒ zero.
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents())
    }
}

impl From<Vec<CartLine>> for Cart {
    fn from(lines: Vec<CartLine>) -> Self {
        Cart::new(lines)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, base: i64, modifier: i64, qty: i64) -> CartLine {
        CartLine {
            id: id.to_string(),
            name: format!("Product {id}"),
            variant_label: None,
            base_price_cents: base,
            variant_modifier_cents: modifier,
            quantity: qty,
        }
    }

    #[test]
    fn test_line_total_includes_variant_modifier() {
        let l = line("1", 1000, 250, 3); // (₺10.00 + ₺2.50) × 3
        assert_eq!(l.unit_price_cents(), 1250);
        assert_eq!(l.line_total_cents(), 3750);
    }

    #[test]
    fn test_negative_modifier_reduces_unit_price() {
        let l = line("1", 1000, -200, 2); // (₺10.00 - ₺2.00) × 2
        assert_eq!(l.unit_price(), Money::from_cents(800));
        assert_eq!(l.line_total(), Money::from_cents(1600));
    }

    #[test]
    fn test_empty_cart_subtotal_is_zero() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::zero());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_cart_totals() {
        let cart = Cart::new(vec![
            line("1", 1000, 0, 2),   // ₺20.00
            line("2", 2500, 500, 1), // ₺30.00
        ]);

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.subtotal(), Money::from_cents(5000));
    }

    #[test]
    fn test_line_order_preserved() {
        let cart = Cart::new(vec![line("b", 100, 0, 1), line("a", 200, 0, 1)]);
        let ids: Vec<&str> = cart.lines.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
