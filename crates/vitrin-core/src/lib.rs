//! # vitrin-core: Pure Checkout Logic for the Vitrin Storefront
//!
//! This crate is the **heart** of the Vitrin checkout. It contains the
//! pricing and promotion logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Vitrin Storefront Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React)                             │   │
//! │  │   Cart UI ──► Checkout UI ──► Payment UI ──► Account UI        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ generated TS bindings                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vitrin-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  pricing  │  │  coupon   │  │  format   │  │   │
//! │  │   │   Money   │  │  totals   │  │ redemption│  │ card/exp  │  │   │
//! │  │   │  DiscRate │  │ shipping  │  │  session  │  │  fields   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │   External collaborators (separate services, out of scope)      │   │
//! │  │   cart/catalog • coupon issuance • identity • payment gateway   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - Frozen cart snapshot handed over at checkout time
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Domain types (Coupon, PaymentInput, InstallmentPlan)
//! - [`pricing`] - Subtotal, discount, total, installments, shipping
//! - [`coupon`] - Code redemption and session coupon state
//! - [`format`] - Keystroke formatters for the payment form
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary validation of externally supplied data
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **No Retained State**: The UI re-invokes on every keystroke; the
//!    only stateful type, the session coupon slot, is owned by the caller
//!
//! ## Example Usage
//!
//! ```rust
//! use vitrin_core::cart::{Cart, CartLine};
//! use vitrin_core::coupon::CouponState;
//! use vitrin_core::pricing::{installment_amount, quote};
//! use vitrin_core::types::Coupon;
//!
//! let cart = Cart::new(vec![CartLine {
//!     id: "7c2f58c0-6a3e-4a0f-9e54-2d5a9b1c0d11".to_string(),
//!     name: "Engraved Mug".to_string(),
//!     variant_label: Some("Red / L".to_string()),
//!     base_price_cents: 9_000,
//!     variant_modifier_cents: 1_000,
//!     quantity: 5,
//! }]);
//!
//! let available = vec![Coupon {
//!     id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
//!     code: "SAVE20".to_string(),
//!     description: "20% off".to_string(),
//!     discount_rate_bps: 2000,
//!     is_used: false,
//! }];
//!
//! let mut session = CouponState::new();
//! session.apply("save20", &available).unwrap();
//!
//! let q = quote(&cart, session.applied());
//! assert_eq!(q.subtotal_cents, 50_000); // ₺500.00
//! assert_eq!(q.discount_cents, 10_000); // ₺100.00
//! assert_eq!(q.total_cents, 40_000);    // ₺400.00
//!
//! // 3 monthly installments of ₺133.33 (display only)
//! let per_month = installment_amount(q.total(), 3).unwrap();
//! assert_eq!(per_month.cents(), 13_333);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod coupon;
pub mod error;
pub mod format;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vitrin_core::Money` instead of
// `use vitrin_core::money::Money`

pub use cart::{Cart, CartLine};
pub use coupon::{apply_coupon, CouponState};
pub use error::{CoreError, CoreResult, CouponError, ValidationError};
pub use money::Money;
pub use pricing::{quote, CheckoutQuote};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Installment counts the storefront offers.
///
/// ## Business Reason
/// The payment provider contract covers exactly these plans; anything
/// else is rejected as a caller contract violation rather than being
/// coerced to the nearest plan.
pub const SUPPORTED_INSTALLMENT_COUNTS: [u32; 4] = [1, 3, 6, 9];

/// Base shipping estimate in business days (ship-from-stock minimum).
pub const BASE_SHIPPING_DAYS: u32 = 2;

/// Upper bound on any published shipping estimate.
///
/// ## Business Reason
/// "Within N business days" is a customer-facing promise; no heuristic
/// may push the displayed estimate past this.
pub const MAX_SHIPPING_DAYS: u32 = 7;

/// Maximum quantity of a single cart line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum length of an issued coupon code.
pub const MAX_COUPON_CODE_LEN: usize = 50;
