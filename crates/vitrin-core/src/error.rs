//! # Error Types
//!
//! Domain-specific error types for vitrin-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vitrin-core errors (this file)                                        │
//! │  ├── CoreError        - Caller contract violations                     │
//! │  ├── CouponError      - User-facing coupon redemption failures         │
//! │  └── ValidationError  - Input validation failures at the boundary      │
//! │                                                                         │
//! │  Flow: ValidationError / CouponError → CoreError → UI layer            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (requested value, field name)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message
//! 5. Nothing here is fatal: every error is locally recoverable state
//!    the caller renders inline

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Core Error
// =============================================================================

/// Core checkout logic errors.
///
/// These represent contract violations by the calling layer or wrapped
/// lower-level failures. They should be caught and translated to
/// user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Caller requested an installment plan outside the supported set.
    ///
    /// ## When This Occurs
    /// - The UI submits an installment count other than 1, 3, 6 or 9
    ///
    /// This is a programming error in the caller, not bad user input:
    /// the UI renders a fixed radio group of supported plans, so any
    /// other value means the frontend and backend disagree. We report
    /// it instead of silently coercing to a default plan.
    #[error("Unsupported installment count {requested}: must be one of 1, 3, 6, 9")]
    UnsupportedInstallmentCount { requested: u32 },

    /// Coupon redemption error (wraps CouponError).
    #[error("Coupon error: {0}")]
    Coupon(#[from] CouponError),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Coupon Error
// =============================================================================

/// Coupon redemption errors shown directly to the customer.
///
/// Stored as pending state by [`crate::coupon::CouponState`] so the UI
/// can render the message inline next to the coupon field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CouponError {
    /// The submitted code was blank after trimming.
    #[error("Please enter a coupon code")]
    EmptyCode,

    /// No matching code among the customer's coupons, or the match
    /// was already consumed by a previous order.
    ///
    /// The two cases are deliberately indistinguishable to the user:
    /// revealing "exists but used" would leak other customers' codes
    /// to guessing.
    #[error("Invalid or expired coupon code")]
    InvalidOrExpired,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when externally supplied data doesn't meet
/// requirements. Used for early validation before pricing logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID, invalid character set).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnsupportedInstallmentCount { requested: 4 };
        assert_eq!(
            err.to_string(),
            "Unsupported installment count 4: must be one of 1, 3, 6, 9"
        );
    }

    #[test]
    fn test_coupon_error_messages() {
        assert_eq!(CouponError::EmptyCode.to_string(), "Please enter a coupon code");
        assert_eq!(
            CouponError::InvalidOrExpired.to_string(),
            "Invalid or expired coupon code"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "code".to_string(),
        };
        assert_eq!(err.to_string(), "code is required");

        let err = ValidationError::TooLong {
            field: "code".to_string(),
            max: 50,
        };
        assert_eq!(err.to_string(), "code must be at most 50 characters");
    }

    #[test]
    fn test_errors_convert_to_core_error() {
        let coupon_err = CouponError::InvalidOrExpired;
        let core_err: CoreError = coupon_err.into();
        assert!(matches!(core_err, CoreError::Coupon(_)));

        let validation_err = ValidationError::Required {
            field: "code".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_coupon_error_serializes_snake_case() {
        let json = serde_json::to_string(&CouponError::InvalidOrExpired).unwrap();
        assert_eq!(json, "\"invalid_or_expired\"");
    }
}
