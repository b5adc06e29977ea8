//! # Error Types
//!
//! Domain-specific error types for cinos-core.
//!
//! ## Error Boundaries
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Where Errors Arise                              │
//! │                                                                         │
//! │  Drink::new / Drink::set_size ──► InvalidSize  (unknown size name)      │
//! │  Order::add_item              ──► InvalidItem  (value is not a drink)   │
//! │                                                                         │
//! │  Errors are returned at the validation boundary and never caught        │
//! │  internally. A failed operation leaves the receiving value unchanged.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the rejected input, the valid menu)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing-model errors.
///
/// These represent invalid input at a construction or mutation boundary.
/// They should be caught by callers and translated to user-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A size name did not match any menu size.
    ///
    /// ## When This Occurs
    /// - Constructing a drink with an unknown size
    /// - Changing a drink to an unknown size
    ///
    /// The message enumerates the valid size names so a cashier can see
    /// the whole menu at a glance.
    #[error("Invalid size '{given}'. Available sizes: {allowed:?}")]
    InvalidSize {
        given: String,
        allowed: Vec<String>,
    },

    /// A value passed to the order's untyped boundary was not a drink.
    ///
    /// ## When This Occurs
    /// - `Order::add_item` receives JSON that does not describe a drink
    ///   (wrong shape, missing base, non-object value)
    #[error("Only drinks can be added to an order: {reason}")]
    InvalidItem { reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
