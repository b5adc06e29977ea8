//! # cinos-core: Pure Pricing Logic for Cinos POS
//!
//! This crate is the **heart** of Cinos POS. It contains all pricing logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cinos POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/register (binary)                       │   │
//! │  │        build drinks ──► build order ──► print receipt           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cinos-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │   drink   │  │   order   │   │   │
//! │  │   │   Size    │  │   Money   │  │   Drink   │  │   Order   │   │   │
//! │  │   │  TaxRate  │  │  TaxCalc  │  │DrinkInput │  │  Receipt  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The size menu ([`Size`]) and tax rates ([`TaxRate`])
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`drink`] - A drink: base, size, flavors, and its cost
//! - [`order`] - An order of drinks with totals and a receipt
//! - [`error`] - Domain error types
//! - [`validation`] - Text normalization helpers
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every calculation is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use cinos_core::{Drink, Order};
//!
//! let latte = Drink::new("latte", &["vanilla"], "large")?;
//! let espresso = Drink::new("espresso", &[], "small")?;
//!
//! let mut order = Order::new();
//! order.add_drink(latte);
//! order.add_drink(espresso);
//!
//! // $2.20 + $1.50 = $3.70, plus 7.25% tax = $3.97
//! let totals = order.totals();
//! assert_eq!(totals.subtotal_cents, 370);
//! assert_eq!(totals.tax_cents, 27);
//! assert_eq!(totals.total_cents, 397);
//! # Ok::<(), cinos_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod drink;
pub mod error;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cinos_core::Money` instead of
// `use cinos_core::money::Money`

pub use drink::{Drink, DrinkInput};
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use order::{Order, OrderTotals, Receipt, ReceiptLine};
pub use types::{Size, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Surcharge added to a drink's cost for each flavor shot.
///
/// ## Business Reason
/// Flavors are priced flat: every added flavor costs the same 15 cents
/// regardless of drink size. Can be made configurable per-store in future
/// versions.
pub const FLAVOR_SURCHARGE: Money = Money::from_cents(15);

/// Sales tax applied to every order, in basis points (725 = 7.25%).
///
/// ## Business Reason
/// v0.1 serves a single store in a single tax jurisdiction, so the rate is
/// a crate constant. Per-store tax configuration lands with multi-store
/// support.
pub const SALES_TAX_RATE: TaxRate = TaxRate::from_bps(725);
