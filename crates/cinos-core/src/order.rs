//! # Order
//!
//! An order accumulates drinks and derives totals and a receipt on demand.
//!
//! ## Order Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Operations                                  │
//! │                                                                         │
//! │  Register Action            Operation              State Change         │
//! │  ───────────────            ─────────              ────────────         │
//! │                                                                         │
//! │  Ring up a drink ─────────► add_drink() ─────────► drinks.push(drink)   │
//! │                                                                         │
//! │  Untyped payload ─────────► add_item() ──────────► validate, then push  │
//! │                                                                         │
//! │  Show totals ─────────────► totals() ────────────► (derived, not stored)│
//! │                                                                         │
//! │  Print receipt ───────────► receipt() ───────────► (derived, not stored)│
//! │                                                                         │
//! │  NOTE: totals are never cached; every call recomputes from the drinks.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Drinks keep insertion order and duplicates are allowed: ringing up two
//! identical lattes produces two receipt lines, as a register should.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::drink::{Drink, DrinkInput};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Size;
use crate::SALES_TAX_RATE;

// =============================================================================
// Order
// =============================================================================

/// An order of drinks.
///
/// Created empty; mutated only by appending drinks. Subtotal, tax, and the
/// receipt are derived on demand from the current drinks, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    /// Unique identifier (UUID v4).
    id: String,

    /// Drinks in the order, in the order they were rung up.
    drinks: Vec<Drink>,

    /// When the order was opened.
    created_at: DateTime<Utc>,
}

impl Order {
    /// Opens a new, empty order.
    pub fn new() -> Self {
        Order {
            id: Uuid::new_v4().to_string(),
            drinks: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Returns the order's unique id.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns when the order was opened.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Appends a drink to the order.
    ///
    /// A [`Drink`] is valid by construction, so the typed path cannot fail;
    /// the type system is the validation boundary here.
    pub fn add_drink(&mut self, drink: Drink) {
        self.drinks.push(drink);
    }

    /// Appends a drink described by an untyped JSON value.
    ///
    /// This is the boundary where "not a drink" is representable: payloads
    /// from a frontend or a log replay arrive as [`serde_json::Value`] and
    /// are validated before anything is appended.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidItem`] if the value does not describe a drink
    /// - [`CoreError::InvalidSize`] if it does, but the size is off-menu
    ///
    /// On any error the order is left unchanged.
    ///
    /// ## Example
    /// ```rust
    /// use cinos_core::Order;
    /// use serde_json::json;
    ///
    /// let mut order = Order::new();
    /// order.add_item(json!({"base": "latte", "size": "large"}))?;
    /// assert!(order.add_item(json!(42)).is_err());
    /// assert_eq!(order.drink_count(), 1);
    /// # Ok::<(), cinos_core::CoreError>(())
    /// ```
    pub fn add_item(&mut self, item: serde_json::Value) -> CoreResult<()> {
        let input: DrinkInput =
            serde_json::from_value(item).map_err(|e| CoreError::InvalidItem {
                reason: e.to_string(),
            })?;
        let drink = Drink::from_input(input)?;
        self.drinks.push(drink);
        Ok(())
    }

    /// Returns the drinks in the order.
    #[inline]
    pub fn drinks(&self) -> &[Drink] {
        &self.drinks
    }

    /// Returns the number of drinks in the order.
    #[inline]
    pub fn drink_count(&self) -> usize {
        self.drinks.len()
    }

    /// Checks if the order is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.drinks.is_empty()
    }

    /// Calculates the subtotal: the sum of every drink's cost.
    ///
    /// Exact in cents; nothing is rounded on the way in.
    pub fn subtotal(&self) -> Money {
        self.drinks.iter().map(Drink::cost).sum()
    }

    /// Calculates subtotal, tax, and total.
    ///
    /// Tax is computed once, on the exact-cent subtotal, rounded to the
    /// nearest cent. Never derived from per-line figures.
    pub fn totals(&self) -> OrderTotals {
        let subtotal = self.subtotal();
        let tax = subtotal.calculate_tax(SALES_TAX_RATE);
        OrderTotals {
            subtotal_cents: subtotal.cents(),
            tax_cents: tax.cents(),
            total_cents: (subtotal + tax).cents(),
        }
    }

    /// Generates the receipt: one line per drink, plus totals.
    ///
    /// Line costs and the subtotal are both derived from the same exact cent
    /// values, so the receipt's lines always add up to its subtotal.
    pub fn receipt(&self) -> Receipt {
        let totals = self.totals();
        Receipt {
            drinks: self
                .drinks
                .iter()
                .map(|d| ReceiptLine {
                    base: d.base().to_string(),
                    size: d.size(),
                    cost_cents: d.cost().cents(),
                })
                .collect(),
            subtotal_cents: totals.subtotal_cents,
            tax_cents: totals.tax_cents,
            total_cents: totals.total_cents,
        }
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Totals & Receipt
// =============================================================================

/// Order totals summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

/// One drink on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub base: String,
    pub size: Size,
    pub cost_cents: i64,
}

/// A structured receipt: per-drink lines plus order totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub drinks: Vec<ReceiptLine>,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn latte_and_espresso() -> Order {
        let mut order = Order::new();
        order.add_drink(Drink::new("latte", &["vanilla"], "large").unwrap());
        order.add_drink(Drink::new("espresso", &[], "small").unwrap());
        order
    }

    #[test]
    fn test_new_order_is_empty() {
        let order = Order::new();
        assert!(order.is_empty());
        assert_eq!(order.drink_count(), 0);
        assert!(order.subtotal().is_zero());

        let totals = order.totals();
        assert_eq!(totals.subtotal_cents, 0);
        assert_eq!(totals.tax_cents, 0);
        assert_eq!(totals.total_cents, 0);
    }

    #[test]
    fn test_orders_get_distinct_ids() {
        assert_ne!(Order::new().id(), Order::new().id());
    }

    #[test]
    fn test_add_drink_preserves_order_and_duplicates() {
        let mut order = Order::new();
        let latte = Drink::new("latte", &[], "medium").unwrap();
        order.add_drink(latte.clone());
        order.add_drink(latte);
        order.add_drink(Drink::new("espresso", &[], "small").unwrap());

        assert_eq!(order.drink_count(), 3);
        assert_eq!(order.drinks()[0].base(), "Latte");
        assert_eq!(order.drinks()[1].base(), "Latte");
        assert_eq!(order.drinks()[2].base(), "Espresso");
    }

    #[test]
    fn test_totals_worked_example() {
        // $2.20 + $1.50 = $3.70; tax 7.25% = $0.27; total $3.97
        let totals = latte_and_espresso().totals();
        assert_eq!(totals.subtotal_cents, 370);
        assert_eq!(totals.tax_cents, 27);
        assert_eq!(totals.total_cents, 397);
    }

    #[test]
    fn test_totals_recomputed_after_mutation() {
        let mut order = latte_and_espresso();
        order.add_drink(Drink::new("mocha", &["mint"], "mega").unwrap());

        // $3.70 + $2.30 = $6.00; tax = $0.44 (43.5 rounds up); total $6.44
        let totals = order.totals();
        assert_eq!(totals.subtotal_cents, 600);
        assert_eq!(totals.tax_cents, 44);
        assert_eq!(totals.total_cents, 644);
    }

    #[test]
    fn test_receipt_lines() {
        let receipt = latte_and_espresso().receipt();

        assert_eq!(receipt.drinks.len(), 2);
        assert_eq!(receipt.drinks[0].base, "Latte");
        assert_eq!(receipt.drinks[0].size, Size::Large);
        assert_eq!(receipt.drinks[0].cost_cents, 220);
        assert_eq!(receipt.drinks[1].base, "Espresso");
        assert_eq!(receipt.drinks[1].size, Size::Small);
        assert_eq!(receipt.drinks[1].cost_cents, 150);

        assert_eq!(receipt.subtotal_cents, 370);
        assert_eq!(receipt.tax_cents, 27);
        assert_eq!(receipt.total_cents, 397);

        // Lines add up to the subtotal exactly
        let line_sum: i64 = receipt.drinks.iter().map(|l| l.cost_cents).sum();
        assert_eq!(line_sum, receipt.subtotal_cents);
    }

    #[test]
    fn test_receipt_serialization() {
        let json = serde_json::to_value(latte_and_espresso().receipt()).unwrap();
        assert_eq!(json["drinks"][0]["size"], "LARGE");
        assert_eq!(json["drinks"][0]["cost_cents"], 220);
        assert_eq!(json["subtotal_cents"], 370);
        assert_eq!(json["tax_cents"], 27);
        assert_eq!(json["total_cents"], 397);
    }

    #[test]
    fn test_add_item_accepts_drink_payload() {
        let mut order = Order::new();
        order
            .add_item(json!({"base": "latte", "flavors": ["vanilla"], "size": "large"}))
            .unwrap();

        assert_eq!(order.drink_count(), 1);
        assert_eq!(order.drinks()[0].base(), "Latte");
        assert_eq!(order.drinks()[0].cost().cents(), 220);
    }

    #[test]
    fn test_add_item_applies_defaults() {
        let mut order = Order::new();
        order.add_item(json!({"base": "espresso"})).unwrap();

        assert_eq!(order.drinks()[0].size(), Size::Medium);
        assert!(order.drinks()[0].flavors().is_empty());
    }

    #[test]
    fn test_add_item_rejects_non_drinks() {
        let mut order = latte_and_espresso();

        for bad in [json!(42), json!("latte"), json!(["latte"]), json!({"name": "latte"})] {
            let err = order.add_item(bad).unwrap_err();
            assert!(matches!(err, CoreError::InvalidItem { .. }));
        }

        // The order is untouched by rejected items
        assert_eq!(order.drink_count(), 2);
        assert_eq!(order.totals().subtotal_cents, 370);
    }

    #[test]
    fn test_add_item_rejects_off_menu_size_without_mutation() {
        let mut order = Order::new();
        let err = order
            .add_item(json!({"base": "latte", "size": "venti"}))
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidSize { .. }));
        assert!(order.is_empty());
    }
}
