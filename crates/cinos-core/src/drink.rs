//! # Drink
//!
//! A drink is a base (the drink type), a size, and a list of flavor shots.
//!
//! ## Cost Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Drink Cost                                      │
//! │                                                                         │
//! │  cost = base_price(size) + FLAVOR_SURCHARGE × number_of_flavors         │
//! │                                                                         │
//! │  Large latte, one vanilla shot:   $2.05 + $0.15 = $2.20                 │
//! │  Small espresso, no flavors:      $1.50                                 │
//! │                                                                         │
//! │  Cost is recomputed on every call, never cached: change the size and    │
//! │  the next cost() call reflects it.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fields are private so that the normalization invariant (base and flavors
//! capitalized, size always on the menu) cannot be bypassed. Untyped input
//! enters through [`DrinkInput`] and is funneled into [`Drink::new`], so the
//! same validation runs on every construction path.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::Size;
use crate::validation::capitalize;
use crate::FLAVOR_SURCHARGE;

// =============================================================================
// Drink
// =============================================================================

/// A drink on an order: base type, size, and flavor shots.
///
/// Serializes for receipts and logs, but deliberately does **not** implement
/// `Deserialize`: untyped input must come in through [`DrinkInput`] so that
/// normalization and size validation always run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Drink {
    /// Drink type, capitalized ("Latte").
    base: String,

    /// Menu size. Being an enum, an off-menu size is unrepresentable here.
    size: Size,

    /// Flavor shots, each capitalized. Fixed at construction.
    flavors: Vec<String>,
}

impl Drink {
    /// Creates a drink, normalizing the base and flavors and resolving the
    /// size against the menu.
    ///
    /// ## Errors
    /// [`CoreError::InvalidSize`](crate::CoreError::InvalidSize) if `size`
    /// is not on the menu (matched case-insensitively).
    ///
    /// ## Example
    /// ```rust
    /// use cinos_core::Drink;
    ///
    /// let latte = Drink::new("latte", &["vanilla"], "large")?;
    /// assert_eq!(latte.base(), "Latte");
    /// assert_eq!(latte.flavors(), ["Vanilla"]);
    /// assert_eq!(latte.size().as_str(), "LARGE");
    /// assert_eq!(latte.cost().cents(), 220);
    /// # Ok::<(), cinos_core::CoreError>(())
    /// ```
    pub fn new(base: &str, flavors: &[&str], size: &str) -> CoreResult<Self> {
        let size = Size::resolve(size)?;
        Ok(Drink {
            base: capitalize(base),
            size,
            flavors: flavors.iter().map(|f| capitalize(f)).collect(),
        })
    }

    /// Creates a drink from the untyped-boundary DTO.
    ///
    /// Runs the exact same normalization and validation as [`Drink::new`].
    pub fn from_input(input: DrinkInput) -> CoreResult<Self> {
        let flavors: Vec<&str> = input.flavors.iter().map(String::as_str).collect();
        Drink::new(&input.base, &flavors, &input.size)
    }

    /// Returns the capitalized base name.
    #[inline]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Returns the size. `size().as_str()` gives the canonical uppercase name.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the capitalized flavor shots, in the order they were added.
    #[inline]
    pub fn flavors(&self) -> &[String] {
        &self.flavors
    }

    /// Changes the size, resolving the new name against the menu.
    ///
    /// On an invalid name the drink is left unchanged.
    ///
    /// ## Example
    /// ```rust
    /// use cinos_core::Drink;
    ///
    /// let mut drink = Drink::new("mocha", &[], "medium")?;
    /// drink.set_size("mega")?;
    /// assert_eq!(drink.cost().cents(), 215);
    ///
    /// assert!(drink.set_size("venti").is_err());
    /// assert_eq!(drink.size().as_str(), "MEGA"); // unchanged
    /// # Ok::<(), cinos_core::CoreError>(())
    /// ```
    pub fn set_size(&mut self, size: &str) -> CoreResult<()> {
        self.size = Size::resolve(size)?;
        Ok(())
    }

    /// Calculates the cost of this drink.
    ///
    /// Always recomputed from the current size and flavors; exact in cents.
    pub fn cost(&self) -> Money {
        self.size.base_price() + FLAVOR_SURCHARGE * self.flavors.len() as i64
    }
}

/// Human-readable drink description for logs and the register display.
///
/// ```text
/// LARGE Latte (flavors: Vanilla) $2.20
/// SMALL Espresso (flavors: None) $1.50
/// ```
impl fmt::Display for Drink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (flavors: ", self.size, self.base)?;
        if self.flavors.is_empty() {
            f.write_str("None")?;
        } else {
            f.write_str(&self.flavors.join(", "))?;
        }
        write!(f, ") {}", self.cost())
    }
}

// =============================================================================
// Drink Input DTO
// =============================================================================

/// The untyped-boundary shape of a drink, as received from JSON.
///
/// ## Defaults
/// - `flavors` defaults to an empty list when omitted
/// - `size` defaults to `"MEDIUM"` when omitted
///
/// This is only a transport shape; it carries no invariants. Convert with
/// [`Drink::from_input`] (or [`Order::add_item`](crate::Order::add_item)),
/// which normalizes and validates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrinkInput {
    pub base: String,

    #[serde(default)]
    pub flavors: Vec<String>,

    #[serde(default = "default_size")]
    pub size: String,
}

fn default_size() -> String {
    "MEDIUM".to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_new_normalizes_base_and_flavors() {
        let drink = Drink::new("lATTE", &["VANILLA", "hazelnut"], "large").unwrap();
        assert_eq!(drink.base(), "Latte");
        assert_eq!(drink.flavors(), ["Vanilla", "Hazelnut"]);
        assert_eq!(drink.size(), Size::Large);
    }

    #[test]
    fn test_new_accepts_any_size_casing() {
        for name in ["small", "SMALL", "Small"] {
            let drink = Drink::new("espresso", &[], name).unwrap();
            assert_eq!(drink.size().as_str(), "SMALL");
        }
    }

    #[test]
    fn test_new_rejects_unknown_size() {
        let err = Drink::new("latte", &[], "venti").unwrap_err();
        assert!(matches!(err, CoreError::InvalidSize { .. }));
    }

    #[test]
    fn test_cost_examples() {
        // Large latte with vanilla: $2.05 + $0.15 = $2.20
        let latte = Drink::new("latte", &["vanilla"], "large").unwrap();
        assert_eq!(latte.cost().cents(), 220);

        // Small espresso, no flavors: $1.50
        let espresso = Drink::new("espresso", &[], "small").unwrap();
        assert_eq!(espresso.cost().cents(), 150);
    }

    #[test]
    fn test_cost_increases_per_flavor() {
        // Holding size fixed, each flavor adds exactly the surcharge
        let mut previous = Drink::new("latte", &[], "medium").unwrap().cost();
        let flavors = ["vanilla", "caramel", "hazelnut", "mocha"];
        for n in 1..=flavors.len() {
            let cost = Drink::new("latte", &flavors[..n], "medium").unwrap().cost();
            assert_eq!(cost.cents(), previous.cents() + 15);
            previous = cost;
        }
    }

    #[test]
    fn test_set_size_changes_cost() {
        let mut drink = Drink::new("latte", &["vanilla"], "medium").unwrap();
        assert_eq!(drink.cost().cents(), 190);

        drink.set_size("large").unwrap();
        assert_eq!(drink.size(), Size::Large);
        // cost() is recomputed, not cached
        assert_eq!(drink.cost().cents(), 220);
    }

    #[test]
    fn test_set_size_invalid_leaves_drink_unchanged() {
        let mut drink = Drink::new("latte", &[], "large").unwrap();

        let err = drink.set_size("grande").unwrap_err();
        assert!(matches!(err, CoreError::InvalidSize { .. }));
        assert_eq!(drink.size(), Size::Large);
        assert_eq!(drink.cost().cents(), 205);
    }

    #[test]
    fn test_display() {
        let latte = Drink::new("latte", &["vanilla"], "large").unwrap();
        assert_eq!(latte.to_string(), "LARGE Latte (flavors: Vanilla) $2.20");

        let espresso = Drink::new("espresso", &[], "small").unwrap();
        assert_eq!(espresso.to_string(), "SMALL Espresso (flavors: None) $1.50");
    }

    #[test]
    fn test_from_input_applies_defaults() {
        let input: DrinkInput = serde_json::from_str(r#"{"base": "latte"}"#).unwrap();
        assert_eq!(input.size, "MEDIUM");
        assert!(input.flavors.is_empty());

        let drink = Drink::from_input(input).unwrap();
        assert_eq!(drink.size(), Size::Medium);
        assert_eq!(drink.cost().cents(), 175);
    }

    #[test]
    fn test_from_input_normalizes_like_new() {
        let input: DrinkInput =
            serde_json::from_str(r#"{"base": "mocha", "flavors": ["MINT"], "size": "mega"}"#)
                .unwrap();
        let drink = Drink::from_input(input).unwrap();
        assert_eq!(drink.base(), "Mocha");
        assert_eq!(drink.flavors(), ["Mint"]);
        assert_eq!(drink.size(), Size::Mega);
    }

    #[test]
    fn test_serializes_canonical_form() {
        let drink = Drink::new("latte", &["vanilla"], "large").unwrap();
        let json = serde_json::to_value(&drink).unwrap();
        assert_eq!(json["base"], "Latte");
        assert_eq!(json["size"], "LARGE");
        assert_eq!(json["flavors"][0], "Vanilla");
    }
}
