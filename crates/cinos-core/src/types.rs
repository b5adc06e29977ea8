//! # Domain Types
//!
//! Core domain types used throughout Cinos POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                         │
//! │  │      Size       │        │     TaxRate     │                         │
//! │  │  ─────────────  │        │  ─────────────  │                         │
//! │  │  Small   $1.50  │        │  bps (u32)      │                         │
//! │  │  Medium  $1.75  │        │  725 = 7.25%    │                         │
//! │  │  Large   $2.05  │        └─────────────────┘                         │
//! │  │  Mega    $2.15  │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The size menu is a **closed set**: a Rust enum rather than a runtime map,
//! so an invalid size is unrepresentable once resolution has succeeded and
//! the compiler checks every price lookup for exhaustiveness.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 725 bps = 7.25% sales tax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
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

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Size Menu
// =============================================================================

/// A drink size on the menu, with its base price.
///
/// The canonical name of a size is its uppercase form (`"LARGE"`); that is
/// what receipts show and what serialized drinks carry. Resolution from
/// customer input is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Size {
    Small,
    Medium,
    Large,
    Mega,
}

impl Size {
    /// All menu sizes, in menu order.
    pub const ALL: [Size; 4] = [Size::Small, Size::Medium, Size::Large, Size::Mega];

    /// Resolves a size from a customer-facing name, case-insensitively.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidSize`] for any name not on the menu; the
    /// error message enumerates the valid names.
    ///
    /// ## Example
    /// ```rust
    /// use cinos_core::types::Size;
    ///
    /// assert_eq!(Size::resolve("large").unwrap(), Size::Large);
    /// assert_eq!(Size::resolve("MeGa").unwrap(), Size::Mega);
    /// assert!(Size::resolve("venti").is_err());
    /// ```
    pub fn resolve(name: &str) -> CoreResult<Size> {
        match name.to_uppercase().as_str() {
            "SMALL" => Ok(Size::Small),
            "MEDIUM" => Ok(Size::Medium),
            "LARGE" => Ok(Size::Large),
            "MEGA" => Ok(Size::Mega),
            _ => Err(CoreError::InvalidSize {
                given: name.to_string(),
                allowed: Size::names(),
            }),
        }
    }

    /// Returns the canonical (uppercase) name of this size.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "SMALL",
            Size::Medium => "MEDIUM",
            Size::Large => "LARGE",
            Size::Mega => "MEGA",
        }
    }

    /// Returns the base price for a drink of this size.
    ///
    /// Prices are fixed for the process lifetime.
    #[inline]
    pub const fn base_price(&self) -> Money {
        match self {
            Size::Small => Money::from_cents(150),
            Size::Medium => Money::from_cents(175),
            Size::Large => Money::from_cents(205),
            Size::Mega => Money::from_cents(215),
        }
    }

    /// The canonical names of every menu size, in menu order.
    pub fn names() -> Vec<String> {
        Size::ALL.iter().map(|s| s.as_str().to_string()).collect()
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
