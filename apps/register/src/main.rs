//! # Cinos Register
//!
//! Demonstration register: rings up a sample order and prints the receipt.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Drink::new ──► Order::add_drink ──► Order::receipt ──► stdout (JSON)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Run with `RUST_LOG=debug` for per-drink logging.

use cinos_core::{Drink, Order, SALES_TAX_RATE};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(
        tax_rate_pct = SALES_TAX_RATE.percentage(),
        "Opening sample order"
    );

    let latte = Drink::new("latte", &["vanilla"], "large")?;
    let espresso = Drink::new("espresso", &[], "small")?;
    debug!(%latte, %espresso, "Drinks built");

    let mut order = Order::new();
    order.add_drink(latte);
    order.add_drink(espresso);
    info!(
        order_id = order.id(),
        drinks = order.drink_count(),
        "Order rung up"
    );

    let totals = order.totals();
    info!(
        subtotal_cents = totals.subtotal_cents,
        tax_cents = totals.tax_cents,
        total_cents = totals.total_cents,
        "Order totals"
    );

    // The structured receipt, as a frontend would receive it
    println!("{}", serde_json::to_string_pretty(&order.receipt())?);

    // And a per-drink description, as the register display shows it
    for drink in order.drinks() {
        println!("{drink}");
    }

    Ok(())
}
