//! Stateful adaptive-pricing engine layered on the `curve` arithmetic.
//!
//! One `PricingEngine` instance manages exactly one price stream:
//! seed it with `start`, read it with `current_price`, and settle sales
//! against it with `purchase`.

pub mod engine;
pub mod error;
pub mod params;
pub mod state;
pub mod transfer;
