//! Deposit amounts, tick ranges and the full pool plan.
//!
//! - [`constant_product`]: amounts that open an `x * y = k` pool at a
//!   target price.
//! - [`concentrated`]: band multiplier to spacing-aligned tick range, with
//!   the inversion fallback.
//! - [`orchestrator`]: wires both into the eight pools of a proposal.

pub mod concentrated;
pub mod constant_product;
pub mod orchestrator;

#[cfg(test)]
mod proptest_properties;

pub use concentrated::{compute_tick_range, sqrt_price_for, FALLBACK_SPACINGS};
pub use constant_product::{price_ratio, quote_anchored_amount, ratio_anchored_amount};
pub use orchestrator::PoolAllocationOrchestrator;
