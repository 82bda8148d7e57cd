//! Outcome-token pricing.
//!
//! A conditional YES/NO pair is minted from one unit of collateral, so the
//! two outcome prices together approximate the collateral price. The
//! [`ConditionalPriceModel`] decides how that value is shared between them.

mod conditional_price_model;

pub use conditional_price_model::ConditionalPriceModel;
