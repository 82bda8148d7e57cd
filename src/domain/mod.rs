//! Value types of the liquidity-planning domain.
//!
//! Tokens and their roles, 18-decimal fixed-point values, ticks and tick
//! ranges, fee tiers, the price set fed into planning and the pool specs
//! that come out of it. Constructors validate, so a value that exists is a
//! value that satisfies its invariants.

mod basis_points;
mod conditional_tokens;
mod decimals;
mod fee_tier;
mod pool_spec;
mod price_set;
mod rounding;
mod tick;
mod tick_range;
mod token;
mod token_address;
mod token_role;
mod wad;

pub use basis_points::BasisPoints;
pub use conditional_tokens::ConditionalTokens;
pub use decimals::Decimals;
pub use fee_tier::FeeTier;
pub use pool_spec::{PoolMechanism, PoolSpec};
pub use price_set::{PriceSet, PriceSetBuilder};
pub use rounding::Rounding;
pub use tick::Tick;
pub use tick_range::TickRange;
pub use token::TokenDescriptor;
pub use token_address::TokenAddress;
pub use token_role::TokenRole;
pub use wad::{Wad, WAD};
