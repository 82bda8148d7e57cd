//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use conditional_liquidity::prelude::*;
//!
//! let config = PlannerConfig::new(Wad::ONE, Wad::ONE, Wad::ONE)?;
//! assert_eq!(config.tick_spacing(), 10);
//! # Ok::<(), PlannerError>(())
//! ```

pub use crate::domain::{
    BasisPoints, ConditionalTokens, Decimals, FeeTier, PoolMechanism, PoolSpec, PriceSet, Tick,
    TickRange, TokenAddress, TokenDescriptor, TokenRole, Wad,
};

pub use crate::allocation::{compute_tick_range, PoolAllocationOrchestrator};
pub use crate::config::PlannerConfig;
pub use crate::pricing::ConditionalPriceModel;
pub use crate::traits::{deploy_pool, PoolDeployer, PriceFeed};

pub use crate::error::{PlannerError, Result};
