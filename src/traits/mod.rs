//! Collaborator seams at the crate boundary.
//!
//! The planner is pure computation. Fetching prices and deploying pools
//! belong to the surrounding system and enter only through these traits:
//! [`PriceFeed`] supplies collateral spot prices, [`PoolDeployer`] turns
//! [`PoolSpec`](crate::domain::PoolSpec)s into pools.

mod pool_deployer;
mod price_feed;

pub use pool_deployer::{deploy_plan, deploy_pool, PoolDeployer};
pub use price_feed::{fetch_price_set, FetchError, PriceFeed};
