//! Planner configuration.
//!
//! [`PlannerConfig`] is the explicit, immutable record passed to the
//! [`PoolAllocationOrchestrator`](crate::allocation::PoolAllocationOrchestrator).
//! There is no global or environment-sourced configuration.

mod planner_config;

pub use planner_config::{
    PlannerConfig, DEFAULT_BAND_MULTIPLIER, DEFAULT_CONCENTRATED_FEE_TIER,
    DEFAULT_CONSTANT_PRODUCT_FEE_TIER, DEFAULT_TICK_SPACING,
};
