//! # Conditional Liquidity
//!
//! Deposit amounts and concentrated-liquidity tick ranges for the AMM pools
//! of a conditional-token proposal.
//!
//! A proposal over two collateral assets mints four outcome tokens:
//! `YES_A`, `NO_A`, `YES_B` and `NO_B`. Given the collateral spot prices in
//! a common quote unit, this crate plans the eight pools that make them
//! tradable:
//!
//! - four constant-product pools pairing each outcome token with the quote
//!   token,
//! - two constant-product cross pools, `YES_A/YES_B` and `NO_A/NO_B`,
//! - the same two cross pairs as concentrated-liquidity pools over a band
//!   around the current price ratio.
//!
//! All arithmetic is 18-decimal fixed point on integers, so a plan is
//! bit-for-bit reproducible. Deploying the pools and fetching prices are
//! left to the caller through the [`traits`] seams.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for domain values, configuration and pool specs |
//!
//! # Quick Start
//!
//! ```rust
//! use conditional_liquidity::allocation::PoolAllocationOrchestrator;
//! use conditional_liquidity::config::PlannerConfig;
//! use conditional_liquidity::domain::{
//!     ConditionalTokens, Decimals, TokenAddress, TokenDescriptor, TokenRole, Wad,
//! };
//!
//! // 1. Resolve the outcome tokens and the quote token by role
//! let descriptor = |byte: u8, role| {
//!     TokenDescriptor::new(TokenAddress::from_bytes([byte; 20]), role, Decimals::MAX)
//! };
//! let tokens = ConditionalTokens::new(
//!     descriptor(1, TokenRole::YesA),
//!     descriptor(2, TokenRole::NoA),
//!     descriptor(3, TokenRole::YesB),
//!     descriptor(4, TokenRole::NoB),
//! )?;
//! let quote = descriptor(9, TokenRole::Quote);
//!
//! // 2. Fix the deposit sizes; band, fee tiers and spacing use defaults
//! let config = PlannerConfig::new(
//!     Wad::from_integer(1_000),
//!     Wad::from_integer(100),
//!     Wad::from_integer(100),
//! )?;
//!
//! // 3. Plan from the collateral spot prices
//! let orchestrator = PoolAllocationOrchestrator::new(config)?;
//! let specs = orchestrator.plan_from_collateral(
//!     &tokens,
//!     &quote,
//!     Wad::from_integer(2),
//!     "1.5".parse()?,
//! )?;
//!
//! assert_eq!(specs.len(), 8);
//! for spec in &specs {
//!     println!("{spec}");
//! }
//! # Ok::<(), conditional_liquidity::error::PlannerError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  PriceFeed   │  collateral spot prices (caller-provided)
//! └──────┬───────┘
//!        │ ConditionalPriceModel::price_set
//!        ▼
//! ┌──────────────┐
//! │   PriceSet   │  collateral + four outcome prices
//! └──────┬───────┘
//!        │ PoolAllocationOrchestrator::plan
//!        ▼
//! ┌──────────────┐
//! │  Allocators  │  constant-product amounts, concentrated tick ranges
//! └──────┬───────┘
//!        │ Vec<PoolSpec>
//!        ▼
//! ┌──────────────┐
//! │ PoolDeployer │  pool creation (caller-provided)
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Validated value types: [`Wad`](domain::Wad), [`Tick`](domain::Tick), [`PoolSpec`](domain::PoolSpec), etc. |
//! | [`math`] | `mul_div`, square root, binary logarithm, tick math |
//! | [`pricing`] | [`ConditionalPriceModel`](pricing::ConditionalPriceModel) YES/NO split |
//! | [`allocation`] | Constant-product amounts, tick ranges and the [`PoolAllocationOrchestrator`](allocation::PoolAllocationOrchestrator) |
//! | [`config`] | [`PlannerConfig`](config::PlannerConfig) and its defaults |
//! | [`traits`] | [`PriceFeed`](traits::PriceFeed) and [`PoolDeployer`](traits::PoolDeployer) seams |
//! | [`error`] | [`PlannerError`](error::PlannerError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod allocation;
pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
pub mod pricing;
pub mod traits;
