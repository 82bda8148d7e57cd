//! Unified error type for the liquidity planner.
//!
//! Every fallible operation in the crate returns [`PlannerError`]. Apart
//! from [`PoolCalculation`](PlannerError::PoolCalculation), which the
//! orchestrator uses to attach pool context, all variants describe a single
//! local failure: a violated precondition or an arithmetic overflow. Nothing
//! in the crate retries.

use thiserror::Error;

use crate::domain::Wad;

/// Errors produced by the fixed-point math, the allocators and the
/// orchestrator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    /// A price or ratio was zero or otherwise unusable.
    #[error("invalid price: {0}")]
    InvalidPrice(&'static str),

    /// A price set was assembled without one of its required fields.
    #[error("missing price: {0}")]
    MissingPrice(&'static str),

    /// Tick spacing was zero or too large to leave a usable tick range.
    #[error("invalid tick spacing: {0}")]
    InvalidTickSpacing(&'static str),

    /// A configuration record failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A token descriptor was missing, duplicated or had the wrong role.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// An amount was zero or truncated to zero.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// Token decimals outside `0..=18`.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// A tick fell outside the representable range.
    #[error("invalid tick: {0}")]
    InvalidTick(&'static str),

    /// `log2` is undefined for zero.
    #[error("logarithm input must be strictly positive")]
    InvalidLogarithmInput,

    /// Division by a zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// An intermediate or final value exceeded the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// An input string could not be parsed.
    #[error("parse error: {0}")]
    ParseError(&'static str),

    /// A single pool could not be planned.
    #[error("failed to plan {pool} pool at price {price}: {source}")]
    PoolCalculation {
        /// Pool label, e.g. `YES_A/YES_B (concentrated)`.
        pool: String,
        /// Price or ratio the calculation was fed.
        price: Wad,
        /// Underlying failure.
        source: Box<PlannerError>,
    },
}

impl PlannerError {
    /// Wraps this error with the pool label and input price it occurred for.
    #[must_use]
    pub fn in_pool(self, pool: impl Into<String>, price: Wad) -> Self {
        Self::PoolCalculation {
            pool: pool.into(),
            price,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping any pool context.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::PoolCalculation { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, PlannerError>;
