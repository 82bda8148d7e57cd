//! Fully computed description of one pool to deploy.

use core::fmt;

use super::{FeeTier, TickRange, TokenDescriptor, Wad};
use crate::error::PlannerError;
use crate::math;

/// Pool mechanism, carrying the tick range when one is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolMechanism {
    /// `x · y = k` pool; price implied by the reserve ratio.
    ConstantProduct,
    /// Liquidity concentrated inside a tick range.
    ConcentratedLiquidity(TickRange),
}

impl PoolMechanism {
    /// Returns `true` for [`ConstantProduct`](Self::ConstantProduct).
    #[must_use]
    pub const fn is_constant_product(&self) -> bool {
        matches!(self, Self::ConstantProduct)
    }

    /// Returns `true` for [`ConcentratedLiquidity`](Self::ConcentratedLiquidity).
    #[must_use]
    pub const fn is_concentrated(&self) -> bool {
        matches!(self, Self::ConcentratedLiquidity(_))
    }
}

impl fmt::Display for PoolMechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstantProduct => f.write_str("constant-product"),
            Self::ConcentratedLiquidity(_) => f.write_str("concentrated"),
        }
    }
}

/// One pool the deployment collaborator should create and seed.
///
/// `initial_price` is the price of `token_x` in units of `token_y`. For a
/// constant-product pool it equals `amount_y / amount_x` up to truncation;
/// for a concentrated pool the amounts are the maximum deposits and the
/// range decides how much of each is used.
///
/// A `PoolSpec` is a plain value: it has no identity and is handed off once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PoolSpecFields")
)]
pub struct PoolSpec {
    token_x: TokenDescriptor,
    token_y: TokenDescriptor,
    amount_x: Wad,
    amount_y: Wad,
    initial_price: Wad,
    mechanism: PoolMechanism,
    fee_tier: FeeTier,
}

impl PoolSpec {
    /// Describes a constant-product pool.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn constant_product(
        token_x: TokenDescriptor,
        token_y: TokenDescriptor,
        amount_x: Wad,
        amount_y: Wad,
        initial_price: Wad,
        fee_tier: FeeTier,
    ) -> Result<Self, PlannerError> {
        let spec = Self {
            token_x,
            token_y,
            amount_x,
            amount_y,
            initial_price,
            mechanism: PoolMechanism::ConstantProduct,
            fee_tier,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Describes a concentrated-liquidity pool over `range`.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    #[allow(clippy::too_many_arguments)]
    pub fn concentrated(
        token_x: TokenDescriptor,
        token_y: TokenDescriptor,
        amount_x: Wad,
        amount_y: Wad,
        initial_price: Wad,
        fee_tier: FeeTier,
        range: TickRange,
    ) -> Result<Self, PlannerError> {
        let spec = Self {
            token_x,
            token_y,
            amount_x,
            amount_y,
            initial_price,
            mechanism: PoolMechanism::ConcentratedLiquidity(range),
            fee_tier,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Checks the spec's invariants.
    ///
    /// # Errors
    ///
    /// - [`PlannerError::InvalidToken`] if both sides are the same token.
    /// - [`PlannerError::InvalidQuantity`] if either amount is zero.
    /// - [`PlannerError::InvalidPrice`] if the initial price is zero.
    /// - [`PlannerError::InvalidConfiguration`] if the fee exceeds 100%.
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.token_x.address() == self.token_y.address() {
            return Err(PlannerError::InvalidToken(
                "pool requires two distinct token addresses",
            ));
        }
        if self.amount_x.is_zero() || self.amount_y.is_zero() {
            return Err(PlannerError::InvalidQuantity(
                "pool deposit amounts must be non-zero",
            ));
        }
        if self.initial_price.is_zero() {
            return Err(PlannerError::InvalidPrice("initial pool price must be non-zero"));
        }
        if !self.fee_tier.basis_points().is_valid_percent() {
            return Err(PlannerError::InvalidConfiguration(
                "fee tier must not exceed 10000 basis points",
            ));
        }
        Ok(())
    }

    /// Token whose price is quoted.
    #[must_use]
    pub const fn token_x(&self) -> &TokenDescriptor {
        &self.token_x
    }

    /// Token the price is quoted in.
    #[must_use]
    pub const fn token_y(&self) -> &TokenDescriptor {
        &self.token_y
    }

    /// Deposit of `token_x`.
    pub const fn amount_x(&self) -> Wad {
        self.amount_x
    }

    /// Deposit of `token_y`.
    pub const fn amount_y(&self) -> Wad {
        self.amount_y
    }

    /// Price of `token_x` in `token_y`.
    pub const fn initial_price(&self) -> Wad {
        self.initial_price
    }

    /// `sqrt(initial_price)` at 18 decimals, as concentrated pools expect.
    pub fn initial_sqrt_price(&self) -> Wad {
        math::sqrt_wad(self.initial_price)
    }

    /// Pool mechanism.
    #[must_use]
    pub const fn mechanism(&self) -> PoolMechanism {
        self.mechanism
    }

    /// Tick range for concentrated pools, `None` otherwise.
    #[must_use]
    pub const fn tick_range(&self) -> Option<TickRange> {
        match self.mechanism {
            PoolMechanism::ConcentratedLiquidity(range) => Some(range),
            PoolMechanism::ConstantProduct => None,
        }
    }

    /// Fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Human-readable pair label, e.g. `YES_A/QUOTE`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{}", self.token_x.role(), self.token_y.role())
    }

    /// Returns `true` if `token_x` already sorts below `token_y`.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.token_x.address() < self.token_y.address()
    }

    /// Reorders the spec so `token_x` has the lower address.
    ///
    /// Factories key pools by `(token0, token1)` with `token0 < token1`.
    /// Swapping sides swaps the amounts, replaces the price by its
    /// reciprocal and mirrors the tick range to `[-upper, -lower]`, which
    /// keeps both bounds spacing-aligned and ordered.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidPrice`] if the reciprocal price
    /// truncates to zero, or [`PlannerError::Overflow`] if it does not fit.
    pub fn into_canonical_order(self) -> Result<Self, PlannerError> {
        if self.is_canonical() {
            return Ok(self);
        }
        let inverse = math::div_wad(Wad::ONE, self.initial_price)?
            .ensure_positive("reciprocal pool price truncated to zero")?;
        let mechanism = match self.mechanism {
            PoolMechanism::ConstantProduct => PoolMechanism::ConstantProduct,
            PoolMechanism::ConcentratedLiquidity(range) => {
                PoolMechanism::ConcentratedLiquidity(range.inverted())
            }
        };
        Ok(Self {
            token_x: self.token_y,
            token_y: self.token_x,
            amount_x: self.amount_y,
            amount_y: self.amount_x,
            initial_price: inverse,
            mechanism,
            fee_tier: self.fee_tier,
        })
    }
}

impl fmt::Display for PoolSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} x={} y={} price={} fee={}",
            self.label(),
            self.mechanism,
            self.amount_x,
            self.amount_y,
            self.initial_price,
            self.fee_tier.basis_points()
        )?;
        if let Some(range) = self.tick_range() {
            write!(f, " ticks={range}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PoolSpecFields {
    token_x: TokenDescriptor,
    token_y: TokenDescriptor,
    amount_x: Wad,
    amount_y: Wad,
    initial_price: Wad,
    mechanism: PoolMechanism,
    fee_tier: FeeTier,
}

#[cfg(feature = "serde")]
impl TryFrom<PoolSpecFields> for PoolSpec {
    type Error = PlannerError;

    fn try_from(f: PoolSpecFields) -> Result<Self, Self::Error> {
        let spec = Self {
            token_x: f.token_x,
            token_y: f.token_y,
            amount_x: f.amount_x,
            amount_y: f.amount_y,
            initial_price: f.initial_price,
            mechanism: f.mechanism,
            fee_tier: f.fee_tier,
        };
        spec.validate()?;
        Ok(spec)
    }
}
