//! Configuration record for one liquidity-planning run.

use crate::domain::{FeeTier, Wad, WAD};
use crate::error::PlannerError;
use crate::math::validate_spacing;
use crate::pricing::ConditionalPriceModel;

/// Default band multiplier: `1.2`, a band of about ±20% around the ratio.
pub const DEFAULT_BAND_MULTIPLIER: Wad = Wad::from_raw(1_200_000_000_000_000_000);

/// Default tick spacing, matching the 0.10% fee tier.
pub const DEFAULT_TICK_SPACING: u32 = 10;

/// Default fee tier of the concentrated-liquidity cross pools.
pub const DEFAULT_CONCENTRATED_FEE_TIER: FeeTier = FeeTier::TIER_0_10_PERCENT;

/// Default fee tier of the constant-product pools.
pub const DEFAULT_CONSTANT_PRODUCT_FEE_TIER: FeeTier = FeeTier::TIER_0_30_PERCENT;

/// Immutable parameters of the pool allocation orchestrator.
///
/// Only the three deposit sizes are required; everything else starts at
/// the defaults above and can be overridden with the `with_*` methods,
/// which do not validate. [`validate`](Self::validate) runs again when the
/// config is handed to the orchestrator.
///
/// # Validation
///
/// - All three amounts must be non-zero.
/// - `band_multiplier` must be strictly above `1.0`.
/// - Both fee tiers must be at most 100%.
/// - `tick_spacing` must be in `1..=16384`.
/// - The price model's YES share must be strictly between 0% and 100%.
///
/// # Examples
///
/// ```
/// use conditional_liquidity::config::PlannerConfig;
/// use conditional_liquidity::domain::{FeeTier, Wad};
///
/// let config = PlannerConfig::new(
///     Wad::from_integer(1_000),
///     Wad::from_integer(500),
///     Wad::from_integer(500),
/// )?
/// .with_tick_spacing(60)
/// .with_concentrated_fee_tier(FeeTier::TIER_0_30_PERCENT);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.band_multiplier().to_string(), "1.2");
/// # Ok::<(), conditional_liquidity::error::PlannerError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PlannerConfigFields")
)]
pub struct PlannerConfig {
    quote_anchor_amount: Wad,
    base_amount_a: Wad,
    base_amount_b: Wad,
    band_multiplier: Wad,
    concentrated_fee_tier: FeeTier,
    constant_product_fee_tier: FeeTier,
    tick_spacing: u32,
    price_model: ConditionalPriceModel,
}

impl PlannerConfig {
    /// Creates a config with the given deposit sizes and default policy.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidQuantity`] if any amount is zero.
    pub fn new(
        quote_anchor_amount: Wad,
        base_amount_a: Wad,
        base_amount_b: Wad,
    ) -> Result<Self, PlannerError> {
        let config = Self {
            quote_anchor_amount,
            base_amount_a,
            base_amount_b,
            band_multiplier: DEFAULT_BAND_MULTIPLIER,
            concentrated_fee_tier: DEFAULT_CONCENTRATED_FEE_TIER,
            constant_product_fee_tier: DEFAULT_CONSTANT_PRODUCT_FEE_TIER,
            tick_spacing: DEFAULT_TICK_SPACING,
            price_model: ConditionalPriceModel::EVEN,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`PlannerError::InvalidQuantity`] if any amount is zero.
    /// - [`PlannerError::InvalidConfiguration`] if the band multiplier is
    ///   not above one, a fee tier exceeds 100% or the price model share
    ///   is degenerate.
    /// - [`PlannerError::InvalidTickSpacing`] if the spacing is unusable.
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.quote_anchor_amount.is_zero() {
            return Err(PlannerError::InvalidQuantity(
                "quote anchor amount must be positive",
            ));
        }
        if self.base_amount_a.is_zero() {
            return Err(PlannerError::InvalidQuantity("base amount A must be positive"));
        }
        if self.base_amount_b.is_zero() {
            return Err(PlannerError::InvalidQuantity("base amount B must be positive"));
        }
        if self.band_multiplier.get() <= WAD {
            return Err(PlannerError::InvalidConfiguration(
                "band multiplier must be greater than 1.0",
            ));
        }
        if !self.concentrated_fee_tier.basis_points().is_valid_percent()
            || !self.constant_product_fee_tier.basis_points().is_valid_percent()
        {
            return Err(PlannerError::InvalidConfiguration(
                "fee tier must not exceed 10000 basis points (100%)",
            ));
        }
        validate_spacing(self.tick_spacing)?;
        self.price_model.validate()
    }

    /// Overrides the band multiplier.
    #[must_use]
    pub const fn with_band_multiplier(mut self, band_multiplier: Wad) -> Self {
        self.band_multiplier = band_multiplier;
        self
    }

    /// Overrides the fee tier of the concentrated cross pools.
    #[must_use]
    pub const fn with_concentrated_fee_tier(mut self, fee_tier: FeeTier) -> Self {
        self.concentrated_fee_tier = fee_tier;
        self
    }

    /// Overrides the fee tier of the constant-product pools.
    #[must_use]
    pub const fn with_constant_product_fee_tier(mut self, fee_tier: FeeTier) -> Self {
        self.constant_product_fee_tier = fee_tier;
        self
    }

    /// Overrides the tick spacing.
    #[must_use]
    pub const fn with_tick_spacing(mut self, tick_spacing: u32) -> Self {
        self.tick_spacing = tick_spacing;
        self
    }

    /// Overrides the YES/NO price model.
    #[must_use]
    pub const fn with_price_model(mut self, price_model: ConditionalPriceModel) -> Self {
        self.price_model = price_model;
        self
    }

    /// Quote-side deposit of every token/quote pool.
    #[must_use]
    pub const fn quote_anchor_amount(&self) -> Wad {
        self.quote_anchor_amount
    }

    /// Deposit of the first token of each concentrated cross pool.
    #[must_use]
    pub const fn base_amount_a(&self) -> Wad {
        self.base_amount_a
    }

    /// Deposit of the second token of each concentrated cross pool.
    #[must_use]
    pub const fn base_amount_b(&self) -> Wad {
        self.base_amount_b
    }

    /// Multiplier defining the concentrated price band.
    #[must_use]
    pub const fn band_multiplier(&self) -> Wad {
        self.band_multiplier
    }

    /// Fee tier of the concentrated cross pools.
    #[must_use]
    pub const fn concentrated_fee_tier(&self) -> FeeTier {
        self.concentrated_fee_tier
    }

    /// Fee tier of the constant-product pools.
    #[must_use]
    pub const fn constant_product_fee_tier(&self) -> FeeTier {
        self.constant_product_fee_tier
    }

    /// Tick spacing of the concentrated cross pools.
    #[must_use]
    pub const fn tick_spacing(&self) -> u32 {
        self.tick_spacing
    }

    /// Model used to derive outcome prices.
    #[must_use]
    pub const fn price_model(&self) -> ConditionalPriceModel {
        self.price_model
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PlannerConfigFields {
    quote_anchor_amount: Wad,
    base_amount_a: Wad,
    base_amount_b: Wad,
    band_multiplier: Wad,
    concentrated_fee_tier: FeeTier,
    constant_product_fee_tier: FeeTier,
    tick_spacing: u32,
    price_model: ConditionalPriceModel,
}

#[cfg(feature = "serde")]
impl TryFrom<PlannerConfigFields> for PlannerConfig {
    type Error = PlannerError;

    fn try_from(f: PlannerConfigFields) -> Result<Self, Self::Error> {
        let config = Self {
            quote_anchor_amount: f.quote_anchor_amount,
            base_amount_a: f.base_amount_a,
            base_amount_b: f.base_amount_b,
            band_multiplier: f.band_multiplier,
            concentrated_fee_tier: f.concentrated_fee_tier,
            constant_product_fee_tier: f.constant_product_fee_tier,
            tick_spacing: f.tick_spacing,
            price_model: f.price_model,
        };
        config.validate()?;
        Ok(config)
    }
}
