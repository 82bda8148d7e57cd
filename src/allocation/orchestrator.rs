//! Assembles every pool a proposal needs.

use crate::config::PlannerConfig;
use crate::domain::{
    ConditionalTokens, PoolSpec, PriceSet, TokenDescriptor, TokenRole, Wad, WAD,
};
use crate::error::PlannerError;

use super::concentrated::compute_tick_range;
use super::constant_product::{price_ratio, quote_anchored_amount, ratio_anchored_amount};

/// Anchor deposit of the second token of each constant-product cross pool.
const CROSS_POOL_ANCHOR: Wad = Wad::from_raw(WAD);

/// Plans the eight pools of a two-collateral, two-outcome proposal.
///
/// [`plan`](Self::plan) returns, in this order:
///
/// | # | Pair | Mechanism | Amounts |
/// |---|------|-----------|---------|
/// | 0-3 | `YES_A`, `NO_A`, `YES_B`, `NO_B` against the quote token | constant product | quote side fixed at `quote_anchor_amount` |
/// | 4-5 | `YES_A/YES_B`, `NO_A/NO_B` | constant product | second side fixed at `1.0` |
/// | 6-7 | `YES_A/YES_B`, `NO_A/NO_B` | concentrated | `base_amount_a` / `base_amount_b` over the band range |
///
/// Planning is fail-fast: the first pool that cannot be computed aborts the
/// run with [`PlannerError::PoolCalculation`] naming the pair and its input
/// price. Identical inputs always produce identical specs.
///
/// # Examples
///
/// ```
/// use conditional_liquidity::allocation::PoolAllocationOrchestrator;
/// use conditional_liquidity::config::PlannerConfig;
/// use conditional_liquidity::domain::{
///     ConditionalTokens, Decimals, PriceSet, TokenAddress, TokenDescriptor, TokenRole, Wad,
/// };
///
/// let token = |b: u8, role| TokenDescriptor::new(TokenAddress::from_bytes([b; 20]), role, Decimals::MAX);
/// let tokens = ConditionalTokens::new(
///     token(1, TokenRole::YesA),
///     token(2, TokenRole::NoA),
///     token(3, TokenRole::YesB),
///     token(4, TokenRole::NoB),
/// )?;
/// let quote = token(9, TokenRole::Quote);
///
/// let config = PlannerConfig::new(Wad::from_integer(100), Wad::from_integer(10), Wad::from_integer(10))?;
/// let prices = PriceSet::derive(Wad::from_integer(2), Wad::from_integer(2), &config.price_model())?;
///
/// let specs = PoolAllocationOrchestrator::new(config)?.plan(&tokens, &quote, &prices)?;
/// assert_eq!(specs.len(), 8);
/// assert_eq!(specs[0].label(), "YES_A/QUOTE");
/// assert!(specs[7].tick_range().is_some());
/// # Ok::<(), conditional_liquidity::error::PlannerError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolAllocationOrchestrator {
    config: PlannerConfig,
}

impl PoolAllocationOrchestrator {
    /// Number of pools in every plan.
    pub const POOL_COUNT: usize = 8;

    /// Creates an orchestrator.
    ///
    /// # Errors
    ///
    /// Propagates [`PlannerConfig::validate`].
    pub fn new(config: PlannerConfig) -> Result<Self, PlannerError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans all pools for `tokens` against `quote`.
    ///
    /// # Errors
    ///
    /// - [`PlannerError::InvalidToken`] if `quote` does not have the
    ///   [`TokenRole::Quote`] role.
    /// - [`PlannerError::PoolCalculation`] wrapping the first failure of an
    ///   individual pool.
    pub fn plan(
        &self,
        tokens: &ConditionalTokens,
        quote: &TokenDescriptor,
        prices: &PriceSet,
    ) -> Result<Vec<PoolSpec>, PlannerError> {
        if quote.role() != TokenRole::Quote {
            return Err(PlannerError::InvalidToken(
                "quote descriptor must have the quote role",
            ));
        }

        let mut specs = Vec::with_capacity(Self::POOL_COUNT);
        for token in tokens.as_array() {
            specs.push(self.quote_pool(token, *quote, prices.price_of(token.role()))?);
        }
        let cross_pairs = [
            (*tokens.yes_a(), *tokens.yes_b()),
            (*tokens.no_a(), *tokens.no_b()),
        ];
        for (x, y) in cross_pairs {
            specs.push(self.cross_pool(x, y, prices)?);
        }
        for (x, y) in cross_pairs {
            specs.push(self.concentrated_cross_pool(x, y, prices)?);
        }

        for spec in &specs {
            tracing::debug!(
                pool = %spec.label(),
                mechanism = %spec.mechanism(),
                amount_x = %spec.amount_x(),
                amount_y = %spec.amount_y(),
                price = %spec.initial_price(),
                "planned pool"
            );
        }
        let fallbacks = specs
            .iter()
            .filter_map(PoolSpec::tick_range)
            .filter(|range| range.is_fallback())
            .count();
        tracing::info!(
            pools = specs.len(),
            fallback_ranges = fallbacks,
            "liquidity plan complete"
        );
        Ok(specs)
    }

    /// Plans all pools from collateral spot prices, deriving the outcome
    /// prices with the configured price model.
    ///
    /// # Errors
    ///
    /// Propagates [`ConditionalPriceModel::price_set`](crate::pricing::ConditionalPriceModel::price_set)
    /// and [`plan`](Self::plan).
    pub fn plan_from_collateral(
        &self,
        tokens: &ConditionalTokens,
        quote: &TokenDescriptor,
        collateral_a: Wad,
        collateral_b: Wad,
    ) -> Result<Vec<PoolSpec>, PlannerError> {
        let prices = self.config.price_model().price_set(collateral_a, collateral_b)?;
        self.plan(tokens, quote, &prices)
    }

    fn quote_pool(
        &self,
        token: TokenDescriptor,
        quote: TokenDescriptor,
        price: Wad,
    ) -> Result<PoolSpec, PlannerError> {
        let label = || format!("{}/{}", token.role(), quote.role());
        let quote_amount = self.config.quote_anchor_amount();
        let amount = quote_anchored_amount(quote_amount, price)
            .map_err(|e| e.in_pool(label(), price))?;
        PoolSpec::constant_product(
            token,
            quote,
            amount,
            quote_amount,
            price,
            self.config.constant_product_fee_tier(),
        )
        .map_err(|e| e.in_pool(label(), price))
    }

    fn cross_pool(
        &self,
        x: TokenDescriptor,
        y: TokenDescriptor,
        prices: &PriceSet,
    ) -> Result<PoolSpec, PlannerError> {
        let label = || format!("{}/{}", x.role(), y.role());
        let (ratio, input) = cross_ratio(x, y, prices).map_err(|(e, p)| e.in_pool(label(), p))?;
        let amount = ratio_anchored_amount(CROSS_POOL_ANCHOR, ratio)
            .map_err(|e| e.in_pool(label(), input))?;
        PoolSpec::constant_product(
            x,
            y,
            amount,
            CROSS_POOL_ANCHOR,
            ratio,
            self.config.constant_product_fee_tier(),
        )
        .map_err(|e| e.in_pool(label(), input))
    }

    fn concentrated_cross_pool(
        &self,
        x: TokenDescriptor,
        y: TokenDescriptor,
        prices: &PriceSet,
    ) -> Result<PoolSpec, PlannerError> {
        let label = || format!("{}/{} (concentrated)", x.role(), y.role());
        let (ratio, input) = cross_ratio(x, y, prices).map_err(|(e, p)| e.in_pool(label(), p))?;
        let range = compute_tick_range(
            ratio,
            self.config.band_multiplier(),
            self.config.tick_spacing(),
        )
        .map_err(|e| e.in_pool(label(), input))?;
        PoolSpec::concentrated(
            x,
            y,
            self.config.base_amount_a(),
            self.config.base_amount_b(),
            ratio,
            self.config.concentrated_fee_tier(),
            range,
        )
        .map_err(|e| e.in_pool(label(), input))
    }
}

/// Price of `x` in units of `y`, paired with the value to report on
/// failure: the ratio itself, or the price of `x` when no ratio exists.
fn cross_ratio(
    x: TokenDescriptor,
    y: TokenDescriptor,
    prices: &PriceSet,
) -> Result<(Wad, Wad), (PlannerError, Wad)> {
    let price_x = prices.price_of(x.role());
    let price_y = prices.price_of(y.role());
    price_ratio(price_x, price_y)
        .map(|ratio| (ratio, ratio))
        .map_err(|e| (e, price_x))
}
