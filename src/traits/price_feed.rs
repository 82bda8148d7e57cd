//! Seam to the source of collateral spot prices.

use thiserror::Error;

use crate::domain::{PriceSet, TokenDescriptor, TokenRole, Wad};
use crate::error::PlannerError;
use crate::pricing::ConditionalPriceModel;

/// Supplies spot prices already converted into the quote unit.
///
/// Implementations decide how prices are fetched, cached or retried.
pub trait PriceFeed {
    /// Failure reported by the feed.
    type Error;

    /// Spot price of `token` in quote units, at 18 decimals.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn spot_price(&self, token: &TokenDescriptor) -> Result<Wad, Self::Error>;
}

/// Failure while assembling a [`PriceSet`] from a [`PriceFeed`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError<E> {
    /// The feed could not supply a price.
    #[error("price feed failed for {role}: {reason}")]
    Feed {
        /// Role of the token whose price was requested.
        role: TokenRole,
        /// Error returned by the feed.
        reason: E,
    },

    /// The prices were fetched but could not be turned into a price set.
    #[error(transparent)]
    Planner(#[from] PlannerError),
}

/// Fetches both collateral prices, then derives the outcome prices.
///
/// Both prices are fetched before anything is derived; a partial set is
/// never produced.
///
/// # Errors
///
/// - [`FetchError::Planner`] with [`PlannerError::InvalidToken`] if the
///   descriptors do not carry the collateral roles.
/// - [`FetchError::Feed`] if the feed fails for either token.
/// - [`FetchError::Planner`] if a price is zero or too small to split.
pub fn fetch_price_set<F>(
    feed: &F,
    collateral_a: &TokenDescriptor,
    collateral_b: &TokenDescriptor,
    model: &ConditionalPriceModel,
) -> Result<PriceSet, FetchError<F::Error>>
where
    F: PriceFeed + ?Sized,
{
    if collateral_a.role() != TokenRole::CollateralA {
        return Err(PlannerError::InvalidToken("expected the collateral A descriptor").into());
    }
    if collateral_b.role() != TokenRole::CollateralB {
        return Err(PlannerError::InvalidToken("expected the collateral B descriptor").into());
    }
    let fetch = |token: &TokenDescriptor| {
        feed.spot_price(token).map_err(|reason| FetchError::Feed {
            role: token.role(),
            reason,
        })
    };
    let price_a = fetch(collateral_a)?;
    let price_b = fetch(collateral_b)?;
    tracing::debug!(collateral_a = %price_a, collateral_b = %price_b, "fetched collateral prices");
    Ok(model.price_set(price_a, price_b)?)
}

impl PriceSet {
    /// Fetches collateral prices from `feed` and derives the full set.
    ///
    /// Shorthand for [`fetch_price_set`].
    ///
    /// # Errors
    ///
    /// See [`fetch_price_set`].
    pub fn fetch<F>(
        feed: &F,
        collateral_a: &TokenDescriptor,
        collateral_b: &TokenDescriptor,
        model: &ConditionalPriceModel,
    ) -> Result<Self, FetchError<F::Error>>
    where
        F: PriceFeed + ?Sized,
    {
        fetch_price_set(feed, collateral_a, collateral_b, model)
    }
}
