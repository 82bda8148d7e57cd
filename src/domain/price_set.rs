//! Quote-denominated prices of the collateral and outcome tokens.

use super::{TokenRole, Wad};
use crate::error::PlannerError;

/// Spot prices of both collateral assets and their four outcome tokens,
/// all expressed in the quote asset.
///
/// A `PriceSet` only exists fully populated with strictly positive
/// prices: build it through [`PriceSetBuilder`] or derive it with
/// [`ConditionalPriceModel::price_set`](crate::pricing::ConditionalPriceModel::price_set).
///
/// # Examples
///
/// ```
/// use conditional_liquidity::domain::{PriceSet, TokenRole, Wad};
///
/// let prices = PriceSet::builder()
///     .collateral_a(Wad::from_integer(2))
///     .collateral_b(Wad::from_integer(1))
///     .yes_a(Wad::from_integer(1))
///     .no_a(Wad::from_integer(1))
///     .yes_b("0.5".parse().expect("decimal"))
///     .no_b("0.5".parse().expect("decimal"))
///     .build()
///     .expect("complete price set");
///
/// assert_eq!(prices.price_of(TokenRole::Quote), Wad::ONE);
/// assert_eq!(prices.price_of(TokenRole::CollateralA), Wad::from_integer(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PriceSetFields")
)]
pub struct PriceSet {
    collateral_a: Wad,
    collateral_b: Wad,
    yes_a: Wad,
    no_a: Wad,
    yes_b: Wad,
    no_b: Wad,
}

impl PriceSet {
    /// Starts an empty builder.
    #[must_use]
    pub fn builder() -> PriceSetBuilder {
        PriceSetBuilder::default()
    }

    /// Price of the token playing `role`, in quote units.
    ///
    /// The quote asset is worth exactly one of itself.
    #[must_use]
    pub const fn price_of(&self, role: TokenRole) -> Wad {
        match role {
            TokenRole::CollateralA => self.collateral_a,
            TokenRole::CollateralB => self.collateral_b,
            TokenRole::YesA => self.yes_a,
            TokenRole::NoA => self.no_a,
            TokenRole::YesB => self.yes_b,
            TokenRole::NoB => self.no_b,
            TokenRole::Quote => Wad::ONE,
        }
    }

    /// Collateral A in quote units.
    #[must_use]
    pub const fn collateral_a(&self) -> Wad {
        self.collateral_a
    }

    /// Collateral B in quote units.
    #[must_use]
    pub const fn collateral_b(&self) -> Wad {
        self.collateral_b
    }

    /// YES_A in quote units.
    #[must_use]
    pub const fn yes_a(&self) -> Wad {
        self.yes_a
    }

    /// NO_A in quote units.
    #[must_use]
    pub const fn no_a(&self) -> Wad {
        self.no_a
    }

    /// YES_B in quote units.
    #[must_use]
    pub const fn yes_b(&self) -> Wad {
        self.yes_b
    }

    /// NO_B in quote units.
    #[must_use]
    pub const fn no_b(&self) -> Wad {
        self.no_b
    }
}

/// Field-by-field constructor for [`PriceSet`].
///
/// `build` refuses to produce a set with a missing or zero price, so
/// partially fetched data can never reach the allocators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[must_use]
pub struct PriceSetBuilder {
    collateral_a: Option<Wad>,
    collateral_b: Option<Wad>,
    yes_a: Option<Wad>,
    no_a: Option<Wad>,
    yes_b: Option<Wad>,
    no_b: Option<Wad>,
}

impl PriceSetBuilder {
    /// Sets the collateral A price.
    pub const fn collateral_a(mut self, price: Wad) -> Self {
        self.collateral_a = Some(price);
        self
    }

    /// Sets the collateral B price.
    pub const fn collateral_b(mut self, price: Wad) -> Self {
        self.collateral_b = Some(price);
        self
    }

    /// Sets the YES_A price.
    pub const fn yes_a(mut self, price: Wad) -> Self {
        self.yes_a = Some(price);
        self
    }

    /// Sets the NO_A price.
    pub const fn no_a(mut self, price: Wad) -> Self {
        self.no_a = Some(price);
        self
    }

    /// Sets the YES_B price.
    pub const fn yes_b(mut self, price: Wad) -> Self {
        self.yes_b = Some(price);
        self
    }

    /// Sets the NO_B price.
    pub const fn no_b(mut self, price: Wad) -> Self {
        self.no_b = Some(price);
        self
    }

    /// Sets the price for `role`. Setting the quote price is a no-op.
    pub const fn set(self, role: TokenRole, price: Wad) -> Self {
        match role {
            TokenRole::CollateralA => self.collateral_a(price),
            TokenRole::CollateralB => self.collateral_b(price),
            TokenRole::YesA => self.yes_a(price),
            TokenRole::NoA => self.no_a(price),
            TokenRole::YesB => self.yes_b(price),
            TokenRole::NoB => self.no_b(price),
            TokenRole::Quote => self,
        }
    }

    /// Finishes the set.
    ///
    /// # Errors
    ///
    /// - [`PlannerError::MissingPrice`] naming the first unset field.
    /// - [`PlannerError::InvalidPrice`] naming the first zero price.
    pub fn build(self) -> crate::error::Result<PriceSet> {
        let require = |value: Option<Wad>, name: &'static str| -> crate::error::Result<Wad> {
            value
                .ok_or(PlannerError::MissingPrice(name))?
                .ensure_positive(name)
        };
        Ok(PriceSet {
            collateral_a: require(self.collateral_a, "collateral_a")?,
            collateral_b: require(self.collateral_b, "collateral_b")?,
            yes_a: require(self.yes_a, "yes_a")?,
            no_a: require(self.no_a, "no_a")?,
            yes_b: require(self.yes_b, "yes_b")?,
            no_b: require(self.no_b, "no_b")?,
        })
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PriceSetFields {
    collateral_a: Wad,
    collateral_b: Wad,
    yes_a: Wad,
    no_a: Wad,
    yes_b: Wad,
    no_b: Wad,
}

#[cfg(feature = "serde")]
impl TryFrom<PriceSetFields> for PriceSet {
    type Error = PlannerError;

    fn try_from(f: PriceSetFields) -> Result<Self, Self::Error> {
        PriceSet::builder()
            .collateral_a(f.collateral_a)
            .collateral_b(f.collateral_b)
            .yes_a(f.yes_a)
            .no_a(f.no_a)
            .yes_b(f.yes_b)
            .no_b(f.no_b)
            .build()
    }
}
