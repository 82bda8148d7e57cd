//! Splitting a collateral price into YES and NO prices.

use core::fmt;

use crate::domain::{BasisPoints, PriceSet, Rounding, Wad};
use crate::error::PlannerError;
use crate::math::mul_div;

/// Share of a collateral price assigned to its YES token.
///
/// The default is an even split: each side gets `collateral / 2`, truncated,
/// so an odd raw price loses one unit. Any other share computes
/// `yes = collateral * share / 10000` and `no = collateral * (10000 - share) / 10000`,
/// both truncated. In every case `yes + no` is at most `collateral` and at
/// least `collateral - 1`.
///
/// # Examples
///
/// ```
/// use conditional_liquidity::domain::{BasisPoints, Wad};
/// use conditional_liquidity::pricing::ConditionalPriceModel;
///
/// let even = ConditionalPriceModel::default();
/// assert_eq!(
///     even.split_price(Wad::from_integer(2))?,
///     (Wad::ONE, Wad::ONE)
/// );
///
/// let skewed = ConditionalPriceModel::new(BasisPoints::new(7_500))?;
/// let (yes, no) = skewed.split_price(Wad::from_integer(4))?;
/// assert_eq!((yes, no), (Wad::from_integer(3), Wad::ONE));
/// # Ok::<(), conditional_liquidity::error::PlannerError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PriceModelFields")
)]
pub struct ConditionalPriceModel {
    yes_share: BasisPoints,
}

impl ConditionalPriceModel {
    /// The even 50/50 split.
    pub const EVEN: Self = Self {
        yes_share: BasisPoints::HALF,
    };

    /// Creates a model giving `yes_share` of the collateral price to YES.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidConfiguration`] unless
    /// `0 < yes_share < 10000`.
    pub fn new(yes_share: BasisPoints) -> Result<Self, PlannerError> {
        let model = Self { yes_share };
        model.validate()?;
        Ok(model)
    }

    /// Checks that neither side of the split can be zero by construction.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidConfiguration`] if the share is 0%
    /// or at least 100%.
    pub const fn validate(&self) -> Result<(), PlannerError> {
        if self.yes_share.get() == 0 {
            return Err(PlannerError::InvalidConfiguration(
                "yes share must be greater than zero",
            ));
        }
        if self.yes_share.get() >= BasisPoints::MAX_PERCENT.get() {
            return Err(PlannerError::InvalidConfiguration(
                "yes share must be below 10000 basis points",
            ));
        }
        Ok(())
    }

    /// Share assigned to the YES side.
    #[must_use]
    pub const fn yes_share(&self) -> BasisPoints {
        self.yes_share
    }

    /// Share assigned to the NO side.
    #[must_use]
    pub const fn no_share(&self) -> BasisPoints {
        self.yes_share.complement()
    }

    /// Returns `true` for the default 50/50 policy.
    #[must_use]
    pub const fn is_even(&self) -> bool {
        self.yes_share.get() == BasisPoints::HALF.get()
    }

    /// Splits `collateral` into `(yes, no)` prices.
    ///
    /// # Errors
    ///
    /// - [`PlannerError::InvalidPrice`] if `collateral` is zero, or so small
    ///   that one side truncates to zero.
    /// - [`PlannerError::InvalidConfiguration`] if the model was built
    ///   with an out-of-range share (only possible through deserialization).
    pub fn split_price(&self, collateral: Wad) -> Result<(Wad, Wad), PlannerError> {
        self.validate()?;
        let collateral = collateral.ensure_positive("collateral price must be positive")?;

        let (yes, no) = if self.is_even() {
            let half = Wad::from_raw(collateral.get() / 2);
            (half, half)
        } else {
            let denominator = BasisPoints::denominator();
            let yes = mul_div(
                collateral.get(),
                u128::from(self.yes_share.get()),
                denominator,
                Rounding::Down,
            )?;
            let no = mul_div(
                collateral.get(),
                u128::from(self.no_share().get()),
                denominator,
                Rounding::Down,
            )?;
            (Wad::from_raw(yes), Wad::from_raw(no))
        };

        let yes = yes.ensure_positive("collateral price too small to split")?;
        let no = no.ensure_positive("collateral price too small to split")?;
        Ok((yes, no))
    }

    /// Derives the full [`PriceSet`] from both collateral prices.
    ///
    /// # Errors
    ///
    /// Propagates [`split_price`](Self::split_price) for either collateral.
    pub fn price_set(&self, collateral_a: Wad, collateral_b: Wad) -> Result<PriceSet, PlannerError> {
        let (yes_a, no_a) = self.split_price(collateral_a)?;
        let (yes_b, no_b) = self.split_price(collateral_b)?;
        PriceSet::builder()
            .collateral_a(collateral_a)
            .collateral_b(collateral_b)
            .yes_a(yes_a)
            .no_a(no_a)
            .yes_b(yes_b)
            .no_b(no_b)
            .build()
    }
}

impl Default for ConditionalPriceModel {
    fn default() -> Self {
        Self::EVEN
    }
}

impl fmt::Display for ConditionalPriceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "yes {} / no {}", self.yes_share, self.no_share())
    }
}

impl PriceSet {
    /// Derives a price set from collateral spot prices with `model`.
    ///
    /// Shorthand for [`ConditionalPriceModel::price_set`].
    ///
    /// # Errors
    ///
    /// See [`ConditionalPriceModel::split_price`].
    pub fn derive(
        collateral_a: Wad,
        collateral_b: Wad,
        model: &ConditionalPriceModel,
    ) -> Result<Self, PlannerError> {
        model.price_set(collateral_a, collateral_b)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PriceModelFields {
    yes_share: BasisPoints,
}

#[cfg(feature = "serde")]
impl TryFrom<PriceModelFields> for ConditionalPriceModel {
    type Error = PlannerError;

    fn try_from(f: PriceModelFields) -> Result<Self, Self::Error> {
        Self::new(f.yes_share)
    }
}
