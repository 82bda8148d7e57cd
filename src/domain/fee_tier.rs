//! Pool fee tiers built on [`BasisPoints`].

use core::fmt;

use super::BasisPoints;

/// Hundredths of a basis point per basis point.
const PIPS_PER_BP: u32 = 100;

/// A pool fee tier.
///
/// Stored as [`BasisPoints`]; [`pips`](Self::pips) converts to the
/// hundredths-of-a-bip integer that concentrated-liquidity factories take
/// as their `fee` argument.
///
/// # Examples
///
/// ```
/// use conditional_liquidity::domain::FeeTier;
///
/// let tier = FeeTier::TIER_0_10_PERCENT;
/// assert_eq!(tier.basis_points().get(), 10);
/// assert_eq!(tier.pips(), 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// 0.01% (1 bp).
    pub const TIER_0_01_PERCENT: Self = Self(BasisPoints::new(1));

    /// 0.05% (5 bp).
    pub const TIER_0_05_PERCENT: Self = Self(BasisPoints::new(5));

    /// 0.10% (10 bp), the default for concentrated cross pools.
    pub const TIER_0_10_PERCENT: Self = Self(BasisPoints::new(10));

    /// 0.30% (30 bp), the classic constant-product fee.
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// 1.00% (100 bp).
    pub const TIER_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// Creates a fee tier from arbitrary [`BasisPoints`].
    #[must_use]
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Fee in hundredths of a basis point (`0.10%` → `1000`).
    #[must_use]
    pub const fn pips(&self) -> u32 {
        self.0.get().saturating_mul(PIPS_PER_BP)
    }

    /// Returns `true` if this tier matches one of the presets.
    #[must_use]
    pub const fn is_standard(&self) -> bool {
        matches!(self.0.get(), 1 | 5 | 10 | 30 | 100)
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
