//! Closed set of token roles in a two-collateral proposal.

use core::fmt;
use core::str::FromStr;

use crate::error::PlannerError;

/// The part a token plays in a proposal's liquidity plan.
///
/// A proposal splits two collateral assets into YES/NO outcome tokens and
/// prices everything against one quote asset. Roles are resolved once, when
/// descriptors are ingested; the math never looks at token names again.
///
/// # Examples
///
/// ```
/// use conditional_liquidity::domain::TokenRole;
///
/// let role: TokenRole = "yes_b".parse().expect("known role");
/// assert_eq!(role, TokenRole::YesB);
/// assert_eq!(role.collateral(), Some(TokenRole::CollateralB));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenRole {
    /// First collateral asset (e.g. the company token).
    CollateralA,
    /// Second collateral asset (e.g. the currency token).
    CollateralB,
    /// YES outcome token backed by collateral A.
    YesA,
    /// NO outcome token backed by collateral A.
    NoA,
    /// YES outcome token backed by collateral B.
    YesB,
    /// NO outcome token backed by collateral B.
    NoB,
    /// Asset every price is denominated in.
    Quote,
}

impl TokenRole {
    /// The four outcome roles in planning order.
    pub const OUTCOMES: [Self; 4] = [Self::YesA, Self::NoA, Self::YesB, Self::NoB];

    /// Returns `true` for YES/NO outcome tokens.
    #[must_use]
    pub const fn is_outcome(&self) -> bool {
        matches!(self, Self::YesA | Self::NoA | Self::YesB | Self::NoB)
    }

    /// Returns `true` for the two collateral assets.
    #[must_use]
    pub const fn is_collateral(&self) -> bool {
        matches!(self, Self::CollateralA | Self::CollateralB)
    }

    /// Returns `true` for YES outcome tokens.
    #[must_use]
    pub const fn is_yes(&self) -> bool {
        matches!(self, Self::YesA | Self::YesB)
    }

    /// Collateral backing an outcome token; `None` for other roles.
    #[must_use]
    pub const fn collateral(&self) -> Option<Self> {
        match self {
            Self::YesA | Self::NoA => Some(Self::CollateralA),
            Self::YesB | Self::NoB => Some(Self::CollateralB),
            _ => None,
        }
    }

    /// Canonical upper-case label, e.g. `YES_A`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CollateralA => "COLLATERAL_A",
            Self::CollateralB => "COLLATERAL_B",
            Self::YesA => "YES_A",
            Self::NoA => "NO_A",
            Self::YesB => "YES_B",
            Self::NoB => "NO_B",
            Self::Quote => "QUOTE",
        }
    }
}

impl fmt::Display for TokenRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TokenRole {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "collaterala" | "company" => Ok(Self::CollateralA),
            "collateralb" | "currency" => Ok(Self::CollateralB),
            "yesa" | "yescompany" => Ok(Self::YesA),
            "noa" | "nocompany" => Ok(Self::NoA),
            "yesb" | "yescurrency" => Ok(Self::YesB),
            "nob" | "nocurrency" => Ok(Self::NoB),
            "quote" => Ok(Self::Quote),
            _ => Err(PlannerError::ParseError("unknown token role")),
        }
    }
}
