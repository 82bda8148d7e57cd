//! The four outcome tokens of a proposal, resolved by role.

use super::{TokenDescriptor, TokenRole};
use crate::error::PlannerError;

/// YES/NO outcome tokens for both collateral assets.
///
/// Construction checks that every slot holds a descriptor with the matching
/// [`TokenRole`] and that the four addresses are distinct.
///
/// # Examples
///
/// ```
/// use conditional_liquidity::domain::{
///     ConditionalTokens, Decimals, TokenAddress, TokenDescriptor, TokenRole,
/// };
///
/// let tokens: Vec<TokenDescriptor> = TokenRole::OUTCOMES
///     .iter()
///     .zip(1u8..)
///     .map(|(role, b)| TokenDescriptor::new(TokenAddress::from_bytes([b; 20]), *role, Decimals::MAX))
///     .collect();
///
/// let set = ConditionalTokens::from_descriptors(&tokens).expect("all roles present");
/// assert_eq!(set.get(TokenRole::NoB).map(|t| t.role()), Some(TokenRole::NoB));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ConditionalTokensFields")
)]
pub struct ConditionalTokens {
    yes_a: TokenDescriptor,
    no_a: TokenDescriptor,
    yes_b: TokenDescriptor,
    no_b: TokenDescriptor,
}

impl ConditionalTokens {
    /// Creates the set from four explicitly placed descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidToken`] if a descriptor's role does not
    /// match its slot or two descriptors share an address.
    pub fn new(
        yes_a: TokenDescriptor,
        no_a: TokenDescriptor,
        yes_b: TokenDescriptor,
        no_b: TokenDescriptor,
    ) -> Result<Self, PlannerError> {
        let set = Self {
            yes_a,
            no_a,
            yes_b,
            no_b,
        };
        set.validate()?;
        Ok(set)
    }

    /// Picks the four outcome descriptors out of an arbitrary list.
    ///
    /// Collateral and quote descriptors in the list are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidToken`] if an outcome role is missing,
    /// appears twice, or two outcomes share an address.
    pub fn from_descriptors(descriptors: &[TokenDescriptor]) -> Result<Self, PlannerError> {
        let pick = |role: TokenRole| -> Result<TokenDescriptor, PlannerError> {
            let mut matches = descriptors.iter().filter(|d| d.role() == role);
            let first = matches
                .next()
                .copied()
                .ok_or(PlannerError::InvalidToken("outcome token role missing"))?;
            if matches.next().is_some() {
                return Err(PlannerError::InvalidToken("outcome token role duplicated"));
            }
            Ok(first)
        };
        Self::new(
            pick(TokenRole::YesA)?,
            pick(TokenRole::NoA)?,
            pick(TokenRole::YesB)?,
            pick(TokenRole::NoB)?,
        )
    }

    fn validate(&self) -> Result<(), PlannerError> {
        let slots = self.as_array();
        for (token, expected) in slots.iter().zip(TokenRole::OUTCOMES) {
            if token.role() != expected {
                return Err(PlannerError::InvalidToken(
                    "descriptor role does not match its slot",
                ));
            }
        }
        for (i, a) in slots.iter().enumerate() {
            if slots.iter().skip(i + 1).any(|b| b.address() == a.address()) {
                return Err(PlannerError::InvalidToken(
                    "outcome tokens must have distinct addresses",
                ));
            }
        }
        Ok(())
    }

    /// Returns the descriptors in planning order: YES_A, NO_A, YES_B, NO_B.
    #[must_use]
    pub const fn as_array(&self) -> [TokenDescriptor; 4] {
        [self.yes_a, self.no_a, self.yes_b, self.no_b]
    }

    /// Looks up an outcome descriptor by role; `None` for non-outcome roles.
    #[must_use]
    pub const fn get(&self, role: TokenRole) -> Option<&TokenDescriptor> {
        match role {
            TokenRole::YesA => Some(&self.yes_a),
            TokenRole::NoA => Some(&self.no_a),
            TokenRole::YesB => Some(&self.yes_b),
            TokenRole::NoB => Some(&self.no_b),
            _ => None,
        }
    }

    /// YES token of collateral A.
    #[must_use]
    pub const fn yes_a(&self) -> &TokenDescriptor {
        &self.yes_a
    }

    /// NO token of collateral A.
    #[must_use]
    pub const fn no_a(&self) -> &TokenDescriptor {
        &self.no_a
    }

    /// YES token of collateral B.
    #[must_use]
    pub const fn yes_b(&self) -> &TokenDescriptor {
        &self.yes_b
    }

    /// NO token of collateral B.
    #[must_use]
    pub const fn no_b(&self) -> &TokenDescriptor {
        &self.no_b
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ConditionalTokensFields {
    yes_a: TokenDescriptor,
    no_a: TokenDescriptor,
    yes_b: TokenDescriptor,
    no_b: TokenDescriptor,
}

#[cfg(feature = "serde")]
impl TryFrom<ConditionalTokensFields> for ConditionalTokens {
    type Error = PlannerError;

    fn try_from(f: ConditionalTokensFields) -> Result<Self, Self::Error> {
        Self::new(f.yes_a, f.no_a, f.yes_b, f.no_b)
    }
}
