//! Token descriptor: identity, role and precision.

use super::{Decimals, TokenAddress, TokenRole};

/// Everything the planner needs to know about one token.
///
/// Created once per proposal by whatever extracts tokens from the
/// proposal, then treated as immutable for the rest of the run.
///
/// # Examples
///
/// ```
/// use conditional_liquidity::domain::{Decimals, TokenAddress, TokenDescriptor, TokenRole};
///
/// let yes_a = TokenDescriptor::new(
///     TokenAddress::from_bytes([3u8; 20]),
///     TokenRole::YesA,
///     Decimals::MAX,
/// );
/// assert_eq!(yes_a.role(), TokenRole::YesA);
/// assert_eq!(yes_a.decimals().get(), 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenDescriptor {
    address: TokenAddress,
    role: TokenRole,
    decimals: Decimals,
}

impl TokenDescriptor {
    /// Creates a new descriptor. All components are validated at their own
    /// construction site, so this cannot fail.
    #[must_use]
    pub const fn new(address: TokenAddress, role: TokenRole, decimals: Decimals) -> Self {
        Self {
            address,
            role,
            decimals,
        }
    }

    /// Returns the token address.
    #[must_use]
    pub const fn address(&self) -> TokenAddress {
        self.address
    }

    /// Returns the role this token plays in the proposal.
    #[must_use]
    pub const fn role(&self) -> TokenRole {
        self.role
    }

    /// Returns the token decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn descriptor(byte: u8, role: TokenRole) -> TokenDescriptor {
        TokenDescriptor::new(TokenAddress::from_bytes([byte; 20]), role, Decimals::MAX)
    }

    #[test]
    fn accessors() {
        let tok = descriptor(7, TokenRole::NoB);
        assert_eq!(tok.address(), TokenAddress::from_bytes([7u8; 20]));
        assert_eq!(tok.role(), TokenRole::NoB);
        assert_eq!(tok.decimals(), Decimals::MAX);
    }

    #[test]
    fn equality_includes_role() {
        assert_ne!(descriptor(1, TokenRole::YesA), descriptor(1, TokenRole::NoA));
        assert_eq!(descriptor(1, TokenRole::YesA), descriptor(1, TokenRole::YesA));
    }
}
