//! Opaque 20-byte token and pool address.

use core::fmt;
use core::str::FromStr;

use crate::error::PlannerError;

/// Length of an EVM-style address in bytes.
const ADDRESS_LEN: usize = 20;

/// An opaque address identifying a token (or a deployed pool).
///
/// The planner never interprets the bytes; it only compares them, which
/// fixes the canonical `token0 < token1` ordering pool factories expect.
/// Text form is lowercase hex with a `0x` prefix.
///
/// # Examples
///
/// ```
/// use conditional_liquidity::domain::TokenAddress;
///
/// let addr: TokenAddress = "0x00000000000000000000000000000000000000ff"
///     .parse()
///     .expect("valid hex");
/// assert_eq!(addr.as_bytes()[19], 0xff);
/// assert_eq!(addr.to_string(), "0x00000000000000000000000000000000000000ff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenAddress([u8; ADDRESS_LEN]);

impl TokenAddress {
    /// Creates a `TokenAddress` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; ADDRESS_LEN] {
        self.0
    }

    /// Returns the all-zero address.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; ADDRESS_LEN])
    }

    /// Returns `true` for the all-zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for TokenAddress {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .trim()
            .strip_prefix("0x")
            .or_else(|| s.trim().strip_prefix("0X"))
            .unwrap_or_else(|| s.trim());
        if hex.len() != ADDRESS_LEN * 2 {
            return Err(PlannerError::ParseError("address must be 20 hex bytes"));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PlannerError::ParseError("address contains non-hex digit"));
        }
        let mut bytes = [0u8; ADDRESS_LEN];
        for (slot, chunk) in bytes.iter_mut().zip(hex.as_bytes().chunks(2)) {
            let pair = core::str::from_utf8(chunk)
                .map_err(|_| PlannerError::ParseError("address is not ascii"))?;
            *slot = u8::from_str_radix(pair, 16)
                .map_err(|_| PlannerError::ParseError("address contains non-hex digit"))?;
        }
        Ok(Self(bytes))
    }
}
