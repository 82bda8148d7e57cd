//! 18-decimal fixed-point values.

use core::fmt;
use core::str::FromStr;

use crate::error::PlannerError;

/// Scaling factor of a [`Wad`]: `10^18`.
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Number of fractional decimal digits carried by a [`Wad`].
const WAD_DECIMALS: usize = 18;

/// An unsigned real number stored as an integer scaled by `10^18`.
///
/// Every price, amount and ratio in the planner is a `Wad`. The raw integer
/// is exposed through [`get`](Self::get); arithmetic that needs a wider
/// intermediate lives in [`crate::math`].
///
/// `Display` and `FromStr` use plain decimal notation, so configuration
/// files can say `"1.2"` instead of `"1200000000000000000"`.
///
/// # Examples
///
/// ```
/// use conditional_liquidity::domain::Wad;
///
/// let price: Wad = "2.5".parse().expect("valid decimal");
/// assert_eq!(price.get(), 2_500_000_000_000_000_000);
/// assert_eq!(price.to_string(), "2.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[must_use]
pub struct Wad(u128);

impl Wad {
    /// `0.0`
    pub const ZERO: Self = Self(0);

    /// `1.0`
    pub const ONE: Self = Self(WAD);

    /// Largest representable value.
    pub const MAX: Self = Self(u128::MAX);

    /// Wraps a raw, already scaled integer.
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Builds a `Wad` from a whole number of units.
    ///
    /// Cannot overflow: `u64::MAX * 10^18 < u128::MAX`.
    pub const fn from_integer(units: u64) -> Self {
        Self(units as u128 * WAD)
    }

    /// Returns the raw scaled integer.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` for `0.0`.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `self` if strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidPrice`] carrying `what` when zero.
    pub const fn ensure_positive(self, what: &'static str) -> crate::error::Result<Self> {
        if self.0 == 0 {
            return Err(PlannerError::InvalidPrice(what));
        }
        Ok(self)
    }

    /// Absolute difference in raw units.
    #[must_use]
    pub const fn abs_diff(&self, other: Self) -> u128 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for Wad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / WAD;
        let frac = self.0 % WAD;
        if frac == 0 {
            return write!(f, "{whole}");
        }
        let digits = format!("{frac:018}");
        write!(f, "{whole}.{}", digits.trim_end_matches('0'))
    }
}

impl FromStr for Wad {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(PlannerError::ParseError("empty decimal"));
        }
        if frac.len() > WAD_DECIMALS {
            return Err(PlannerError::ParseError("more than 18 fractional digits"));
        }
        if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(PlannerError::ParseError("decimal contains non-digit"));
        }

        let whole_raw: u128 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| PlannerError::ParseError("integer part out of range"))?
        };
        let frac_raw: u128 = if frac.is_empty() {
            0
        } else {
            let padded = format!("{frac:0<18}");
            padded
                .parse()
                .map_err(|_| PlannerError::ParseError("fractional part out of range"))?
        };

        whole_raw
            .checked_mul(WAD)
            .and_then(|v| v.checked_add(frac_raw))
            .map(Self)
            .ok_or(PlannerError::Overflow("decimal exceeds wad range"))
    }
}

impl From<Wad> for u128 {
    fn from(value: Wad) -> Self {
        value.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Construction -------------------------------------------------------

    #[test]
    fn constants() {
        assert_eq!(Wad::ZERO.get(), 0);
        assert_eq!(Wad::ONE.get(), WAD);
        assert_eq!(Wad::MAX.get(), u128::MAX);
    }

    #[test]
    fn from_integer_scales() {
        assert_eq!(Wad::from_integer(10).get(), 10 * WAD);
        assert_eq!(Wad::from_integer(0), Wad::ZERO);
    }

    #[test]
    fn ensure_positive_rejects_zero() {
        assert_eq!(
            Wad::ZERO.ensure_positive("collateral price"),
            Err(PlannerError::InvalidPrice("collateral price"))
        );
        assert_eq!(Wad::ONE.ensure_positive("x"), Ok(Wad::ONE));
    }

    // -- Checked arithmetic -------------------------------------------------

    #[test]
    fn display_whole_and_fraction() {
        assert_eq!(Wad::ONE.to_string(), "1");
        assert_eq!(Wad::from_raw(1_200_000_000_000_000_000).to_string(), "1.2");
        assert_eq!(Wad::from_raw(1).to_string(), "0.000000000000000001");
        assert_eq!(Wad::ZERO.to_string(), "0");
    }

    // -- FromStr ------------------------------------------------------------

    #[test]
    fn parse_forms() {
        let cases = [
            ("1", WAD),
            ("1.2", 1_200_000_000_000_000_000),
            (".5", 500_000_000_000_000_000),
            ("3.", 3 * WAD),
            ("0.000000000000000001", 1),
            (" 10 ", 10 * WAD),
        ];
        for (input, raw) in cases {
            let Ok(w) = input.parse::<Wad>() else {
                panic!("expected Ok for {input:?}");
            };
            assert_eq!(w.get(), raw, "input {input:?}");
        }
    }

    #[test]
    fn parse_rejects_garbage() {
        for input in ["", ".", "abc", "1.2.3", "-1", "1e18", "0.0000000000000000001"] {
            assert!(input.parse::<Wad>().is_err(), "{input:?} should fail");
        }
    }

    #[test]
    fn parse_overflow() {
        let huge = "1000000000000000000000000";
        assert!(matches!(
            huge.parse::<Wad>(),
            Err(PlannerError::Overflow(_)) | Err(PlannerError::ParseError(_))
        ));
    }

    #[test]
    fn display_parse_agree() {
        for raw in [1u128, 7, WAD, WAD + 1, 123_456_789_000_000_000_000] {
            let w = Wad::from_raw(raw);
            let Ok(back) = w.to_string().parse::<Wad>() else {
                panic!("expected Ok for {w}");
            };
            assert_eq!(back, w);
        }
    }
}
