//! Fixed-point binary logarithm.
//!
//! `log2(x) = n + log2(y)` where `n` is the position of the highest set bit
//! of `x / 1e18` and `y = x / 2^n` lies in `[1, 2)`. The fractional part uses
//! the first four terms of
//!
//! ```text
//! log2(y) = (2 / ln 2) * (z + z^3/3 + z^5/5 + z^7/7 + ...),  z = (y - 1) / (y + 1)
//! ```
//!
//! With `y < 2` we have `z < 1/3`, so the dropped tail is below `1.9e-5` in
//! log2 units (about 0.13 ticks of `1.0001`). The series only ever
//! underestimates. Good enough to pick a tick; never use it for amounts.

use crate::domain::{Wad, WAD};
use crate::error::PlannerError;

/// Signed 18-decimal value; only logarithms produce one.
pub type SignedWad = i128;

/// `ln(2)` scaled by `1e18`.
const LN_2: u128 = 693_147_180_559_945_309;

/// `1e36`, the numerator that inverts a [`Wad`].
const WAD_SQUARED: u128 = WAD * WAD;

/// `log2(1.0001)` in 18 decimals, the width of one tick in log2 units.
pub const LOG2_TICK_BASE: SignedWad = log2_positive(1_000_100_000_000_000_000);

/// Binary logarithm of an 18-decimal value, as a signed 18-decimal value.
///
/// Values below `1.0` are handled as `-log2(1 / x)`.
///
/// # Errors
///
/// Returns [`PlannerError::InvalidLogarithmInput`] if `x` is zero.
///
/// # Examples
///
/// ```
/// use conditional_liquidity::domain::Wad;
/// use conditional_liquidity::math::log2_wad;
///
/// assert_eq!(log2_wad(Wad::ONE), Ok(0));
/// assert_eq!(log2_wad(Wad::from_integer(8)), Ok(3_000_000_000_000_000_000));
/// assert!(log2_wad(Wad::ZERO).is_err());
/// ```
pub const fn log2_wad(x: Wad) -> Result<SignedWad, PlannerError> {
    if x.is_zero() {
        return Err(PlannerError::InvalidLogarithmInput);
    }
    Ok(log2_positive(x.get()))
}

/// `log2` for a raw value already known to be non-zero.
const fn log2_positive(x: u128) -> SignedWad {
    if x < WAD {
        // 1e36 / x >= 1e18 for every x in 1..1e18.
        return -log2_at_least_one(WAD_SQUARED / x);
    }
    log2_at_least_one(x)
}

/// `log2` for `x >= 1e18`. Every intermediate stays below `2^120`.
#[allow(clippy::cast_possible_wrap)]
const fn log2_at_least_one(x: u128) -> SignedWad {
    let n = (x / WAD).ilog2();
    let y = x >> n;

    let z = (y - WAD) * WAD / (y + WAD);
    let z2 = z * z / WAD;
    let z3 = z * z2 / WAD;
    let z5 = z3 * z2 / WAD;
    let z7 = z5 * z2 / WAD;
    let series = z + z3 / 3 + z5 / 5 + z7 / 7;

    let fraction = series * 2 * WAD / LN_2;
    (n as u128 * WAD + fraction) as i128
}
