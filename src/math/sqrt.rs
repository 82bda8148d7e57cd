//! Integer and fixed-point square roots by Newton's method.
//!
//! The iteration starts above the root and stops as soon as the candidate
//! fails to decrease, which yields `floor(sqrt(x))` after `O(log x)` steps.
//! No floating point is involved, so results are bit-identical everywhere.

use super::wad_math::U256;
use crate::domain::{Wad, WAD};

/// Integer square root: `floor(sqrt(x))`.
///
/// # Examples
///
/// ```
/// use conditional_liquidity::math::sqrt;
///
/// assert_eq!(sqrt(0), 0);
/// assert_eq!(sqrt(15), 3);
/// assert_eq!(sqrt(16), 4);
/// assert_eq!(sqrt(u128::MAX), u64::MAX as u128);
/// ```
#[must_use]
pub fn sqrt(x: u128) -> u128 {
    isqrt(U256::from(x)).low_u128()
}

/// Square root of an 18-decimal value, keeping 18 decimals.
///
/// The operand is scaled by `1e18` in 256 bits before the integer root,
/// so `sqrt_wad(x) = floor(sqrt(x_raw * 1e18))`. The result of any `Wad`
/// is below `2^107` and always fits.
///
/// # Examples
///
/// ```
/// use conditional_liquidity::domain::Wad;
/// use conditional_liquidity::math::sqrt_wad;
///
/// assert_eq!(sqrt_wad(Wad::from_integer(4)), Wad::from_integer(2));
/// assert_eq!(sqrt_wad(Wad::ONE), Wad::ONE);
/// ```
#[must_use]
pub fn sqrt_wad(x: Wad) -> Wad {
    let scaled = U256::from(x.get()) * U256::from(WAD);
    Wad::from_raw(isqrt(scaled).low_u128())
}

fn isqrt(x: U256) -> U256 {
    if x < U256::from(4u8) {
        return if x.is_zero() { U256::zero() } else { U256::one() };
    }
    let mut z = x;
    let mut y = (x >> 1) + U256::one();
    while y < z {
        z = y;
        y = (x / y + y) >> 1;
    }
    z
}
