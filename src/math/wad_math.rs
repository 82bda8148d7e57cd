//! Multiply-then-divide over 18-decimal fixed-point values.
//!
//! Every product is formed in 256 bits before the single division, so the
//! intermediate `a * b` can never overflow and precision is only lost once,
//! at the final truncation. The only overflow left is a quotient that does
//! not fit back into `u128`, which is reported, never wrapped.
//!
//! # Examples
//!
//! ```
//! use conditional_liquidity::domain::{Rounding, Wad};
//! use conditional_liquidity::math::{div_wad, mul_div, mul_wad};
//!
//! assert_eq!(mul_div(10, 3, 4, Rounding::Down), Ok(7));
//! assert_eq!(mul_div(10, 3, 4, Rounding::Up), Ok(8));
//!
//! let two = Wad::from_integer(2);
//! let three = Wad::from_integer(3);
//! assert_eq!(mul_wad(two, three), Ok(Wad::from_integer(6)));
//! assert_eq!(div_wad(three, two).map(|w| w.to_string()), Ok("1.5".to_string()));
//! ```

use crate::domain::{Rounding, Wad, WAD};
use crate::error::PlannerError;

#[allow(
    clippy::all,
    clippy::pedantic,
    clippy::indexing_slicing,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs
)]
mod u256 {
    uint::construct_uint! {
        /// 256-bit unsigned integer used for intermediate products.
        pub struct U256(4);
    }
}

pub(crate) use u256::U256;

/// Computes `a * b / denominator` with a 256-bit intermediate.
///
/// # Errors
///
/// - [`PlannerError::DivisionByZero`] if `denominator` is zero.
/// - [`PlannerError::Overflow`] if the rounded quotient exceeds `u128`.
pub fn mul_div(
    a: u128,
    b: u128,
    denominator: u128,
    rounding: Rounding,
) -> Result<u128, PlannerError> {
    if denominator == 0 {
        return Err(PlannerError::DivisionByZero);
    }
    let product = U256::from(a) * U256::from(b);
    let divisor = U256::from(denominator);
    let mut quotient = product / divisor;
    if rounding.is_up() && !(product % divisor).is_zero() {
        quotient = quotient + U256::one();
    }
    narrow(quotient)
}

/// `a * b / 1e18`, truncated.
///
/// # Errors
///
/// Returns [`PlannerError::Overflow`] if the product does not fit a [`Wad`].
pub fn mul_wad(a: Wad, b: Wad) -> Result<Wad, PlannerError> {
    mul_div(a.get(), b.get(), WAD, Rounding::Down).map(Wad::from_raw)
}

/// `a * 1e18 / b`, truncated.
///
/// # Errors
///
/// - [`PlannerError::DivisionByZero`] if `b` is zero.
/// - [`PlannerError::Overflow`] if the quotient does not fit a [`Wad`].
pub fn div_wad(a: Wad, b: Wad) -> Result<Wad, PlannerError> {
    mul_div(a.get(), WAD, b.get(), Rounding::Down).map(Wad::from_raw)
}

/// Converts a 256-bit value back to `u128`, failing instead of truncating.
pub(crate) fn narrow(value: U256) -> Result<u128, PlannerError> {
    if value > U256::from(u128::MAX) {
        return Err(PlannerError::Overflow("mul_div result exceeds u128"));
    }
    Ok(value.low_u128())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- mul_div --------------------------------------------------------------

    #[test]
    fn exact_division_ignores_rounding() {
        assert_eq!(mul_div(6, 4, 3, Rounding::Down), Ok(8));
        assert_eq!(mul_div(6, 4, 3, Rounding::Up), Ok(8));
    }

    #[test]
    fn inexact_division_rounds() {
        assert_eq!(mul_div(7, 1, 2, Rounding::Down), Ok(3));
        assert_eq!(mul_div(7, 1, 2, Rounding::Up), Ok(4));
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(
            mul_div(1, 1, 0, Rounding::Down),
            Err(PlannerError::DivisionByZero)
        );
    }

    #[test]
    fn wide_intermediate_does_not_overflow() {
        // u128::MAX * u128::MAX / u128::MAX fits even though the product does not.
        assert_eq!(
            mul_div(u128::MAX, u128::MAX, u128::MAX, Rounding::Down),
            Ok(u128::MAX)
        );
        assert_eq!(mul_div(u128::MAX, 3, 6, Rounding::Down), Ok(u128::MAX / 2));
    }

    #[test]
    fn quotient_overflow_reported() {
        assert_eq!(
            mul_div(u128::MAX, 2, 1, Rounding::Down),
            Err(PlannerError::Overflow("mul_div result exceeds u128"))
        );
        assert!(mul_div(u128::MAX, 3, 2, Rounding::Up).is_err());
    }

    #[test]
    fn multiply_before_divide_keeps_precision() {
        // (1 / 3) * 3 with divide-first would give 0; here it stays exact.
        assert_eq!(mul_div(1, 3, 3, Rounding::Down), Ok(1));
    }

    // -- mul_wad / div_wad ------------------------------------------------------

    #[test]
    fn mul_wad_values() {
        let Ok(half) = "0.5".parse::<Wad>() else {
            panic!("valid decimal");
        };
        assert_eq!(mul_wad(Wad::from_integer(8), half), Ok(Wad::from_integer(4)));
        assert_eq!(mul_wad(Wad::ONE, Wad::ONE), Ok(Wad::ONE));
        assert_eq!(mul_wad(Wad::from_raw(1), Wad::from_raw(1)), Ok(Wad::ZERO));
    }

    #[test]
    fn div_wad_values() {
        assert_eq!(div_wad(Wad::from_integer(10), Wad::ONE), Ok(Wad::from_integer(10)));
        let Ok(third) = div_wad(Wad::ONE, Wad::from_integer(3)) else {
            panic!("expected Ok");
        };
        assert_eq!(third.get(), 333_333_333_333_333_333);
    }

    #[test]
    fn div_wad_by_zero() {
        assert_eq!(div_wad(Wad::ONE, Wad::ZERO), Err(PlannerError::DivisionByZero));
    }

    #[test]
    fn large_amounts_stay_exact() {
        // 1e6 tokens * 1e18 / 1e18 needs a product of 1e42, beyond u128.
        let million = Wad::from_integer(1_000_000);
        assert_eq!(div_wad(million, Wad::ONE), Ok(million));
        assert_eq!(mul_wad(million, Wad::from_integer(1_000)), Ok(Wad::from_integer(1_000_000_000)));
    }
}
