//! Deposit amounts for `x * y = k` pools.
//!
//! A constant-product pool's spot price is the ratio of its reserves, so
//! fixing one side of the deposit and solving for the other lets the pool
//! open at exactly the target price:
//!
//! ```text
//! price_x = amount_y / amount_x   =>   amount_x = amount_y * 1e18 / price_x
//! ```
//!
//! All three functions multiply before dividing and truncate once.

use crate::domain::{Rounding, Wad, WAD};
use crate::error::PlannerError;
use crate::math::mul_div;

/// Amount of a token to pair with `quote_amount` of the quote asset so the
/// pool opens at `target_price` quote per token.
///
/// # Errors
///
/// - [`PlannerError::InvalidPrice`] if `target_price` is zero.
/// - [`PlannerError::InvalidQuantity`] if `quote_amount` is zero or the
///   result truncates to zero.
/// - [`PlannerError::Overflow`] if the result does not fit a [`Wad`].
///
/// # Examples
///
/// ```
/// use conditional_liquidity::allocation::quote_anchored_amount;
/// use conditional_liquidity::domain::Wad;
///
/// let amount = quote_anchored_amount(Wad::from_integer(10), Wad::ONE)?;
/// assert_eq!(amount, Wad::from_integer(10));
///
/// let amount = quote_anchored_amount(Wad::from_integer(10), Wad::from_integer(4))?;
/// assert_eq!(amount.to_string(), "2.5");
/// # Ok::<(), conditional_liquidity::error::PlannerError>(())
/// ```
pub fn quote_anchored_amount(quote_amount: Wad, target_price: Wad) -> Result<Wad, PlannerError> {
    let target_price = target_price.ensure_positive("target price must be positive")?;
    solve_counter_amount(quote_amount, target_price)
}

/// Amount of the first token of a cross pool to pair with `base_amount` of
/// the second, given `price_ratio` (first priced in units of the second).
///
/// # Errors
///
/// - [`PlannerError::InvalidPrice`] if `price_ratio` is zero.
/// - [`PlannerError::InvalidQuantity`] if `base_amount` is zero or the
///   result truncates to zero.
/// - [`PlannerError::Overflow`] if the result does not fit a [`Wad`].
pub fn ratio_anchored_amount(base_amount: Wad, price_ratio: Wad) -> Result<Wad, PlannerError> {
    let price_ratio = price_ratio.ensure_positive("price ratio must be positive")?;
    solve_counter_amount(base_amount, price_ratio)
}

/// Price of one token in units of another: `numerator * 1e18 / denominator`.
///
/// # Errors
///
/// - [`PlannerError::InvalidPrice`] if either price is zero, or the
///   ratio truncates to zero.
/// - [`PlannerError::Overflow`] if the ratio does not fit a [`Wad`].
///
/// # Examples
///
/// ```
/// use conditional_liquidity::allocation::price_ratio;
/// use conditional_liquidity::domain::Wad;
///
/// let ratio = price_ratio(Wad::from_integer(3), Wad::from_integer(2))?;
/// assert_eq!(ratio.to_string(), "1.5");
/// # Ok::<(), conditional_liquidity::error::PlannerError>(())
/// ```
pub fn price_ratio(numerator_price: Wad, denominator_price: Wad) -> Result<Wad, PlannerError> {
    let numerator = numerator_price.ensure_positive("numerator price must be positive")?;
    let denominator = denominator_price.ensure_positive("denominator price must be positive")?;
    let ratio = mul_div(numerator.get(), WAD, denominator.get(), Rounding::Down)?;
    Wad::from_raw(ratio).ensure_positive("price ratio truncates to zero")
}

fn solve_counter_amount(anchor: Wad, price: Wad) -> Result<Wad, PlannerError> {
    if anchor.is_zero() {
        return Err(PlannerError::InvalidQuantity("anchor amount must be positive"));
    }
    let amount = mul_div(anchor.get(), WAD, price.get(), Rounding::Down)?;
    if amount == 0 {
        return Err(PlannerError::InvalidQuantity(
            "anchor amount too small for the target price",
        ));
    }
    Ok(Wad::from_raw(amount))
}
