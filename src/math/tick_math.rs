//! Price-to-tick conversion and tick-spacing alignment.
//!
//! Ticks follow `price = 1.0001^tick`, so
//! `tick = log2(price) / log2(1.0001)`. Both logarithms come from
//! [`log2_wad`], which keeps the conversion free of floating point and
//! therefore deterministic.
//!
//! # Examples
//!
//! ```
//! use conditional_liquidity::domain::{Tick, Wad};
//! use conditional_liquidity::math::{round_to_spacing, tick_at_price};
//!
//! let raw = tick_at_price("1.2".parse::<Wad>()?)?;
//! assert_eq!(raw.get(), 1_823);
//! assert_eq!(round_to_spacing(raw, 10)?.get(), 1_820);
//! assert_eq!(round_to_spacing(Tick::new(-15)?, 10)?.get(), -10);
//! # Ok::<(), conditional_liquidity::error::PlannerError>(())
//! ```

use super::log2::{log2_wad, LOG2_TICK_BASE};
use crate::domain::{Tick, Wad};
use crate::error::PlannerError;

/// Largest accepted tick spacing.
///
/// Matches the bound enforced by Uniswap v3 style factories.
pub const MAX_TICK_SPACING: u32 = 16_384;

/// Tick whose price is closest to `price`, truncated toward zero.
///
/// # Errors
///
/// - [`PlannerError::InvalidLogarithmInput`] if `price` is zero.
/// - [`PlannerError::InvalidTick`] if the tick leaves `[-887272, 887272]`.
pub fn tick_at_price(price: Wad) -> Result<Tick, PlannerError> {
    let log2 = log2_wad(price)?;
    // Both operands carry 18 decimals, so the quotient is a plain tick.
    let raw = log2 / LOG2_TICK_BASE;
    let tick = i32::try_from(raw)
        .map_err(|_| PlannerError::InvalidTick("price maps outside the tick range"))?;
    Tick::new(tick)
}

/// Checks that `spacing` is usable.
///
/// # Errors
///
/// Returns [`PlannerError::InvalidTickSpacing`] if `spacing` is zero or
/// above [`MAX_TICK_SPACING`].
pub const fn validate_spacing(spacing: u32) -> Result<(), PlannerError> {
    if spacing == 0 {
        return Err(PlannerError::InvalidTickSpacing(
            "spacing must be greater than zero",
        ));
    }
    if spacing > MAX_TICK_SPACING {
        return Err(PlannerError::InvalidTickSpacing(
            "spacing exceeds the maximum of 16384",
        ));
    }
    Ok(())
}

/// Lowest and highest ticks that are multiples of `spacing`.
///
/// # Errors
///
/// Propagates [`validate_spacing`].
pub fn usable_bounds(spacing: u32) -> Result<(Tick, Tick), PlannerError> {
    validate_spacing(spacing)?;
    let max = usable_max(spacing);
    Ok((Tick::new(-max)?, Tick::new(max)?))
}

/// Rounds `tick` to the nearest multiple of `spacing`.
///
/// The remainder is taken with [`i64::rem_euclid`], so negative ticks
/// round the same way as positive ones, and an exact half rounds upward
/// (`-15 -> -10`, `15 -> 20` at spacing 10). The result is clamped into
/// [`usable_bounds`].
///
/// # Errors
///
/// Propagates [`validate_spacing`].
pub fn round_to_spacing(tick: Tick, spacing: u32) -> Result<Tick, PlannerError> {
    validate_spacing(spacing)?;
    let step = i64::from(spacing);
    let value = i64::from(tick.get());
    let remainder = value.rem_euclid(step);
    let below = value - remainder;
    let rounded = if remainder * 2 >= step {
        below + step
    } else {
        below
    };
    clamp_to_usable(rounded, spacing)
}

/// Clamps an aligned tick into the usable bounds of `spacing`.
///
/// Caller guarantees `spacing` already passed [`validate_spacing`].
pub(crate) fn clamp_to_usable(tick: i64, spacing: u32) -> Result<Tick, PlannerError> {
    let max = i64::from(usable_max(spacing));
    let clamped = tick.clamp(-max, max);
    let value = i32::try_from(clamped)
        .map_err(|_| PlannerError::InvalidTick("clamped tick exceeds i32"))?;
    Tick::new(value)
}

#[allow(clippy::cast_possible_wrap)]
const fn usable_max(spacing: u32) -> i32 {
    let step = spacing as i32;
    Tick::MAX.get() / step * step
}
