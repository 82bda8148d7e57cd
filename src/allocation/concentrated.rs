//! Tick ranges for concentrated-liquidity positions.
//!
//! A band multiplier `m` turns a price ratio `r` into the price interval
//! `[r / m, r * m]`. That interval is symmetric in log space only: with
//! `m = 1.2` it spans roughly -16.7% to +20% around `r`. Each edge is
//! converted to a tick, rounded to the pool's spacing and clamped to the
//! usable range.
//!
//! When rounding collapses or inverts the range (a band narrow relative to
//! the spacing, or a multiplier not above one), the requested band is
//! discarded and a range of `±100 * spacing` centred on the ratio's own tick
//! is returned instead, flagged with [`TickRange::is_fallback`]. The
//! returned range is always valid and is the one to deploy.

use crate::domain::{Rounding, Tick, TickRange, Wad, WAD};
use crate::error::PlannerError;
use crate::math::{
    clamp_to_usable, mul_div, round_to_spacing, sqrt_wad, tick_at_price, validate_spacing,
};

/// Half-width of the fallback range, in multiples of the tick spacing.
pub const FALLBACK_SPACINGS: i64 = 100;

/// Converts `price_ratio` and a band multiplier into an aligned tick range.
///
/// # Errors
///
/// - [`PlannerError::InvalidTickSpacing`] if `tick_spacing` is zero or too
///   large.
/// - [`PlannerError::InvalidPrice`] if `price_ratio` or `band_multiplier`
///   is zero, or the lower band edge truncates to zero.
/// - [`PlannerError::Overflow`] if the upper band edge does not fit a
///   [`Wad`].
///
/// # Examples
///
/// ```
/// use conditional_liquidity::allocation::compute_tick_range;
/// use conditional_liquidity::domain::Wad;
///
/// let range = compute_tick_range(Wad::ONE, "1.2".parse()?, 10)?;
/// assert_eq!(range.lower().get(), -1_820);
/// assert_eq!(range.upper().get(), 1_820);
/// assert!(!range.is_fallback());
///
/// // A multiplier of exactly one leaves nothing to span.
/// let range = compute_tick_range(Wad::ONE, Wad::ONE, 10)?;
/// assert!(range.is_fallback());
/// assert_eq!(range.width(), 2_000);
/// # Ok::<(), conditional_liquidity::error::PlannerError>(())
/// ```
pub fn compute_tick_range(
    price_ratio: Wad,
    band_multiplier: Wad,
    tick_spacing: u32,
) -> Result<TickRange, PlannerError> {
    validate_spacing(tick_spacing)?;
    let ratio = price_ratio.ensure_positive("price ratio must be positive")?;
    let band = band_multiplier.ensure_positive("band multiplier must be positive")?;

    let price_lower = Wad::from_raw(mul_div(ratio.get(), WAD, band.get(), Rounding::Down)?)
        .ensure_positive("lower band edge truncates to zero")?;
    let price_upper = Wad::from_raw(mul_div(ratio.get(), band.get(), WAD, Rounding::Down)?)
        .ensure_positive("upper band edge truncates to zero")?;

    let lower = round_to_spacing(tick_at_price(price_lower)?, tick_spacing)?;
    let upper = round_to_spacing(tick_at_price(price_upper)?, tick_spacing)?;

    if upper > lower {
        return TickRange::new(lower, upper, tick_spacing, false);
    }

    let range = fallback_range(ratio, tick_spacing)?;
    tracing::warn!(
        ratio = %ratio,
        band = %band,
        spacing = tick_spacing,
        requested_lower = lower.get(),
        requested_upper = upper.get(),
        lower = range.lower().get(),
        upper = range.upper().get(),
        "tick range collapsed after rounding; using fallback range"
    );
    Ok(range)
}

/// `±100 * spacing` around the aligned tick of `ratio`, clamped.
///
/// Clamping can only trim one side, since the usable range always spans
/// more than one spacing, so the result is never empty.
fn fallback_range(ratio: Wad, tick_spacing: u32) -> Result<TickRange, PlannerError> {
    let centre = i64::from(round_to_spacing(tick_at_price(ratio)?, tick_spacing)?.get());
    let half_width = FALLBACK_SPACINGS * i64::from(tick_spacing);
    let lower: Tick = clamp_to_usable(centre - half_width, tick_spacing)?;
    let upper: Tick = clamp_to_usable(centre + half_width, tick_spacing)?;
    TickRange::new(lower, upper, tick_spacing, true)
}

/// Square root of a pool's initial price, as handed to concentrated-pool
/// factories.
///
/// # Examples
///
/// ```
/// use conditional_liquidity::allocation::sqrt_price_for;
/// use conditional_liquidity::domain::Wad;
///
/// assert_eq!(sqrt_price_for(Wad::from_integer(4)), Wad::from_integer(2));
/// ```
#[must_use]
pub fn sqrt_price_for(price: Wad) -> Wad {
    sqrt_wad(price)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn wad(s: &str) -> Wad {
        let Ok(w) = s.parse::<Wad>() else {
            panic!("valid decimal {s}");
        };
        w
    }

    fn range(ratio: &str, band: &str, spacing: u32) -> TickRange {
        let Ok(r) = compute_tick_range(wad(ratio), wad(band), spacing) else {
            panic!("expected Ok for ratio {ratio} band {band} spacing {spacing}");
        };
        r
    }

    #[test]
    fn unit_ratio_twenty_percent_band() {
        let r = range("1", "1.2", 10);
        assert_eq!((r.lower().get(), r.upper().get()), (-1_820, 1_820));
        assert!(r.lower().get() < 0 && r.upper().get() > 0);
        assert!(r.width().abs_diff(3_600) <= 50);
        assert!(!r.is_fallback());
    }

    #[test]
    fn band_follows_ratio() {
        // Raw ticks 5108 and 8755; the upper one is a tie and rounds up.
        let r = range("2", "1.2", 10);
        assert_eq!((r.lower().get(), r.upper().get()), (5_110, 8_760));
        let inverse = range("0.5", "1.2", 10);
        assert_eq!(
            (inverse.lower().get(), inverse.upper().get()),
            (-8_750, -5_110)
        );
    }

    #[test]
    fn wide_spacing_aligns_bounds() {
        let r = range("1.37", "1.5", 60);
        assert!(r.lower().is_aligned(60));
        assert!(r.upper().is_aligned(60));
        assert!(r.lower() < r.upper());
    }

    #[test]
    fn narrow_band_falls_back() {
        // +-0.01% is a single tick, well inside half a spacing of 200.
        let r = range("1", "1.0001", 200);
        assert!(r.is_fallback());
        assert_eq!((r.lower().get(), r.upper().get()), (-20_000, 20_000));
    }

    #[test]
    fn band_below_one_falls_back() {
        let r = range("1", "0.8", 10);
        assert!(r.is_fallback());
        assert_eq!(r.width(), 2_000);
    }

    #[test]
    fn fallback_centres_on_ratio_tick() {
        let r = range("2", "1", 10);
        assert!(r.is_fallback());
        // tick(2) = 6931 rounds to 6930.
        assert_eq!((r.lower().get(), r.upper().get()), (5_930, 7_930));
    }

    #[test]
    fn fallback_clamped_to_usable_bounds() {
        let Ok(r) = compute_tick_range(Wad::MAX, Wad::ONE, 16_384) else {
            panic!("expected Ok");
        };
        assert!(r.is_fallback());
        assert!(r.lower() < r.upper());
        assert!(r.upper().get() <= 884_736);
    }

    #[test]
    fn invalid_inputs() {
        assert!(matches!(
            compute_tick_range(Wad::ONE, wad("1.2"), 0),
            Err(PlannerError::InvalidTickSpacing(_))
        ));
        assert!(matches!(
            compute_tick_range(Wad::ZERO, wad("1.2"), 10),
            Err(PlannerError::InvalidPrice(_))
        ));
        assert!(matches!(
            compute_tick_range(Wad::ONE, Wad::ZERO, 10),
            Err(PlannerError::InvalidPrice(_))
        ));
    }

    #[test]
    fn upper_edge_overflow_reported() {
        assert!(matches!(
            compute_tick_range(Wad::MAX, wad("1.2"), 10),
            Err(PlannerError::Overflow(_))
        ));
    }

    #[test]
    fn idempotent() {
        assert_eq!(range("0.73", "1.2", 10), range("0.73", "1.2", 10));
    }

    #[test]
    fn sqrt_price() {
        assert_eq!(sqrt_price_for(wad("0.25")), wad("0.5"));
    }
}
