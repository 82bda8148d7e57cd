//! Validated, spacing-aligned tick range of a concentrated position.

use core::fmt;

use super::Tick;
use crate::error::PlannerError;

/// Lower and upper tick of a concentrated-liquidity position.
///
/// Invariants enforced at construction: `lower < upper`, and both bounds
/// are multiples of `spacing`. `fallback` is set when the planner had to
/// replace the requested band with a wider range around the spot ratio;
/// callers deploying the range must treat it as authoritative either way.
///
/// # Examples
///
/// ```
/// use conditional_liquidity::domain::{Tick, TickRange};
///
/// let range = TickRange::new(Tick::new(-1_820)?, Tick::new(1_820)?, 10, false)?;
/// assert_eq!(range.width(), 3_640);
/// assert!(range.contains(Tick::ZERO));
/// # Ok::<(), conditional_liquidity::error::PlannerError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "TickRangeFields")
)]
pub struct TickRange {
    lower: Tick,
    upper: Tick,
    spacing: u32,
    fallback: bool,
}

impl TickRange {
    /// Creates a range.
    ///
    /// # Errors
    ///
    /// - [`PlannerError::InvalidTickSpacing`] if `spacing` is zero.
    /// - [`PlannerError::InvalidTick`] if a bound is not a multiple of
    ///   `spacing`.
    /// - [`PlannerError::InvalidTick`] if `lower >= upper`.
    pub const fn new(
        lower: Tick,
        upper: Tick,
        spacing: u32,
        fallback: bool,
    ) -> crate::error::Result<Self> {
        if spacing == 0 {
            return Err(PlannerError::InvalidTickSpacing("spacing must be greater than zero"));
        }
        if !lower.is_aligned(spacing) || !upper.is_aligned(spacing) {
            return Err(PlannerError::InvalidTick(
                "range bounds must be multiples of the tick spacing",
            ));
        }
        if lower.get() >= upper.get() {
            return Err(PlannerError::InvalidTick(
                "lower tick must be strictly below upper tick",
            ));
        }
        Ok(Self {
            lower,
            upper,
            spacing,
            fallback,
        })
    }

    /// Lower bound.
    #[must_use]
    pub const fn lower(&self) -> Tick {
        self.lower
    }

    /// Upper bound.
    #[must_use]
    pub const fn upper(&self) -> Tick {
        self.upper
    }

    /// Spacing both bounds are aligned to.
    #[must_use]
    pub const fn spacing(&self) -> u32 {
        self.spacing
    }

    /// `true` when the inversion guard replaced the requested band.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Number of ticks covered, always positive.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.upper.get().abs_diff(self.lower.get())
    }

    /// Returns `true` if `tick` lies in `[lower, upper)`.
    #[must_use]
    pub const fn contains(&self, tick: Tick) -> bool {
        tick.get() >= self.lower.get() && tick.get() < self.upper.get()
    }

    /// Range of the reciprocal price: `[-upper, -lower]`.
    ///
    /// Used when a pool's tokens are swapped into canonical order.
    pub const fn inverted(&self) -> Self {
        Self {
            lower: self.upper.negated(),
            upper: self.lower.negated(),
            spacing: self.spacing,
            fallback: self.fallback,
        }
    }
}

impl fmt::Display for TickRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)?;
        if self.fallback {
            f.write_str(" (fallback)")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TickRangeFields {
    lower: Tick,
    upper: Tick,
    spacing: u32,
    fallback: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<TickRangeFields> for TickRange {
    type Error = PlannerError;

    fn try_from(f: TickRangeFields) -> Result<Self, Self::Error> {
        Self::new(f.lower, f.upper, f.spacing, f.fallback)
    }
}
