//! Explicit rounding direction for fixed-point division.

/// Direction in which a fixed-point division rounds its quotient.
///
/// Every [`mul_div`](crate::math::mul_div) call names one, so truncation is
/// always a visible decision.
///
/// # Examples
///
/// ```
/// use conditional_liquidity::domain::Rounding;
///
/// assert!(Rounding::Down.is_down());
/// assert!(!Rounding::Up.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Truncate towards zero (floor for unsigned values).
    #[default]
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
