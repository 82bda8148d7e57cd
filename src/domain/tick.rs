//! Discrete price index of a concentrated-liquidity pool.

use core::fmt;

use crate::error::PlannerError;

/// Minimum valid tick index.
const MIN_TICK: i32 = -887_272;

/// Maximum valid tick index.
const MAX_TICK: i32 = 887_272;

/// A tick: `price = 1.0001^tick`.
///
/// The valid range `[-887272, 887272]` is symmetric and fits a signed
/// 24-bit integer, so negating a tick never leaves the range.
///
/// # Examples
///
/// ```
/// use conditional_liquidity::domain::Tick;
///
/// let tick = Tick::new(-1_820).expect("in range");
/// assert!(tick.is_aligned(10));
/// assert_eq!(tick.negated().get(), 1_820);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
pub struct Tick(i32);

impl Tick {
    /// Lowest tick (`-887272`).
    pub const MIN: Self = Self(MIN_TICK);

    /// Highest tick (`887272`).
    pub const MAX: Self = Self(MAX_TICK);

    /// Tick of price `1.0`.
    pub const ZERO: Self = Self(0);

    /// Creates a tick with range validation.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidTick`] outside `[-887272, 887272]`.
    pub const fn new(value: i32) -> crate::error::Result<Self> {
        if value < MIN_TICK || value > MAX_TICK {
            return Err(PlannerError::InvalidTick("tick out of range [-887272, 887272]"));
        }
        Ok(Self(value))
    }

    /// Returns the tick index.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }

    /// Returns `true` if the tick is a multiple of `spacing`.
    ///
    /// A zero spacing aligns nothing.
    #[must_use]
    pub const fn is_aligned(&self, spacing: u32) -> bool {
        if spacing == 0 || spacing > i32::MAX as u32 {
            return false;
        }
        self.0 % (spacing as i32) == 0
    }

    /// Returns the tick of the reciprocal price.
    #[must_use]
    pub const fn negated(&self) -> Self {
        Self(-self.0)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for Tick {
    type Error = PlannerError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tick> for i32 {
    fn from(tick: Tick) -> Self {
        tick.0
    }
}
