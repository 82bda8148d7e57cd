//! Deterministic 18-decimal fixed-point arithmetic.
//!
//! Every price, amount and ratio in the planner is a [`Wad`](crate::domain::Wad).
//! This module supplies the primitives the allocators are built from:
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`mul_div`] | `a * b / d` with a 256-bit intermediate and explicit rounding |
//! | [`mul_wad`], [`div_wad`] | fixed-point multiply and divide |
//! | [`sqrt`], [`sqrt_wad`] | Newton's-method square roots |
//! | [`log2_wad`] | binary logarithm, accurate to tick resolution |
//! | [`tick_at_price`], [`round_to_spacing`] | price to aligned tick |
//!
//! Nothing here uses floating point, so identical inputs always produce
//! identical outputs.

mod log2;
mod sqrt;
mod tick_math;
mod wad_math;

pub use log2::{log2_wad, SignedWad, LOG2_TICK_BASE};
pub use sqrt::{sqrt, sqrt_wad};
pub use tick_math::{
    round_to_spacing, tick_at_price, usable_bounds, validate_spacing, MAX_TICK_SPACING,
};
pub use wad_math::{div_wad, mul_div, mul_wad};

pub(crate) use tick_math::clamp_to_usable;
