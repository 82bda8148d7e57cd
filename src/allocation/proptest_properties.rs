//! Property-based tests using `proptest` for the planning invariants.
//!
//! 1. **Split conservation**: `yes + no` is within one raw unit of the
//!    collateral price and never above it.
//! 2. **Quote monotonicity**: a higher target price needs strictly fewer
//!    tokens.
//! 3. **Tick ordering**: `lower < upper` on both the normal and fallback path.
//! 4. **Tick alignment**: both bounds are multiples of the spacing.
//! 5. **Determinism**: repeated calls give identical results.
//! 6. **Plan cardinality**: every valid input yields exactly eight pools.
//! 7. **Tick accuracy**: `tick_at_price` is within one tick of the exact
//!    logarithm.

#![allow(
    clippy::panic,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation
)]

use proptest::prelude::*;

use crate::allocation::{
    compute_tick_range, quote_anchored_amount, PoolAllocationOrchestrator,
};
use crate::config::PlannerConfig;
use crate::domain::{
    BasisPoints, ConditionalTokens, Decimals, TokenAddress, TokenDescriptor, TokenRole, Wad, WAD,
};
use crate::math::tick_at_price;
use crate::pricing::ConditionalPriceModel;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn token(byte: u8, role: TokenRole) -> TokenDescriptor {
    TokenDescriptor::new(TokenAddress::from_bytes([byte; 20]), role, Decimals::MAX)
}

fn tokens() -> ConditionalTokens {
    let Ok(t) = ConditionalTokens::new(
        token(1, TokenRole::YesA),
        token(2, TokenRole::NoA),
        token(3, TokenRole::YesB),
        token(4, TokenRole::NoB),
    ) else {
        panic!("valid tokens");
    };
    t
}

fn orchestrator(spacing: u32) -> PoolAllocationOrchestrator {
    let Ok(config) = PlannerConfig::new(
        Wad::from_integer(1_000),
        Wad::from_integer(100),
        Wad::from_integer(100),
    ) else {
        panic!("valid config");
    };
    let Ok(o) = PoolAllocationOrchestrator::new(config.with_tick_spacing(spacing)) else {
        panic!("valid orchestrator");
    };
    o
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Prices from 1e-6 to 1e6, in raw wad units.
fn price_strategy() -> impl Strategy<Value = u128> {
    1_000_000_000_000u128..=1_000_000_000_000_000_000_000_000u128
}

/// Band multipliers from 0.5 to 3.0, both sides of one.
fn band_strategy() -> impl Strategy<Value = u128> {
    WAD / 2..=3 * WAD
}

/// Common tick spacings plus arbitrary small ones.
fn spacing_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![
        Just(1u32),
        Just(10u32),
        Just(60u32),
        Just(200u32),
        1u32..=2_000u32,
    ]
}

/// YES shares strictly between 0% and 100%.
fn share_strategy() -> impl Strategy<Value = u32> {
    1u32..=9_999u32
}

// ---------------------------------------------------------------------------
// Property 1: Split conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_split_within_one_unit(
        collateral in 20_000u128..=u128::MAX / 2,
        share in share_strategy(),
    ) {
        let Ok(model) = ConditionalPriceModel::new(BasisPoints::new(share)) else {
            return Err(TestCaseError::fail(format!("share {share} rejected")));
        };
        // 20_000 raw units leave at least two on each side of any share.
        let (yes, no) = match model.split_price(Wad::from_raw(collateral)) {
            Ok(sides) => sides,
            Err(e) => return Err(TestCaseError::fail(format!("split failed: {e}"))),
        };
        let total = yes.get() + no.get();
        prop_assert!(total <= collateral);
        prop_assert!(collateral - total <= 1, "lost {} units", collateral - total);
    }

    #[test]
    fn prop_even_split_halves(collateral in 2u128..=u128::MAX) {
        let (yes, no) = match ConditionalPriceModel::default().split_price(Wad::from_raw(collateral)) {
            Ok(sides) => sides,
            Err(e) => return Err(TestCaseError::fail(format!("split failed: {e}"))),
        };
        prop_assert_eq!(yes, no);
        prop_assert!(collateral - (yes.get() + no.get()) <= 1);
    }
}

// ---------------------------------------------------------------------------
// Property 2: Quote monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_quote_amount_decreasing_in_price(
        low in price_strategy(),
        permille in 1u128..=1_000u128,
    ) {
        // A step of at least 0.1% with low <= 1e24 separates the exact
        // quotients 1e39 / low and 1e39 / high by more than 1e11 raw units,
        // so truncation cannot merge them.
        let quote = Wad::from_integer(1_000);
        let high = low + low * permille / 1_000;
        let a = match quote_anchored_amount(quote, Wad::from_raw(low)) {
            Ok(amount) => amount,
            Err(e) => return Err(TestCaseError::fail(format!("low price failed: {e}"))),
        };
        let b = match quote_anchored_amount(quote, Wad::from_raw(high)) {
            Ok(amount) => amount,
            Err(e) => return Err(TestCaseError::fail(format!("high price failed: {e}"))),
        };
        prop_assert!(a > b, "amount did not fall: {} at {} vs {} at {}", a, low, b, high);
    }
}

// ---------------------------------------------------------------------------
// Properties 3-5: Tick ranges
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_tick_range_ordered_and_aligned(
        ratio in price_strategy(),
        band in band_strategy(),
        spacing in spacing_strategy(),
    ) {
        let range = match compute_tick_range(Wad::from_raw(ratio), Wad::from_raw(band), spacing) {
            Ok(range) => range,
            Err(e) => return Err(TestCaseError::fail(format!("range failed: {e}"))),
        };
        prop_assert!(range.lower() < range.upper());
        prop_assert!(range.lower().is_aligned(spacing));
        prop_assert!(range.upper().is_aligned(spacing));
        prop_assert_eq!(range.spacing(), spacing);
        if band <= WAD {
            prop_assert!(range.is_fallback());
        }
    }

    #[test]
    fn prop_tick_range_deterministic(
        ratio in price_strategy(),
        band in band_strategy(),
        spacing in spacing_strategy(),
    ) {
        let first = compute_tick_range(Wad::from_raw(ratio), Wad::from_raw(band), spacing);
        let second = compute_tick_range(Wad::from_raw(ratio), Wad::from_raw(band), spacing);
        prop_assert!(first.is_ok(), "range failed: {:?}", first);
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Property 6: Plan cardinality
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_plan_has_eight_pools(
        collateral_a in price_strategy(),
        collateral_b in price_strategy(),
        spacing in spacing_strategy(),
    ) {
        let quote = token(9, TokenRole::Quote);
        let result = orchestrator(spacing).plan_from_collateral(
            &tokens(),
            &quote,
            Wad::from_raw(collateral_a),
            Wad::from_raw(collateral_b),
        );
        let specs = match result {
            Ok(specs) => specs,
            Err(e) => return Err(TestCaseError::fail(format!("plan failed: {e}"))),
        };
        prop_assert_eq!(specs.len(), PoolAllocationOrchestrator::POOL_COUNT);
    }
}

// ---------------------------------------------------------------------------
// Property 7: Tick accuracy
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_tick_within_one_of_exact(price in price_strategy()) {
        let Ok(tick) = tick_at_price(Wad::from_raw(price)) else {
            return Err(TestCaseError::fail("tick_at_price failed"));
        };
        let exact = ((price as f64 / WAD as f64).ln() / 1.0001f64.ln()).trunc() as i32;
        prop_assert!((tick.get() - exact).abs() <= 1, "price {}: got {}, exact {}", price, tick.get(), exact);
    }
}
