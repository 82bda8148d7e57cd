//! Seam to the component that creates and seeds pools.
//!
//! The planner never deploys anything itself. A [`PoolDeployer`] wraps
//! whatever factory or router the surrounding system talks to, and owns
//! its own error handling and retries. [`deploy_pool`] routes a
//! [`PoolSpec`] to the matching method.

use crate::domain::{FeeTier, PoolMechanism, PoolSpec, Tick, TokenAddress, TokenDescriptor, Wad};

/// Creates pools from computed amounts and ranges.
///
/// # Implementors
///
/// Implementations typically submit a transaction per call and return the
/// address of the new pool. Errors are the implementation's own type;
/// nothing in this crate inspects them.
///
/// # Examples
///
/// ```
/// use conditional_liquidity::domain::{FeeTier, Tick, TokenAddress, TokenDescriptor, Wad};
/// use conditional_liquidity::traits::PoolDeployer;
///
/// struct Counter(u8);
///
/// impl PoolDeployer for Counter {
///     type Error = core::convert::Infallible;
///
///     fn create_constant_product_pool(
///         &mut self,
///         _: &TokenDescriptor,
///         _: &TokenDescriptor,
///         _: Wad,
///         _: Wad,
///         _: Wad,
///     ) -> Result<TokenAddress, Self::Error> {
///         self.0 += 1;
///         Ok(TokenAddress::from_bytes([self.0; 20]))
///     }
///
///     fn create_concentrated_pool(
///         &mut self,
///         _: &TokenDescriptor,
///         _: &TokenDescriptor,
///         _: FeeTier,
///         _: Tick,
///         _: Tick,
///         _: Wad,
///         _: Wad,
///         _: Wad,
///     ) -> Result<TokenAddress, Self::Error> {
///         self.0 += 1;
///         Ok(TokenAddress::from_bytes([self.0; 20]))
///     }
/// }
/// ```
pub trait PoolDeployer {
    /// Failure reported by the deployment backend.
    type Error;

    /// Creates a constant-product pool seeded with both amounts.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn create_constant_product_pool(
        &mut self,
        token_x: &TokenDescriptor,
        token_y: &TokenDescriptor,
        amount_x: Wad,
        amount_y: Wad,
        initial_price: Wad,
    ) -> Result<TokenAddress, Self::Error>;

    /// Creates a concentrated-liquidity pool and a position over
    /// `[tick_lower, tick_upper]`.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    #[allow(clippy::too_many_arguments)]
    fn create_concentrated_pool(
        &mut self,
        token_x: &TokenDescriptor,
        token_y: &TokenDescriptor,
        fee_tier: FeeTier,
        tick_lower: Tick,
        tick_upper: Tick,
        amount_x: Wad,
        amount_y: Wad,
        initial_sqrt_price: Wad,
    ) -> Result<TokenAddress, Self::Error>;
}

/// Hands one spec to `deployer`, deriving the square-root price for
/// concentrated pools.
///
/// # Errors
///
/// Returns whatever the deployer returns.
pub fn deploy_pool<D>(spec: &PoolSpec, deployer: &mut D) -> Result<TokenAddress, D::Error>
where
    D: PoolDeployer + ?Sized,
{
    match spec.mechanism() {
        PoolMechanism::ConstantProduct => deployer.create_constant_product_pool(
            spec.token_x(),
            spec.token_y(),
            spec.amount_x(),
            spec.amount_y(),
            spec.initial_price(),
        ),
        PoolMechanism::ConcentratedLiquidity(range) => deployer.create_concentrated_pool(
            spec.token_x(),
            spec.token_y(),
            spec.fee_tier(),
            range.lower(),
            range.upper(),
            spec.amount_x(),
            spec.amount_y(),
            spec.initial_sqrt_price(),
        ),
    }
}

/// Deploys every spec in order, stopping at the first failure.
///
/// Returns the pool addresses in the order of `specs`.
///
/// # Errors
///
/// Returns the first error reported by the deployer; pools deployed
/// before it are not rolled back.
pub fn deploy_plan<D>(specs: &[PoolSpec], deployer: &mut D) -> Result<Vec<TokenAddress>, D::Error>
where
    D: PoolDeployer + ?Sized,
{
    let mut addresses = Vec::with_capacity(specs.len());
    for spec in specs {
        let address = deploy_pool(spec, deployer)?;
        tracing::debug!(pool = %spec.label(), address = %address, "pool deployed");
        addresses.push(address);
    }
    Ok(addresses)
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::{Decimals, TickRange, TokenRole};

    #[derive(Debug, PartialEq)]
    enum Call {
        ConstantProduct {
            amount_x: Wad,
            amount_y: Wad,
            price: Wad,
        },
        Concentrated {
            fee: FeeTier,
            lower: i32,
            upper: i32,
            sqrt_price: Wad,
        },
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
        fail_after: Option<usize>,
    }

    impl Recorder {
        fn next_address(&mut self) -> Result<TokenAddress, &'static str> {
            if self.fail_after.is_some_and(|n| self.calls.len() > n) {
                return Err("backend unavailable");
            }
            let byte = u8::try_from(self.calls.len()).unwrap_or(u8::MAX);
            Ok(TokenAddress::from_bytes([byte; 20]))
        }
    }

    impl PoolDeployer for Recorder {
        type Error = &'static str;

        fn create_constant_product_pool(
            &mut self,
            _token_x: &TokenDescriptor,
            _token_y: &TokenDescriptor,
            amount_x: Wad,
            amount_y: Wad,
            initial_price: Wad,
        ) -> Result<TokenAddress, Self::Error> {
            self.calls.push(Call::ConstantProduct {
                amount_x,
                amount_y,
                price: initial_price,
            });
            self.next_address()
        }

        fn create_concentrated_pool(
            &mut self,
            _token_x: &TokenDescriptor,
            _token_y: &TokenDescriptor,
            fee_tier: FeeTier,
            tick_lower: Tick,
            tick_upper: Tick,
            _amount_x: Wad,
            _amount_y: Wad,
            initial_sqrt_price: Wad,
        ) -> Result<TokenAddress, Self::Error> {
            self.calls.push(Call::Concentrated {
                fee: fee_tier,
                lower: tick_lower.get(),
                upper: tick_upper.get(),
                sqrt_price: initial_sqrt_price,
            });
            self.next_address()
        }
    }

    fn token(byte: u8, role: TokenRole) -> TokenDescriptor {
        TokenDescriptor::new(TokenAddress::from_bytes([byte; 20]), role, Decimals::MAX)
    }

    fn cp_spec() -> PoolSpec {
        let Ok(spec) = PoolSpec::constant_product(
            token(1, TokenRole::YesA),
            token(9, TokenRole::Quote),
            Wad::from_integer(50),
            Wad::from_integer(100),
            Wad::from_integer(2),
            FeeTier::TIER_0_30_PERCENT,
        ) else {
            panic!("valid spec");
        };
        spec
    }

    fn cl_spec() -> PoolSpec {
        let (Ok(lower), Ok(upper)) = (Tick::new(-1_820), Tick::new(1_820)) else {
            panic!("valid ticks");
        };
        let Ok(range) = TickRange::new(lower, upper, 10, false) else {
            panic!("valid range");
        };
        let Ok(spec) = PoolSpec::concentrated(
            token(1, TokenRole::YesA),
            token(3, TokenRole::YesB),
            Wad::from_integer(10),
            Wad::from_integer(10),
            Wad::from_integer(4),
            FeeTier::TIER_0_10_PERCENT,
            range,
        ) else {
            panic!("valid spec");
        };
        spec
    }

    #[test]
    fn routes_constant_product() {
        let mut deployer = Recorder::default();
        assert!(deploy_pool(&cp_spec(), &mut deployer).is_ok());
        assert_eq!(
            deployer.calls,
            [Call::ConstantProduct {
                amount_x: Wad::from_integer(50),
                amount_y: Wad::from_integer(100),
                price: Wad::from_integer(2),
            }]
        );
    }

    #[test]
    fn routes_concentrated_with_sqrt_price() {
        let mut deployer = Recorder::default();
        assert!(deploy_pool(&cl_spec(), &mut deployer).is_ok());
        assert_eq!(
            deployer.calls,
            [Call::Concentrated {
                fee: FeeTier::TIER_0_10_PERCENT,
                lower: -1_820,
                upper: 1_820,
                sqrt_price: Wad::from_integer(2),
            }]
        );
    }

    #[test]
    fn deploy_plan_returns_addresses_in_order() {
        let mut deployer = Recorder::default();
        let Ok(addresses) = deploy_plan(&[cp_spec(), cl_spec()], &mut deployer) else {
            panic!("expected Ok");
        };
        assert_eq!(addresses.len(), 2);
        assert_eq!(addresses[0], TokenAddress::from_bytes([1; 20]));
        assert_eq!(addresses[1], TokenAddress::from_bytes([2; 20]));
    }

    #[test]
    fn deploy_plan_stops_at_first_failure() {
        let mut deployer = Recorder {
            fail_after: Some(1),
            ..Recorder::default()
        };
        let result = deploy_plan(&[cp_spec(), cl_spec(), cp_spec()], &mut deployer);
        assert_eq!(result, Err("backend unavailable"));
        assert_eq!(deployer.calls.len(), 2);
    }
}
