//! Liquidity plan for a conditional-token proposal.
//!
//! Resolves the outcome tokens by role, derives outcome prices from a
//! collateral price feed, plans the eight pools and hands them to a
//! deployer that prints what it would create.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=conditional_liquidity=debug cargo run --example plan_proposal
//! ```

use conditional_liquidity::allocation::PoolAllocationOrchestrator;
use conditional_liquidity::config::PlannerConfig;
use conditional_liquidity::domain::{
    ConditionalTokens, Decimals, FeeTier, PriceSet, Tick, TokenAddress, TokenDescriptor,
    TokenRole, Wad,
};
use conditional_liquidity::traits::{deploy_plan, PoolDeployer, PriceFeed};
use tracing_subscriber::EnvFilter;

/// Feed with hard-coded collateral prices in the quote unit.
struct FixedFeed {
    company: Wad,
    currency: Wad,
}

impl PriceFeed for FixedFeed {
    type Error = String;

    fn spot_price(&self, token: &TokenDescriptor) -> Result<Wad, Self::Error> {
        match token.role() {
            TokenRole::CollateralA => Ok(self.company),
            TokenRole::CollateralB => Ok(self.currency),
            other => Err(format!("no price source for {other}")),
        }
    }
}

/// Deployer that prints each call and hands out sequential addresses.
#[derive(Default)]
struct PrintingDeployer {
    created: u8,
}

impl PrintingDeployer {
    fn next_address(&mut self) -> TokenAddress {
        self.created += 1;
        let mut bytes = [0u8; 20];
        if let Some(last) = bytes.last_mut() {
            *last = self.created;
        }
        TokenAddress::from_bytes(bytes)
    }
}

impl PoolDeployer for PrintingDeployer {
    type Error = std::convert::Infallible;

    fn create_constant_product_pool(
        &mut self,
        token_x: &TokenDescriptor,
        token_y: &TokenDescriptor,
        amount_x: Wad,
        amount_y: Wad,
        initial_price: Wad,
    ) -> Result<TokenAddress, Self::Error> {
        println!(
            "  create CP   {}/{}: {amount_x} x {amount_y} @ {initial_price}",
            token_x.role(),
            token_y.role()
        );
        Ok(self.next_address())
    }

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
    ) -> Result<TokenAddress, Self::Error> {
        println!(
            "  create CL   {}/{}: ticks [{tick_lower}, {tick_upper}] fee {fee_tier}, \
             up to {amount_x} x {amount_y}, sqrt price {initial_sqrt_price}",
            token_x.role(),
            token_y.role()
        );
        Ok(self.next_address())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Conditional Liquidity Plan ===\n");

    // ── 1. Resolve tokens by role ───────────────────────────────────────
    //    Roles arrive as tags from whatever extracted the token list.
    let listed = [
        ("0x1000000000000000000000000000000000000001", "company"),
        ("0x2000000000000000000000000000000000000002", "currency"),
        ("0x3000000000000000000000000000000000000003", "yes_company"),
        ("0x4000000000000000000000000000000000000004", "no_company"),
        ("0x5000000000000000000000000000000000000005", "yes_currency"),
        ("0x6000000000000000000000000000000000000006", "no_currency"),
    ];
    let mut descriptors = Vec::with_capacity(listed.len());
    for (address, role) in listed {
        descriptors.push(TokenDescriptor::new(
            address.parse()?,
            role.parse()?,
            Decimals::MAX,
        ));
    }
    let tokens = ConditionalTokens::from_descriptors(&descriptors)?;
    let quote = TokenDescriptor::new(
        "0x7000000000000000000000000000000000000007".parse()?,
        TokenRole::Quote,
        Decimals::new(18)?,
    );
    println!("Outcome tokens:");
    for token in tokens.as_array() {
        println!("  {} {}", token.role(), token.address());
    }

    // ── 2. Configure the planner ────────────────────────────────────────
    let config = PlannerConfig::new(
        Wad::from_integer(10_000),
        Wad::from_integer(500),
        Wad::from_integer(500),
    )?
    .with_tick_spacing(60);
    config.validate()?;
    println!(
        "\nBand x{}, spacing {}, split {}",
        config.band_multiplier(),
        config.tick_spacing(),
        config.price_model()
    );

    // ── 3. Fetch collateral prices and derive outcome prices ────────────
    let feed = FixedFeed {
        company: "3.75".parse()?,
        currency: "1.002".parse()?,
    };
    let collateral_a = descriptors
        .iter()
        .find(|d| d.role() == TokenRole::CollateralA)
        .ok_or("collateral A missing")?;
    let collateral_b = descriptors
        .iter()
        .find(|d| d.role() == TokenRole::CollateralB)
        .ok_or("collateral B missing")?;
    let prices = PriceSet::fetch(&feed, collateral_a, collateral_b, &config.price_model())
        .map_err(|e| e.to_string())?;
    println!("\nPrices in quote units:");
    for role in TokenRole::OUTCOMES {
        println!("  {role} {}", prices.price_of(role));
    }

    // ── 4. Plan the pools ───────────────────────────────────────────────
    let orchestrator = PoolAllocationOrchestrator::new(config)?;
    let specs = orchestrator.plan(&tokens, &quote, &prices)?;
    println!("\nPlanned {} pools:", specs.len());
    for spec in &specs {
        println!("  {spec}");
    }

    // ── 5. Deploy in canonical token order ──────────────────────────────
    let mut canonical = Vec::with_capacity(specs.len());
    for spec in specs {
        canonical.push(spec.into_canonical_order()?);
    }
    println!("\nDeploying:");
    let mut deployer = PrintingDeployer::default();
    let addresses = match deploy_plan(&canonical, &mut deployer) {
        Ok(addresses) => addresses,
        Err(never) => match never {},
    };
    println!("\nCreated {} pools", addresses.len());

    println!("\n=== Done ===");
    Ok(())
}
