use anchor_lang::prelude::*;

use crate::constants::{MARKET_NAME_SEED, MARKET_SEED, REGISTRY_SEED};
use crate::errors::ErrorCode;
use crate::state::{Market, MarketNameEntry, Registry};
use crate::utils::pda::name_seed;
use crate::utils::validation::{validate_market_name_free, validate_market_params, validate_name};
use crate::verifier::NameVerifier;

#[derive(Accounts)]
#[instruction(name: String)]
pub struct AddMarket<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        constraint = registry.owner == owner.key() @ ErrorCode::Unauthorized
    )]
    pub registry: Account<'info, Registry>,

    // The next sequential ID has never been assigned, so plain `init`
    #[account(
        init,
        payer = owner,
        space = Market::SIZE,
        seeds = [
            MARKET_SEED,
            (registry.num_markets + 1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub market: Account<'info, Market>,

    // The name index may already exist; a non-zero market_id in the handler
    // means the name is taken. Seeded on the name's hash so any length
    // resolves and the handler owns the length decision.
    #[account(
        init_if_needed,
        payer = owner,
        space = MarketNameEntry::SIZE,
        seeds = [MARKET_NAME_SEED, name_seed(&name).as_ref()],
        bump
    )]
    pub market_name_entry: Account<'info, MarketNameEntry>,

    pub system_program: Program<'info, System>,
}

#[allow(clippy::too_many_arguments)]
pub fn handler(
    ctx: Context<AddMarket>,
    name: String,
    name_verifier: Option<NameVerifier>,
    base_cost: u64,
    price_rise: u64,
    trading_fee_rate: u64,
    platform_fee_rate: u64,
) -> Result<()> {
    validate_name(&name)?;

    let market_name_entry = &mut ctx.accounts.market_name_entry;
    validate_market_name_free(market_name_entry.market_id)?;

    validate_market_params(base_cost, price_rise, trading_fee_rate)?;

    let id = ctx.accounts.registry.allocate_market_id()?;

    let market = &mut ctx.accounts.market;
    market.id = id;
    market.name = name;
    market.name_verifier = name_verifier;
    market.num_tokens = 0;
    market.base_cost = base_cost;
    market.price_rise = price_rise;
    market.trading_fee_rate = trading_fee_rate;
    market.platform_fee_rate = platform_fee_rate;
    market.bump = ctx.bumps.market;

    market_name_entry.market = market.key();
    market_name_entry.market_id = id;
    market_name_entry.bump = ctx.bumps.market_name_entry;

    msg!(
        "Market {} added: {} (base cost {}, price rise {}, trading fee {}, platform fee {})",
        market.id,
        market.name,
        market.base_cost,
        market.price_rise,
        market.trading_fee_rate,
        market.platform_fee_rate
    );

    Ok(())
}
