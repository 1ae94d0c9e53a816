use anchor_lang::prelude::*;

use crate::constants::{MARKET_SEED, REGISTRY_SEED};
use crate::errors::ErrorCode;
use crate::state::{Market, Registry};

#[derive(Accounts)]
#[instruction(market_id: u64)]
pub struct SetTradingFee<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        constraint = registry.owner == owner.key() @ ErrorCode::Unauthorized
    )]
    pub registry: Account<'info, Registry>,

    // A nonexistent market_id fails here during account resolution
    #[account(
        mut,
        seeds = [MARKET_SEED, market_id.to_le_bytes().as_ref()],
        bump = market.bump
    )]
    pub market: Account<'info, Market>,
}

pub fn handler(ctx: Context<SetTradingFee>, _market_id: u64, new_rate: u64) -> Result<()> {
    let market = &mut ctx.accounts.market;
    market.trading_fee_rate = new_rate;

    msg!("Market {} trading fee set to {}", market.id, new_rate);

    Ok(())
}
