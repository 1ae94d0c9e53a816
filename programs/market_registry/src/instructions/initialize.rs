use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::state::Registry;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    // `init` makes a second initialize fail: the PDA already exists
    #[account(
        init,
        payer = payer,
        space = Registry::SIZE,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, owner: Pubkey, exchange: Pubkey) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.owner = owner;
    registry.exchange = exchange;
    registry.num_markets = 0;
    registry.bump = ctx.bumps.registry;

    msg!("Registry initialized: owner {} exchange {}", owner, exchange);

    Ok(())
}
