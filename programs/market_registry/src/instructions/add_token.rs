use anchor_lang::prelude::*;

use crate::constants::{MARKET_SEED, TOKEN_NAME_SEED, TOKEN_SEED};
use crate::state::{Market, Token, TokenNameEntry};
use crate::utils::pda::name_seed;
use crate::utils::validation::{validate_name, validate_token_admission};

#[derive(Accounts)]
#[instruction(name: String, market_id: u64)]
pub struct AddToken<'info> {
    // Token creation is permissionless; any signer pays for the accounts
    #[account(mut)]
    pub user: Signer<'info>,

    // A nonexistent market_id fails here during account resolution
    #[account(
        mut,
        seeds = [MARKET_SEED, market_id.to_le_bytes().as_ref()],
        bump = market.bump
    )]
    pub market: Account<'info, Market>,

    #[account(
        init,
        payer = user,
        space = Token::SIZE,
        seeds = [
            TOKEN_SEED,
            market.key().as_ref(),
            (market.num_tokens + 1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub token: Account<'info, Token>,

    // Global across all markets; a non-zero market_id means the name is
    // taken. Seeded on the name's hash so any length resolves and the
    // handler owns the length decision.
    #[account(
        init_if_needed,
        payer = user,
        space = TokenNameEntry::SIZE,
        seeds = [TOKEN_NAME_SEED, name_seed(&name).as_ref()],
        bump
    )]
    pub token_name_entry: Account<'info, TokenNameEntry>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<AddToken>, name: String, market_id: u64) -> Result<()> {
    validate_name(&name)?;

    let market = &mut ctx.accounts.market;
    let token_name_entry = &mut ctx.accounts.token_name_entry;

    validate_token_admission(
        market.name_verifier.as_ref(),
        &name,
        token_name_entry.market_id != 0,
    )?;

    let id = market.allocate_token_id()?;

    let token = &mut ctx.accounts.token;
    token.market = market.key();
    token.market_id = market_id;
    token.id = id;
    token.name = name;
    token.bump = ctx.bumps.token;

    token_name_entry.token = token.key();
    token_name_entry.market_id = market_id;
    token_name_entry.bump = ctx.bumps.token_name_entry;

    msg!(
        "Token {} added to market {}: {}",
        token.id,
        market.id,
        token.name
    );

    Ok(())
}
