//! Read-only instructions returning registry data to off-chain callers and
//! to the exchange collaborator.

use anchor_lang::prelude::*;

use crate::constants::{MARKET_NAME_SEED, MARKET_SEED, REGISTRY_SEED, TOKEN_SEED};
use crate::errors::ErrorCode;
use crate::state::{Market, MarketDetails, MarketNameEntry, Registry, Token, TokenDetails};
use crate::utils::pda::name_seed;

#[derive(Accounts)]
pub struct ReadRegistry<'info> {
    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,
}

#[derive(Accounts)]
#[instruction(market_id: u64)]
pub struct ReadMarketById<'info> {
    // A nonexistent market_id fails here during account resolution
    #[account(
        seeds = [MARKET_SEED, market_id.to_le_bytes().as_ref()],
        bump = market.bump
    )]
    pub market: Account<'info, Market>,
}

#[derive(Accounts)]
#[instruction(name: String)]
pub struct ReadMarketByName<'info> {
    #[account(
        seeds = [MARKET_NAME_SEED, name_seed(&name).as_ref()],
        bump = market_name_entry.bump
    )]
    pub market_name_entry: Account<'info, MarketNameEntry>,

    // Both indices must resolve to the same record
    #[account(
        constraint = market.key() == market_name_entry.market @ ErrorCode::MarketNotFound
    )]
    pub market: Account<'info, Market>,
}

#[derive(Accounts)]
#[instruction(market_id: u64, token_id: u64)]
pub struct ReadToken<'info> {
    // A nonexistent market_id fails here during account resolution
    #[account(
        seeds = [MARKET_SEED, market_id.to_le_bytes().as_ref()],
        bump = market.bump
    )]
    pub market: Account<'info, Market>,

    #[account(
        seeds = [
            TOKEN_SEED,
            market.key().as_ref(),
            token_id.to_le_bytes().as_ref()
        ],
        bump = token.bump
    )]
    pub token: Account<'info, Token>,
}

pub fn get_owner(ctx: Context<ReadRegistry>) -> Result<Pubkey> {
    Ok(ctx.accounts.registry.owner)
}

pub fn get_num_markets(ctx: Context<ReadRegistry>) -> Result<u64> {
    Ok(ctx.accounts.registry.num_markets)
}

pub fn get_market_id_by_name(ctx: Context<ReadMarketByName>, _name: String) -> Result<u64> {
    Ok(ctx.accounts.market_name_entry.market_id)
}

pub fn get_market_details_by_id(
    ctx: Context<ReadMarketById>,
    _market_id: u64,
) -> Result<MarketDetails> {
    Ok(ctx.accounts.market.details())
}

pub fn get_market_details_by_name(
    ctx: Context<ReadMarketByName>,
    _name: String,
) -> Result<MarketDetails> {
    Ok(ctx.accounts.market.details())
}

pub fn get_token_details(
    ctx: Context<ReadToken>,
    _market_id: u64,
    _token_id: u64,
) -> Result<TokenDetails> {
    Ok(ctx.accounts.token.details())
}
