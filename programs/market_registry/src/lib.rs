use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;
pub mod verifier;

use instructions::*;
use state::{MarketDetails, TokenDetails};
use verifier::NameVerifier;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

/// Registry of bonding-curve markets and the tokens listed under them.
///
/// Market creation and fee updates are gated on the owner configured at
/// `initialize`; token creation is permissionless, constrained only by the
/// per-market name-admission policy and global name uniqueness. The exchange
/// reads records through the query instructions.
#[program]
pub mod market_registry {
    use super::*;

    /// One-time setup: stores the owner identity and the exchange address
    pub fn initialize(ctx: Context<Initialize>, owner: Pubkey, exchange: Pubkey) -> Result<()> {
        instructions::initialize::handler(ctx, owner, exchange)
    }

    /// Creates a new market under the next sequential ID (owner only)
    #[allow(clippy::too_many_arguments)]
    pub fn add_market(
        ctx: Context<AddMarket>,
        name: String,
        name_verifier: Option<NameVerifier>,
        base_cost: u64,
        price_rise: u64,
        trading_fee_rate: u64,
        platform_fee_rate: u64,
    ) -> Result<()> {
        instructions::add_market::handler(
            ctx,
            name,
            name_verifier,
            base_cost,
            price_rise,
            trading_fee_rate,
            platform_fee_rate,
        )
    }

    /// Registers a token under an existing market (open to any caller)
    pub fn add_token(ctx: Context<AddToken>, name: String, market_id: u64) -> Result<()> {
        instructions::add_token::handler(ctx, name, market_id)
    }

    /// Overwrites a market's trading fee rate (owner only)
    pub fn set_trading_fee(
        ctx: Context<SetTradingFee>,
        market_id: u64,
        new_rate: u64,
    ) -> Result<()> {
        instructions::set_trading_fee::handler(ctx, market_id, new_rate)
    }

    /// Overwrites a market's platform fee rate (owner only)
    pub fn set_platform_fee(
        ctx: Context<SetPlatformFee>,
        market_id: u64,
        new_rate: u64,
    ) -> Result<()> {
        instructions::set_platform_fee::handler(ctx, market_id, new_rate)
    }

    pub fn get_owner(ctx: Context<ReadRegistry>) -> Result<Pubkey> {
        instructions::queries::get_owner(ctx)
    }

    pub fn get_num_markets(ctx: Context<ReadRegistry>) -> Result<u64> {
        instructions::queries::get_num_markets(ctx)
    }

    pub fn get_market_id_by_name(ctx: Context<ReadMarketByName>, name: String) -> Result<u64> {
        instructions::queries::get_market_id_by_name(ctx, name)
    }

    pub fn get_market_details_by_id(
        ctx: Context<ReadMarketById>,
        market_id: u64,
    ) -> Result<MarketDetails> {
        instructions::queries::get_market_details_by_id(ctx, market_id)
    }

    pub fn get_market_details_by_name(
        ctx: Context<ReadMarketByName>,
        name: String,
    ) -> Result<MarketDetails> {
        instructions::queries::get_market_details_by_name(ctx, name)
    }

    pub fn get_token_details(
        ctx: Context<ReadToken>,
        market_id: u64,
        token_id: u64,
    ) -> Result<TokenDetails> {
        instructions::queries::get_token_details(ctx, market_id, token_id)
    }
}
