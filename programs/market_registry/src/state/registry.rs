use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

/// Singleton root account holding the owner identity, the external exchange
/// address and the market counter.
#[account]
pub struct Registry {
    /// The single privileged identity; set once at initialize
    pub owner: Pubkey,

    /// Address of the exchange collaborator consuming market records;
    /// stored for clients, never dereferenced by the registry
    pub exchange: Pubkey,

    /// Number of markets; doubles as the last-assigned market ID
    pub num_markets: u64,

    /// PDA bump
    pub bump: u8,
}

impl Registry {
    pub const SIZE: usize = 8 + 32 + 32 + 8 + 1;

    /// Reserves the next sequential market ID (IDs start at 1, 0 means
    /// "no such market") and advances the counter.
    pub fn allocate_market_id(&mut self) -> Result<u64> {
        let id = self
            .num_markets
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        self.num_markets = id;
        Ok(id)
    }
}
