use anchor_lang::prelude::*;

use crate::constants::MAX_NAME_LENGTH;
use crate::errors::ErrorCode;
use crate::verifier::NameVerifier;

/// A named trading venue with its pricing-curve parameters and fee rates.
///
/// The record is stored once, in the PDA seeded by the sequential market ID;
/// [`MarketNameEntry`] is the second index pointing back at it by name.
#[account]
pub struct Market {
    /// Sequential market ID, assigned from 1 (0 is reserved for "no market")
    pub id: u64,

    /// Globally unique market name, immutable after creation
    pub name: String,

    /// Name-admission policy for tokens; None accepts every name
    pub name_verifier: Option<NameVerifier>,

    /// Number of tokens registered under this market; never decremented
    pub num_tokens: u64,

    /// Pricing-curve intercept, immutable after creation
    pub base_cost: u64,

    /// Pricing-curve slope, immutable after creation
    pub price_rise: u64,

    /// Trading fee in basis points, owner-mutable
    pub trading_fee_rate: u64,

    /// Platform fee in basis points, owner-mutable
    pub platform_fee_rate: u64,

    /// PDA bump
    pub bump: u8,
}

impl Market {
    pub const SIZE: usize = 8 + 8 + (4 + MAX_NAME_LENGTH) + 2 + 8 + 8 + 8 + 8 + 8 + 1;

    /// Reserves the next market-scoped token ID and advances `num_tokens`,
    /// keeping the counter and the last-assigned ID in lockstep.
    pub fn allocate_token_id(&mut self) -> Result<u64> {
        let id = self
            .num_tokens
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        self.num_tokens = id;
        Ok(id)
    }

    /// Projects the record into the fixed-order details tuple consumed by
    /// the exchange collaborator.
    pub fn details(&self) -> MarketDetails {
        MarketDetails {
            exists: true,
            id: self.id,
            name: self.name.clone(),
            name_verifier: self.name_verifier,
            num_tokens: self.num_tokens,
            base_cost: self.base_cost,
            price_rise: self.price_rise,
            trading_fee_rate: self.trading_fee_rate,
            platform_fee_rate: self.platform_fee_rate,
        }
    }
}

/// Name index entry for a market. A freshly created entry has
/// `market_id == 0`; a non-zero ID means the name is already taken.
#[account]
pub struct MarketNameEntry {
    /// Address of the market record
    pub market: Pubkey,

    /// ID of the market record
    pub market_id: u64,

    /// PDA bump
    pub bump: u8,
}

impl MarketNameEntry {
    pub const SIZE: usize = 8 + 32 + 8 + 1;
}

/// Market record in the fixed field order agreed with the exchange
/// collaborator. Do not reorder.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct MarketDetails {
    pub exists: bool,
    pub id: u64,
    pub name: String,
    pub name_verifier: Option<NameVerifier>,
    pub num_tokens: u64,
    pub base_cost: u64,
    pub price_rise: u64,
    pub trading_fee_rate: u64,
    pub platform_fee_rate: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_market() -> Market {
        Market {
            id: 1,
            name: "testMarket".to_string(),
            name_verifier: Some(NameVerifier::DomainNoSubdomain),
            num_tokens: 0,
            base_cost: 1_000_000_000_000_000_000,
            price_rise: 100_000_000_000_000_000,
            trading_fee_rate: 100,
            platform_fee_rate: 50,
            bump: 254,
        }
    }

    #[test]
    fn details_projects_record_in_fixed_order() {
        let market = test_market();
        assert_eq!(
            market.details(),
            MarketDetails {
                exists: true,
                id: 1,
                name: "testMarket".to_string(),
                name_verifier: Some(NameVerifier::DomainNoSubdomain),
                num_tokens: 0,
                base_cost: 1_000_000_000_000_000_000,
                price_rise: 100_000_000_000_000_000,
                trading_fee_rate: 100,
                platform_fee_rate: 50,
            }
        );
    }

    #[test]
    fn token_ids_mirror_num_tokens() {
        let mut market = test_market();
        assert_eq!(market.allocate_token_id().unwrap(), 1);
        assert_eq!(market.num_tokens, 1);
        assert_eq!(market.allocate_token_id().unwrap(), 2);
        assert_eq!(market.num_tokens, 2);
        assert_eq!(market.details().num_tokens, 2);
    }

    #[test]
    fn token_id_allocation_checks_overflow() {
        let mut market = test_market();
        market.num_tokens = u64::MAX;
        assert_eq!(
            market.allocate_token_id(),
            Err(ErrorCode::MathOverflow.into())
        );
        assert_eq!(market.num_tokens, u64::MAX);
    }

    #[test]
    fn fee_updates_leave_other_fields_untouched() {
        let mut market = test_market();
        market.trading_fee_rate = 123;
        let details = market.details();
        assert_eq!(details.trading_fee_rate, 123);
        assert_eq!(details.platform_fee_rate, 50);
        assert_eq!(details.base_cost, 1_000_000_000_000_000_000);
        assert_eq!(details.price_rise, 100_000_000_000_000_000);
    }
}
