use anchor_lang::prelude::*;

use crate::constants::MAX_NAME_LENGTH;

/// A named asset registered under exactly one market.
#[account]
pub struct Token {
    /// Market this token belongs to
    pub market: Pubkey,

    /// ID of the owning market
    pub market_id: u64,

    /// Token ID, scoped to the market, assigned from 1
    pub id: u64,

    /// Token name, globally unique across all markets
    pub name: String,

    /// PDA bump
    pub bump: u8,
}

impl Token {
    pub const SIZE: usize = 8 + 32 + 8 + 8 + (4 + MAX_NAME_LENGTH) + 1;

    pub fn details(&self) -> TokenDetails {
        TokenDetails {
            exists: true,
            id: self.id,
            name: self.name.clone(),
            market_id: self.market_id,
        }
    }
}

/// Global name index entry for a token. A freshly created entry has
/// `market_id == 0`; a non-zero ID means the name is taken by some token
/// in some market.
#[account]
pub struct TokenNameEntry {
    /// Address of the token record
    pub token: Pubkey,

    /// ID of the market the token lives under
    pub market_id: u64,

    /// PDA bump
    pub bump: u8,
}

impl TokenNameEntry {
    pub const SIZE: usize = 8 + 32 + 8 + 1;
}

/// Token record as returned to clients.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct TokenDetails {
    pub exists: bool,
    pub id: u64,
    pub name: String,
    pub market_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_carries_market_link() {
        let token = Token {
            market: Pubkey::new_unique(),
            market_id: 1,
            id: 1,
            name: "example.com".to_string(),
            bump: 253,
        };
        assert_eq!(
            token.details(),
            TokenDetails {
                exists: true,
                id: 1,
                name: "example.com".to_string(),
                market_id: 1,
            }
        );
    }
}
