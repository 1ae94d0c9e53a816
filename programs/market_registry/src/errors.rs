use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Only the registry owner may perform this action")]
    Unauthorized,

    #[msg("Market exists already")]
    MarketAlreadyExists,

    #[msg("Invalid market parameters")]
    InvalidMarketParameters,

    #[msg("Market does not exist")]
    MarketNotFound,

    #[msg("Name verification failed")]
    NameVerificationFailed,

    #[msg("Name is empty or exceeds the maximum length")]
    InvalidNameLength,

    #[msg("Math operation overflow")]
    MathOverflow,
}
