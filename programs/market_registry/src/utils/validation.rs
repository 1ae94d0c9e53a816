use anchor_lang::prelude::*;

use crate::constants::MAX_NAME_LENGTH;
use crate::errors::ErrorCode;
use crate::verifier::NameVerifier;

/// Validates that a market or token name is non-empty and fits in a PDA seed
pub fn validate_name(name: &str) -> Result<()> {
    require!(
        !name.is_empty() && name.len() <= MAX_NAME_LENGTH,
        ErrorCode::InvalidNameLength
    );
    Ok(())
}

/// Validates the economic parameters of a new market.
/// The platform fee is the only one allowed to be zero.
pub fn validate_market_params(
    base_cost: u64,
    price_rise: u64,
    trading_fee_rate: u64,
) -> Result<()> {
    require!(
        base_cost > 0 && price_rise > 0 && trading_fee_rate > 0,
        ErrorCode::InvalidMarketParameters
    );
    Ok(())
}

/// Checks the market-name index freshness sentinel: a zero `market_id` means
/// the entry was created in this transaction and the name is free.
pub fn validate_market_name_free(entry_market_id: u64) -> Result<()> {
    require!(entry_market_id == 0, ErrorCode::MarketAlreadyExists);
    Ok(())
}

/// Decides whether a token name is admissible for a market.
///
/// Policy rejection and a name collision are reported as the same error;
/// callers cannot tell them apart. Clients of the original system match on
/// this single failure cause, so the two conditions stay conflated.
pub fn validate_token_admission(
    verifier: Option<&NameVerifier>,
    name: &str,
    name_taken: bool,
) -> Result<()> {
    let accepted = verifier.map_or(true, |v| v.is_valid(name));
    require!(accepted && !name_taken, ErrorCode::NameVerificationFailed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_oversized_names() {
        assert_eq!(
            validate_name(""),
            Err(ErrorCode::InvalidNameLength.into())
        );
        assert_eq!(
            validate_name(&"x".repeat(MAX_NAME_LENGTH + 1)),
            Err(ErrorCode::InvalidNameLength.into())
        );
        assert!(validate_name("testMarket").is_ok());
        assert!(validate_name(&"x".repeat(MAX_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn each_zero_market_param_fails_independently() {
        assert!(validate_market_params(1, 1, 1).is_ok());
        assert_eq!(
            validate_market_params(0, 1, 1),
            Err(ErrorCode::InvalidMarketParameters.into())
        );
        assert_eq!(
            validate_market_params(1, 0, 1),
            Err(ErrorCode::InvalidMarketParameters.into())
        );
        assert_eq!(
            validate_market_params(1, 1, 0),
            Err(ErrorCode::InvalidMarketParameters.into())
        );
    }

    #[test]
    fn zero_platform_fee_is_legal() {
        // platform_fee_rate is not part of the validated tuple at all
        assert!(validate_market_params(
            1_000_000_000_000_000_000,
            100_000_000_000_000_000,
            100
        )
        .is_ok());
    }

    #[test]
    fn fresh_market_name_entry_is_free() {
        assert!(validate_market_name_free(0).is_ok());
    }

    #[test]
    fn taken_market_name_fails_with_already_exists() {
        assert_eq!(
            validate_market_name_free(1),
            Err(ErrorCode::MarketAlreadyExists.into())
        );
        assert_eq!(
            validate_market_name_free(42),
            Err(ErrorCode::MarketAlreadyExists.into())
        );
    }

    #[test]
    fn admission_requires_verifier_approval() {
        let verifier = NameVerifier::DomainNoSubdomain;
        assert!(validate_token_admission(Some(&verifier), "example.com", false).is_ok());
        assert_eq!(
            validate_token_admission(Some(&verifier), "some.invalid.name", false),
            Err(ErrorCode::NameVerificationFailed.into())
        );
    }

    #[test]
    fn admission_without_verifier_accepts_any_free_name() {
        assert!(validate_token_admission(None, "anything goes", false).is_ok());
    }

    #[test]
    fn taken_name_fails_with_the_same_error_as_rejection() {
        let verifier = NameVerifier::DomainNoSubdomain;
        let rejected = validate_token_admission(Some(&verifier), "some.invalid.name", false);
        let taken = validate_token_admission(Some(&verifier), "example.com", true);
        assert_eq!(rejected, Err(ErrorCode::NameVerificationFailed.into()));
        assert_eq!(taken, rejected);
        // taken names fail even without a verifier
        assert_eq!(
            validate_token_admission(None, "example.com", true),
            Err(ErrorCode::NameVerificationFailed.into())
        );
    }
}
