/// Seed for the singleton Registry PDA
pub const REGISTRY_SEED: &[u8] = b"registry";

/// Seed for Market PDA derivation (keyed by sequential market ID)
pub const MARKET_SEED: &[u8] = b"market";

/// Seed for the market name index PDA (keyed by the market name's hash)
pub const MARKET_NAME_SEED: &[u8] = b"market_name";

/// Seed for Token PDA derivation (keyed by market + market-scoped token ID)
pub const TOKEN_SEED: &[u8] = b"token";

/// Seed for the global token name index PDA (keyed by the token name's hash)
pub const TOKEN_NAME_SEED: &[u8] = b"token_name";

/// Maximum byte length for market and token names, bounding record space.
/// Enforced by validate_name; the name indices are seeded on the name's
/// hash, so over-long names reach the handler and fail with the
/// registry's own error code.
pub const MAX_NAME_LENGTH: usize = 32;
