pub mod add_market;
pub mod add_token;
pub mod initialize;
pub mod queries;
pub mod set_platform_fee;
pub mod set_trading_fee;

pub use add_market::*;
pub use add_token::*;
pub use initialize::*;
pub use queries::*;
pub use set_platform_fee::*;
pub use set_trading_fee::*;
