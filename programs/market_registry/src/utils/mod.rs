pub mod pda;
pub mod validation;

pub use pda::*;
pub use validation::*;
