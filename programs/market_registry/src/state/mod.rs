pub mod market;
pub mod registry;
pub mod token;

pub use market::*;
pub use registry::*;
pub use token::*;
