pub mod token;
pub mod claims;
pub mod authenticator;

pub use token::*;
pub use authenticator::*;
