pub mod actor;
pub mod authentication;
pub mod error;
pub mod validation;
pub mod visibility;

#[cfg(test)]
pub mod test_helpers;

pub use actor::Actor;
pub use authentication::*;
pub use error::ContentError;
pub use validation::*;
