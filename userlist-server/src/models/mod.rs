//! Domain models
//!
//! User input is validated when constructing these types.

pub mod user;
pub mod validation;

pub use user::{User, UserName, UsersResponse};
pub use validation::ValidationError;
