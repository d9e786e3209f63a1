//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain types with no infrastructure dependencies.
//! The HTTP layer and the store both speak in these types.

pub mod constants;
pub mod user;

pub use constants::*;
pub use user::{NewUser, User, UserPayload};
