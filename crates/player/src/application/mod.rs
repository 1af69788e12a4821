//! Application layer - the character sheet form session

pub mod error;
pub mod services;

pub use error::ServiceError;
