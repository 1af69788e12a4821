//! Sheetkeep Player crate.
//!
//! The character sheet form session, its outbound ports, file and terminal
//! adapters, configuration, and the line-oriented front end.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod ui;

pub use application::services::CharacterSheetService;
pub use application::ServiceError;
pub use config::PlayerConfig;
