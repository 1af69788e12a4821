//! Application services

pub mod character_sheet_service;

pub use character_sheet_service::CharacterSheetService;
