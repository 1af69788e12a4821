//! Platform-specific implementations
//!
//! Adapters for the outbound ports that touch the host platform.

mod desktop;

pub use desktop::FileDocumentStore;
