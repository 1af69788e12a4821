//! Outbound ports - Interfaces for external collaborators
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing the application service to move bytes, ask the user, and show the
//! sheet without depending on a concrete file system or widget toolkit.

pub mod confirm_port;
pub mod document_store_port;
pub mod render_port;

pub use confirm_port::ConfirmPort;
pub use document_store_port::{DocumentStorePort, StoreError};
pub use render_port::RenderPort;

#[cfg(test)]
pub use confirm_port::MockConfirmPort;
#[cfg(test)]
pub use document_store_port::MockDocumentStorePort;
#[cfg(test)]
pub use render_port::MockRenderPort;
