pub mod platform;
pub mod terminal;

pub use platform::FileDocumentStore;
pub use terminal::{TerminalConfirm, TerminalRenderer};
