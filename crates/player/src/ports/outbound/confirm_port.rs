//! ConfirmPort - yes/no questions to the user

/// Asks the user a yes/no question and waits for the answer.
#[cfg_attr(test, mockall::automock)]
pub trait ConfirmPort: Send + Sync {
    /// Returns true if the user answered yes.
    fn confirm(&self, message: &str) -> bool;
}
