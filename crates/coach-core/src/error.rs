//! Error Types

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors from the fallible parsing helpers.
///
/// Navigation itself never fails: an unknown page renders the home view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Token is not one of the known page identifiers
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// Token is not one of the subscription plan ids
    #[error("Unknown plan: {0}")]
    UnknownPlan(String),
}
