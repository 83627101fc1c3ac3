//! Logger setup errors.

/// Why the logger could not be initialized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// The filter directive string did not parse.
    #[error("invalid filter: {0}")]
    Filter(String),

    /// A global subscriber is already installed.
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Result type for logger setup.
pub type LogResult<T> = Result<T, LogError>;
