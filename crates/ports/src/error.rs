//! Error types for port operations.

use lumen_core::Environment;

/// Error type for host port operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PortsError {
    /// The primitive is not available in the current environment.
    #[error("{primitive} is not supported in {environment:?}")]
    Unsupported {
        /// Name of the host primitive.
        primitive: String,
        /// Environment the call was made in.
        environment: Environment,
    },

    /// The host rejected or failed the request.
    #[error("host error: {0}")]
    Host(String),

    /// No async runtime is available to schedule onto.
    #[error("no runtime: {0}")]
    NoRuntime(String),

    /// The runtime can run spawned work on another thread before the caller
    /// yields.
    #[error("scheduler requires a current-thread runtime, got {0}")]
    MultiThreaded(String),
}

impl PortsError {
    /// Create a host error.
    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }
}
