//! Plugin error types.

use lumen_core::NamespaceError;

/// Why an extension could not be registered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PluginError {
    /// The export descriptor did not have exactly two elements.
    #[error("export descriptor must have 2 elements, got {0}")]
    Arity(usize),

    /// The first element was not a namespace string.
    #[error("first export element must be a namespace string")]
    NamespaceType,

    /// The second element was not an exports table.
    #[error("second export element must be an exports table")]
    ExportsType,

    /// The namespace string failed validation.
    #[error("invalid namespace: {0}")]
    InvalidNamespace(#[from] NamespaceError),

    /// The namespace is already taken.
    #[error("namespace '{0}' is already registered")]
    DuplicateNamespace(String),

    /// The extension itself failed while exporting.
    #[error("export failed: {0}")]
    Export(String),
}

impl PluginError {
    /// Failure raised by an extension's own export logic.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}
