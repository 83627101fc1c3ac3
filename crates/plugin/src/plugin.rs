//! The child and extension contracts.

use lumen_core::Namespace;

use crate::PluginError;
use crate::exports::Exports;

/// One element of an export descriptor.
#[derive(Debug, Clone)]
pub enum Export {
    /// A string element.
    Text(String),
    /// A symbol table element.
    Table(Exports),
}

impl From<&str> for Export {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Export {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Exports> for Export {
    fn from(exports: Exports) -> Self {
        Self::Table(exports)
    }
}

/// A sibling component scanned during registry initialization.
pub trait Child: Send + Sync {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    /// The extension capability, when this child carries it.
    fn as_extension(&self) -> Option<&dyn Extension> {
        None
    }
}

/// Capability of a child that contributes a namespace.
///
/// The descriptor must be exactly `[namespace, exports]`:
///
/// ```
/// use lumen_plugin::{Export, Exports, Extension, PluginError};
///
/// struct Geo;
///
/// impl Extension for Geo {
///     fn export(&self) -> Result<Vec<Export>, PluginError> {
///         Ok(vec!["Geo".into(), Exports::new().with("radius_km", 6371_u32).into()])
///     }
/// }
/// ```
pub trait Extension: Send + Sync {
    /// Produce the export descriptor.
    fn export(&self) -> Result<Vec<Export>, PluginError>;
}

/// Validate an export descriptor into its namespace and table.
pub fn parse_descriptor(descriptor: Vec<Export>) -> Result<(Namespace, Exports), PluginError> {
    let arity = descriptor.len();
    let mut elements = descriptor.into_iter();
    let (Some(first), Some(second), None) = (elements.next(), elements.next(), elements.next())
    else {
        return Err(PluginError::Arity(arity));
    };
    let Export::Text(raw) = first else {
        return Err(PluginError::NamespaceType);
    };
    let Export::Table(exports) = second else {
        return Err(PluginError::ExportsType);
    };
    Ok((Namespace::new(&raw)?, exports))
}
