//! Write-once namespace registry.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use lumen_core::{Namespace, SdkConfig};

use crate::PluginError;
use crate::builtins;
use crate::exports::Exports;
use crate::plugin::{Child, parse_descriptor};

/// Where a registry entry came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Seeded by the SDK.
    Builtin,
    /// Contributed by the named child.
    Extension(String),
}

/// One namespace and its exports.
#[derive(Debug, Clone)]
pub struct PluginEntry {
    namespace: Namespace,
    exports: Exports,
    origin: Origin,
}

impl PluginEntry {
    /// Entry for `namespace`.
    pub fn new(namespace: Namespace, exports: Exports, origin: Origin) -> Self {
        Self {
            namespace,
            exports,
            origin,
        }
    }

    /// The namespace.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// The exported symbols.
    pub fn exports(&self) -> &Exports {
        &self.exports
    }

    /// Who contributed the entry.
    pub fn origin(&self) -> &Origin {
        &self.origin
    }
}

/// Frozen namespace table.
///
/// There is no way to add or remove a namespace once built; build one
/// through [`RegistryBuilder`] or [`Registry::load`].
pub struct Registry {
    entries: BTreeMap<Namespace, PluginEntry>,
}

impl Registry {
    /// Start an empty builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Built-ins with the default configuration plus every valid
    /// extension among `children`.
    pub fn load(children: &[&dyn Child]) -> Self {
        Self::load_with(&SdkConfig::default(), children)
    }

    /// Built-ins configured by `config` plus every valid extension among
    /// `children`.
    pub fn load_with(config: &SdkConfig, children: &[&dyn Child]) -> Self {
        Self::builder().builtins(config).scan(children).build()
    }

    /// Entry for `namespace`.
    pub fn get(&self, namespace: &str) -> Option<&PluginEntry> {
        self.entries.get(&Namespace::new(namespace).ok()?)
    }

    /// Exports under `namespace`.
    pub fn exports(&self, namespace: &str) -> Option<&Exports> {
        self.get(namespace).map(PluginEntry::exports)
    }

    /// Whether `namespace` is registered.
    pub fn contains(&self, namespace: &str) -> bool {
        self.get(namespace).is_some()
    }

    /// Registered namespaces in sorted order.
    pub fn namespaces(&self) -> impl Iterator<Item = &Namespace> {
        self.entries.keys()
    }

    /// All entries in namespace order.
    pub fn iter(&self) -> impl Iterator<Item = &PluginEntry> {
        self.entries.values()
    }

    /// Number of namespaces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no namespace is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("count", &self.entries.len())
            .field("namespaces", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Mutable staging area consumed by [`build`](Self::build).
#[derive(Default)]
pub struct RegistryBuilder {
    entries: BTreeMap<Namespace, PluginEntry>,
}

impl RegistryBuilder {
    /// Register one entry. Fails if the namespace is taken.
    pub fn register(&mut self, entry: PluginEntry) -> Result<(), PluginError> {
        if self.entries.contains_key(entry.namespace()) {
            return Err(PluginError::DuplicateNamespace(
                entry.namespace().to_string(),
            ));
        }
        self.entries.insert(entry.namespace().clone(), entry);
        Ok(())
    }

    /// Seed the `action` and `notify` namespaces.
    #[must_use]
    pub fn builtins(mut self, config: &SdkConfig) -> Self {
        for entry in builtins::entries(config) {
            if let Err(e) = self.register(entry) {
                tracing::error!(error = %e, "built-in namespace rejected");
            }
        }
        self
    }

    /// Register the export of every child carrying the extension
    /// capability. Malformed, colliding or panicking exports are logged and
    /// skipped.
    #[must_use]
    pub fn scan(mut self, children: &[&dyn Child]) -> Self {
        for child in children {
            let Some(extension) = child.as_extension() else {
                continue;
            };
            let exported = panic::catch_unwind(AssertUnwindSafe(|| extension.export()))
                .unwrap_or_else(|payload| {
                    Err(PluginError::Export(panic_message(payload.as_ref())))
                });
            let outcome = exported.and_then(parse_descriptor).and_then(
                |(namespace, exports)| {
                    let origin = Origin::Extension(child.name().to_owned());
                    self.register(PluginEntry::new(namespace, exports, origin))
                },
            );
            match outcome {
                Ok(()) => tracing::debug!(child = child.name(), "extension registered"),
                Err(e) => {
                    tracing::error!(child = child.name(), error = %e, "skipping extension");
                }
            }
        }
        self
    }

    /// Freeze the table.
    pub fn build(self) -> Registry {
        tracing::info!(namespaces = self.entries.len(), "registry initialized");
        Registry {
            entries: self.entries,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown payload".to_owned());
    format!("panicked: {detail}")
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("count", &self.entries.len())
            .finish()
    }
}
