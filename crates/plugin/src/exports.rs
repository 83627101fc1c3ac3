//! Exported symbol tables.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A type-erased exported implementation.
pub type Symbol = Arc<dyn Any + Send + Sync>;

/// Symbol name → implementation table contributed under one namespace.
///
/// ```
/// use lumen_plugin::Exports;
///
/// let exports = Exports::new().with("answer", 42_u32);
/// assert_eq!(exports.get::<u32>("answer"), Some(&42));
/// assert_eq!(exports.get::<String>("answer"), None);
/// ```
#[derive(Clone, Default)]
pub struct Exports {
    symbols: BTreeMap<String, Symbol>,
}

impl Exports {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` under `name`, replacing any previous symbol.
    #[must_use]
    pub fn with<T: Any + Send + Sync>(mut self, name: impl Into<String>, value: T) -> Self {
        self.insert(name, value);
        self
    }

    /// Add `value` under `name`, replacing any previous symbol.
    pub fn insert<T: Any + Send + Sync>(&mut self, name: impl Into<String>, value: T) {
        self.symbols.insert(name.into(), Arc::new(value));
    }

    /// Add an already shared symbol.
    pub fn insert_symbol(&mut self, name: impl Into<String>, symbol: Symbol) {
        self.symbols.insert(name.into(), symbol);
    }

    /// Borrow the symbol `name` as a `T`.
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.symbols.get(name)?.downcast_ref::<T>()
    }

    /// Share the symbol `name` as an `Arc<T>`.
    pub fn get_arc<T: Any + Send + Sync>(&self, name: &str) -> Option<Arc<T>> {
        Arc::clone(self.symbols.get(name)?).downcast::<T>().ok()
    }

    /// The untyped symbol `name`.
    pub fn symbol(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Whether `name` is exported.
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Exported symbol names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(String::as_str)
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Debug for Exports {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.symbols.keys()).finish()
    }
}
