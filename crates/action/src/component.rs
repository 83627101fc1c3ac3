//! Declarative component creation over the promise bridge.

use lumen_core::{Params, Status};
use serde_json::Value;

use crate::boundary::HostBoundary;
use crate::error::ActionError;
use crate::promise::Promise;

/// A component to create: its descriptor name and attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSpec {
    name: String,
    params: Params,
}

impl ComponentSpec {
    /// Spec for `name` with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Params::new(),
        }
    }

    /// Set an attribute.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Remove an attribute.
    #[must_use]
    pub fn remove_param(mut self, name: &str) -> Self {
        self.params.remove(name);
        self
    }

    /// Component descriptor name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current attributes.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The `(name, attributes)` pair handed to the host.
    pub fn to_params(&self) -> (String, Params) {
        (self.name.clone(), self.params.clone())
    }

    /// Create the component.
    pub fn create(&self, boundary: &HostBoundary) -> Promise<Value> {
        boundary
            .create_components(vec![self.to_params()])
            .then(|components| {
                components
                    .into_iter()
                    .next()
                    .ok_or_else(|| ActionError::Component {
                        status: Status::Error,
                        message: "host reported success without a component".to_owned(),
                    })
            })
    }
}

/// Several components created in one host call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentBatch {
    specs: Vec<ComponentSpec>,
}

impl ComponentBatch {
    /// Empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component.
    #[must_use]
    pub fn add(mut self, spec: ComponentSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Number of queued components.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Create every component in one call. `None` when the batch is empty.
    pub fn create(&self, boundary: &HostBoundary) -> Option<Promise<Vec<Value>>> {
        if self.specs.is_empty() {
            return None;
        }
        let specs = self.specs.iter().map(ComponentSpec::to_params).collect();
        Some(boundary.create_components(specs))
    }
}

impl FromIterator<ComponentSpec> for ComponentBatch {
    fn from_iter<I: IntoIterator<Item = ComponentSpec>>(iter: I) -> Self {
        Self {
            specs: iter.into_iter().collect(),
        }
    }
}
