//! The process-wide registry.

use std::sync::OnceLock;

use lumen_core::SdkConfig;

use crate::plugin::Child;
use crate::registry::Registry;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Build the process-wide registry on first call and return it.
///
/// Later calls return the same registry and ignore `children`.
pub fn init(children: &[&dyn Child]) -> &'static Registry {
    init_with(&SdkConfig::default(), children)
}

/// Like [`init`], with the built-ins configured by `config`.
pub fn init_with(config: &SdkConfig, children: &[&dyn Child]) -> &'static Registry {
    if let Some(registry) = REGISTRY.get() {
        tracing::debug!("registry already initialized");
        return registry;
    }
    REGISTRY.get_or_init(|| Registry::load_with(config, children))
}

/// The process-wide registry, if [`init`] has run.
pub fn registry() -> Option<&'static Registry> {
    REGISTRY.get()
}
