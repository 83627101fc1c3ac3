//! Namespaces seeded before any extension is scanned.

use lumen_action::Classifier;
use lumen_core::{Namespace, SdkConfig};
use lumen_notify::ToastFactory;

use crate::exports::Exports;
use crate::registry::{Origin, PluginEntry};

/// Namespace holding the response classifier and the active configuration.
pub const ACTION: &str = "action";
/// Namespace holding the toast factory.
pub const NOTIFY: &str = "notify";

pub(crate) fn entries(config: &SdkConfig) -> Vec<PluginEntry> {
    let action = Exports::new()
        .with(
            "classifier",
            Classifier::with_messages(config.messages.clone()),
        )
        .with("config", config.clone());
    let notify = Exports::new().with("toasts", ToastFactory::new(config.toast.clone()));

    [(ACTION, action), (NOTIFY, notify)]
        .into_iter()
        .filter_map(|(name, exports)| {
            Namespace::new(name)
                .ok()
                .map(|namespace| PluginEntry::new(namespace, exports, Origin::Builtin))
        })
        .collect()
}
