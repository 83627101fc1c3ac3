//! The process-wide registry is built once; later calls are no-ops.

use lumen_plugin::{Child, Export, Exports, Extension, PluginError};

struct Named(&'static str);

impl Child for Named {
    fn name(&self) -> &str {
        self.0
    }

    fn as_extension(&self) -> Option<&dyn Extension> {
        Some(self)
    }
}

impl Extension for Named {
    fn export(&self) -> Result<Vec<Export>, PluginError> {
        Ok(vec![self.0.into(), Exports::new().into()])
    }
}

#[test]
fn init_twice_returns_the_same_registry() {
    assert!(lumen_plugin::registry().is_none());

    let first = lumen_plugin::init(&[&Named("First")]);
    let second = lumen_plugin::init(&[&Named("Second")]);

    assert!(std::ptr::eq(first, second));
    assert!(first.contains("First"));
    assert!(!first.contains("Second"));
    assert_eq!(first.len(), 3);
    assert!(lumen_plugin::registry().is_some_and(|r| std::ptr::eq(r, first)));
}
