//! Scanning a mix of well-formed and malformed extensions.

use lumen_plugin::{Child, Export, Exports, Extension, Origin, PluginError, Registry};
use pretty_assertions::assert_eq;

struct Valid;

impl Child for Valid {
    fn name(&self) -> &str {
        "mapView"
    }

    fn as_extension(&self) -> Option<&dyn Extension> {
        Some(self)
    }
}

impl Extension for Valid {
    fn export(&self) -> Result<Vec<Export>, PluginError> {
        Ok(vec![
            "Geo".into(),
            Exports::new().with("distance", distance as fn(f64, f64) -> f64).into(),
        ])
    }
}

fn distance(a: f64, b: f64) -> f64 {
    (a - b).abs()
}

struct ThreeElements;

impl Child for ThreeElements {
    fn name(&self) -> &str {
        "legacyWidget"
    }

    fn as_extension(&self) -> Option<&dyn Extension> {
        Some(self)
    }
}

impl Extension for ThreeElements {
    fn export(&self) -> Result<Vec<Export>, PluginError> {
        Ok(vec![
            "Legacy".into(),
            Exports::new().into(),
            "surplus".into(),
        ])
    }
}

struct Inert;

impl Child for Inert {
    fn name(&self) -> &str {
        "header"
    }
}

#[test]
fn malformed_extension_is_skipped_and_valid_one_kept() {
    let registry = Registry::load(&[&ThreeElements, &Inert, &Valid]);

    let names: Vec<&str> = registry.namespaces().map(|ns| ns.as_str()).collect();
    assert_eq!(names, vec!["Geo", "action", "notify"]);
    assert!(!registry.contains("Legacy"));

    let entry = registry.get("Geo").unwrap();
    assert_eq!(entry.origin(), &Origin::Extension("mapView".into()));
    let distance = entry
        .exports()
        .get::<fn(f64, f64) -> f64>("distance")
        .unwrap();
    assert_eq!(distance(1.0, 4.0), 3.0);
}
