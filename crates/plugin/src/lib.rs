//! # Lumen Plugin
//!
//! Namespace registry extended once, at startup, by sibling components.
//!
//! A child opts in by exposing the [`Extension`] capability through
//! [`Child::as_extension`]. Its export descriptor must be exactly
//! `[namespace, exports]`; anything else, a failing export, or a namespace
//! already taken (including the built-in `action` and `notify`) is logged
//! and that child is skipped. The resulting [`Registry`] has no mutating
//! methods at all.
//!
//! ## Core Types
//!
//! - [`Exports`] — symbol name → type-erased implementation
//! - [`Child`] / [`Extension`] / [`Export`] — the export contract
//! - [`Registry`] / [`RegistryBuilder`] / [`PluginEntry`] — the table
//! - [`init`] / [`registry`] — the process-wide instance
//! - [`PluginError`] — why an extension was rejected
//!
//! ```
//! use lumen_plugin::{Child, Export, Exports, Extension, PluginError, Registry};
//!
//! struct Geo;
//!
//! impl Child for Geo {
//!     fn name(&self) -> &str { "geo" }
//!     fn as_extension(&self) -> Option<&dyn Extension> { Some(self) }
//! }
//!
//! impl Extension for Geo {
//!     fn export(&self) -> Result<Vec<Export>, PluginError> {
//!         Ok(vec!["Geo".into(), Exports::new().with("radius_km", 6371_u32).into()])
//!     }
//! }
//!
//! let registry = Registry::load(&[&Geo]);
//! assert_eq!(registry.exports("Geo").and_then(|e| e.get::<u32>("radius_km")), Some(&6371));
//! assert!(registry.contains("action"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod builtins;
mod error;
mod exports;
mod global;
mod plugin;
mod registry;

pub use error::PluginError;
pub use exports::{Exports, Symbol};
pub use global::{init, init_with, registry};
pub use plugin::{Child, Export, Extension, parse_descriptor};
pub use registry::{Origin, PluginEntry, Registry, RegistryBuilder};
