//! # Lumen Action
//!
//! Turns the host's callback-driven action primitive into observable,
//! chainable, error-classified async results.
//!
//! ## Core Types
//!
//! - [`HostBoundary`] — the single adapter over the host ports; applies the
//!   reentrancy guard once, for every callback and scheduled task
//! - [`ActionHandle`] — one resolved remote call (`"getRecord"` and
//!   `"c.getRecord"` resolve the same)
//! - [`Deferred`] — minimal bridge that runs its executor on a later turn
//! - [`Promise`] — settle-once, shareable promise over a native future
//! - [`ServerAction`] — the plain and handled execution policies over both
//!   bridges
//! - [`Response`] / [`Classifier`] — host response shapes and their
//!   human-readable message
//! - [`ComponentSpec`] / [`ComponentBatch`] — component creation
//! - [`ActionError`] — everything that can arrive on an error path
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lumen_action::prelude::*;
//!
//! let boundary = HostBoundary::builder(host, scheduler, surface)
//!     .reentrancy(guard)
//!     .build();
//!
//! let _pending = ServerAction::handled(boundary, "getRecord", None)
//!     .execute()
//!     .on_success(|record| {
//!         tracing::info!(%record, "loaded");
//!         Ok(())
//!     })
//!     .on_error(|e| tracing::warn!(error = %e, "load failed"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Host adapter applying the reentrancy guard.
pub mod boundary;
/// Component creation.
pub mod component;
/// Minimal deferred bridge.
pub mod deferred;
/// Error path types.
pub mod error;
/// Configured remote-call handles.
pub mod handle;
/// Settle-once promise bridge.
pub mod promise;
/// Response shapes and the message classifier.
pub mod response;
/// Execution policies.
pub mod server;

pub mod prelude;

pub use boundary::{HostBoundary, HostBoundaryBuilder};
pub use component::{ComponentBatch, ComponentSpec};
pub use deferred::{Deferred, Settler};
pub use error::{ActionError, HandlerError};
pub use handle::ActionHandle;
pub use promise::{Promise, PromiseSettler, Settlement};
pub use response::{Classifier, Response, classify};
pub use server::{ErrorPolicy, ServerAction};
