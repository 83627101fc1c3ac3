//! Convenience re-exports for SDK callers.
//!
//! ```rust,ignore
//! use lumen_action::prelude::*;
//! ```

pub use crate::boundary::HostBoundary;
pub use crate::component::{ComponentBatch, ComponentSpec};
pub use crate::deferred::Deferred;
pub use crate::error::{ActionError, HandlerError};
pub use crate::handle::ActionHandle;
pub use crate::promise::Promise;
pub use crate::response::{Classifier, Response, classify};
pub use crate::server::{ErrorPolicy, ServerAction};

pub use lumen_core::{ActionResult, Params, SdkConfig, Status};
pub use lumen_notify::Toast;
pub use lumen_ports::{ActionHost, NotificationSurface, Reentrancy, Scheduler};
