//! # Lumen Core
//!
//! Core types shared by every Lumen crate.
//!
//! ## Key Components
//!
//! - **Keys**: [`ActionName`] (controller-prefixed action identifier) and
//!   [`Namespace`] (registry namespace)
//! - **Action data**: [`ActionDescriptor`], [`ActionResult`], [`Status`],
//!   [`ErrorDetail`], [`RawResponse`]
//! - **Notification data**: [`ToastParams`], [`ToastKind`], [`ToastMode`],
//!   [`Environment`]
//! - **Configuration**: [`SdkConfig`], [`Messages`], [`ToastConfig`]
//!
//! ## Usage
//!
//! ```rust
//! use lumen_core::{ActionName, ActionResult, Status};
//!
//! let name = ActionName::new("getRecord").unwrap();
//! assert_eq!(name.as_str(), "c.getRecord");
//!
//! let result = ActionResult::error_message("field required");
//! assert_eq!(result.status(), Status::Error);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod action;
pub mod config;
pub mod keys;
pub mod toast;

mod error;

pub use action::{ActionDescriptor, ActionResult, ErrorDetail, Params, RawResponse, Status};
pub use config::{Messages, SdkConfig, ToastConfig};
pub use error::CoreError;
pub use keys::{ActionName, ActionNameError, CONTROLLER_PREFIX, Namespace, NamespaceError};
pub use toast::{Environment, ToastKind, ToastMode, ToastParams};

/// Result type used throughout Lumen core.
pub type Result<T> = std::result::Result<T, CoreError>;
