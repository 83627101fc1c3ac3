#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! # Lumen Ports
//!
//! Host interface traits (ports) for the Lumen SDK.
//!
//! The SDK never talks to the surrounding component runtime directly. Every
//! primitive it needs is a port trait the embedding host implements:
//!
//! - [`ActionHost`] -- resolves action identifiers and enqueues remote calls
//! - [`Scheduler`] -- runs a task on a later turn of the event loop
//! - [`Reentrancy`] -- makes a task safe to run outside the host's call stack
//! - [`NotificationSurface`] -- shows toasts and reports the [`Environment`]
//! - [`ComponentFactory`] -- creates declarative components asynchronously
//!
//! Two scheduler drivers ship with the crate: [`EventLoop`], a
//! deterministic single-threaded task queue, and [`TokioScheduler`], which
//! spawns onto a current-thread tokio runtime.
//!
//! All traits are object-safe, suitable for use as `Arc<dyn Trait>`.
//!
//! [`Environment`]: lumen_core::Environment

pub mod action;
pub mod component;
pub mod error;
pub mod notify;
pub mod scheduler;

pub use action::{ActionCallback, ActionHost, ResolutionError};
pub use component::{ComponentCallback, ComponentFactory, ComponentOutcome};
pub use error::PortsError;
pub use notify::NotificationSurface;
pub use scheduler::{EventLoop, Reentrancy, Scheduler, Task, TokioScheduler, Unguarded};
