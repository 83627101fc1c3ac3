//! # Lumen Notify
//!
//! Toast notifications for the Lumen SDK.
//!
//! One flat builder, [`Toast`], covers the whole family. The named
//! constructors only differ in their default field values:
//!
//! | Constructor | Mode | Duration | Kind | Title |
//! |---|---|---|---|---|
//! | [`Toast::quick`] | dismissible | 4s | given | given |
//! | [`Toast::long`] | dismissible | 8s | given | given |
//! | [`Toast::quick_success`] | dismissible | 4s | success | `Success!` |
//! | [`Toast::quick_error`] | dismissible | 4s | error | `Something went wrong!` |
//! | [`Toast::long_success`] | dismissible | 8s | success | `Success!` |
//! | [`Toast::long_error`] | dismissible | 8s | error | `Something went wrong!` |
//!
//! [`ToastFactory`] builds the same family from a [`ToastConfig`] when the
//! defaults are overridden.
//!
//! ```rust
//! use lumen_core::ToastKind;
//! use lumen_notify::Toast;
//!
//! let toast = Toast::long_error("Record is locked");
//! assert_eq!(toast.params().kind, ToastKind::Error);
//! assert_eq!(toast.params().duration_ms, Some(8000));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod factory;
mod toast;

pub use factory::ToastFactory;
pub use toast::Toast;

pub use lumen_core::ToastConfig;
