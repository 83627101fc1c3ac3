//! Notification surface port.

use lumen_core::{Environment, ToastParams};

use crate::error::PortsError;

/// Shows end-user notifications.
///
/// Implementations report failures through the returned `Result`; callers in
/// the SDK log and swallow them.
pub trait NotificationSurface: Send + Sync {
    /// The runtime the surface lives in.
    fn environment(&self) -> Environment;

    /// Show a toast built from `params`.
    fn show_toast(&self, params: &ToastParams) -> Result<(), PortsError>;
}
