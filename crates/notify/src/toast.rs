use std::time::Duration;

use lumen_core::{ToastKind, ToastMode, ToastParams};
use lumen_ports::{NotificationSurface, PortsError};

use crate::factory::ToastFactory;

/// A toast notification under construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Toast {
    params: ToastParams,
}

impl Toast {
    /// Empty toast; only the kind (`info`) is set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toast from a prepared parameter mapping.
    pub fn from_params(params: ToastParams) -> Self {
        Self { params }
    }

    /// Dismissible toast shown for the quick duration.
    pub fn quick(kind: ToastKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        ToastFactory::default().quick(kind, title, message)
    }

    /// Dismissible toast shown for the long duration.
    pub fn long(kind: ToastKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        ToastFactory::default().long(kind, title, message)
    }

    /// Quick success toast.
    pub fn quick_success(message: impl Into<String>) -> Self {
        ToastFactory::default().quick_success(message)
    }

    /// Quick error toast.
    pub fn quick_error(message: impl Into<String>) -> Self {
        ToastFactory::default().quick_error(message)
    }

    /// Long success toast.
    pub fn long_success(message: impl Into<String>) -> Self {
        ToastFactory::default().long_success(message)
    }

    /// Long error toast.
    pub fn long_error(message: impl Into<String>) -> Self {
        ToastFactory::default().long_error(message)
    }

    /// Set the visual kind.
    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.params.kind = kind;
        self
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.params.title = Some(title.into());
        self
    }

    /// Set the message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.params.message = Some(message.into());
        self
    }

    /// Set the dismissal mode.
    pub fn mode(mut self, mode: ToastMode) -> Self {
        self.params.mode = Some(mode);
        self
    }

    /// Set the display duration.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.params.duration_ms = Some(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Parameters handed to the notification surface.
    pub fn params(&self) -> &ToastParams {
        &self.params
    }

    /// Show the toast on `surface`.
    ///
    /// Never fails: an unsupported environment or a surface error is logged
    /// and reported as `false`.
    pub fn fire(&self, surface: &dyn NotificationSurface) -> bool {
        match self.try_fire(surface) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "showing toast raised an error");
                false
            }
        }
    }

    fn try_fire(&self, surface: &dyn NotificationSurface) -> Result<(), PortsError> {
        let environment = surface.environment();
        if !environment.supports_toasts() {
            return Err(PortsError::Unsupported {
                primitive: "toast".to_owned(),
                environment,
            });
        }
        surface.show_toast(&self.params)
    }
}

impl From<Toast> for ToastParams {
    fn from(toast: Toast) -> Self {
        toast.params
    }
}
