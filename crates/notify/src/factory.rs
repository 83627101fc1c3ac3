use lumen_core::{ToastConfig, ToastKind, ToastMode, ToastParams};

use crate::toast::Toast;

/// Builds the toast family from a [`ToastConfig`].
#[derive(Debug, Clone, Default)]
pub struct ToastFactory {
    config: ToastConfig,
}

impl ToastFactory {
    /// Factory using `config` for durations and titles.
    pub fn new(config: ToastConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    fn dismissible(
        kind: ToastKind,
        title: String,
        message: String,
        duration_ms: u64,
    ) -> Toast {
        Toast::from_params(ToastParams {
            kind,
            title: Some(title),
            message: Some(message),
            mode: Some(ToastMode::Dismissible),
            duration_ms: Some(duration_ms),
        })
    }

    /// Dismissible toast shown for the quick duration.
    pub fn quick(
        &self,
        kind: ToastKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Toast {
        Self::dismissible(kind, title.into(), message.into(), self.config.quick_duration_ms)
    }

    /// Dismissible toast shown for the long duration.
    pub fn long(
        &self,
        kind: ToastKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Toast {
        Self::dismissible(kind, title.into(), message.into(), self.config.long_duration_ms)
    }

    /// Quick success toast.
    pub fn quick_success(&self, message: impl Into<String>) -> Toast {
        self.quick(ToastKind::Success, self.config.success_title.clone(), message)
    }

    /// Quick error toast.
    pub fn quick_error(&self, message: impl Into<String>) -> Toast {
        self.quick(ToastKind::Error, self.config.error_title.clone(), message)
    }

    /// Long success toast.
    pub fn long_success(&self, message: impl Into<String>) -> Toast {
        self.long(ToastKind::Success, self.config.success_title.clone(), message)
    }

    /// Long error toast.
    pub fn long_error(&self, message: impl Into<String>) -> Toast {
        self.long(ToastKind::Error, self.config.error_title.clone(), message)
    }
}
