//! Toast notification parameters and the runtime environment flag.

use serde::{Deserialize, Serialize};

/// Visual kind of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// Green confirmation.
    Success,
    /// Yellow warning.
    Warning,
    /// Red failure.
    Error,
    /// Neutral information.
    #[default]
    Info,
}

/// How a toast is dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastMode {
    /// Closes on its own after the duration, or when the user closes it.
    Dismissible,
    /// Closes on its own; no close button.
    Pester,
    /// Stays until the user closes it.
    Sticky,
}

/// Flat parameter mapping handed to the notification surface.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastParams {
    /// Visual kind.
    #[serde(rename = "type")]
    pub kind: ToastKind,
    /// Bold title line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Dismissal mode; the surface default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ToastMode>,
    /// Display duration in milliseconds.
    #[serde(default, rename = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// Runtime the SDK is embedded in.
///
/// Standalone applications have no global toast event, so toasts can only
/// be shown inside the full `Lightning` runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    /// Standalone application container.
    App,
    /// Full runtime with the global toast event.
    Lightning,
}

impl Environment {
    /// Whether this is a standalone application.
    pub fn is_app(self) -> bool {
        self == Self::App
    }

    /// Whether this is the full runtime.
    pub fn is_lightning(self) -> bool {
        self == Self::Lightning
    }

    /// Whether toasts can be shown in this environment.
    pub fn supports_toasts(self) -> bool {
        self.is_lightning()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn params_serialize_with_host_field_names() {
        let params = ToastParams {
            kind: ToastKind::Error,
            title: Some("Something went wrong!".into()),
            message: Some("boom".into()),
            mode: Some(ToastMode::Dismissible),
            duration_ms: Some(8000),
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "type": "error",
                "title": "Something went wrong!",
                "message": "boom",
                "mode": "dismissible",
                "duration": 8000
            })
        );
    }

    #[test]
    fn empty_params_only_carry_type() {
        assert_eq!(
            serde_json::to_value(ToastParams::default()).unwrap(),
            json!({"type": "info"})
        );
    }

    #[test]
    fn environment_flags() {
        assert!(Environment::App.is_app());
        assert!(!Environment::App.supports_toasts());
        assert!(Environment::Lightning.supports_toasts());
    }
}
