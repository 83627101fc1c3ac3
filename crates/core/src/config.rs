//! SDK configuration: classifier fallback messages and toast defaults.
//!
//! Every field has a built-in default, so an empty JSON object (or no
//! configuration at all) yields the stock behavior. Messages are plain
//! strings; swap them for translated labels if you need them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::keys::CONTROLLER_PREFIX;

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV: &str = "LUMEN_CONFIG";

/// Fallback messages used when classifying host responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Response was absent.
    pub undefined_response: String,
    /// Error status without a usable structured message.
    pub unknown_error: String,
    /// Incomplete status.
    pub incomplete_action: String,
    /// Response shape not recognized at all.
    pub unexpected_error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            undefined_response: "Undefined response".to_owned(),
            unknown_error: "Unknown error".to_owned(),
            incomplete_action: "No response from server or client is offline".to_owned(),
            unexpected_error: "Unexpected error".to_owned(),
        }
    }
}

/// Defaults for the toast factory family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Duration of "quick" toasts in milliseconds.
    pub quick_duration_ms: u64,
    /// Duration of "long" toasts in milliseconds.
    pub long_duration_ms: u64,
    /// Title of success toasts.
    pub success_title: String,
    /// Title of error toasts.
    pub error_title: String,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            quick_duration_ms: 4000,
            long_duration_ms: 8000,
            success_title: "Success!".to_owned(),
            error_title: "Something went wrong!".to_owned(),
        }
    }
}

/// Top-level SDK configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
    /// Classifier fallback messages.
    pub messages: Messages,
    /// Toast defaults.
    pub toast: ToastConfig,
    /// Prefix prepended to bare action identifiers.
    pub controller_prefix: String,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            messages: Messages::default(),
            toast: ToastConfig::default(),
            controller_prefix: CONTROLLER_PREFIX.to_owned(),
        }
    }
}

impl SdkConfig {
    /// Parse configuration from a JSON document.
    pub fn from_json_str(raw: &str) -> crate::Result<Self> {
        serde_json::from_str(raw).map_err(|e| CoreError::Config(e.to_string()))
    }

    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| CoreError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&raw)
    }

    /// Load from the file named by `LUMEN_CONFIG`, or defaults when unset.
    pub fn from_env() -> crate::Result<Self> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.trim().is_empty() => {
                tracing::debug!(path = %path, "loading sdk configuration");
                Self::from_file(path.trim())
            }
            _ => Ok(Self::default()),
        }
    }
}
