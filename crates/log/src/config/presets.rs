//! Configuration presets for common scenarios

use super::{Config, Format};

/// Filter directives variable; `RUST_LOG` is read when it is unset.
pub const LEVEL_ENV: &str = "LUMEN_LOG";
/// Output format variable (`pretty`, `compact` or `json`).
pub const FORMAT_ENV: &str = "LUMEN_LOG_FORMAT";

impl Config {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    ///
    /// An unrecognized format falls back to [`Format::Compact`].
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(level) = lookup(LEVEL_ENV).or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }
        if let Some(format) = lookup(FORMAT_ENV) {
            config.format = format.parse().unwrap_or(Format::Compact);
        }
        if config.format == Format::Json {
            config.ansi = false;
        }
        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_owned(),
            format: Format::Pretty,
            ansi: true,
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_owned(),
            format: Format::Json,
            ansi: false,
        }
    }
}
