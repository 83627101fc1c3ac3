//! Logger builder implementation

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Handle to the installed logger.
///
/// The global subscriber cannot be uninstalled; the guard reports what was
/// installed.
#[derive(Debug)]
#[must_use = "the guard reports the active logger configuration"]
pub struct LoggerGuard {
    config: Config,
}

impl LoggerGuard {
    /// Active filter directives.
    pub fn level(&self) -> &str {
        &self.config.level
    }

    /// Active output format.
    pub fn format(&self) -> Format {
        self.config.format
    }
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Parse the filter without installing anything.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::Filter(format!("{}: {e}", self.config.level)))
    }

    /// Build and install the global subscriber.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.filter()?;
        let registry = tracing_subscriber::registry().with(filter);
        let installed = match self.config.format {
            Format::Pretty => registry
                .with(fmt::layer().pretty().with_ansi(self.config.ansi))
                .try_init(),
            Format::Compact => registry
                .with(fmt::layer().compact().with_ansi(self.config.ansi))
                .try_init(),
            Format::Json => registry
                .with(fmt::layer().json().with_ansi(false))
                .try_init(),
        };
        installed.map_err(|e| LogError::AlreadyInitialized(e.to_string()))?;

        tracing::debug!(level = %self.config.level, format = %self.config.format, "logger initialized");
        Ok(LoggerGuard {
            config: self.config,
        })
    }
}
