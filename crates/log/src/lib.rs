//! # Lumen Log
//!
//! `tracing-subscriber` setup for hosts embedding the Lumen SDK.
//!
//! The SDK crates only emit `tracing` events; whoever owns the process
//! installs a subscriber once, usually from the environment:
//!
//! ```rust,no_run
//! let _guard = lumen_log::init().expect("logger");
//! tracing::info!("ready");
//! ```
//!
//! | Variable | Meaning |
//! |---|---|
//! | `LUMEN_LOG` | filter directives (falls back to `RUST_LOG`) |
//! | `LUMEN_LOG_FORMAT` | `pretty`, `compact` or `json` |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, FORMAT_ENV, Format, LEVEL_ENV};
pub use error::{LogError, LogResult};

/// Install a subscriber configured from the environment.
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::from_env())
}

/// Install a subscriber from `config`.
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
