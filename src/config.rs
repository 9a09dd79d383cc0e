//! Engine configuration
//!
//! Settings are layered, lowest priority first:
//!
//! 1. optional config file (format picked from the extension)
//! 2. environment variables prefixed with `TRYCATCH_` (e.g. `TRYCATCH_CATCH_PANIC=false`)
//! 3. explicit builder overrides
//!
//! ```rust
//! use trycatch::{Config, Engine};
//!
//! let config = Config::builder().catch_panic(Some(false)).build()?;
//! let engine = Engine::from_config(&config);
//! assert_eq!(engine.catch_panic_override(), Some(false));
//! # Ok::<(), trycatch::Error>(())
//! ```

use crate::error::Result;
use serde::Deserialize;
use std::path::PathBuf;

const ENV_PREFIX: &str = "TRYCATCH";

/// Engine settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether panics from the callable are intercepted.
    /// `None` follows the process-wide mode.
    pub catch_panic: Option<bool>,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for loading a [`Config`]
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    catch_panic: Option<bool>,
    config_path: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Override the catch-panic setting (highest priority)
    pub fn catch_panic(mut self, catch_panic: Option<bool>) -> Self {
        self.catch_panic = catch_panic;
        self
    }

    /// Read settings from this file; it must exist
    pub fn config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Load and merge all sources
    pub fn build(self) -> Result<Config> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = &self.config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(true));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .try_parsing(true),
        );

        if let Some(catch_panic) = self.catch_panic {
            builder = builder.set_override("catch_panic", catch_panic)?;
        }

        let config: Config = builder.build()?.try_deserialize()?;
        tracing::debug!(catch_panic = ?config.catch_panic, "loaded configuration");
        Ok(config)
    }
}
