//! # sieve-config
//!
//! Layered configuration loading for sieve using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SIEVE_*` prefix, `__` as separator)
//! 2. Project-level `./sieve.toml`
//! 3. User-level `~/.config/sieve/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags are applied on top by the CLI.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SIEVE_CANON__MODE` -> `canon.mode`, `SIEVE_BATCH__WORKERS` -> `batch.workers`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use sieve_config::SieveConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = SieveConfig::load_with_dotenv().expect("config");
//!
//! println!("mode: {}", config.canon.mode);
//! ```

mod batch;
mod canon;
mod error;

pub use batch::BatchConfig;
pub use canon::CanonConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the project-local configuration file.
pub const PROJECT_CONFIG_FILE: &str = "sieve.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SieveConfig {
    #[serde(default)]
    pub canon: CanonConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

impl SieveConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    /// Returns `ConfigError::Figment` when a source cannot be read or does not
    /// match the schema, `ConfigError::InvalidValue` when a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// Looks for `.env` in the current directory and its ancestors. A missing
    /// file is not an error.
    ///
    /// # Errors
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::load()
    }

    /// Extract and validate a configuration from an arbitrary figment.
    ///
    /// # Errors
    /// Same as [`load`](Self::load).
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("SIEVE_").split("__"))
    }

    /// Check values that deserialize fine but cannot be used.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.canon.validate()?;
        self.batch.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sieve").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sieve_core::{EmptyPolicy, Mode};

    #[test]
    fn default_config_loads() {
        let config = SieveConfig::default();
        assert_eq!(config.canon.mode, Mode::Flat);
        assert_eq!(config.canon.empty_policy, EmptyPolicy::Omit);
        assert_eq!(config.batch.workers, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn defaults_survive_a_figment_round_trip() {
        let figment = Figment::from(Serialized::defaults(SieveConfig::default()));
        let config = SieveConfig::from_figment(&figment).expect("should extract defaults");
        assert_eq!(config, SieveConfig::default());
    }
}
