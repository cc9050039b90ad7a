pub mod schema;

use crate::{log, log::Topic};
use schema::{ConfigSchemaError, Validate};
use std::sync::{Arc, RwLock};
use thiserror::Error as ThisError;

pub use schema::ConfigModel;

//
// CONFIG
//
// Installed once per process and read-only afterwards. Mapping calls take an
// Arc snapshot, so a reader never holds the lock while transforming data.
//

static CONFIG: RwLock<Option<Arc<ConfigModel>>> = RwLock::new(None);

/// Errors related to configuration lifecycle and parsing.
#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("config has already been initialized")]
    AlreadyInitialized,

    /// TOML could not be parsed into the expected structure.
    #[error("toml error: {0}")]
    CannotParseToml(String),

    /// Wrapper for data schema-level errors.
    #[error(transparent)]
    ConfigSchema(#[from] ConfigSchemaError),

    #[error("config lock poisoned")]
    Poisoned,
}

///
/// Config
///

pub struct Config {}

impl Config {
    /// Return the installed configuration, or the defaults when none was installed.
    #[must_use]
    pub fn current() -> Arc<ConfigModel> {
        Self::try_get().unwrap_or_default()
    }

    #[must_use]
    pub fn try_get() -> Option<Arc<ConfigModel>> {
        CONFIG.read().ok().and_then(|cfg| cfg.as_ref().cloned())
    }

    /// Parse and validate a TOML document without installing it.
    pub fn parse_toml(config_str: &str) -> Result<ConfigModel, ConfigError> {
        let config: ConfigModel =
            toml::from_str(config_str).map_err(|e| ConfigError::CannotParseToml(e.to_string()))?;

        // validate
        config.validate().map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Initialize the global configuration from a TOML string.
    pub fn init_from_toml(config_str: &str) -> Result<Arc<ConfigModel>, ConfigError> {
        let config = Self::parse_toml(config_str)?;

        Self::install(config)
    }

    /// Initialize the global configuration from an in-memory model.
    pub fn init_from_model(config: ConfigModel) -> Result<Arc<ConfigModel>, ConfigError> {
        config.validate().map_err(ConfigError::from)?;

        Self::install(config)
    }

    /// Return the current config as a TOML string.
    pub fn to_toml() -> Result<String, ConfigError> {
        let cfg = Self::current();

        toml::to_string_pretty(&*cfg).map_err(|e| ConfigError::CannotParseToml(e.to_string()))
    }

    fn install(config: ConfigModel) -> Result<Arc<ConfigModel>, ConfigError> {
        let mut borrow = CONFIG.write().map_err(|_| ConfigError::Poisoned)?;
        if borrow.is_some() {
            return Err(ConfigError::AlreadyInitialized);
        }

        crate::log::configure(config.log.level, config.log.color);

        let arc = Arc::new(config);
        *borrow = Some(arc.clone());

        log!(
            Topic::Config,
            Info,
            "config installed (unknown_keys={}, max_sequence_len={})",
            arc.expand.unknown_keys,
            arc.expand.max_sequence_len
        );

        Ok(arc)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::schema::UnknownKeys, log::Level};

    #[test]
    fn parse_toml_applies_defaults() {
        let cfg = Config::parse_toml("").unwrap();
        assert_eq!(cfg.log.level, Level::Warn);
        assert_eq!(cfg.expand.unknown_keys, UnknownKeys::Ignore);
        assert_eq!(cfg.expand.max_sequence_len, 10_000);
    }

    #[test]
    fn parse_toml_reads_sections() {
        let cfg = Config::parse_toml(
            r#"
            [log]
            level = "debug"
            color = true

            [expand]
            unknown_keys = "reject"
            max_sequence_len = 50
            "#,
        )
        .unwrap();

        assert_eq!(cfg.log.level, Level::Debug);
        assert!(cfg.log.color);
        assert_eq!(cfg.expand.unknown_keys, UnknownKeys::Reject);
        assert_eq!(cfg.expand.max_sequence_len, 50);
    }

    #[test]
    fn parse_toml_rejects_unknown_sections() {
        let err = Config::parse_toml("[transport]\nretries = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::CannotParseToml(_)));
    }

    #[test]
    fn parse_toml_runs_validation() {
        let err = Config::parse_toml("[expand]\nmax_sequence_len = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ConfigSchema(_)));
    }

    #[test]
    fn current_falls_back_to_defaults() {
        // the only install in this binary uses the defaults
        let cfg = Config::current();
        assert_eq!(cfg.expand.unknown_keys, UnknownKeys::Ignore);
    }

    #[test]
    fn install_happens_once_and_renders_back() {
        let first = Config::init_from_model(ConfigModel::default());
        assert!(first.is_ok());
        assert!(Config::try_get().is_some());

        let second = Config::init_from_model(ConfigModel::default()).unwrap_err();
        assert!(matches!(second, ConfigError::AlreadyInitialized));

        let rendered = Config::to_toml().unwrap();
        let parsed = Config::parse_toml(&rendered).unwrap();
        assert_eq!(parsed.expand.max_sequence_len, 10_000);
    }
}
