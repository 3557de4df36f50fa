//! Application configuration loading and validation.
//!
//! Every field has a default, so running without a configuration file reads
//! `backend/prisma/dev.db` and tracks the standard entities.
//!
//! # Example
//!
//! ```no_run
//! use dbview::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("dbview.toml")?;
//!     config.init_logging(0);
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::display::DisplayConfig;
use super::logging::LoggingConfig;
use super::summary::SummaryConfig;
use crate::error::{ConfigError, Result};

/// Database path used when neither the config file nor the command line names one.
pub const DEFAULT_DATABASE_PATH: &str = "backend/prisma/dev.db";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the SQLite database file, relative to the working directory
    /// unless absolute.
    pub database: PathBuf,

    pub logging: LoggingConfig,

    /// Cell formatting for the table dump.
    pub display: DisplayConfig,

    /// Entities counted in the summary section.
    pub summary: SummaryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE_PATH),
            logging: LoggingConfig::default(),
            display: DisplayConfig::default(),
            summary: SummaryConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` when given, otherwise fall back to defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.database.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database",
                reason: "path cannot be empty".to_string(),
            }
            .into());
        }
        self.display.validate()?;
        self.summary.validate()?;
        Ok(())
    }

    /// Logging settings with the `-v` count from the command line applied.
    #[must_use]
    pub fn effective_logging(&self, verbose: u8) -> LoggingConfig {
        self.logging.clone().with_verbosity(verbose)
    }

    /// Initialize logging with the configured settings and `-v` count.
    pub fn init_logging(&self, verbose: u8) {
        self.effective_logging(verbose).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TrackedEntity;
    use crate::error::Error;

    #[test]
    fn empty_document_yields_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.database, PathBuf::from("backend/prisma/dev.db"));
    }

    #[test]
    fn verbosity_overrides_configured_level() {
        let config = Config::parse_toml(
            r#"
[logging]
level = "info"
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.effective_logging(0).level, "info");
        assert_eq!(config.effective_logging(1).level, "debug");
        assert_eq!(config.effective_logging(2).level, "trace");
        assert_eq!(config.effective_logging(2).format, "json");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::parse_toml(
            r#"
database = "data/app.db"

[display]
truncate_at = 40
"#,
        )
        .unwrap();

        assert_eq!(config.database, PathBuf::from("data/app.db"));
        assert_eq!(config.display.truncate_at, 40);
        assert_eq!(config.display.opaque_columns, vec!["trace", "data"]);
        assert_eq!(config.summary, SummaryConfig::default());
    }

    #[test]
    fn entities_can_be_replaced() {
        let config = Config::parse_toml(
            r#"
[[summary.entities]]
table = "Order"
label = "Orders"

[[summary.entities.groups]]
column = "state"
label = "State"
"#,
        )
        .unwrap();

        assert_eq!(
            config.summary.entities,
            vec![TrackedEntity::new("Order", "Orders").group_by("state", "State")]
        );
    }

    #[test]
    fn invalid_width_is_rejected() {
        let result = Config::parse_toml("[display]\ntruncate_at = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "truncate_at",
                ..
            }))
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = Config::parse_toml("database = ");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn missing_file_without_path_uses_defaults() {
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }

    #[test]
    fn unreadable_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
    }
}
