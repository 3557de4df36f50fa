//! Table dump display settings.

use serde::Deserialize;

use crate::domain::{
    DisplayPolicy, DEFAULT_JSON_PREVIEW_CHARS, DEFAULT_OPAQUE_COLUMNS, DEFAULT_TRUNCATE_AT,
};
use crate::error::{ConfigError, Result};

/// `[display]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Text longer than this many characters is truncated.
    pub truncate_at: usize,
    /// Columns whose non-empty values print only their length.
    pub opaque_columns: Vec<String>,
    /// Maximum characters of a pretty-printed JSON preview.
    pub json_preview_chars: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            truncate_at: DEFAULT_TRUNCATE_AT,
            opaque_columns: DEFAULT_OPAQUE_COLUMNS.iter().map(ToString::to_string).collect(),
            json_preview_chars: DEFAULT_JSON_PREVIEW_CHARS,
        }
    }
}

impl DisplayConfig {
    /// Build the cell policy; `expand_json` comes from the command line.
    #[must_use]
    pub fn policy(&self, expand_json: bool) -> DisplayPolicy {
        DisplayPolicy {
            truncate_at: self.truncate_at,
            opaque_columns: self.opaque_columns.clone(),
            json_preview_chars: self.json_preview_chars,
            expand_json,
        }
    }

    pub(super) fn validate(&self) -> Result<()> {
        if self.truncate_at == 0 {
            return Err(ConfigError::InvalidValue {
                field: "truncate_at",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.json_preview_chars == 0 {
            return Err(ConfigError::InvalidValue {
                field: "json_preview_chars",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.opaque_columns.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "opaque_columns",
                reason: "column names cannot be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_domain_default() {
        assert_eq!(DisplayConfig::default().policy(false), DisplayPolicy::default());
    }

    #[test]
    fn policy_carries_expand_flag() {
        assert!(DisplayConfig::default().policy(true).expand_json);
    }

    #[test]
    fn zero_width_is_rejected() {
        let config = DisplayConfig {
            truncate_at: 0,
            ..DisplayConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
