//! Tracked entity settings for the summary section.

use serde::Deserialize;

use crate::domain::{default_entities, TrackedEntity};
use crate::error::{ConfigError, Result};

/// `[summary]` section.
///
/// Replacing `entities` replaces the whole default list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub entities: Vec<TrackedEntity>,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            entities: default_entities(),
        }
    }
}

impl SummaryConfig {
    pub(super) fn validate(&self) -> Result<()> {
        for entity in &self.entities {
            if entity.table.trim().is_empty() {
                return Err(invalid("summary.entities.table", "table name cannot be empty"));
            }
            if entity.label.trim().is_empty() {
                return Err(invalid(
                    "summary.entities.label",
                    format!("label for table '{}' cannot be empty", entity.table),
                ));
            }
            if entity.groups.iter().any(|group| group.column.trim().is_empty()) {
                return Err(invalid(
                    "summary.entities.groups.column",
                    format!("group column for table '{}' cannot be empty", entity.table),
                ));
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> crate::error::Error {
    ConfigError::InvalidValue {
        field,
        reason: reason.into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(SummaryConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_label_is_rejected() {
        let config = SummaryConfig {
            entities: vec![TrackedEntity::new("Job", " ")],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_list_is_allowed() {
        let config = SummaryConfig { entities: Vec::new() };
        assert!(config.validate().is_ok());
    }
}
