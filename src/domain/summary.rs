//! Summary section types.
//!
//! The tracked entities are a contract with the inspected schema: each names a
//! table that must exist and the columns to break its rows down by.

use serde::Deserialize;

use super::cell::CellValue;

/// A table counted in the summary section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackedEntity {
    /// Table name as it appears in the catalog.
    pub table: String,
    /// Human-readable plural label, e.g. "Clinical Trials".
    pub label: String,
    /// Columns to produce grouped counts for when the table is non-empty.
    #[serde(default)]
    pub groups: Vec<GroupColumn>,
}

/// A column to group an entity's rows by.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupColumn {
    pub column: String,
    pub label: String,
}

impl TrackedEntity {
    #[must_use]
    pub fn new(table: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            label: label.into(),
            groups: Vec::new(),
        }
    }

    #[must_use]
    pub fn group_by(mut self, column: impl Into<String>, label: impl Into<String>) -> Self {
        self.groups.push(GroupColumn {
            column: column.into(),
            label: label.into(),
        });
        self
    }

    /// Heading for one of this entity's breakdowns.
    #[must_use]
    pub fn breakdown_title(&self, group: &GroupColumn) -> String {
        format!("{} by {}", self.label, group.label)
    }
}

/// Entities tracked when no configuration overrides them.
#[must_use]
pub fn default_entities() -> Vec<TrackedEntity> {
    vec![
        TrackedEntity::new("ClinicalTrial", "Clinical Trials")
            .group_by("phase", "Phase")
            .group_by("country", "Country"),
        TrackedEntity::new("Patent", "Patents")
            .group_by("status", "Status")
            .group_by("ftoFlag", "FTO Flag"),
        TrackedEntity::new("Job", "Jobs").group_by("status", "Status"),
        TrackedEntity::new("Report", "Reports"),
    ]
}

/// One row of a grouped count: a distinct column value and its frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupCount {
    pub label: CellValue,
    pub count: i64,
}

impl GroupCount {
    #[must_use]
    pub fn new(label: impl Into<CellValue>, count: i64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Row count of a tracked entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCount<'a> {
    pub entity: &'a TrackedEntity,
    pub count: i64,
}

impl EntityCount<'_> {
    /// Breakdowns are only produced for entities with rows.
    #[must_use]
    pub fn has_rows(&self) -> bool {
        self.count > 0
    }
}
