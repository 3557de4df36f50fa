//! Summary section: entity counts and grouped breakdowns.

use std::io::Write;

use tracing::{debug, info};

use crate::domain::{EntityCount, TrackedEntity};
use crate::error::Result;
use crate::port::DatabaseReader;

use super::format::{write_banner, write_rule};

/// Write the summary section for `entities`.
///
/// Every entity is counted before any count line is written, so a missing
/// table leaves no partial count lines behind. Breakdowns are queried and
/// written one at a time, only for entities that have rows.
///
/// # Errors
/// Fails if any tracked table or group column does not exist.
pub fn write_summary<R, W>(reader: &R, entities: &[TrackedEntity], out: &mut W) -> Result<()>
where
    R: DatabaseReader + ?Sized,
    W: Write,
{
    write_banner(out, "📈 SUMMARY")?;

    let counts = entities
        .iter()
        .map(|entity| {
            reader.row_count(&entity.table).map(|count| EntityCount { entity, count })
        })
        .collect::<Result<Vec<_>>>()?;
    info!(entities = counts.len(), "counted tracked entities");

    for entry in &counts {
        writeln!(out, "  {}: {}", entry.entity.label, entry.count)?;
    }

    for entry in counts.iter().filter(|entry| entry.has_rows()) {
        let entity = entry.entity;
        for group in &entity.groups {
            let groups = reader.grouped_counts(&entity.table, &group.column)?;
            debug!(
                table = %entity.table,
                column = %group.column,
                groups = groups.len(),
                "writing breakdown"
            );

            writeln!(out)?;
            writeln!(out, "  {}:", entity.breakdown_title(group))?;
            for row in &groups {
                writeln!(out, "    {}: {}", row.label, row.count)?;
            }
        }
    }

    writeln!(out)?;
    write_rule(out)?;
    Ok(())
}
