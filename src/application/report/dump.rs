//! Table dump section.

use std::io::Write;

use tracing::{debug, info};

use crate::domain::DisplayPolicy;
use crate::error::Result;
use crate::port::DatabaseReader;

use super::format::{write_banner, write_record};

/// Dump every table in the catalog, in alphabetical order.
///
/// Returns the number of tables dumped. An unreadable table aborts the whole
/// dump.
///
/// # Errors
/// Returns the first query or write error.
pub fn dump_tables<R, W>(reader: &R, policy: &DisplayPolicy, out: &mut W) -> Result<usize>
where
    R: DatabaseReader + ?Sized,
    W: Write,
{
    let tables = reader.table_names()?;
    info!(tables = tables.len(), "dumping tables");

    writeln!(out, "📊 Found {} tables: {}", tables.len(), tables.join(", "))?;
    writeln!(out)?;

    for table in &tables {
        dump_table(reader, policy, table, out)?;
    }
    Ok(tables.len())
}

/// Dump a single table: a banner with its row count, then every record.
///
/// # Errors
/// Returns the first query or write error.
pub fn dump_table<R, W>(reader: &R, policy: &DisplayPolicy, table: &str, out: &mut W) -> Result<()>
where
    R: DatabaseReader + ?Sized,
    W: Write,
{
    let count = reader.row_count(table)?;
    write_banner(
        out,
        &format!("📋 {} ({count} records)", table.to_uppercase()),
    )?;

    let records = reader.records(table)?;
    if records.is_empty() {
        writeln!(out, "  (No records)")?;
        return Ok(());
    }

    debug!(table, rows = records.len(), "writing records");
    for (idx, record) in records.iter().enumerate() {
        write_record(out, idx + 1, record, policy)?;
    }
    Ok(())
}
