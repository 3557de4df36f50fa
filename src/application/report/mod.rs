//! Database report use case.
//!
//! The report has two sections written in order: a dump of every table, then
//! a summary of the tracked entities. Both stream into any [`std::io::Write`]
//! sink and stop at the first error.

mod dump;
mod format;
mod summary;

pub use dump::{dump_table, dump_tables};
pub use format::{write_banner, write_record, RULE_WIDTH};
pub use summary::write_summary;

use std::io::Write;

use crate::domain::{DisplayPolicy, TrackedEntity};
use crate::error::Result;
use crate::port::DatabaseReader;

/// Write the table dump followed by the summary section.
///
/// Returns the number of tables dumped.
///
/// # Errors
/// Fails on the first query or write error; nothing after it is written.
pub fn write_report<R, W>(
    reader: &R,
    policy: &DisplayPolicy,
    entities: &[TrackedEntity],
    out: &mut W,
) -> Result<usize>
where
    R: DatabaseReader + ?Sized,
    W: Write,
{
    let tables = dump_tables(reader, policy, out)?;
    write_summary(reader, entities, out)?;
    Ok(tables)
}
