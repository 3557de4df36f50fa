//! Text layout helpers for the report.

use std::io::{self, Write};

use crate::domain::{CellDisplay, DisplayPolicy, Record};

/// Width of the `=` separator lines.
pub const RULE_WIDTH: usize = 80;

const PREVIEW_INDENT: &str = "    ";

pub(super) fn write_rule<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

/// Write a blank line, then `title` framed by separator lines.
pub fn write_banner<W: Write + ?Sized>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    write_rule(out)?;
    writeln!(out, "{title}")?;
    write_rule(out)
}

/// Write one record: a divider line, then one line per column.
///
/// `index` is 1-based.
pub fn write_record<W: Write + ?Sized>(
    out: &mut W,
    index: usize,
    record: &Record,
    policy: &DisplayPolicy,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Record {index} ---")?;
    for (column, value) in record.iter() {
        let display = policy.classify(column, value);
        writeln!(out, "  {column}: {display}")?;
        if let CellDisplay::Opaque {
            preview: Some(preview),
            ..
        } = &display
        {
            for line in preview.lines() {
                writeln!(out, "{PREVIEW_INDENT}{line}")?;
            }
        }
    }
    Ok(())
}
