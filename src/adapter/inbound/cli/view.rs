//! Handler for the database view.
//!
//! Wires the read-only SQLite adapter to the report use case: checks that the
//! file exists, opens one connection, writes the report, and closes the
//! connection.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::adapter::inbound::cli::command::Cli;
use crate::adapter::outbound::sqlite::SqliteReader;
use crate::application::report::write_report;
use crate::domain::{DisplayPolicy, TrackedEntity};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// How a view run ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewOutcome {
    /// The report was written in full.
    Completed { tables: usize },
    /// The database file does not exist; nothing was opened.
    DatabaseMissing,
}

/// Everything one view run needs.
#[derive(Debug, Clone)]
pub struct ViewRequest {
    pub database: PathBuf,
    pub policy: DisplayPolicy,
    pub entities: Vec<TrackedEntity>,
}

impl ViewRequest {
    /// Merge command-line overrides into the loaded configuration.
    #[must_use]
    pub fn from_cli(cli: &Cli, config: &Config) -> Self {
        Self {
            database: cli
                .database
                .clone()
                .unwrap_or_else(|| config.database.clone()),
            policy: config.display.policy(cli.expand_json),
            entities: config.summary.entities.clone(),
        }
    }
}

/// Execute the view, writing the report to stdout.
///
/// # Errors
/// Returns the first database or write error.
pub fn execute(request: &ViewRequest) -> Result<ViewOutcome> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    view_database(request, &mut out)
}

/// Write the full report for `request.database` to `out`.
///
/// A missing file is reported on `out` and returned as
/// [`ViewOutcome::DatabaseMissing`] without opening a connection. The
/// connection is closed on every path: explicitly on success, by drop when a
/// query fails.
///
/// # Errors
/// Returns the first database or write error.
pub fn view_database<W: Write>(request: &ViewRequest, out: &mut W) -> Result<ViewOutcome> {
    let path = request.database.as_path();
    if !path.exists() {
        warn!(path = %path.display(), "database file not found");
        writeln!(out, "❌ Database not found at: {}", path.display())?;
        return Ok(ViewOutcome::DatabaseMissing);
    }

    writeln!(out, "🔍 Connecting to database: {}", path.display())?;
    writeln!(out)?;

    let reader = open(path)?;
    let tables = write_report(&reader, &request.policy, &request.entities, out)?;
    reader.close()?;

    writeln!(out)?;
    writeln!(out, "✅ Database view complete!")?;
    writeln!(out)?;

    info!(tables, "database view complete");
    Ok(ViewOutcome::Completed { tables })
}

fn open(path: &Path) -> Result<SqliteReader> {
    info!(path = %path.display(), "connecting to database");
    SqliteReader::open(path)
}
