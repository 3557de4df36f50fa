//! Miette-based error diagnostics for CLI error presentation.
//!
//! Wraps a fatal [`Error`] so that the report shows the full cause chain and
//! a hint pointing at the likely fix.

use miette::Diagnostic;
use thiserror::Error as ThisError;

use crate::error::Error;

/// A run-ending failure, rendered with its source chain.
#[derive(Debug, ThisError, Diagnostic)]
#[error("database view failed")]
#[diagnostic(code(dbview::fatal))]
pub struct FatalError {
    #[source]
    pub source: Error,

    /// Suggestion for resolving the failure.
    #[help]
    pub help: Option<String>,
}

impl From<Error> for FatalError {
    fn from(source: Error) -> Self {
        let help = match &source {
            Error::Config(_) => Some("check the configuration file passed with --config".into()),
            Error::Query { table, .. } => Some(format!(
                "check that table '{table}' exists and that the [summary] entities match the schema"
            )),
            Error::Database(_) => Some("check that the file is a readable SQLite database".into()),
            Error::Io(_) => None,
        };
        Self { source, help }
    }
}

impl FatalError {
    /// Convert into a renderable miette report.
    #[must_use]
    pub fn into_report(self) -> miette::Report {
        miette::Report::new(self)
    }
}
