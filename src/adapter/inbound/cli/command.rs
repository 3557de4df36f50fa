//! Command-line interface definitions.
//!
//! `dbview` takes no subcommands: it reads one database and prints its report.
//! With no arguments the configured (or default) database path is used.

use clap::Parser;
use std::path::PathBuf;

/// Read-only SQLite database reporter: dumps every table and summarizes entities
#[derive(Parser, Debug)]
#[command(name = "dbview")]
#[command(version, about)]
pub struct Cli {
    /// Path to the SQLite database file [default: backend/prisma/dev.db]
    pub database: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pretty-print a preview of opaque JSON payloads (trace/data columns)
    #[arg(long)]
    pub expand_json: bool,

    /// Color output mode [auto, always, never]
    #[arg(long, default_value = "auto", hide_possible_values = true)]
    pub color: ColorChoice,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Install this choice as the process-wide color override.
    pub fn apply(&self) {
        match self {
            ColorChoice::Auto => owo_colors::unset_override(),
            ColorChoice::Always => owo_colors::set_override(true),
            ColorChoice::Never => owo_colors::set_override(false),
        }
    }
}
