//! dbview - read-only SQLite database reporter.
//!
//! Opens a database file, dumps every table with per-cell formatting rules,
//! and prints counts and grouped breakdowns for a configured set of entities.
//!
//! # Architecture
//!
//! - **`domain`** - Schema-agnostic values, records, display policy, tracked entities
//! - **`port`** - The [`DatabaseReader`](port::DatabaseReader) trait
//! - **`application`** - Table dump and summary report, written to any `io::Write`
//! - **`adapter`** - SQLite reader (outbound) and the command-line handler (inbound)
//! - **`infrastructure`** - TOML configuration and logging setup
//!
//! # Example
//!
//! ```no_run
//! use dbview::adapter::outbound::sqlite::SqliteReader;
//! use dbview::application::report::write_report;
//! use dbview::domain::{default_entities, DisplayPolicy};
//!
//! fn main() -> dbview::error::Result<()> {
//!     let reader = SqliteReader::open("backend/prisma/dev.db".as_ref())?;
//!     let mut out = std::io::stdout().lock();
//!     write_report(&reader, &DisplayPolicy::default(), &default_entities(), &mut out)?;
//!     reader.close()
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
