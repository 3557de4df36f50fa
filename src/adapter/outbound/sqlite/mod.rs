//! SQLite persistence adapters.
//!
//! Provides the read-only connection and the [`DatabaseReader`] implementation
//! used to dump and summarize an inspected database.
//!
//! [`DatabaseReader`]: crate::port::DatabaseReader

pub mod connection;
pub mod reader;

pub use reader::SqliteReader;
