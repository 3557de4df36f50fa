//! Read-only database catalog port.
//!
//! Defines the queries the reporter issues against an inspected database.

use crate::domain::{GroupCount, Record};
use crate::error::Result;

/// Port for reading table contents and aggregates from a database.
///
/// Implementations never mutate the database. Every method issues exactly
/// one query, so at most one query is in flight at a time.
pub trait DatabaseReader {
    /// Names of all user-visible tables, sorted alphabetically.
    fn table_names(&self) -> Result<Vec<String>>;

    /// Number of rows in `table`.
    ///
    /// Fails if the table does not exist.
    fn row_count(&self, table: &str) -> Result<i64>;

    /// Every row of `table`, in storage order.
    fn records(&self, table: &str) -> Result<Vec<Record>>;

    /// Distinct values of `column` in `table` with their frequencies,
    /// most frequent first. Ties keep the database's order.
    fn grouped_counts(&self, table: &str, column: &str) -> Result<Vec<GroupCount>>;
}
