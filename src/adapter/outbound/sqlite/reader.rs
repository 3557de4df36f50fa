//! SQLite implementation of the [`DatabaseReader`] port.

use std::path::Path;

use rusqlite::types::{Type, ValueRef};
use rusqlite::Connection;
use tracing::{debug, trace};

use crate::domain::{CellValue, GroupCount, Record};
use crate::error::{Error, Result};
use crate::port::DatabaseReader;

use super::connection::{open_read_only, quote_identifier};

const CATALOG_QUERY: &str = "SELECT name FROM sqlite_master WHERE type='table' ORDER BY name";

/// Reader over a single SQLite connection.
///
/// The connection is closed when the reader is dropped; [`SqliteReader::close`]
/// closes it explicitly and reports any error doing so.
pub struct SqliteReader {
    conn: Connection,
}

impl SqliteReader {
    /// Wrap an already open connection.
    #[must_use]
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open the database at `path` read-only.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened as a SQLite database.
    pub fn open(path: &Path) -> Result<Self> {
        open_read_only(path).map(Self::new)
    }

    /// Close the underlying connection.
    ///
    /// # Errors
    /// Returns an error if SQLite fails to finalize the connection.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, error)| Error::Database(error))?;
        debug!("closed sqlite database");
        Ok(())
    }
}

impl DatabaseReader for SqliteReader {
    fn table_names(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(CATALOG_QUERY)?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(tables = names.len(), "read table catalog");
        Ok(names)
    }

    fn row_count(&self, table: &str) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", quote_identifier(table));
        let count = self
            .conn
            .query_row(&sql, [], |row| row.get(0))
            .map_err(|error| Error::query(table, error))?;
        trace!(table, count, "counted rows");
        Ok(count)
    }

    fn records(&self, table: &str) -> Result<Vec<Record>> {
        let wrap = |error| Error::query(table, error);

        let sql = format!("SELECT * FROM {}", quote_identifier(table));
        let mut stmt = self.conn.prepare(&sql).map_err(wrap)?;
        let mut rows = stmt.query([]).map_err(wrap)?;

        // Column names are only read once a first row exists.
        let mut columns: Option<Vec<String>> = None;
        let mut records = Vec::new();
        while let Some(row) = rows.next().map_err(wrap)? {
            let columns = columns.get_or_insert_with(|| {
                row.as_ref()
                    .column_names()
                    .into_iter()
                    .map(String::from)
                    .collect()
            });

            let mut record = Record::new();
            for (idx, column) in columns.iter().enumerate() {
                let value = row
                    .get_ref(idx)
                    .and_then(|value| cell_value(idx, value))
                    .map_err(wrap)?;
                record.push(column.as_str(), value);
            }
            records.push(record);
        }

        debug!(table, rows = records.len(), "loaded table records");
        Ok(records)
    }

    fn grouped_counts(&self, table: &str, column: &str) -> Result<Vec<GroupCount>> {
        let wrap = |error| Error::query(table, error);

        let column = quote_identifier(column);
        let sql = format!(
            "SELECT {column}, COUNT(*) AS count FROM {} GROUP BY {column} ORDER BY count DESC",
            quote_identifier(table)
        );
        let mut stmt = self.conn.prepare(&sql).map_err(wrap)?;
        let groups = stmt
            .query_map([], |row| {
                Ok(GroupCount {
                    label: cell_value(0, row.get_ref(0)?)?,
                    count: row.get(1)?,
                })
            })
            .map_err(wrap)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(wrap)?;
        trace!(table, column = %column, groups = groups.len(), "computed grouped counts");
        Ok(groups)
    }
}

/// Convert a borrowed SQLite value, rejecting text that is not valid UTF-8.
fn cell_value(idx: usize, value: ValueRef<'_>) -> rusqlite::Result<CellValue> {
    Ok(match value {
        ValueRef::Null => CellValue::Null,
        ValueRef::Integer(value) => CellValue::Integer(value),
        ValueRef::Real(value) => CellValue::Real(value),
        ValueRef::Text(bytes) => {
            let text = std::str::from_utf8(bytes).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
            })?;
            CellValue::Text(text.to_owned())
        }
        ValueRef::Blob(bytes) => CellValue::Blob(bytes.to_vec()),
    })
}
