//! Single-step `categories` schema bootstrap.
//!
//! The schema version lives in `PRAGMA user_version`: `0` means a fresh
//! database, `SCHEMA_VERSION` means ready.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

/// Schema version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

const CATEGORIES_DDL: &str = include_str!("schema.sql");

/// Installs the schema on a fresh database; no-op when already installed.
pub fn ensure_schema(conn: &mut Connection) -> DbResult<()> {
    match read_schema_version(conn)? {
        SCHEMA_VERSION => Ok(()),
        0 => {
            let tx = conn.transaction()?;
            tx.execute_batch(CATEGORIES_DDL)?;
            tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
            tx.commit()?;
            Ok(())
        }
        found => Err(DbError::SchemaTooNew {
            found,
            supported: SCHEMA_VERSION,
        }),
    }
}

/// Reads the schema version stamped on the database.
pub fn read_schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}

#[cfg(test)]
mod tests {
    use super::{ensure_schema, read_schema_version, SCHEMA_VERSION};
    use rusqlite::Connection;

    #[test]
    fn bootstrap_runs_once_and_keeps_rows() {
        let mut conn = Connection::open_in_memory().unwrap();
        ensure_schema(&mut conn).unwrap();
        conn.execute(
            "INSERT INTO categories (name, rank, created, updated) VALUES ('Friends', 1, 10, 10);",
            [],
        )
        .unwrap();

        ensure_schema(&mut conn).unwrap();

        assert_eq!(read_schema_version(&conn).unwrap(), SCHEMA_VERSION);
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM categories;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
