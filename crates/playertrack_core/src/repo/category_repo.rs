//! Category repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD and bulk-save APIs over the `categories` table.
//! - Keep SQL and transaction handling inside the persistence boundary.
//!
//! # Invariants
//! - Multi-statement writes run in one transaction that is committed on
//!   success and rolled back on every other exit path.
//! - Ids are always storage-assigned and read back from the insert itself.
//! - Update and delete key exclusively on `id`; a missing id is not an error.

use crate::db::schema::{read_schema_version, SCHEMA_VERSION};
use crate::db::DbError;
use crate::model::category::{Category, CategoryId};
use crate::repo::category_row::{
    from_row, read_category_row, to_row, CategoryRow, CATEGORY_SELECT_SQL,
};
use crate::timestamp::{stamp_create, stamp_update, Clock, SystemClock};
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension, Transaction, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CATEGORY_INSERT_SQL: &str = "INSERT INTO categories (
    name,
    rank,
    created,
    updated
) VALUES (?1, ?2, ?3, ?4)";

const REQUIRED_COLUMNS: [&str; 5] = ["id", "name", "rank", "created", "updated"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors from category persistence operations.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Connection schema is not at the expected bootstrapped version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "category repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "category repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "category repository requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for category persistence.
pub trait CategoryRepository {
    /// Loads every category ordered by id.
    fn get_all_categories(&self) -> RepoResult<Vec<Category>>;
    /// Loads one category by id.
    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>>;
    /// Inserts one category and returns its storage-assigned id.
    fn create_category(&self, category: &Category) -> RepoResult<CategoryId>;
    /// Updates `name`, `rank` and `updated`. Returns affected row count.
    ///
    /// `updated` never moves below the stored `created`, even when the clock
    /// reads earlier than the creation stamp.
    fn update_category(&self, category: &Category) -> RepoResult<usize>;
    /// Hard-deletes one category. Returns affected row count.
    fn delete_category(&self, id: CategoryId) -> RepoResult<usize>;
    /// Inserts every category in one transaction. Returns inserted row count.
    fn save_categories(&self, categories: &[Category]) -> RepoResult<usize>;
}

/// SQLite-backed category repository.
///
/// Borrows the connection; opening and closing it is the caller's job.
pub struct SqliteCategoryRepository<'conn, C = SystemClock> {
    conn: &'conn Connection,
    clock: C,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    /// Constructs a repository from a bootstrapped connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        Self::try_with_clock(conn, SystemClock)
    }
}

impl<'conn, C: Clock> SqliteCategoryRepository<'conn, C> {
    /// Constructs a repository that stamps rows with the given clock.
    pub fn try_with_clock(conn: &'conn Connection, clock: C) -> RepoResult<Self> {
        ensure_category_connection_ready(conn)?;
        Ok(Self { conn, clock })
    }
}

impl<C: Clock> CategoryRepository for SqliteCategoryRepository<'_, C> {
    fn get_all_categories(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CATEGORY_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();

        while let Some(row) = rows.next()? {
            categories.push(from_row(read_category_row(row)?));
        }

        Ok(categories)
    }

    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let row = self
            .conn
            .query_row(
                &format!("{CATEGORY_SELECT_SQL} WHERE id = ?1;"),
                [id],
                read_category_row,
            )
            .optional()?;

        Ok(row.map(from_row))
    }

    fn create_category(&self, category: &Category) -> RepoResult<CategoryId> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let mut row = to_row(category);
        stamp_create(&mut row, &self.clock);

        match insert_returning_id(&tx, &row) {
            Ok(id) => {
                tx.commit()?;
                Ok(id)
            }
            Err(err) => {
                rollback_logged(tx, "create_category");
                Err(err)
            }
        }
    }

    fn update_category(&self, category: &Category) -> RepoResult<usize> {
        let mut row = to_row(category);
        stamp_update(&mut row, &self.clock);

        let changed = self.conn.execute(
            "UPDATE categories
             SET
                name = ?1,
                rank = ?2,
                updated = MAX(?3, created)
             WHERE id = ?4;",
            params![row.name, row.rank, row.updated, row.id],
        )?;

        if changed == 0 {
            debug!(
                "event=update_category module=repo status=ok category_id={} rows=0",
                row.id
            );
        }

        Ok(changed)
    }

    fn delete_category(&self, id: CategoryId) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM categories WHERE id = ?1;", [id])?;
        Ok(changed)
    }

    fn save_categories(&self, categories: &[Category]) -> RepoResult<usize> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        match insert_batch(&tx, categories, &self.clock) {
            Ok(inserted) => {
                tx.commit()?;
                Ok(inserted)
            }
            Err(err) => {
                rollback_logged(tx, "save_categories");
                Err(err)
            }
        }
    }
}

fn insert_returning_id(tx: &Transaction<'_>, row: &CategoryRow) -> RepoResult<CategoryId> {
    let id = tx.query_row(
        &format!("{CATEGORY_INSERT_SQL} RETURNING id;"),
        params![row.name, row.rank, row.created, row.updated],
        |result| result.get::<_, CategoryId>(0),
    )?;
    Ok(id)
}

fn insert_batch(
    tx: &Transaction<'_>,
    categories: &[Category],
    clock: &impl Clock,
) -> RepoResult<usize> {
    let mut stmt = tx.prepare(&format!("{CATEGORY_INSERT_SQL};"))?;
    let mut inserted = 0;
    for category in categories {
        let mut row = to_row(category);
        stamp_create(&mut row, clock);
        inserted += stmt.execute(params![row.name, row.rank, row.created, row.updated])?;
    }
    Ok(inserted)
}

fn rollback_logged(tx: Transaction<'_>, operation: &str) {
    if let Err(err) = tx.rollback() {
        warn!("event={operation} module=repo status=error error_code=rollback_failed error={err}");
    }
}

fn ensure_category_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = SCHEMA_VERSION;
    let actual_version = read_schema_version(conn)?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "categories")? {
        return Err(RepoError::MissingRequiredTable("categories"));
    }

    for column in REQUIRED_COLUMNS {
        if !table_has_column(conn, "categories", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "categories",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
