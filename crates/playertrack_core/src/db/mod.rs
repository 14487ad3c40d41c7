//! SQLite storage bootstrap for PlayerTrack core.
//!
//! # Responsibility
//! - Open and configure the SQLite connection handed to repositories.
//! - Install the `categories` schema before any data access.
//!
//! # Invariants
//! - Repositories borrow the connection; this module is the only place that
//!   creates one.
//! - A database stamped by a newer build is never written to.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};
pub use schema::SCHEMA_VERSION;

pub type DbResult<T> = Result<T, DbError>;

/// Failures while opening or bootstrapping the category store.
#[derive(Debug)]
pub enum DbError {
    /// SQLite rejected a statement or pragma.
    Sqlite(rusqlite::Error),
    /// `user_version` is ahead of `SCHEMA_VERSION`.
    SchemaTooNew { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite error: {err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "category store was written by a newer build (schema {found}, this build knows {supported})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        if let Self::Sqlite(err) = self {
            Some(err)
        } else {
            None
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
