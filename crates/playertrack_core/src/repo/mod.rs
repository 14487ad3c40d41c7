//! Repository layer for category persistence.
//!
//! # Responsibility
//! - Isolate SQLite statements and transactions from the service layer.
//! - Translate between domain entities and storage rows.
//!
//! # Invariants
//! - Repositories borrow a connection and never open or close one.
//! - Repository APIs return typed `RepoError`s; sentinel conversion happens in
//!   `service`.

pub mod category_repo;
pub mod category_row;
