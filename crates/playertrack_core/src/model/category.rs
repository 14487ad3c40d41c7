//! Category domain model.
//!
//! # Responsibility
//! - Define the user-defined label used to group tracked players.
//!
//! # Invariants
//! - `id` is assigned by storage and never reassigned by an update.
//! - `created` is set once at insert time and never mutated afterwards.
//! - `updated >= created` for every persisted category.

use serde::{Deserialize, Serialize};

/// Storage-assigned category identifier.
pub type CategoryId = i64;

/// Identifier carried by a category that has not been persisted yet.
///
/// Also the sentinel returned by a failed create.
pub const UNSAVED_CATEGORY_ID: CategoryId = 0;

/// User-defined grouping label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Storage-assigned id, `0` before creation.
    pub id: CategoryId,
    /// Display label. Required; uniqueness is not enforced.
    pub name: String,
    /// Caller-assigned ordering key.
    pub rank: i32,
    /// Unix epoch milliseconds, assigned on insert.
    pub created: i64,
    /// Unix epoch milliseconds, assigned on insert and every update.
    pub updated: i64,
}

impl Category {
    /// Creates an unsaved category. Timestamps are assigned on write.
    pub fn new(name: impl Into<String>, rank: i32) -> Self {
        Self::with_id(UNSAVED_CATEGORY_ID, name, rank)
    }

    /// Creates a category projection for an existing id.
    ///
    /// Used by update paths where the caller already knows the row id.
    pub fn with_id(id: CategoryId, name: impl Into<String>, rank: i32) -> Self {
        Self {
            id,
            name: name.into(),
            rank,
            created: 0,
            updated: 0,
        }
    }

    /// Returns whether this category carries a storage-assigned id.
    pub fn is_persisted(&self) -> bool {
        self.id != UNSAVED_CATEGORY_ID
    }
}
