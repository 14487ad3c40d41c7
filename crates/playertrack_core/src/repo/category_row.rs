//! Row mapping between `Category` and the `categories` table shape.
//!
//! # Invariants
//! - `to_row` and `from_row` are total and pure; no validation happens here.
//! - A round trip reproduces `id, name, rank, created, updated` exactly.

use crate::model::category::{Category, CategoryId};
use rusqlite::Row;

pub(crate) const CATEGORY_SELECT_SQL: &str = "SELECT
    id,
    name,
    rank,
    created,
    updated
FROM categories";

/// Flat storage representation of one `categories` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub id: CategoryId,
    pub name: String,
    pub rank: i32,
    pub created: i64,
    pub updated: i64,
}

/// Converts a domain category into its storage row shape.
pub fn to_row(category: &Category) -> CategoryRow {
    CategoryRow {
        id: category.id,
        name: category.name.clone(),
        rank: category.rank,
        created: category.created,
        updated: category.updated,
    }
}

/// Converts a storage row back into a domain category.
pub fn from_row(row: CategoryRow) -> Category {
    Category {
        id: row.id,
        name: row.name,
        rank: row.rank,
        created: row.created,
        updated: row.updated,
    }
}

/// Reads one `categories` row selected with `CATEGORY_SELECT_SQL`.
pub(crate) fn read_category_row(row: &Row<'_>) -> rusqlite::Result<CategoryRow> {
    Ok(CategoryRow {
        id: row.get("id")?,
        name: row.get("name")?,
        rank: row.get("rank")?,
        created: row.get("created")?,
        updated: row.get("updated")?,
    })
}

#[cfg(test)]
mod tests {
    use super::{from_row, to_row, CategoryRow};
    use crate::model::category::Category;

    #[test]
    fn round_trip_preserves_every_field() {
        let category = Category {
            id: 7,
            name: "Friends".to_string(),
            rank: 3,
            created: 1_700_000_000_000,
            updated: 1_700_000_000_500,
        };

        assert_eq!(from_row(to_row(&category)), category);
    }

    #[test]
    fn to_row_does_not_validate_input() {
        let row = to_row(&Category::new("", -1));
        assert_eq!(
            row,
            CategoryRow {
                id: 0,
                name: String::new(),
                rank: -1,
                created: 0,
                updated: 0,
            }
        );
    }
}
