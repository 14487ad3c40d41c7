//! Category use-case service.
//!
//! # Responsibility
//! - Expose the public category API consumed by the host.
//! - Convert every repository failure into the operation's sentinel value.
//!
//! # Invariants
//! - No `RepoError` crosses this boundary; failures are logged, then mapped to
//!   `None`, `UNSAVED_CATEGORY_ID` or `false`.
//! - No retries: a failure is final for that call.

use crate::model::category::{Category, CategoryId, UNSAVED_CATEGORY_ID};
use crate::repo::category_repo::CategoryRepository;
use log::{error, trace};

/// Sentinel-returning wrapper around a category repository.
pub struct CategoryService<R: CategoryRepository> {
    repo: R,
}

impl<R: CategoryRepository> CategoryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns every category, or `None` when the read fails.
    ///
    /// Never returns a partial list.
    pub fn get_all_categories(&self) -> Option<Vec<Category>> {
        trace!("event=get_all_categories module=service status=start");
        match self.repo.get_all_categories() {
            Ok(categories) => Some(categories),
            Err(err) => {
                error!("event=get_all_categories module=service status=error error={err}");
                None
            }
        }
    }

    /// Returns one category, or `None` when it is absent or the read fails.
    pub fn get_category(&self, id: CategoryId) -> Option<Category> {
        trace!("event=get_category module=service status=start category_id={id}");
        match self.repo.get_category(id) {
            Ok(category) => category,
            Err(err) => {
                error!(
                    "event=get_category module=service status=error category_id={id} error={err}"
                );
                None
            }
        }
    }

    /// Creates a category and returns its id, or `0` on failure.
    pub fn create_category(&self, category: &Category) -> CategoryId {
        trace!(
            "event=create_category module=service status=start name_len={}",
            category.name.len()
        );
        match self.repo.create_category(category) {
            Ok(id) => id,
            Err(err) => {
                error!("event=create_category module=service status=error error={err}");
                UNSAVED_CATEGORY_ID
            }
        }
    }

    /// Updates name and rank by id.
    ///
    /// Reports `true` even when no row matches `category.id`.
    pub fn update_category(&self, category: &Category) -> bool {
        trace!(
            "event=update_category module=service status=start category_id={}",
            category.id
        );
        match self.repo.update_category(category) {
            Ok(_) => true,
            Err(err) => {
                error!(
                    "event=update_category module=service status=error category_id={} error={err}",
                    category.id
                );
                false
            }
        }
    }

    /// Deletes a category by id. Deleting a missing id reports `true`.
    pub fn delete_category(&self, id: CategoryId) -> bool {
        trace!("event=delete_category module=service status=start category_id={id}");
        match self.repo.delete_category(id) {
            Ok(_) => true,
            Err(err) => {
                error!(
                    "event=delete_category module=service status=error category_id={id} error={err}"
                );
                false
            }
        }
    }

    /// Inserts all categories atomically. Assigned ids are not returned.
    pub fn save_categories(&self, categories: &[Category]) -> bool {
        trace!(
            "event=save_categories module=service status=start count={}",
            categories.len()
        );
        match self.repo.save_categories(categories) {
            Ok(_) => true,
            Err(err) => {
                error!(
                    "event=save_categories module=service status=error count={} error={err}",
                    categories.len()
                );
                false
            }
        }
    }
}
