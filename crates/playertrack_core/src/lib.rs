//! Core storage and call surface for PlayerTrack.
//! This crate owns category persistence and the exposed player channels.

pub mod config;
pub mod db;
pub mod ipc;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod timestamp;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, CategoryId, UNSAVED_CATEGORY_ID};
pub use repo::category_repo::{
    CategoryRepository, RepoError, RepoResult, SqliteCategoryRepository,
};
pub use repo::category_row::{from_row, to_row, CategoryRow};
pub use service::category_service::CategoryService;
pub use timestamp::{Clock, SystemClock};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
