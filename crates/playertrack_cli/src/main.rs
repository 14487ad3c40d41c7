//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `playertrack_core` linkage, storage bootstrap and channel labels.
//! - Keep output deterministic for quick local sanity checks.

use log::info;
use playertrack_core::db::open_db;
use playertrack_core::ipc::Channel;
use playertrack_core::{init_logging, CategoryService, CoreConfig, SqliteCategoryRepository};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CoreConfig::from_env();
    if let Err(err) = config.validate() {
        eprintln!("playertrack config error: {err}");
        return ExitCode::FAILURE;
    }

    let log_dir = config.log_dir.to_string_lossy();
    if let Err(err) = init_logging(&config.log_level, &log_dir) {
        eprintln!("playertrack logging disabled: {err}");
    }

    println!("playertrack_core version={}", playertrack_core::core_version());
    for channel in Channel::ALL {
        println!("channel={}", channel.label());
    }

    let conn = match open_db(&config.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("playertrack db open failed: {err}");
            return ExitCode::FAILURE;
        }
    };
    let repo = match SqliteCategoryRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("playertrack repository init failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    let service = CategoryService::new(repo);
    match service.get_all_categories() {
        Some(categories) => {
            info!(
                "event=cli_smoke module=cli status=ok categories={}",
                categories.len()
            );
            println!("categories={}", categories.len());
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("playertrack category read failed");
            ExitCode::FAILURE
        }
    }
}
