//! Domain model for tracked-player grouping.
//!
//! # Invariants
//! - Entities are transient projections of storage rows, never owners of them.
//! - Identity is storage-assigned; `0` marks an entity not yet persisted.

pub mod category;
