//! Core use-case services.
//!
//! # Responsibility
//! - Present the value-level success/failure contract to hosts.
//! - Keep hosts decoupled from storage errors.

pub mod category_service;
