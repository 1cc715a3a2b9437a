//! Common utilities shared across the TemplateApp services.
//!
//! This crate provides:
//! - Unified error handling for HTTP responses and startup failures
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
