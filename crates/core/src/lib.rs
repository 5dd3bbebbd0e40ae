//! Promptsync Core Library
//!
//! This crate provides the foundational utilities for the promptsync CLI:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Configuration management (`SyncConfig`)

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::SyncConfig;
pub use error::{AppError, AppResult};
