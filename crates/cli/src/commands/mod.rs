//! Command handlers for the promptsync CLI.

pub mod sync;
