//! Error taxonomy for labkit operations.
//!
//! Every public operation catches its own errors and converts them into a
//! failure envelope; nothing here is allowed to escape past a command
//! boundary and crash the process.

use thiserror::Error;

/// Errors produced by labkit operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The external schema configuration exists but could not be parsed or
    /// failed validation. A missing configuration source is never an error;
    /// it silently falls back to the built-in schema set.
    #[error("invalid schema configuration: {0}")]
    Config(String),

    /// The target path was missing or unreadable when validating or
    /// reporting status.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Project creation failed: invalid project name, existing path without
    /// `--force`, or an unknown project type.
    #[error("creation failed: {0}")]
    Creation(String),

    /// Restructuring failed: missing target path or a backup copy that did
    /// not complete.
    #[error("restructure failed: {0}")]
    Restructure(String),
}

/// Convenience alias used throughout the core modules.
pub type Result<T> = std::result::Result<T, Error>;
