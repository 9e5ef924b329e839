//! Error types for the aoc-scaffold CLI.
//!
//! Uses thiserror for derive macros. Every variant is fatal to the run that
//! raised it; the pipeline never retries or swallows an error.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scaffolding operations.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// The day token did not parse as a non-negative integer.
    #[error("invalid day '{0}': expected a non-negative integer")]
    InvalidInput(String),

    /// The puzzle input could not be downloaded.
    #[error("failed to fetch puzzle input: {0}")]
    Fetch(String),

    /// A file that would be created already exists.
    #[error("refusing to overwrite existing file '{}' (pass --force to overwrite)", .0.display())]
    FileExists(PathBuf),

    /// An append target does not exist.
    #[error("append target '{}' does not exist", .0.display())]
    TargetMissing(PathBuf),

    /// The anchor line was not found in the append target.
    #[error("anchor line '{anchor}' not found in '{}'", path.display())]
    AnchorNotFound { path: PathBuf, anchor: String },

    /// Config file, env file or generator definition is unusable.
    #[error("{0}")]
    Config(String),

    /// Any other filesystem failure.
    #[error("{0}")]
    Io(String),
}

impl ScaffoldError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::InvalidInput(_) => exit_codes::USER_ERROR,
            ScaffoldError::Config(_) => exit_codes::USER_ERROR,
            ScaffoldError::Fetch(_) => exit_codes::FETCH_FAILURE,
            ScaffoldError::FileExists(_) => exit_codes::FILE_CONFLICT,
            ScaffoldError::TargetMissing(_) => exit_codes::MANIFEST_FAILURE,
            ScaffoldError::AnchorNotFound { .. } => exit_codes::MANIFEST_FAILURE,
            ScaffoldError::Io(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for scaffolding operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
