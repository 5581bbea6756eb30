// src/error.rs
// =============================================================================
// Fatal, run-level errors.
//
// Only problems that make the whole run meaningless end up here: no input
// file, an unreadable input file, or an HTTP client that cannot be built.
// A single broken link is never an error - it is a LinkCheckResult with
// is_valid = false (see checker::http).
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("no input file given, pass one with --file <path>")]
    MissingFile,

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
