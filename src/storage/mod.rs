//! Season data file access.
//!
//! The season file is the only input the service reads. It is loaded once
//! at startup and never written back; all later mutation happens in the
//! in-memory store.

mod season_csv;

pub use season_csv::*;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the season file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Season file not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Malformed season data at line {line}: {source}")]
    Csv { line: u64, source: csv::Error },
}

impl StorageError {
    pub(crate) fn from_csv(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        StorageError::Csv { line, source: err }
    }
}
