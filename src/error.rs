use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for brolly operations
#[derive(Error, Debug)]
pub enum BrollyError {
    /// IO error from incidental file-system operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Source directory missing, not a directory, or not listable
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Output file could not be created or written
    #[error("Failed to write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BrollyError>;
