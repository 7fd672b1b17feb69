// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Uploaded `.json` did not parse, or was not an array.
    #[error("Invalid JSON file.")]
    InvalidJson,

    /// Upload parsed cleanly but yielded nothing.
    #[error("No records found in file.")]
    NoRecords,
}

pub type Result<T> = std::result::Result<T, Error>;
