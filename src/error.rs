use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, MapperError>;

/// Error type covering the different failure cases that can occur while the
/// tool loads blocklists, reads the contact export, or writes the mailing list.
#[derive(Debug, Error)]
pub enum MapperError {
    /// A required blocklist file is missing or unreadable.
    #[error("failed to load blocklist {path}: {source}")]
    BlocklistLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when the user provides an input path that does not exist.
    #[error("the file '{0}' was not found")]
    InputNotFound(PathBuf),

    /// Malformed tabular data in the contact export.
    #[error("failed to parse input: {0}")]
    InputParse(#[from] csv::Error),

    /// Raised when the mapped table cannot be persisted.
    #[error("failed to write output {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Wrapper for other IO failures.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
