//! Logger construction and flush errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by logger construction and [`crate::Logger::sync`].
#[derive(Debug, Error)]
pub enum LogError {
    /// Level string did not name a known level.
    #[error("invalid log level: {0:?}")]
    InvalidLevel(String),

    /// Output file could not be opened.
    #[error("failed to open log output {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A record could not be written to the output.
    #[error("failed to write log record: {0}")]
    Write(#[source] io::Error),

    /// Buffered output could not be flushed.
    #[error("failed to flush log output: {0}")]
    Flush(#[source] io::Error),

    /// A writer panicked while holding the output lock.
    #[error("log output lock poisoned")]
    Poisoned,
}

/// Result type for logger operations.
pub type LogResult<T> = Result<T, LogError>;
