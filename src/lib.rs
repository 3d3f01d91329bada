//! Logging bridge library.
//!
//! One [`Logger`] capability over two backends:
//! - [`TextLogger`]: human-readable lines on stdout via `tracing-subscriber`
//! - [`JsonLogger`]: buffered JSON records, flushed on [`Logger::sync`]
//!
//! Plus the request-scoped [`RequestContext`] and two small string helpers
//! in [`utils`].

pub mod config;
pub mod context;
pub mod error;
pub mod log;
pub mod utils;

pub use config::schema::LoggerConfig;
pub use context::RequestContext;
pub use error::LogError;
pub use log::{Field, JsonLogger, Level, Logger, TextLogger};

use crate::config::schema::BackendKind;

#[doc(hidden)]
pub use serde_json as __serde_json;

/// Construct the logger variant selected by `config`.
///
/// The text backend cannot fail; the JSON backend fails on an unknown
/// level or an output file that cannot be opened.
pub fn build_logger(config: &LoggerConfig) -> Result<Box<dyn Logger>, LogError> {
    match config.backend {
        BackendKind::Text => Ok(Box::new(TextLogger::new())),
        BackendKind::Json => Ok(Box::new(JsonLogger::from_config(&config.json)?)),
    }
}
