//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::log::DEFAULT_BUFFER_CAPACITY;

/// Root logger configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct LoggerConfig {
    /// Which backend to construct.
    pub backend: BackendKind,

    /// Settings for the JSON backend (ignored by the text backend).
    pub json: JsonConfig,
}

/// Logger backend selection.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Human-readable text on stdout, DEBUG and above.
    #[default]
    Text,
    /// Buffered JSON records.
    Json,
}

/// JSON backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct JsonConfig {
    /// Minimum level (debug, info, warn, error).
    pub level: String,

    /// Destination: "stdout", "stderr" or a file path.
    pub output: OutputTarget,

    /// Output buffer size in bytes.
    pub buffer_capacity: usize,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            output: OutputTarget::Stderr,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

/// Where log output is written.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum OutputTarget {
    Stdout,
    Stderr,
    /// Appended to, created if missing.
    File(PathBuf),
}

impl From<String> for OutputTarget {
    fn from(s: String) -> Self {
        match s.as_str() {
            "stdout" => OutputTarget::Stdout,
            "stderr" => OutputTarget::Stderr,
            _ => OutputTarget::File(PathBuf::from(s)),
        }
    }
}

impl From<OutputTarget> for String {
    fn from(target: OutputTarget) -> Self {
        target.to_string()
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => f.write_str("stdout"),
            OutputTarget::Stderr => f.write_str("stderr"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}
