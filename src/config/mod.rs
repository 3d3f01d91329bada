//! Logger configuration.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LoggerConfig (validated, immutable)
//!     → crate::build_logger selects the backend
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal (even empty) configs
//! - Validation separates syntactic (serde) from semantic checks
//! - The text backend has no tunables; only the JSON backend is configurable

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{BackendKind, JsonConfig, LoggerConfig, OutputTarget};
pub use validation::{validate_config, ValidationError};
