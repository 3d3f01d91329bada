//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: LoggerConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is handed to `build_logger`

use thiserror::Error;

use crate::config::schema::{LoggerConfig, OutputTarget};
use crate::log::Level;

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("json.level: unknown level {0:?}")]
    UnknownLevel(String),

    #[error("json.buffer_capacity: must be greater than zero")]
    ZeroBufferCapacity,

    #[error("json.output: file path is empty")]
    EmptyOutputPath,
}

/// Check `config` for semantic errors.
pub fn validate_config(config: &LoggerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let json = &config.json;

    if json.level.parse::<Level>().is_err() {
        errors.push(ValidationError::UnknownLevel(json.level.clone()));
    }

    if json.buffer_capacity == 0 {
        errors.push(ValidationError::ZeroBufferCapacity);
    }

    if let OutputTarget::File(path) = &json.output {
        if path.as_os_str().is_empty() {
            errors.push(ValidationError::EmptyOutputPath);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::JsonConfig;
    use std::path::PathBuf;

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&LoggerConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let config = LoggerConfig {
            json: JsonConfig {
                level: "chatty".to_string(),
                output: OutputTarget::File(PathBuf::new()),
                buffer_capacity: 0,
            },
            ..LoggerConfig::default()
        };

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::UnknownLevel("chatty".to_string()),
                ValidationError::ZeroBufferCapacity,
                ValidationError::EmptyOutputPath,
            ]
        );
    }
}
