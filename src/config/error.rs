//! Configuration error types.

use crate::config::violations::ConfigViolation;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read configuration {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON or has unexpected fields
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but failed validation
    #[error("Invalid configuration: {}", join(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
