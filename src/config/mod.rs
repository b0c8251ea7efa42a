//! Startup configuration for the kiosk.
//!
//! The catalog and loop tuning are provided once, at startup, as a JSON
//! document. Every field has a default, so an empty object `{}` yields the
//! reference installation.
//!
//! Validation uses Stillwater's `Validation` type to accumulate ALL
//! violations instead of stopping at the first one, so an operator fixing a
//! catalog file sees every problem in one pass.
//!
//! # Example
//!
//! ```rust
//! use kiosk::config::{ConfigError, KioskConfig};
//!
//! let config = KioskConfig::from_json(
//!     r#"{ "catalog": [{ "title": "C", "session_hour": 18, "price_units": 7 }] }"#,
//! )
//! .unwrap();
//! assert_eq!(config.catalog().unwrap().len(), 1);
//!
//! let invalid = KioskConfig::from_json(r#"{ "catalog": [], "history_limit": 0 }"#);
//! match invalid {
//!     Err(ConfigError::Invalid(violations)) => assert_eq!(violations.len(), 2),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

pub mod error;
pub mod rules;
pub mod violations;

pub use error::ConfigError;
pub use rules::{check_catalog, validate_catalog, validate_config};
pub use violations::ConfigViolation;

use crate::core::{Catalog, CatalogEntry, DEFAULT_HISTORY_LIMIT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default sleep after an empty poll of the event slot.
pub const DEFAULT_IDLE_INTERVAL_MS: u64 = 10;

/// Startup configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KioskConfig {
    /// Catalog entries, in navigation order
    pub catalog: Vec<CatalogEntry>,
    /// Milliseconds to sleep after an empty poll
    pub idle_interval_ms: u64,
    /// Number of state transitions kept in the history
    pub history_limit: usize,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            catalog: Catalog::sample().entries().to_vec(),
            idle_interval_ms: DEFAULT_IDLE_INTERVAL_MS,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl KioskConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        rules::into_result(validate_config(self))
    }

    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        Catalog::new(self.catalog.clone())
    }

    pub fn idle_interval(&self) -> Duration {
        Duration::from_millis(self.idle_interval_ms)
    }
}
