//! Build errors for the kiosk builder.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a kiosk.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Catalog not specified. Call .catalog(catalog) or .config(config) before .build()")]
    MissingCatalog,

    #[error("Reporter not specified. Call .reporter(reporter) before .build()")]
    MissingReporter,

    #[error("History limit must be at least 1")]
    ZeroHistoryLimit,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
