//! Builder for constructing kiosk engines.

use crate::builder::error::BuildError;
use crate::config::KioskConfig;
use crate::core::{Catalog, StateHistory, DEFAULT_HISTORY_LIMIT};
use crate::effects::{Kiosk, Reporter};

/// Builder for constructing a [`Kiosk`] with a fluent API.
pub struct KioskBuilder<R: Reporter> {
    catalog: Option<Catalog>,
    reporter: Option<R>,
    history_limit: usize,
}

impl<R: Reporter> KioskBuilder<R> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            catalog: None,
            reporter: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Set the catalog (required unless `config` is used).
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set the output boundary (required).
    pub fn reporter(mut self, reporter: R) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Set how many transitions the history keeps.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Take catalog and history limit from a startup configuration.
    /// Returns an error if the configuration is invalid.
    pub fn config(mut self, config: &KioskConfig) -> Result<Self, BuildError> {
        config.validate()?;
        self.catalog = Some(config.catalog()?);
        self.history_limit = config.history_limit;
        Ok(self)
    }

    /// Build the kiosk.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Kiosk<R>, BuildError> {
        let catalog = self.catalog.ok_or(BuildError::MissingCatalog)?;
        let reporter = self.reporter.ok_or(BuildError::MissingReporter)?;

        if self.history_limit == 0 {
            return Err(BuildError::ZeroHistoryLimit);
        }

        Ok(Kiosk::with_history(
            catalog,
            reporter,
            StateHistory::with_limit(self.history_limit),
        ))
    }
}

impl<R: Reporter> Default for KioskBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}
