//! Configuration checks using Validation.

use crate::config::violations::ConfigViolation;
use crate::config::{ConfigError, KioskConfig};
use crate::core::CatalogEntry;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a configuration check.
pub type ConfigCheck = Validation<(), NonEmptyVec<ConfigViolation>>;

fn check(ok: bool, violation: ConfigViolation) -> ConfigCheck {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

fn check_entry(index: usize, entry: &CatalogEntry) -> Vec<ConfigCheck> {
    vec![
        check(entry.price_units > 0, ConfigViolation::ZeroPrice { index }),
        check(
            entry.session_hour <= 23,
            ConfigViolation::InvalidHour {
                index,
                hour: entry.session_hour,
            },
        ),
        check(
            entry.title.is_alphanumeric(),
            ConfigViolation::InvalidTitle {
                index,
                title: entry.title,
            },
        ),
    ]
}

/// Validate catalog entries, accumulating ALL violations.
pub fn validate_catalog(entries: &[CatalogEntry]) -> ConfigCheck {
    let mut checks = vec![check(!entries.is_empty(), ConfigViolation::EmptyCatalog)];

    for (index, entry) in entries.iter().enumerate() {
        checks.extend(check_entry(index, entry));
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Validate a whole configuration, accumulating ALL violations.
pub fn validate_config(config: &KioskConfig) -> ConfigCheck {
    let checks = vec![
        validate_catalog(&config.catalog),
        check(config.history_limit > 0, ConfigViolation::ZeroHistoryLimit),
    ];

    Validation::all_vec(checks).map(|_| ())
}

/// Turn an accumulated check into a `Result`.
pub fn into_result(validation: ConfigCheck) -> Result<(), ConfigError> {
    match validation {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(ConfigError::Invalid(errors.iter().cloned().collect())),
    }
}

/// Validate catalog entries as a `Result`.
pub fn check_catalog(entries: &[CatalogEntry]) -> Result<(), ConfigError> {
    into_result(validate_catalog(entries))
}
