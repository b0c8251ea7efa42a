//! Configuration violations.

use thiserror::Error;

/// A single problem found while validating a [`KioskConfig`](super::KioskConfig).
///
/// Validation collects every violation, so one run reports all of them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Catalog has no entries")]
    EmptyCatalog,

    #[error("Entry {index} has a zero price")]
    ZeroPrice { index: usize },

    #[error("Entry {index} has session hour {hour}, expected 0..=23")]
    InvalidHour { index: usize, hour: u8 },

    #[error("Entry {index} has title {title:?}, expected a letter or digit")]
    InvalidTitle { index: usize, title: char },

    #[error("History limit must be at least 1")]
    ZeroHistoryLimit,
}
