//! Static catalog of movie sessions.

use crate::config::{check_catalog, ConfigError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One purchasable movie showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Single-letter movie title
    pub title: char,
    /// Hour of the day the session starts
    pub session_hour: u8,
    /// Ticket price in credit units
    pub price_units: u32,
}

impl CatalogEntry {
    pub const fn new(title: char, session_hour: u8, price_units: u32) -> Self {
        Self {
            title,
            session_hour,
            price_units,
        }
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Movie {}, {}H00 session", self.title, self.session_hour)
    }
}

const SAMPLE: [CatalogEntry; 5] = [
    CatalogEntry::new('A', 19, 9),
    CatalogEntry::new('A', 21, 11),
    CatalogEntry::new('A', 23, 9),
    CatalogEntry::new('B', 19, 10),
    CatalogEntry::new('B', 21, 12),
];

/// Ordered, non-empty, read-only sequence of catalog entries.
///
/// Navigation wraps around in both directions and never produces an
/// out-of-range index.
///
/// # Example
///
/// ```rust
/// use kiosk::core::Catalog;
///
/// let catalog = Catalog::sample();
/// assert_eq!(catalog.len(), 5);
/// assert_eq!(catalog.next_index(4), 0);
/// assert_eq!(catalog.prev_index(0), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

// A catalog is never empty, so `is_empty` would always be false.
#[allow(clippy::len_without_is_empty)]
impl Catalog {
    /// Build a catalog, rejecting every invalid entry at once.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, ConfigError> {
        check_catalog(&entries)?;
        Ok(Self { entries })
    }

    /// The five sessions of the reference installation.
    pub fn sample() -> Self {
        Self {
            entries: SAMPLE.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Entry at `index`, wrapped into range.
    pub fn entry(&self, index: usize) -> &CatalogEntry {
        &self.entries[index % self.entries.len()]
    }

    pub fn price_at(&self, index: usize) -> u32 {
        self.entry(index).price_units
    }

    /// Index after `index`, wrapping from the last entry to the first.
    pub fn next_index(&self, index: usize) -> usize {
        (index % self.len() + 1) % self.len()
    }

    /// Index before `index`, wrapping from the first entry to the last.
    pub fn prev_index(&self, index: usize) -> usize {
        let n = self.len();
        (index % n + n - 1) % n
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}
