//! Core kiosk types and logic.
//!
//! This module contains the pure core of the kiosk:
//! - Session states via the `State` trait
//! - Events and coin denominations
//! - The static movie catalog
//! - The `Session` aggregate (credit, cursor, fresh-entry flag)
//! - Guard predicates for transition control
//! - Bounded transition history
//!
//! Nothing in this module performs I/O.

mod catalog;
mod error;
mod event;
mod guard;
mod history;
mod session;
mod state;

pub use catalog::{Catalog, CatalogEntry};
pub use error::KioskError;
pub use event::{Denomination, Event};
pub use guard::Guard;
pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_LIMIT};
pub use session::Session;
pub use state::{SessionState, State};
