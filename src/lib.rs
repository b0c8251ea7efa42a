//! Kiosk: the control core of a coin-operated movie ticket machine
//!
//! The kiosk accepts coins, lets a customer browse a fixed catalog of movie
//! sessions, issues a ticket when credit covers the price and hands back
//! the remaining credit on request.
//!
//! The crate follows a "pure core, imperative shell" layout. The session
//! data and the guard predicates are plain values with no side effects,
//! while the engine applies a static transition table and pushes every
//! user-visible outcome through a [`Reporter`].
//!
//! # Core Concepts
//!
//! - **State**: the three session states, via the `State` trait
//! - **Events**: one input occurrence at a time, handed over through an
//!   [`EventSlot`](input::EventSlot)
//! - **Transitions**: a `(state, trigger, guard)` table where the first
//!   matching rule wins and deferring rules forward the event to the next
//!   state
//! - **Reports**: directives for whatever renders output
//!
//! # Example
//!
//! ```rust
//! use kiosk::core::{Catalog, Denomination, Event, SessionState};
//! use kiosk::effects::{Kiosk, RecordingReporter, Report};
//!
//! let mut kiosk = Kiosk::new(Catalog::sample(), RecordingReporter::new());
//!
//! kiosk.replay([Event::AddCredit(Denomination::Five), Event::NavigateUp]);
//! assert_eq!(kiosk.state(), SessionState::BrowsingCatalog);
//!
//! kiosk.replay([Event::Select]);
//! assert_eq!(kiosk.state(), SessionState::BrowsingCatalog);
//! assert_eq!(kiosk.credit(), 5);
//! assert!(kiosk
//!     .reporter()
//!     .reports()
//!     .contains(&Report::InsufficientCredit { price: 9, credit: 5 }));
//!
//! kiosk.replay([Event::ReturnCredit]);
//! assert_eq!(kiosk.state(), SessionState::Menu);
//! assert_eq!(kiosk.credit(), 0);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod effects;
pub mod input;

// Re-export commonly used types
pub use builder::{BuildError, KioskBuilder};
pub use config::{ConfigError, KioskConfig};
pub use self::core::{Catalog, CatalogEntry, Event, Session, SessionState, State};
pub use effects::{Kiosk, Report, Reporter};
