//! Boundary between the input layer and the engine.
//!
//! Debouncing and interrupt delivery live outside this crate. What lives
//! here is the hand-off: the [`EventSlot`] mailbox the producer writes to,
//! the mapping from panel buttons to events, and a text syntax for
//! replaying events from scripts or a terminal.

mod button;
pub mod error;
mod script;
mod slot;

pub use button::Button;
pub use error::{ParseEventError, ScriptError};
pub use script::{parse_line, parse_script};
pub use slot::EventSlot;
