//! Single-slot atomic event mailbox.

use crate::core::{Denomination, Event};
use std::sync::atomic::{AtomicU8, Ordering};

const EMPTY: u8 = 0;

fn encode(event: Event) -> u8 {
    match event {
        Event::None => EMPTY,
        Event::AddCredit(Denomination::One) => 1,
        Event::AddCredit(Denomination::Two) => 2,
        Event::AddCredit(Denomination::Five) => 3,
        Event::AddCredit(Denomination::Ten) => 4,
        Event::NavigateUp => 5,
        Event::NavigateDown => 6,
        Event::Select => 7,
        Event::ReturnCredit => 8,
    }
}

fn decode(code: u8) -> Event {
    match code {
        1 => Event::AddCredit(Denomination::One),
        2 => Event::AddCredit(Denomination::Two),
        3 => Event::AddCredit(Denomination::Five),
        4 => Event::AddCredit(Denomination::Ten),
        5 => Event::NavigateUp,
        6 => Event::NavigateDown,
        7 => Event::Select,
        8 => Event::ReturnCredit,
        _ => Event::None,
    }
}

/// Holds at most one pending [`Event`] shared between one producer and one
/// consumer.
///
/// The whole event fits in a single byte, so a reader never observes a
/// half-written value. Posting overwrites an event that was not consumed
/// yet: the slot keeps the last write and the displaced event is lost.
/// That loss is accepted policy, and [`EventSlot::post`] hands the
/// displaced event back so producers can log it.
///
/// # Example
///
/// ```rust
/// use kiosk::core::Event;
/// use kiosk::input::EventSlot;
///
/// let slot = EventSlot::new();
/// assert_eq!(slot.post(Event::NavigateUp), None);
/// assert_eq!(slot.post(Event::Select), Some(Event::NavigateUp));
///
/// assert_eq!(slot.take(), Event::Select);
/// assert_eq!(slot.take(), Event::None);
/// ```
#[derive(Debug, Default)]
pub struct EventSlot {
    cell: AtomicU8,
}

impl EventSlot {
    pub const fn new() -> Self {
        Self {
            cell: AtomicU8::new(EMPTY),
        }
    }

    /// Publish `event`, returning the unconsumed event it replaced.
    pub fn post(&self, event: Event) -> Option<Event> {
        let displaced = decode(self.cell.swap(encode(event), Ordering::AcqRel));
        (!displaced.is_none()).then_some(displaced)
    }

    /// Read the pending event and clear the slot in one atomic step.
    pub fn take(&self) -> Event {
        decode(self.cell.swap(EMPTY, Ordering::AcqRel))
    }

    /// Read the pending event without consuming it.
    pub fn peek(&self) -> Event {
        decode(self.cell.load(Ordering::Acquire))
    }

    pub fn is_empty(&self) -> bool {
        self.cell.load(Ordering::Acquire) == EMPTY
    }
}
