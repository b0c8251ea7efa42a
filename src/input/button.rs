//! Physical kiosk buttons.

use crate::core::{Denomination, Event};
use serde::{Deserialize, Serialize};

/// The eight buttons of the kiosk front panel, in wiring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Coin1,
    Coin2,
    Coin5,
    Coin10,
    Up,
    Down,
    Select,
    Return,
}

impl Button {
    /// All buttons, indexed by their position on the panel.
    pub const ALL: [Button; 8] = [
        Self::Coin1,
        Self::Coin2,
        Self::Coin5,
        Self::Coin10,
        Self::Up,
        Self::Down,
        Self::Select,
        Self::Return,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The event a press of this button produces.
    pub const fn event(self) -> Event {
        match self {
            Self::Coin1 => Event::AddCredit(Denomination::One),
            Self::Coin2 => Event::AddCredit(Denomination::Two),
            Self::Coin5 => Event::AddCredit(Denomination::Five),
            Self::Coin10 => Event::AddCredit(Denomination::Ten),
            Self::Up => Event::NavigateUp,
            Self::Down => Event::NavigateDown,
            Self::Select => Event::Select,
            Self::Return => Event::ReturnCredit,
        }
    }
}

impl From<Button> for Event {
    fn from(button: Button) -> Self {
        button.event()
    }
}
