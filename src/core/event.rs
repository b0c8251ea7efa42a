//! Discrete stimuli consumed by the kiosk engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coin denominations accepted by the kiosk, in credit units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Denomination {
    One,
    Two,
    Five,
    Ten,
}

impl Denomination {
    /// Every accepted denomination, smallest first.
    pub const ALL: [Denomination; 4] = [Self::One, Self::Two, Self::Five, Self::Ten];

    /// Value of the coin in credit units.
    pub const fn units(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Five => 5,
            Self::Ten => 10,
        }
    }

    /// Look up the denomination worth exactly `units`.
    ///
    /// ```rust
    /// use kiosk::core::Denomination;
    ///
    /// assert_eq!(Denomination::from_units(5), Some(Denomination::Five));
    /// assert_eq!(Denomination::from_units(3), None);
    /// ```
    pub fn from_units(units: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.units() == units)
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.units())
    }
}

/// One pending stimulus from the input layer.
///
/// At most one event is pending at a time. `None` means nothing is
/// pending; the engine resets the slot to `None` once it has consumed an
/// event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    #[default]
    None,
    AddCredit(Denomination),
    NavigateUp,
    NavigateDown,
    Select,
    ReturnCredit,
}

impl Event {
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    pub const fn is_navigation(self) -> bool {
        matches!(self, Self::NavigateUp | Self::NavigateDown)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::AddCredit(d) => write!(f, "add {d}"),
            Self::NavigateUp => write!(f, "up"),
            Self::NavigateDown => write!(f, "down"),
            Self::Select => write!(f, "select"),
            Self::ReturnCredit => write!(f, "return"),
        }
    }
}
