//! The session aggregate owned by the engine.

use crate::core::error::KioskError;
use crate::core::event::Denomination;
use crate::core::state::SessionState;
use serde::{Deserialize, Serialize};

/// Everything the engine mutates: current state, credit, selection
/// cursor and the fresh-entry flag.
///
/// Credit is unsigned and every mutation is checked before it is applied,
/// so the balance can never go negative or wrap.
///
/// # Example
///
/// ```rust
/// use kiosk::core::{Denomination, Session, SessionState};
///
/// let mut session = Session::new();
/// assert_eq!(session.state(), SessionState::Menu);
///
/// session.deposit(Denomination::Ten).unwrap();
/// assert_eq!(session.credit(), 10);
///
/// assert!(session.debit(11).is_err());
/// assert_eq!(session.debit(9).unwrap(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    state: SessionState,
    credit: u32,
    cursor: usize,
    fresh_entry: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Fresh session: `Menu`, no credit, cursor on the first entry which
    /// has not been shown yet.
    pub fn new() -> Self {
        Self {
            state: SessionState::Menu,
            credit: 0,
            cursor: 0,
            fresh_entry: true,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn credit(&self) -> u32 {
        self.credit
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// `true` while the entry under the cursor has not been shown in the
    /// current browse visit.
    pub fn is_fresh_entry(&self) -> bool {
        self.fresh_entry
    }

    pub fn can_afford(&self, price: u32) -> bool {
        self.credit >= price
    }

    /// Add a coin, returning the new balance.
    pub fn deposit(&mut self, denomination: Denomination) -> Result<u32, KioskError> {
        let credit = self.credit.checked_add(denomination.units()).ok_or(
            KioskError::CreditOverflow {
                credit: self.credit,
                denomination,
            },
        )?;
        self.credit = credit;
        Ok(credit)
    }

    /// Remove `price` from the balance, returning what remains.
    pub fn debit(&mut self, price: u32) -> Result<u32, KioskError> {
        let remaining = self
            .credit
            .checked_sub(price)
            .ok_or(KioskError::InsufficientCredit {
                price,
                credit: self.credit,
            })?;
        self.credit = remaining;
        Ok(remaining)
    }

    /// Hand back the whole balance, leaving zero.
    pub fn take_credit(&mut self) -> u32 {
        std::mem::take(&mut self.credit)
    }

    pub(crate) fn set_state(&mut self, state: SessionState) {
        self.state = state;
    }

    #[cfg(test)]
    pub(crate) fn set_credit(&mut self, credit: u32) {
        self.credit = credit;
    }

    pub(crate) fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    pub(crate) fn mark_stale(&mut self) {
        self.fresh_entry = true;
    }

    pub(crate) fn mark_shown(&mut self) {
        self.fresh_entry = false;
    }
}
