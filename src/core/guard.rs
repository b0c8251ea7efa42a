//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions over the session and catalog that
//! decide whether a transition rule may fire. They never mutate anything.

use crate::core::catalog::Catalog;
use crate::core::session::Session;

/// Pure predicate that determines if a transition can execute.
///
/// Guards are a closed set so the transition table stays a plain `static`
/// value and every guard is covered by an exhaustive `match`.
///
/// # Example
///
/// ```rust
/// use kiosk::core::{Catalog, Denomination, Guard, Session};
///
/// let catalog = Catalog::sample();
/// let mut session = Session::new();
///
/// assert!(Guard::FreshEntry.check(&session, &catalog));
/// assert!(Guard::CannotAfford.check(&session, &catalog));
///
/// session.deposit(Denomination::Ten).unwrap();
/// assert!(Guard::CanAfford.check(&session, &catalog));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    /// Always passes.
    Always,
    /// The entry under the cursor has not been shown yet.
    FreshEntry,
    /// The entry under the cursor has already been shown.
    EntryShown,
    /// Credit covers the price of the entry under the cursor.
    CanAfford,
    /// Credit is below the price of the entry under the cursor.
    CannotAfford,
}

impl Guard {
    /// Check if the guard allows the transition.
    pub fn check(self, session: &Session, catalog: &Catalog) -> bool {
        match self {
            Self::Always => true,
            Self::FreshEntry => session.is_fresh_entry(),
            Self::EntryShown => !session.is_fresh_entry(),
            Self::CanAfford => session.can_afford(catalog.price_at(session.cursor())),
            Self::CannotAfford => !session.can_afford(catalog.price_at(session.cursor())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::Denomination;

    #[test]
    fn always_passes() {
        assert!(Guard::Always.check(&Session::new(), &Catalog::sample()));
    }

    #[test]
    fn fresh_and_shown_are_complementary() {
        let catalog = Catalog::sample();
        let mut session = Session::new();

        assert!(Guard::FreshEntry.check(&session, &catalog));
        assert!(!Guard::EntryShown.check(&session, &catalog));

        session.mark_shown();

        assert!(!Guard::FreshEntry.check(&session, &catalog));
        assert!(Guard::EntryShown.check(&session, &catalog));
    }

    #[test]
    fn affordability_uses_price_under_cursor() {
        let catalog = Catalog::sample();
        let mut session = Session::new();
        session.deposit(Denomination::Ten).unwrap();

        // price 9
        assert!(Guard::CanAfford.check(&session, &catalog));

        session.set_cursor(1);

        // price 11
        assert!(!Guard::CanAfford.check(&session, &catalog));
        assert!(Guard::CannotAfford.check(&session, &catalog));
    }

    #[test]
    fn exact_credit_is_affordable() {
        let catalog = Catalog::sample();
        let mut session = Session::new();
        session.deposit(Denomination::Five).unwrap();
        session.deposit(Denomination::Five).unwrap();
        session.set_cursor(3);

        assert!(Guard::CanAfford.check(&session, &catalog));
    }

    #[test]
    fn guard_is_deterministic() {
        let catalog = Catalog::sample();
        let session = Session::new();
        let guard = Guard::CannotAfford;

        assert_eq!(
            guard.check(&session, &catalog),
            guard.check(&session, &catalog)
        );
    }
}
