//! The kiosk transition table.
//!
//! Each [`Rule`] is a `(state, trigger, guard)` key mapped to an action and
//! a next state. Rules are evaluated in table order and the first match
//! wins, which encodes the tie-break policy (staleness before
//! insufficiency).

use crate::core::{Catalog, Event, Guard, Session, SessionState};

/// Which event occurrences a rule reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// `AddCredit` of any denomination
    Coin,
    ReturnCredit,
    /// `NavigateUp` or `NavigateDown`
    Navigate,
    NavigateUp,
    NavigateDown,
    Select,
    /// No event, or a navigation event that arrived before the current
    /// entry was shown
    Browse,
}

impl Trigger {
    pub fn matches(self, event: Event) -> bool {
        match self {
            Self::Coin => matches!(event, Event::AddCredit(_)),
            Self::ReturnCredit => event == Event::ReturnCredit,
            Self::Navigate => event.is_navigation(),
            Self::NavigateUp => event == Event::NavigateUp,
            Self::NavigateDown => event == Event::NavigateDown,
            Self::Select => event == Event::Select,
            Self::Browse => event.is_none() || event.is_navigation(),
        }
    }
}

/// Side effect applied when a rule fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Change state only; the event is handled by the next state.
    Defer,
    /// Report the balance and zero it.
    ReturnCredit,
    /// Mark the entry under the cursor as not yet shown.
    MarkStale,
    /// Add the coin to the balance and report it.
    AddCredit,
    RejectNoSelection,
    RejectInsufficient,
    /// Debit the price, issue the ticket and report the remaining credit.
    IssueTicket,
    /// Show the entry under the cursor without moving.
    ShowEntry,
    /// Move the cursor forward and show the entry.
    Advance,
    /// Move the cursor back and show the entry.
    Retreat,
}

/// What happens to the event occurrence once a rule has fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handoff {
    /// The event is consumed.
    Consume,
    /// The event is dispatched again in the next state.
    Forward,
}

/// One row of the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    pub from: SessionState,
    pub trigger: Trigger,
    pub guard: Guard,
    pub action: Action,
    pub to: SessionState,
    pub handoff: Handoff,
}

impl Rule {
    const fn new(
        from: SessionState,
        trigger: Trigger,
        guard: Guard,
        action: Action,
        to: SessionState,
        handoff: Handoff,
    ) -> Self {
        Self {
            from,
            trigger,
            guard,
            action,
            to,
            handoff,
        }
    }

    /// Check if this rule can fire for `event` in the current session (pure).
    pub fn can_execute(&self, event: Event, session: &Session, catalog: &Catalog) -> bool {
        session.state() == self.from
            && self.trigger.matches(event)
            && self.guard.check(session, catalog)
    }
}

use Action as A;
use Guard as G;
use Handoff::{Consume, Forward};
use SessionState::{BrowsingCatalog, Menu, UpdatingCredit};
use Trigger as T;

/// Every rule of the kiosk, grouped by source state, in priority order.
#[rustfmt::skip]
pub static TRANSITIONS: [Rule; 17] = [
    Rule::new(Menu, T::Coin, G::Always, A::Defer, UpdatingCredit, Forward),
    Rule::new(Menu, T::ReturnCredit, G::Always, A::ReturnCredit, Menu, Consume),
    Rule::new(Menu, T::Navigate, G::Always, A::MarkStale, BrowsingCatalog, Forward),
    Rule::new(Menu, T::Select, G::Always, A::RejectNoSelection, Menu, Consume),
    Rule::new(UpdatingCredit, T::ReturnCredit, G::Always, A::ReturnCredit, Menu, Consume),
    Rule::new(UpdatingCredit, T::Navigate, G::Always, A::MarkStale, BrowsingCatalog, Consume),
    Rule::new(UpdatingCredit, T::Select, G::FreshEntry, A::RejectNoSelection, UpdatingCredit, Consume),
    Rule::new(UpdatingCredit, T::Select, G::CannotAfford, A::RejectInsufficient, UpdatingCredit, Consume),
    Rule::new(UpdatingCredit, T::Select, G::CanAfford, A::IssueTicket, Menu, Consume),
    Rule::new(UpdatingCredit, T::Coin, G::Always, A::AddCredit, UpdatingCredit, Consume),
    Rule::new(BrowsingCatalog, T::Coin, G::Always, A::Defer, UpdatingCredit, Forward),
    Rule::new(BrowsingCatalog, T::ReturnCredit, G::Always, A::ReturnCredit, Menu, Consume),
    Rule::new(BrowsingCatalog, T::Select, G::CannotAfford, A::RejectInsufficient, BrowsingCatalog, Consume),
    Rule::new(BrowsingCatalog, T::Select, G::CanAfford, A::IssueTicket, Menu, Consume),
    Rule::new(BrowsingCatalog, T::Browse, G::FreshEntry, A::ShowEntry, BrowsingCatalog, Consume),
    Rule::new(BrowsingCatalog, T::NavigateUp, G::EntryShown, A::Advance, BrowsingCatalog, Consume),
    Rule::new(BrowsingCatalog, T::NavigateDown, G::EntryShown, A::Retreat, BrowsingCatalog, Consume),
];

/// First rule that can fire for `event`, if any.
pub fn find_rule(event: Event, session: &Session, catalog: &Catalog) -> Option<&'static Rule> {
    TRANSITIONS
        .iter()
        .find(|rule| rule.can_execute(event, session, catalog))
}
