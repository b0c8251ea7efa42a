//! The kiosk engine: applies transition rules and emits reports.

use crate::core::{
    Catalog, CatalogEntry, Event, KioskError, Session, SessionState, State, StateHistory,
    StateTransition,
};
use crate::effects::report::{Report, Reporter, Ticket};
use crate::effects::transition::{find_rule, Action, Handoff};
use crate::input::EventSlot;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Upper bound on deferral hops for a single event occurrence.
const MAX_HOPS: usize = 4;

/// Outcome of processing one event occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// Nothing was pending and no idle rule applied
    Idle,

    /// The event had no rule in the current state and was discarded
    Ignored(Event),

    /// At least one rule fired
    Applied {
        from: SessionState,
        to: SessionState,
        rejection: Option<KioskError>,
    },
}

/// Single-consumer kiosk engine.
///
/// Owns the session, the catalog and the output boundary. All mutation
/// goes through [`Kiosk::tick`], one event occurrence at a time.
///
/// # Example
///
/// ```rust
/// use kiosk::core::{Catalog, Denomination, Event, SessionState};
/// use kiosk::effects::{Kiosk, RecordingReporter, Report};
///
/// let mut kiosk = Kiosk::new(Catalog::sample(), RecordingReporter::new());
///
/// kiosk.replay([
///     Event::AddCredit(Denomination::Ten),
///     Event::NavigateUp,
///     Event::Select,
/// ]);
///
/// assert_eq!(kiosk.state(), SessionState::Menu);
/// assert_eq!(kiosk.credit(), 1);
/// assert!(kiosk
///     .reporter()
///     .reports()
///     .contains(&Report::RemainingCredit { credit: 1 }));
/// ```
pub struct Kiosk<R: Reporter> {
    session: Session,
    catalog: Catalog,
    reporter: R,
    history: StateHistory<SessionState>,
}

impl<R: Reporter> Kiosk<R> {
    /// Create an engine in the initial session state
    pub fn new(catalog: Catalog, reporter: R) -> Self {
        Self::with_history(catalog, reporter, StateHistory::new())
    }

    pub fn with_history(
        catalog: Catalog,
        reporter: R,
        history: StateHistory<SessionState>,
    ) -> Self {
        Self {
            session: Session::new(),
            catalog,
            reporter,
            history,
        }
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn credit(&self) -> u32 {
        self.session.credit()
    }

    pub fn cursor(&self) -> usize {
        self.session.cursor()
    }

    pub fn is_fresh_entry(&self) -> bool {
        self.session.is_fresh_entry()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn history(&self) -> &StateHistory<SessionState> {
        &self.history
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Process one event occurrence to completion.
    ///
    /// Deferring rules hand the same occurrence to the next state within
    /// this call, so when `tick` returns the event has been consumed.
    /// A rejected action leaves the session where it was.
    pub fn tick(&mut self, event: Event) -> StepResult {
        let from = self.session.state();
        let mut applied = false;
        let mut rejection = None;

        for _ in 0..MAX_HOPS {
            let Some(rule) = find_rule(event, &self.session, &self.catalog) else {
                break;
            };
            applied = true;

            if let Err(error) = self.apply(rule.action, event) {
                let state = self.session.state();
                debug!(state = state.name(), %event, %error, "action rejected");
                rejection = Some(error);
                break;
            }
            self.enter(rule.to, event);

            if rule.handoff == Handoff::Consume {
                break;
            }
        }

        if !applied {
            if event.is_none() {
                return StepResult::Idle;
            }
            debug!(state = from.name(), %event, "event discarded");
            return StepResult::Ignored(event);
        }

        StepResult::Applied {
            from,
            to: self.session.state(),
            rejection,
        }
    }

    /// Run idle ticks until no rule fires, returning how many fired.
    pub fn settle(&mut self) -> usize {
        let mut fired = 0;
        while matches!(self.tick(Event::None), StepResult::Applied { .. }) {
            fired += 1;
        }
        fired
    }

    /// Feed events one by one, settling after each.
    pub fn replay<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = Event>,
    {
        for event in events {
            self.tick(event);
            self.settle();
        }
    }

    /// Poll `slot` until `stop` is raised.
    ///
    /// Sleeps `idle` after every poll that found nothing to do. Once `stop`
    /// is seen, any event still pending is processed and the engine
    /// settles before returning.
    pub fn run(&mut self, slot: &EventSlot, stop: &AtomicBool, idle: Duration) {
        info!(entries = self.catalog.len(), "kiosk loop started");

        while !stop.load(Ordering::Acquire) {
            let event = slot.take();
            if self.tick(event) == StepResult::Idle {
                thread::sleep(idle);
            }
        }

        let pending = slot.take();
        if !pending.is_none() {
            self.tick(pending);
        }
        self.settle();

        info!(credit = self.session.credit(), "kiosk loop stopped");
    }

    fn current_entry(&self) -> CatalogEntry {
        *self.catalog.entry(self.session.cursor())
    }

    fn emit(&mut self, report: Report) {
        self.reporter.report(&report);
    }

    fn show_current(&mut self) {
        let index = self.session.cursor();
        let entry = self.current_entry();
        let credit = self.session.credit();
        self.emit(Report::EntryShown {
            index,
            entry,
            credit,
        });
    }

    fn enter(&mut self, to: SessionState, event: Event) {
        let from = self.session.state();
        if from == to {
            return;
        }
        debug!(from = from.name(), to = to.name(), %event, "transition");
        self.history.record(StateTransition {
            from,
            to,
            event,
            timestamp: Utc::now(),
        });
        self.session.set_state(to);
    }

    fn apply(&mut self, action: Action, event: Event) -> Result<(), KioskError> {
        match action {
            Action::Defer => {}
            Action::MarkStale => self.session.mark_stale(),
            Action::ReturnCredit => {
                let amount = self.session.take_credit();
                info!(amount, "credit returned");
                self.emit(Report::CreditReturned { amount });
            }
            Action::AddCredit => {
                // Only `Trigger::Coin` rules carry this action.
                let Event::AddCredit(denomination) = event else {
                    unreachable!("AddCredit action fired for {event}");
                };
                match self.session.deposit(denomination) {
                    Ok(credit) => self.emit(Report::CreditUpdated { credit }),
                    Err(error) => {
                        let credit = self.session.credit();
                        warn!(%denomination, credit, "coin rejected");
                        self.emit(Report::CoinRejected {
                            denomination,
                            credit,
                        });
                        return Err(error);
                    }
                }
            }
            Action::RejectNoSelection => {
                self.emit(Report::NoSelectionMade);
                return Err(KioskError::NoSelectionMade);
            }
            Action::RejectInsufficient => {
                let price = self.current_entry().price_units;
                let credit = self.session.credit();
                self.emit(Report::InsufficientCredit { price, credit });
                return Err(KioskError::InsufficientCredit { price, credit });
            }
            Action::IssueTicket => {
                let entry = self.current_entry();
                let credit = match self.session.debit(entry.price_units) {
                    Ok(credit) => credit,
                    Err(error) => {
                        self.emit(Report::InsufficientCredit {
                            price: entry.price_units,
                            credit: self.session.credit(),
                        });
                        return Err(error);
                    }
                };
                let ticket = Ticket::issue(&entry);
                info!(
                    ticket = %ticket.id,
                    title = %entry.title,
                    hour = entry.session_hour,
                    price = entry.price_units,
                    "ticket issued"
                );
                self.emit(Report::TicketIssued(ticket));
                self.emit(Report::RemainingCredit { credit });
                self.session.mark_stale();
            }
            Action::ShowEntry => {
                self.session.mark_shown();
                self.show_current();
            }
            Action::Advance => {
                let next = self.catalog.next_index(self.session.cursor());
                self.session.set_cursor(next);
                self.show_current();
            }
            Action::Retreat => {
                let prev = self.catalog.prev_index(self.session.cursor());
                self.session.set_cursor(prev);
                self.show_current();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Denomination;
    use crate::effects::report::RecordingReporter;

    fn kiosk() -> Kiosk<RecordingReporter> {
        Kiosk::new(Catalog::sample(), RecordingReporter::new())
    }

    fn coin(units: u32) -> Event {
        Event::AddCredit(Denomination::from_units(units).unwrap())
    }

    #[test]
    fn coin_in_menu_defers_to_updating_credit() {
        let mut kiosk = kiosk();

        let result = kiosk.tick(coin(10));

        assert_eq!(
            result,
            StepResult::Applied {
                from: SessionState::Menu,
                to: SessionState::UpdatingCredit,
                rejection: None,
            }
        );
        assert_eq!(kiosk.credit(), 10);
        assert_eq!(
            kiosk.reporter().reports(),
            &[Report::CreditUpdated { credit: 10 }]
        );
    }

    #[test]
    fn navigation_from_menu_shows_current_entry_without_moving() {
        let mut kiosk = kiosk();

        kiosk.tick(Event::NavigateUp);

        assert_eq!(kiosk.state(), SessionState::BrowsingCatalog);
        assert_eq!(kiosk.cursor(), 0);
        assert!(!kiosk.is_fresh_entry());
        assert_eq!(kiosk.reporter().reports().len(), 1);
        assert!(matches!(
            kiosk.reporter().reports()[0],
            Report::EntryShown { index: 0, .. }
        ));
    }

    #[test]
    fn navigation_from_updating_credit_displays_on_next_idle_tick() {
        let mut kiosk = kiosk();
        kiosk.tick(coin(5));
        kiosk.reporter_mut().take();

        kiosk.tick(Event::NavigateDown);

        assert_eq!(kiosk.state(), SessionState::BrowsingCatalog);
        assert!(kiosk.is_fresh_entry());
        assert!(kiosk.reporter().reports().is_empty());

        assert_eq!(kiosk.settle(), 1);
        assert!(!kiosk.is_fresh_entry());
        assert_eq!(kiosk.cursor(), 0);
        assert_eq!(kiosk.reporter().reports().len(), 1);
    }

    #[test]
    fn browsing_moves_cursor_once_entry_shown() {
        let mut kiosk = kiosk();
        kiosk.replay([Event::NavigateUp, Event::NavigateUp, Event::NavigateUp]);
        assert_eq!(kiosk.cursor(), 2);

        kiosk.replay([Event::NavigateDown]);
        assert_eq!(kiosk.cursor(), 1);
    }

    #[test]
    fn select_in_menu_reports_no_selection() {
        let mut kiosk = kiosk();

        let result = kiosk.tick(Event::Select);

        assert_eq!(
            result,
            StepResult::Applied {
                from: SessionState::Menu,
                to: SessionState::Menu,
                rejection: Some(KioskError::NoSelectionMade),
            }
        );
        assert_eq!(kiosk.reporter().reports(), &[Report::NoSelectionMade]);
    }

    #[test]
    fn ticket_is_followed_by_remaining_credit() {
        let mut kiosk = kiosk();
        kiosk.replay([coin(10), Event::NavigateUp]);
        kiosk.reporter_mut().take();

        kiosk.tick(Event::Select);

        let reports = kiosk.reporter().reports();
        assert_eq!(reports.len(), 2);
        assert!(matches!(reports[0], Report::TicketIssued(_)));
        assert_eq!(reports[1], Report::RemainingCredit { credit: 1 });
        assert_eq!(kiosk.state(), SessionState::Menu);
        assert!(kiosk.is_fresh_entry());
    }

    #[test]
    fn insufficient_credit_in_browsing_keeps_state() {
        let mut kiosk = kiosk();
        kiosk.replay([coin(5), Event::NavigateUp]);

        let result = kiosk.tick(Event::Select);

        assert_eq!(
            result,
            StepResult::Applied {
                from: SessionState::BrowsingCatalog,
                to: SessionState::BrowsingCatalog,
                rejection: Some(KioskError::InsufficientCredit {
                    price: 9,
                    credit: 5
                }),
            }
        );
        assert_eq!(kiosk.credit(), 5);
    }

    #[test]
    fn coin_overflow_is_rejected_without_mutation() {
        let mut kiosk = kiosk();
        kiosk.session.set_state(SessionState::UpdatingCredit);
        kiosk.session.set_credit(u32::MAX - 1);

        let result = kiosk.tick(coin(2));

        assert_eq!(
            result,
            StepResult::Applied {
                from: SessionState::UpdatingCredit,
                to: SessionState::UpdatingCredit,
                rejection: Some(KioskError::CreditOverflow {
                    credit: u32::MAX - 1,
                    denomination: Denomination::Two,
                }),
            }
        );
        assert_eq!(kiosk.credit(), u32::MAX - 1);
        assert_eq!(
            kiosk.reporter().reports(),
            &[Report::CoinRejected {
                denomination: Denomination::Two,
                credit: u32::MAX - 1,
            }]
        );
    }

    #[test]
    fn coin_overflow_from_menu_still_reports_rejection() {
        let mut kiosk = kiosk();
        kiosk.session.set_credit(u32::MAX);

        let result = kiosk.tick(coin(1));

        assert!(matches!(
            result,
            StepResult::Applied {
                rejection: Some(KioskError::CreditOverflow { .. }),
                ..
            }
        ));
        assert_eq!(kiosk.credit(), u32::MAX);
        assert!(matches!(
            kiosk.reporter().reports(),
            [Report::CoinRejected { .. }]
        ));
    }

    #[test]
    fn unmatched_event_is_ignored() {
        let mut kiosk = kiosk();
        kiosk.tick(coin(2));
        let before = kiosk.session().clone();

        // No rule for idle ticks in UpdatingCredit
        assert_eq!(kiosk.tick(Event::None), StepResult::Idle);
        assert_eq!(kiosk.session(), &before);
    }

    #[test]
    fn transitions_are_recorded_in_history() {
        let mut kiosk = kiosk();
        kiosk.replay([coin(10), Event::NavigateUp, Event::ReturnCredit]);

        let path: Vec<SessionState> = kiosk.history().get_path().into_iter().copied().collect();
        assert_eq!(
            path,
            vec![
                SessionState::Menu,
                SessionState::UpdatingCredit,
                SessionState::BrowsingCatalog,
                SessionState::Menu,
            ]
        );
        assert_eq!(
            kiosk.history().last().map(|t| t.event),
            Some(Event::ReturnCredit)
        );
    }

    #[test]
    fn run_drains_pending_event_after_stop() {
        let mut kiosk = kiosk();
        let slot = EventSlot::new();
        let stop = AtomicBool::new(true);
        slot.post(Event::NavigateUp);

        kiosk.run(&slot, &stop, Duration::from_millis(1));

        assert!(slot.is_empty());
        assert_eq!(kiosk.state(), SessionState::BrowsingCatalog);
        assert_eq!(kiosk.reporter().reports().len(), 1);
    }
}
