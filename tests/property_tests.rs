//! Property-based tests for the kiosk engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated event sequences.

use kiosk::core::{Catalog, Denomination, Event, SessionState, State, StateHistory};
use kiosk::effects::{Kiosk, RecordingReporter, Report, StepResult};
use proptest::prelude::*;

fn kiosk() -> Kiosk<RecordingReporter> {
    Kiosk::new(Catalog::sample(), RecordingReporter::new())
}

prop_compose! {
    fn arbitrary_denomination()(index in 0..4usize) -> Denomination {
        Denomination::ALL[index]
    }
}

fn arbitrary_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::None),
        arbitrary_denomination().prop_map(Event::AddCredit),
        Just(Event::NavigateUp),
        Just(Event::NavigateDown),
        Just(Event::Select),
        Just(Event::ReturnCredit),
    ]
}

/// Events that never return or spend credit.
fn non_spending_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::None),
        Just(Event::NavigateUp),
        Just(Event::NavigateDown),
    ]
}

proptest! {
    #[test]
    fn credit_is_sum_of_coins(
        coins in prop::collection::vec(arbitrary_denomination(), 0..30),
        noise in prop::collection::vec(non_spending_event(), 0..30),
    ) {
        let mut kiosk = kiosk();
        let mut expected = 0;

        for (i, d) in coins.iter().enumerate() {
            if let Some(event) = noise.get(i) {
                kiosk.replay([*event]);
            }
            kiosk.reporter_mut().take();

            kiosk.replay([Event::AddCredit(*d)]);
            expected += d.units();

            prop_assert_eq!(kiosk.credit(), expected);
            let reported = kiosk
                .reporter()
                .reports()
                .contains(&Report::CreditUpdated { credit: expected });
            prop_assert!(reported);
        }
    }

    #[test]
    fn return_credit_always_empties_balance(
        events in prop::collection::vec(arbitrary_event(), 0..40),
    ) {
        let mut kiosk = kiosk();
        kiosk.replay(events);
        let before = kiosk.credit();
        kiosk.reporter_mut().take();

        kiosk.replay([Event::ReturnCredit]);

        prop_assert_eq!(kiosk.state(), SessionState::Menu);
        prop_assert_eq!(kiosk.credit(), 0);
        prop_assert_eq!(
            kiosk.reporter().reports().first(),
            Some(&Report::CreditReturned { amount: before })
        );
    }

    #[test]
    fn cursor_stays_within_catalog(
        events in prop::collection::vec(arbitrary_event(), 0..80),
    ) {
        let mut kiosk = kiosk();
        for event in events {
            kiosk.tick(event);
            prop_assert!(kiosk.cursor() < kiosk.catalog().len());
        }
    }

    #[test]
    fn ticket_debits_exactly_the_price(
        events in prop::collection::vec(arbitrary_event(), 0..60),
    ) {
        let mut kiosk = kiosk();

        for event in events {
            let credit_before = kiosk.credit();
            let price = kiosk.catalog().price_at(kiosk.cursor());
            let tickets_before = kiosk.reporter().tickets().count();

            kiosk.tick(event);

            if kiosk.reporter().tickets().count() > tickets_before {
                prop_assert!(credit_before >= price);
                prop_assert_eq!(kiosk.credit(), credit_before - price);
                prop_assert_eq!(kiosk.state(), SessionState::Menu);
                prop_assert!(kiosk.is_fresh_entry());
            }
            kiosk.settle();
        }
    }

    #[test]
    fn ignored_events_leave_session_untouched(
        events in prop::collection::vec(arbitrary_event(), 0..60),
    ) {
        let mut kiosk = kiosk();

        for event in events {
            let before = kiosk.session().clone();
            let reports_before = kiosk.reporter().reports().len();

            match kiosk.tick(event) {
                StepResult::Idle | StepResult::Ignored(_) => {
                    prop_assert_eq!(kiosk.session(), &before);
                    prop_assert_eq!(kiosk.reporter().reports().len(), reports_before);
                }
                StepResult::Applied { from, rejection: Some(_), .. } => {
                    prop_assert_eq!(kiosk.state(), from);
                    prop_assert_eq!(kiosk.credit(), before.credit());
                }
                StepResult::Applied { .. } => {}
            }
        }
    }

    #[test]
    fn history_stays_bounded(
        limit in 1..16usize,
        events in prop::collection::vec(arbitrary_event(), 0..100),
    ) {
        let mut kiosk = Kiosk::with_history(
            Catalog::sample(),
            RecordingReporter::new(),
            StateHistory::with_limit(limit),
        );

        kiosk.replay(events);

        let history = kiosk.history();
        prop_assert!(history.len() <= limit);
        for transition in history.transitions() {
            prop_assert_ne!(transition.from, transition.to);
        }
    }

    #[test]
    fn state_name_is_stable(events in prop::collection::vec(arbitrary_event(), 0..20)) {
        let mut kiosk = kiosk();
        kiosk.replay(events);
        let state = kiosk.state();
        prop_assert_eq!(state.name(), state.name());
    }
}
