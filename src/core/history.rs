//! State transition history tracking.
//!
//! The engine runs an unbounded loop, so the history keeps only the most
//! recent transitions and evicts the oldest once its limit is reached.

use super::event::Event;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of transitions retained.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use kiosk::core::{Event, SessionState, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: SessionState::Menu,
///     to: SessionState::BrowsingCatalog,
///     event: Event::NavigateUp,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.event, Event::NavigateUp);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The event occurrence that caused the transition
    pub event: Event,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Bounded, ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use kiosk::core::{Event, SessionState, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let mut history = StateHistory::with_limit(2);
/// for (from, to) in [
///     (SessionState::Menu, SessionState::UpdatingCredit),
///     (SessionState::UpdatingCredit, SessionState::BrowsingCatalog),
///     (SessionState::BrowsingCatalog, SessionState::Menu),
/// ] {
///     history.record(StateTransition {
///         from,
///         to,
///         event: Event::None,
///         timestamp: Utc::now(),
///     });
/// }
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.evicted(), 1);
/// assert_eq!(
///     history.get_path(),
///     vec![
///         &SessionState::UpdatingCredit,
///         &SessionState::BrowsingCatalog,
///         &SessionState::Menu,
///     ]
/// );
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    limit: usize,
    evicted: usize,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create an empty history holding up to [`DEFAULT_HISTORY_LIMIT`]
    /// transitions.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty history holding up to `limit` transitions.
    ///
    /// A limit of zero is raised to one.
    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            transitions: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
            evicted: 0,
        }
    }

    /// Record a transition, evicting the oldest one when full.
    pub fn record(&mut self, transition: StateTransition<S>) {
        if self.transitions.len() == self.limit {
            self.transitions.pop_front();
            self.evicted += 1;
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed within the retained window.
    ///
    /// Returns the `from` state of the oldest retained transition, then the
    /// `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Retained transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<S>> {
        self.transitions.iter()
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of transitions dropped to respect the limit.
    pub fn evicted(&self) -> usize {
        self.evicted
    }
}
