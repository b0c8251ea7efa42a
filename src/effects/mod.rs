//! The imperative shell around the pure core.
//!
//! This module turns events into session mutations and report
//! directives:
//!
//! - **Transitions**: the static `(state, trigger, guard)` rule table
//! - **Kiosk**: the engine that applies rules, records history and runs
//!   the polling loop
//! - **Reports**: directives handed to the output layer

mod machine;
mod report;
mod transition;

pub use machine::{Kiosk, StepResult};
pub use report::{JsonReporter, LineReporter, RecordingReporter, Report, Reporter, Ticket};
pub use transition::{find_rule, Action, Handoff, Rule, Trigger, TRANSITIONS};
