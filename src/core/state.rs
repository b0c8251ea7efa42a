//! State trait and the kiosk session states.
//!
//! All state machine states implement [`State`], which provides pure
//! methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States are small immutable
/// values that describe the current mode of the machine.
///
/// # Required Traits
///
/// - `Clone`: States are copied into the transition history
/// - `PartialEq`: States are compared by the transition table
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States show up in JSON reports
///
/// # Example
///
/// ```rust
/// use kiosk::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
///     Jammed,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Jammed => "Jammed",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Open.name(), "Open");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

crate::state_enum! {
    /// Mode of the kiosk session.
    ///
    /// `Menu` is the initial state. No state is terminal: the kiosk runs
    /// forever and per-operation outcomes are reported, never halted on.
    #[derive(Copy, Eq, Hash, Default)]
    pub enum SessionState {
        /// Idle, waiting for coins or navigation.
        #[default]
        Menu,
        /// Showing catalog entries one at a time.
        BrowsingCatalog,
        /// Accepting coins; a purchase may be confirmed from here.
        UpdatingCredit,
    }
}
