//! Turn orchestration and win detection.
//!
//! The [`TurnEngine`] is the only writer of [`MatchState`]. Each call to
//! [`TurnEngine::run_turn`] walks one turn through its phases:
//!
//! ```text
//! RoundStart → PreTurn → (Skip | Attack) → PostTurn → WinCheck → RoundStart | End
//! ```
//!
//! Selection happens before anything is mutated, so a failed lookup leaves
//! the state untouched.

mod errors;
mod report;
mod selector;
mod turns;

pub use errors::TurnError;
pub use report::{TurnPhase, TurnReport};
pub use selector::{AttackSelector, LoadoutSelector, RandomCatalogSelector, ScriptedSelector};

use crate::state::{Corner, MatchState};

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchResult {
    Winner(Corner),
    /// Both fighters went down on the same turn.
    Draw,
}

impl core::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Winner(corner) => write!(f, "corner {corner} wins"),
            Self::Draw => f.write_str("draw"),
        }
    }
}

/// Drives a match one turn at a time.
pub struct TurnEngine<'a> {
    state: &'a mut MatchState,
}

impl<'a> TurnEngine<'a> {
    pub fn new(state: &'a mut MatchState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &MatchState {
        &*self.state
    }
}
