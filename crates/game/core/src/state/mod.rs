//! Authoritative match state.
//!
//! This module owns the fighter record, the per-corner pair and the match
//! bookkeeping. Callers read it freely but mutate it exclusively through the
//! engine and the condition system.
mod builder;
mod conditions;
mod fighter;
mod pair;

pub use builder::{BalanceSelectors, FighterBuilder, FighterProfile, ProfileError, random_profile};
pub use conditions::ActiveConditions;
pub use fighter::{Fighter, Physique};
pub use pair::{Corner, Pair};

use crate::engine::MatchResult;

/// Both fighters plus turn bookkeeping.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub fighters: Pair<Fighter>,
    /// Current turn, starting at 1.
    pub turn: u32,
    /// Set once the match has ended.
    pub result: Option<MatchResult>,
}

impl MatchState {
    pub fn new(a: Fighter, b: Fighter) -> Self {
        Self {
            fighters: Pair::new(a, b),
            turn: 1,
            result: None,
        }
    }

    pub fn fighter(&self, corner: Corner) -> &Fighter {
        &self.fighters[corner]
    }

    /// Corner attacking on the current turn.
    pub fn attacker(&self) -> Corner {
        Corner::for_turn(self.turn)
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }
}
