//! Per-fighter ledger of active conditions.

use std::collections::BTreeMap;

use crate::conditions::Condition;

/// Active conditions mapped to remaining duration in turns.
///
/// Backed by an ordered map so iteration always follows the declaration order
/// of [`Condition`]. Entries never hold a duration below one: the condition
/// system deletes them as soon as they expire.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActiveConditions(BTreeMap<Condition, u32>);

impl ActiveConditions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, condition: Condition) -> bool {
        self.0.contains_key(&condition)
    }

    /// Remaining turns for `condition`, if held.
    pub fn remaining(&self, condition: Condition) -> Option<u32> {
        self.0.get(&condition).copied()
    }

    /// `(condition, remaining)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Condition, u32)> + '_ {
        self.0.iter().map(|(c, d)| (*c, *d))
    }

    pub fn held(&self) -> Vec<Condition> {
        self.0.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn set(&mut self, condition: Condition, remaining: u32) {
        self.0.insert(condition, remaining);
    }

    pub(crate) fn remove(&mut self, condition: Condition) -> Option<u32> {
        self.0.remove(&condition)
    }

    /// Decrement by one turn and return the new remaining count.
    pub(crate) fn decrement(&mut self, condition: Condition) -> Option<u32> {
        let remaining = self.0.get_mut(&condition)?;
        *remaining = remaining.saturating_sub(1);
        Some(*remaining)
    }
}
