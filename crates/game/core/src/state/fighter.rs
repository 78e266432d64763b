//! Fighter record: identity, physique, bonus ledgers, conditions and health.

use crate::conditions::Condition;
use crate::stats::{Balances, Bonuses, TempBonuses};

use super::conditions::ActiveConditions;

/// Height (cm), weight (kg) and age (years). Immutable after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Physique {
    pub height: u32,
    pub weight: u32,
    pub age: u32,
}

impl Physique {
    pub const fn new(height: u32, weight: u32, age: u32) -> Self {
        Self {
            height,
            weight,
            age,
        }
    }
}

/// A combatant.
///
/// Permanent bonuses are fixed at construction. Temporary bonuses, active
/// conditions and health are only mutated from inside the crate by the
/// condition system and the attack pipeline.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    name: String,
    physique: Physique,
    balances: Balances,
    bonuses: Bonuses,
    temp: TempBonuses,
    conditions: ActiveConditions,
    health: i32,
    max_health: i32,
}

impl Fighter {
    /// Fresh fighter at full health with no conditions.
    pub fn new(
        name: impl Into<String>,
        physique: Physique,
        balances: Balances,
        bonuses: Bonuses,
        max_health: i32,
    ) -> Self {
        Self::restore(name, physique, balances, bonuses, max_health, max_health)
    }

    /// Rebuild a fighter at rest with a specific current health.
    ///
    /// Temporary bonuses start at zero and no conditions are held.
    pub fn restore(
        name: impl Into<String>,
        physique: Physique,
        balances: Balances,
        bonuses: Bonuses,
        health: i32,
        max_health: i32,
    ) -> Self {
        Self {
            name: name.into(),
            physique,
            balances,
            bonuses,
            temp: TempBonuses::ZERO,
            conditions: ActiveConditions::new(),
            health,
            max_health,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn physique(&self) -> Physique {
        self.physique
    }

    /// Effective balances (selectors shifted by physique).
    pub fn balances(&self) -> Balances {
        self.balances
    }

    pub fn bonuses(&self) -> Bonuses {
        self.bonuses
    }

    pub fn temp(&self) -> TempBonuses {
        self.temp
    }

    pub fn conditions(&self) -> &ActiveConditions {
        &self.conditions
    }

    pub fn has_condition(&self, condition: Condition) -> bool {
        self.conditions.contains(condition)
    }

    pub fn remaining(&self, condition: Condition) -> Option<u32> {
        self.conditions.remaining(condition)
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    /// Health at or below zero.
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    pub(crate) fn temp_mut(&mut self) -> &mut TempBonuses {
        &mut self.temp
    }

    pub(crate) fn conditions_mut(&mut self) -> &mut ActiveConditions {
        &mut self.conditions
    }

    /// Add `delta` to current health. No floor, no ceiling.
    pub(crate) fn adjust_health(&mut self, delta: i32) {
        self.health = self.health.saturating_add(delta);
    }
}
