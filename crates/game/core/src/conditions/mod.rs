//! Status conditions and their modifier tables.
//!
//! A [`Condition`] is a closed set of status effects. Each maps to one
//! fixed-shape [`ConditionEffects`] record through a [`ConditionTable`]; a
//! condition without an entry behaves as if every modifier were zero.
//!
//! Mutation of fighters goes through [`ConditionSystem`], which keeps the
//! temporary-bonus ledger of both fighters reversible.
mod system;

pub use system::{ConditionError, ConditionSystem, TickReport};

use std::collections::BTreeMap;

/// Status effect a fighter can carry.
///
/// Declaration order is the iteration order of a fighter's active conditions,
/// so modifiers always accumulate in the same sequence.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Condition {
    Healthy,
    Bruised,
    Disoriented,
    Prone,
    #[strum(to_string = "Critical Hit", serialize = "CriticalHit")]
    CriticalHit,
    Bleeding,
    Paralysed,
    Insulted,
}

impl Condition {
    /// Verb-like name used when narrating the moment a condition lands.
    pub const fn action_name(self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Bruised => "Bruise",
            Self::Disoriented => "Disorientation",
            Self::Prone => "Knockdown",
            Self::CriticalHit => "Critical hit",
            Self::Bleeding => "Bleed",
            Self::Paralysed => "Paralysis",
            Self::Insulted => "Insult",
        }
    }
}

/// One named effect dimension of a condition.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Modifier {
    HitChance,
    BlockChance,
    Damage,
    Complexity,
    Duration,
    SkipTurn,
    SureStrike,
    OpponentHitChance,
    OpponentBlockChance,
    #[strum(to_string = "HPPerTurn")]
    HpPerTurn,
    DamageMult,
}

/// Modifier record for one condition. Unset fields are zero.
///
/// `hit_chance`, `block_chance`, `damage` and `complexity` land on the holder;
/// the `opponent_*` deltas land on whoever inflicted the condition.
/// A `damage_mult` of zero means no multiplier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConditionEffects {
    pub hit_chance: i32,
    pub block_chance: i32,
    pub damage: i32,
    pub complexity: i32,
    pub opponent_hit_chance: i32,
    pub opponent_block_chance: i32,
    pub hp_per_turn: i32,
    pub duration: u32,
    pub skip_turn: bool,
    pub sure_strike: bool,
    pub damage_mult: u32,
}

impl ConditionEffects {
    pub const NONE: Self = Self {
        hit_chance: 0,
        block_chance: 0,
        damage: 0,
        complexity: 0,
        opponent_hit_chance: 0,
        opponent_block_chance: 0,
        hp_per_turn: 0,
        duration: 0,
        skip_turn: false,
        sure_strike: false,
        damage_mult: 0,
    };

    /// Keyed access with booleans reported as 0/1.
    pub fn get(&self, modifier: Modifier) -> i32 {
        match modifier {
            Modifier::HitChance => self.hit_chance,
            Modifier::BlockChance => self.block_chance,
            Modifier::Damage => self.damage,
            Modifier::Complexity => self.complexity,
            Modifier::Duration => saturate(self.duration),
            Modifier::SkipTurn => i32::from(self.skip_turn),
            Modifier::SureStrike => i32::from(self.sure_strike),
            Modifier::OpponentHitChance => self.opponent_hit_chance,
            Modifier::OpponentBlockChance => self.opponent_block_chance,
            Modifier::HpPerTurn => self.hp_per_turn,
            Modifier::DamageMult => saturate(self.damage_mult),
        }
    }

    /// True if a condition with these effects is tracked once applied.
    pub const fn is_tracked(&self) -> bool {
        self.duration >= 1
    }
}

fn saturate(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Lookup table from condition to its effects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ConditionTable {
    entries: BTreeMap<Condition, ConditionEffects>,
}

impl ConditionTable {
    /// Table with no entries: every condition is inert.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Effects of `condition`, or [`ConditionEffects::NONE`] when unlisted.
    pub fn get(&self, condition: Condition) -> ConditionEffects {
        self.entries
            .get(&condition)
            .copied()
            .unwrap_or(ConditionEffects::NONE)
    }

    /// Replace the entry for `condition`.
    pub fn set(&mut self, condition: Condition, effects: ConditionEffects) {
        self.entries.insert(condition, effects);
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, condition: Condition, effects: ConditionEffects) -> Self {
        self.set(condition, effects);
        self
    }

    /// Overlay every entry of `overrides` onto this table.
    pub fn merge(&mut self, overrides: &ConditionTable) {
        for (condition, effects) in &overrides.entries {
            self.entries.insert(*condition, *effects);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Condition, &ConditionEffects)> {
        self.entries.iter().map(|(c, e)| (*c, e))
    }
}

impl Default for ConditionTable {
    fn default() -> Self {
        let none = ConditionEffects::NONE;
        Self::empty()
            .with(Condition::Healthy, none)
            .with(
                Condition::Bruised,
                ConditionEffects {
                    hit_chance: -20,
                    block_chance: -20,
                    duration: 3,
                    ..none
                },
            )
            .with(
                Condition::Disoriented,
                ConditionEffects {
                    damage: -20,
                    complexity: 20,
                    duration: 3,
                    ..none
                },
            )
            .with(
                Condition::Prone,
                ConditionEffects {
                    skip_turn: true,
                    duration: 1,
                    ..none
                },
            )
            .with(
                Condition::CriticalHit,
                ConditionEffects {
                    damage_mult: 5,
                    duration: 1,
                    ..none
                },
            )
            .with(
                Condition::Bleeding,
                ConditionEffects {
                    hp_per_turn: -20,
                    duration: 3,
                    ..none
                },
            )
            .with(
                Condition::Paralysed,
                ConditionEffects {
                    sure_strike: true,
                    skip_turn: true,
                    duration: 2,
                    ..none
                },
            )
            .with(
                Condition::Insulted,
                ConditionEffects {
                    opponent_hit_chance: 20,
                    opponent_block_chance: 20,
                    duration: 3,
                    ..none
                },
            )
    }
}

/// Result of [`ConditionSystem::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ApplyOutcome {
    /// Newly added; bonus deltas applied.
    Applied,
    /// Already held; only the remaining duration was reset.
    Refreshed,
    /// Configured duration below one turn; nothing changed.
    Ignored,
}

impl ApplyOutcome {
    pub const fn changed(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}
