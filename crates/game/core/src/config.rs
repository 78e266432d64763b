//! Combat configuration: clamp ranges, physical bounds, health rules and
//! derivation weights.
//!
//! Every numeric constant of the rules lives here so tuning never touches
//! mechanism. [`CombatConfig::default`] reproduces the classic values.

use crate::conditions::ConditionTable;
use crate::error::{ErrorSeverity, FightError};
use crate::stats::{DerivationWeights, Range};

/// Per-field clamp ranges applied to effective attack numbers.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttackRanges {
    pub damage: Range,
    pub complexity: Range,
    pub hit_chance: Range,
    pub block_chance: Range,
    pub special_chance: Range,
}

impl Default for AttackRanges {
    fn default() -> Self {
        Self {
            damage: Range::new(5.0, 300.0),
            complexity: Range::new(0.0, 95.0),
            hit_chance: Range::new(1.0, 99.0),
            block_chance: Range::new(0.0, 95.0),
            special_chance: Range::new(5.0, 95.0),
        }
    }
}

/// Allowed height (cm), weight (kg) and age (years).
///
/// Also the normalization bounds for physical offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhysicalBounds {
    pub height: Range,
    pub weight: Range,
    pub age: Range,
}

impl Default for PhysicalBounds {
    fn default() -> Self {
        Self {
            height: Range::new(160.0, 200.0),
            weight: Range::new(60.0, 120.0),
            age: Range::new(18.0, 60.0),
        }
    }
}

/// Maximum health is `base + (weight - reference_weight)`, at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HealthRules {
    pub base: i32,
    pub reference_weight: i32,
}

impl HealthRules {
    pub fn max_health(&self, weight: u32) -> i32 {
        let weight = i32::try_from(weight).unwrap_or(i32::MAX);
        self.base
            .saturating_add(weight.saturating_sub(self.reference_weight))
            .max(1)
    }
}

impl Default for HealthRules {
    fn default() -> Self {
        Self {
            base: 250,
            reference_weight: 90,
        }
    }
}

/// Complete rule configuration for a match.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    pub ranges: AttackRanges,
    pub physical: PhysicalBounds,
    pub health: HealthRules,
    pub derivation: DerivationWeights,
    pub conditions: ConditionTable,
    /// Turn cap for [`crate::engine::TurnEngine::run_to_end`].
    pub max_turns: u32,
    /// Number of named attacks a fighter brings into a match.
    pub loadout_size: usize,
}

impl CombatConfig {
    pub const DEFAULT_MAX_TURNS: u32 = 500;
    pub const DEFAULT_LOADOUT_SIZE: usize = 3;

    /// Reject configurations the rules cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ranges = [
            ("ranges.damage", self.ranges.damage),
            ("ranges.complexity", self.ranges.complexity),
            ("ranges.hit_chance", self.ranges.hit_chance),
            ("ranges.block_chance", self.ranges.block_chance),
            ("ranges.special_chance", self.ranges.special_chance),
            ("physical.height", self.physical.height),
            ("physical.weight", self.physical.weight),
            ("physical.age", self.physical.age),
        ];
        for (field, range) in ranges {
            if !range.is_valid() {
                return Err(ConfigError::InvalidRange {
                    field,
                    min: range.min,
                    max: range.max,
                });
            }
        }

        if self.health.base < 1 {
            return Err(ConfigError::NonPositiveHealth(self.health.base));
        }
        if self.max_turns == 0 {
            return Err(ConfigError::ZeroTurnCap);
        }
        if self.loadout_size == 0 {
            return Err(ConfigError::EmptyLoadout);
        }
        Ok(())
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            ranges: AttackRanges::default(),
            physical: PhysicalBounds::default(),
            health: HealthRules::default(),
            derivation: DerivationWeights::default(),
            conditions: ConditionTable::default(),
            max_turns: Self::DEFAULT_MAX_TURNS,
            loadout_size: Self::DEFAULT_LOADOUT_SIZE,
        }
    }
}

/// Configuration rejected by [`CombatConfig::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field}: invalid range [{min}, {max}]")]
    InvalidRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    #[error("base health must be positive, got {0}")]
    NonPositiveHealth(i32),

    #[error("turn cap must be at least 1")]
    ZeroTurnCap,

    #[error("loadout size must be at least 1")]
    EmptyLoadout,
}

impl FightError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRange { .. } => "CONFIG_INVALID_RANGE",
            Self::NonPositiveHealth(_) => "CONFIG_NON_POSITIVE_HEALTH",
            Self::ZeroTurnCap => "CONFIG_ZERO_TURN_CAP",
            Self::EmptyLoadout => "CONFIG_EMPTY_LOADOUT",
        }
    }
}
