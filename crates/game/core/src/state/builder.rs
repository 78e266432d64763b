//! Turning a validated profile into a ready-to-fight [`Fighter`].

use crate::config::CombatConfig;
use crate::env::RollSource;
use crate::error::{ErrorSeverity, FightError};
use crate::stats::{
    Balances, PhysicalOffsets, Range, apply_influence, derive_bonuses, normalize,
};

use super::fighter::{Fighter, Physique};

/// Five-option balance selectors, each in `[-2, +2]`.
///
/// Negative values lean towards the first named trait, positive towards the
/// second, zero is neutral.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BalanceSelectors {
    pub agility_strength: i8,
    pub burst_endurance: i8,
    pub defense_offense: i8,
    pub speed_control: i8,
    pub intelligence_instinct: i8,
}

impl BalanceSelectors {
    pub const MIN: i8 = -2;
    pub const MAX: i8 = 2;

    fn named(&self) -> [(&'static str, i8); 5] {
        [
            ("agility_strength", self.agility_strength),
            ("burst_endurance", self.burst_endurance),
            ("defense_offense", self.defense_offense),
            ("speed_control", self.speed_control),
            ("intelligence_instinct", self.intelligence_instinct),
        ]
    }

    pub fn to_balances(&self) -> Balances {
        Balances {
            agility_strength: f32::from(self.agility_strength),
            burst_endurance: f32::from(self.burst_endurance),
            defense_offense: f32::from(self.defense_offense),
            speed_control: f32::from(self.speed_control),
            intelligence_instinct: f32::from(self.intelligence_instinct),
        }
    }
}

/// Everything needed to create a fighter, before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterProfile {
    pub name: String,
    pub physique: Physique,
    pub selectors: BalanceSelectors,
}

/// A profile rejected at the creation boundary.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("fighter name must not be empty")]
    EmptyName,

    #[error("{attribute} {value} outside [{min}, {max}]")]
    OutOfBounds {
        attribute: &'static str,
        value: u32,
        min: f32,
        max: f32,
    },

    #[error("{balance} selector {value} outside [-2, 2]")]
    SelectorOutOfRange { balance: &'static str, value: i8 },
}

impl FightError for ProfileError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "PROFILE_EMPTY_NAME",
            Self::OutOfBounds { .. } => "PROFILE_OUT_OF_BOUNDS",
            Self::SelectorOutOfRange { .. } => "PROFILE_SELECTOR_OUT_OF_RANGE",
        }
    }
}

/// Builds fighters against one rule configuration.
#[derive(Clone, Copy, Debug)]
pub struct FighterBuilder<'a> {
    config: &'a CombatConfig,
}

impl<'a> FighterBuilder<'a> {
    pub fn new(config: &'a CombatConfig) -> Self {
        Self { config }
    }

    pub fn validate(&self, profile: &FighterProfile) -> Result<(), ProfileError> {
        if profile.name.trim().is_empty() {
            return Err(ProfileError::EmptyName);
        }

        let bounds = &self.config.physical;
        let physique = profile.physique;
        for (attribute, value, range) in [
            ("height", physique.height, bounds.height),
            ("weight", physique.weight, bounds.weight),
            ("age", physique.age, bounds.age),
        ] {
            if !range.contains(value as f32) {
                return Err(ProfileError::OutOfBounds {
                    attribute,
                    value,
                    min: range.min,
                    max: range.max,
                });
            }
        }

        for (balance, value) in profile.selectors.named() {
            if !(BalanceSelectors::MIN..=BalanceSelectors::MAX).contains(&value) {
                return Err(ProfileError::SelectorOutOfRange { balance, value });
            }
        }
        Ok(())
    }

    /// Physique mapped onto `[-1, +1]` against the configured bounds.
    pub fn offsets(&self, physique: Physique) -> PhysicalOffsets {
        let bounds = &self.config.physical;
        PhysicalOffsets {
            height: normalize(physique.height as f32, bounds.height),
            weight: normalize(physique.weight as f32, bounds.weight),
            age: normalize(physique.age as f32, bounds.age),
        }
    }

    /// Validate `profile` and produce a fighter at full health.
    pub fn build(&self, profile: &FighterProfile) -> Result<Fighter, ProfileError> {
        self.validate(profile)?;

        let selectors = profile.selectors.to_balances();
        let offsets = self.offsets(profile.physique);
        let weights = &self.config.derivation;

        let balances = apply_influence(&selectors, &offsets, &weights.influence);
        let bonuses = derive_bonuses(&selectors, &offsets, weights);
        let max_health = self.config.health.max_health(profile.physique.weight);

        tracing::debug!(
            name = %profile.name,
            damage = bonuses.damage,
            complexity = bonuses.complexity,
            hit = bonuses.hit_chance,
            block = bonuses.block_chance,
            special = bonuses.special_chance,
            max_health,
            "fighter built"
        );

        Ok(Fighter::new(
            profile.name.clone(),
            profile.physique,
            balances,
            bonuses,
            max_health,
        ))
    }
}

/// Random profile inside the configured bounds, for a computer opponent.
pub fn random_profile(
    name: impl Into<String>,
    rng: &mut dyn RollSource,
    config: &CombatConfig,
) -> FighterProfile {
    let bounds = &config.physical;
    let physique = Physique {
        height: uniform_in(rng, bounds.height),
        weight: uniform_in(rng, bounds.weight),
        age: uniform_in(rng, bounds.age),
    };

    let mut selector = || {
        let choices = (BalanceSelectors::MAX - BalanceSelectors::MIN + 1) as usize;
        BalanceSelectors::MIN + rng.pick(choices) as i8
    };
    let selectors = BalanceSelectors {
        agility_strength: selector(),
        burst_endurance: selector(),
        defense_offense: selector(),
        speed_control: selector(),
        intelligence_instinct: selector(),
    };

    FighterProfile {
        name: name.into(),
        physique,
        selectors,
    }
}

/// Uniform whole number inside `range`.
fn uniform_in(rng: &mut dyn RollSource, range: Range) -> u32 {
    let lo = range.min.min(range.max).max(0.0).ceil() as u32;
    let hi = range.max.max(range.min).max(0.0).floor() as u32;
    if hi <= lo {
        return lo;
    }
    lo + rng.pick((hi - lo + 1) as usize) as u32
}
