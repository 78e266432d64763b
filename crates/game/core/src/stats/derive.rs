//! Bonus derivation from balance sliders and physique.
//!
//! Derivation is two linear steps, both driven by configuration:
//!
//! ```text
//! effective balance = selector + Σ influence × physical offset
//! bonus             = scale × Σ weight × effective balance
//! ```
//!
//! [`derive_bonuses`] is pure and does not clamp: callers supply selectors in
//! `[-2, +2]` and physical offsets already normalized into `[-1, +1]`.

use super::bonuses::Bonuses;

/// The five balance sliders of a fighter.
///
/// Each is a signed offset from a neutral midpoint. Negative favours the first
/// named trait (agility, burst, defense, speed, intelligence), positive the
/// second (strength, endurance, offense, control, instinct).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Balances {
    pub agility_strength: f32,
    pub burst_endurance: f32,
    pub defense_offense: f32,
    pub speed_control: f32,
    pub intelligence_instinct: f32,
}

impl Balances {
    pub const NEUTRAL: Self = Self {
        agility_strength: 0.0,
        burst_endurance: 0.0,
        defense_offense: 0.0,
        speed_control: 0.0,
        intelligence_instinct: 0.0,
    };
}

/// Height, weight and age mapped onto `[-1, +1]` against configured bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalOffsets {
    pub height: f32,
    pub weight: f32,
    pub age: f32,
}

/// How strongly each physical offset shifts one balance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhysicalInfluence {
    pub height: f32,
    pub weight: f32,
    pub age: f32,
}

impl PhysicalInfluence {
    pub const fn new(height: f32, weight: f32, age: f32) -> Self {
        Self {
            height,
            weight,
            age,
        }
    }

    fn shift(&self, offsets: &PhysicalOffsets) -> f32 {
        self.height * offsets.height + self.weight * offsets.weight + self.age * offsets.age
    }
}

/// Physical influence rows, one per balance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BalanceInfluence {
    pub agility_strength: PhysicalInfluence,
    pub burst_endurance: PhysicalInfluence,
    pub defense_offense: PhysicalInfluence,
    pub speed_control: PhysicalInfluence,
    pub intelligence_instinct: PhysicalInfluence,
}

/// Weight of each balance in one bonus formula.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BalanceWeights {
    pub agility_strength: f32,
    pub burst_endurance: f32,
    pub defense_offense: f32,
    pub speed_control: f32,
    pub intelligence_instinct: f32,
}

impl BalanceWeights {
    pub const fn new(
        agility_strength: f32,
        burst_endurance: f32,
        defense_offense: f32,
        speed_control: f32,
        intelligence_instinct: f32,
    ) -> Self {
        Self {
            agility_strength,
            burst_endurance,
            defense_offense,
            speed_control,
            intelligence_instinct,
        }
    }

    fn dot(&self, balances: &Balances) -> f32 {
        self.agility_strength * balances.agility_strength
            + self.burst_endurance * balances.burst_endurance
            + self.defense_offense * balances.defense_offense
            + self.speed_control * balances.speed_control
            + self.intelligence_instinct * balances.intelligence_instinct
    }
}

/// A weighted sum of balances multiplied by `scale`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BonusFormula {
    pub weights: BalanceWeights,
    pub scale: f32,
}

impl BonusFormula {
    pub const fn new(weights: BalanceWeights, scale: f32) -> Self {
        Self { weights, scale }
    }

    pub fn evaluate(&self, balances: &Balances) -> f32 {
        self.weights.dot(balances) * self.scale
    }
}

/// Complete derivation configuration.
///
/// The default reproduces the classic tuning: heavier and taller fighters lean
/// towards strength, endurance, offense and control, older fighters towards
/// intelligence.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DerivationWeights {
    pub influence: BalanceInfluence,
    pub damage: BonusFormula,
    pub complexity: BonusFormula,
    pub hit_chance: BonusFormula,
    pub block_chance: BonusFormula,
    pub special_chance: BonusFormula,
}

impl Default for DerivationWeights {
    fn default() -> Self {
        Self {
            influence: BalanceInfluence {
                agility_strength: PhysicalInfluence::new(2.0, 2.0, 0.0),
                burst_endurance: PhysicalInfluence::new(0.0, 2.0, 0.0),
                defense_offense: PhysicalInfluence::new(2.0, 0.0, 0.0),
                speed_control: PhysicalInfluence::new(2.0, 2.0, 0.0),
                intelligence_instinct: PhysicalInfluence::new(0.0, 0.0, -2.1),
            },
            damage: BonusFormula::new(BalanceWeights::new(1.0, 1.0, 0.0, 0.0, 0.0), 10.0),
            complexity: BonusFormula::new(BalanceWeights::new(1.0, 0.0, 0.0, -1.0, 1.0), 5.0),
            hit_chance: BonusFormula::new(BalanceWeights::new(-1.0, -1.0, 1.0, -1.0, 1.0), 3.0),
            block_chance: BonusFormula::new(BalanceWeights::new(-1.0, 1.0, -1.0, -1.0, 1.0), 3.0),
            special_chance: BonusFormula::new(BalanceWeights::new(1.0, -1.0, 0.0, 0.0, 0.0), 10.0),
        }
    }
}

/// Shift selector balances by the physical offsets.
pub fn apply_influence(
    balances: &Balances,
    offsets: &PhysicalOffsets,
    influence: &BalanceInfluence,
) -> Balances {
    Balances {
        agility_strength: balances.agility_strength + influence.agility_strength.shift(offsets),
        burst_endurance: balances.burst_endurance + influence.burst_endurance.shift(offsets),
        defense_offense: balances.defense_offense + influence.defense_offense.shift(offsets),
        speed_control: balances.speed_control + influence.speed_control.shift(offsets),
        intelligence_instinct: balances.intelligence_instinct
            + influence.intelligence_instinct.shift(offsets),
    }
}

/// Derive permanent bonuses from balances and normalized physical offsets.
///
/// Pure: no side effects, no randomness, same inputs give the same output.
pub fn derive_bonuses(
    balances: &Balances,
    offsets: &PhysicalOffsets,
    weights: &DerivationWeights,
) -> Bonuses {
    let effective = apply_influence(balances, offsets, &weights.influence);

    Bonuses {
        damage: weights.damage.evaluate(&effective),
        complexity: weights.complexity.evaluate(&effective),
        hit_chance: weights.hit_chance.evaluate(&effective),
        block_chance: weights.block_chance.evaluate(&effective),
        special_chance: weights.special_chance.evaluate(&effective),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn neutral_fighter_has_no_bonuses() {
        let bonuses = derive_bonuses(
            &Balances::NEUTRAL,
            &PhysicalOffsets::default(),
            &DerivationWeights::default(),
        );
        assert_eq!(bonuses, Bonuses::ZERO);
    }

    #[test]
    fn strength_leaning_fighter_hits_harder() {
        let balances = Balances {
            agility_strength: 2.0,
            ..Balances::NEUTRAL
        };
        let bonuses = derive_bonuses(
            &balances,
            &PhysicalOffsets::default(),
            &DerivationWeights::default(),
        );

        assert!(approx(bonuses.damage, 20.0));
        assert!(approx(bonuses.complexity, 10.0));
        assert!(approx(bonuses.hit_chance, -6.0));
        assert!(approx(bonuses.block_chance, -6.0));
        assert!(approx(bonuses.special_chance, 20.0));
    }

    #[test]
    fn physical_offsets_shift_balances() {
        // Heaviest possible fighter: weight offset +1 adds 2 to AS, BE and SC.
        let offsets = PhysicalOffsets {
            weight: 1.0,
            ..PhysicalOffsets::default()
        };
        let weights = DerivationWeights::default();
        let effective = apply_influence(&Balances::NEUTRAL, &offsets, &weights.influence);

        assert!(approx(effective.agility_strength, 2.0));
        assert!(approx(effective.burst_endurance, 2.0));
        assert!(approx(effective.speed_control, 2.0));
        assert!(approx(effective.defense_offense, 0.0));

        let bonuses = derive_bonuses(&Balances::NEUTRAL, &offsets, &weights);
        assert!(approx(bonuses.damage, 40.0));
        assert!(approx(bonuses.special_chance, 0.0));
    }

    #[test]
    fn derivation_is_deterministic() {
        let balances = Balances {
            agility_strength: -1.0,
            burst_endurance: 2.0,
            defense_offense: 0.5,
            speed_control: -2.0,
            intelligence_instinct: 1.0,
        };
        let offsets = PhysicalOffsets {
            height: 0.25,
            weight: -0.5,
            age: 0.75,
        };
        let weights = DerivationWeights::default();

        let first = derive_bonuses(&balances, &offsets, &weights);
        for _ in 0..10 {
            assert_eq!(derive_bonuses(&balances, &offsets, &weights), first);
        }
    }
}
