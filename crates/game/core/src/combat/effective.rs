//! Effective attack numbers.

use crate::attack::Attack;
use crate::config::AttackRanges;
use crate::state::Fighter;

/// Attack numbers after bonuses and clamping.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectiveAttack {
    pub damage: f32,
    pub complexity: f32,
    pub hit_chance: f32,
    pub block_chance: f32,
    pub special_chance: f32,
}

impl EffectiveAttack {
    /// Combine `attack` with the attacker's bonuses (block uses the
    /// defender's) and clamp each field into its range.
    ///
    /// # Formula
    ///
    /// ```text
    /// damage = base × (1 + (perm + temp) / 100)
    /// other  = base + perm + temp
    /// ```
    pub fn compute(
        attack: &Attack,
        attacker: &Fighter,
        defender: &Fighter,
        ranges: &AttackRanges,
    ) -> Self {
        let perm = attacker.bonuses();
        let temp = attacker.temp();
        let guard_perm = defender.bonuses();
        let guard_temp = defender.temp();

        let damage_bonus = perm.damage + temp.damage as f32;
        let damage = attack.damage as f32 * (1.0 + damage_bonus / 100.0);

        Self {
            damage: ranges.damage.clamp(damage),
            complexity: ranges.complexity.clamp(
                attack.complexity as f32 + perm.complexity + temp.complexity as f32,
            ),
            hit_chance: ranges
                .hit_chance
                .clamp(attack.hit_chance as f32 + perm.hit_chance + temp.hit_chance as f32),
            block_chance: ranges.block_chance.clamp(
                attack.block_chance as f32 + guard_perm.block_chance + guard_temp.block_chance as f32,
            ),
            special_chance: ranges.special_chance.clamp(
                attack.special_chance as f32 + perm.special_chance + temp.special_chance as f32,
            ),
        }
    }
}
