//! Outcome of one attack and the pipeline that produces it.

use crate::attack::{Attack, AttackType};
use crate::conditions::{ApplyOutcome, Condition, ConditionSystem};
use crate::config::CombatConfig;
use crate::env::RollSource;
use crate::state::Fighter;

use super::effective::EffectiveAttack;
use super::gates::{evades_block, executes, lands_hit, triggers_special};

/// Everything that happened when one attack was resolved.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    pub attack: String,
    pub kind: AttackType,
    pub executed: bool,
    pub hit: bool,
    pub blocked: bool,
    /// The defender's conditions forced the hit and bypassed blocking.
    pub sure_strike: bool,
    pub damage_dealt: i32,
    pub special_triggered: bool,
    /// Condition put on (or refreshed on) the defender by the special.
    pub condition_applied: Option<Condition>,
    pub effective: EffectiveAttack,
    /// The four draws, in gate order.
    pub rolls: [f32; 4],
}

impl Outcome {
    /// Hit and not blocked.
    pub fn landed(&self) -> bool {
        self.hit && !self.blocked
    }
}

/// Resolve `attack` from `attacker` against `defender`.
///
/// Draws four rolls up front, walks the gates, applies the special condition
/// to the defender when it triggers and finally subtracts damage from the
/// defender's health (no floor).
pub fn resolve_attack(
    attacker: &mut Fighter,
    defender: &mut Fighter,
    attack: &Attack,
    config: &CombatConfig,
    rng: &mut dyn RollSource,
) -> Outcome {
    let rolls = [rng.roll(), rng.roll(), rng.roll(), rng.roll()];
    let [r1, r2, r3, r4] = rolls;

    let conditions = ConditionSystem::new(&config.conditions);
    let effective = EffectiveAttack::compute(attack, attacker, defender, &config.ranges);
    let sure_strike = conditions.grants_sure_strike(defender);

    let mut outcome = Outcome {
        attack: attack.name.clone(),
        kind: attack.kind,
        executed: false,
        hit: false,
        blocked: false,
        sure_strike,
        damage_dealt: 0,
        special_triggered: false,
        condition_applied: None,
        effective,
        rolls,
    };

    // 1. Complexity gate
    outcome.executed = executes(r1, effective.complexity);
    tracing::debug!(
        attack = %attack.name,
        roll = r1,
        complexity = effective.complexity,
        executed = outcome.executed,
        "complexity gate"
    );
    if !outcome.executed {
        return outcome;
    }

    // 2. Hit gate
    outcome.hit = lands_hit(r2, effective.hit_chance, sure_strike);
    tracing::debug!(
        roll = r2,
        hit_chance = effective.hit_chance,
        sure_strike,
        hit = outcome.hit,
        "hit gate"
    );
    if !outcome.hit {
        return outcome;
    }

    // 3. Block gate
    outcome.blocked = !evades_block(r3, effective.block_chance, sure_strike);
    tracing::debug!(
        roll = r3,
        block_chance = effective.block_chance,
        blocked = outcome.blocked,
        "block gate"
    );
    if outcome.blocked {
        return outcome;
    }

    // 4. Damage, multiplied by any attacker self-buff
    let mut damage = effective.damage;
    let multiplier = conditions.damage_multiplier(attacker);
    if multiplier > 1 {
        damage = config.ranges.damage.clamp(damage * multiplier as f32);
    }

    // 5. Special
    outcome.special_triggered = triggers_special(r4, effective.special_chance);
    tracing::debug!(
        roll = r4,
        special_chance = effective.special_chance,
        triggered = outcome.special_triggered,
        "special gate"
    );
    if outcome.special_triggered {
        if let Some(condition) = attack.kind.special() {
            if conditions.apply(defender, attacker, condition) != ApplyOutcome::Ignored {
                outcome.condition_applied = Some(condition);
            }
        }
    }

    // 6. Health
    outcome.damage_dealt = damage as i32;
    defender.adjust_health(-outcome.damage_dealt);
    tracing::debug!(
        defender = defender.name(),
        damage = outcome.damage_dealt,
        multiplier,
        health = defender.health(),
        "damage applied"
    );

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRolls;
    use crate::state::Physique;
    use crate::stats::{Balances, Bonuses};

    fn fighter(name: &str) -> Fighter {
        Fighter::new(
            name,
            Physique::new(180, 90, 39),
            Balances::NEUTRAL,
            Bonuses::ZERO,
            250,
        )
    }

    fn jab() -> Attack {
        Attack::new("Jab", AttackType::Punch, 15, 14, 80, 87, 15)
    }

    #[test]
    fn failed_execution_stops_but_still_draws_four() {
        let config = CombatConfig::default();
        let mut a = fighter("a");
        let mut b = fighter("b");
        let mut rng = ScriptedRolls::new(vec![14.0, 0.0, 99.0, 0.0]);

        let outcome = resolve_attack(&mut a, &mut b, &jab(), &config, &mut rng);

        assert!(!outcome.executed);
        assert!(!outcome.hit);
        assert_eq!(outcome.damage_dealt, 0);
        assert_eq!(b.health(), 250);
        assert_eq!(rng.drawn(), 4);
    }

    #[test]
    fn special_applies_type_condition_to_defender() {
        let config = CombatConfig::default();
        let mut a = fighter("a");
        let mut b = fighter("b");
        let mut rng = ScriptedRolls::new(vec![50.0, 10.0, 95.0, 1.0]);

        let outcome = resolve_attack(&mut a, &mut b, &jab(), &config, &mut rng);

        assert!(outcome.special_triggered);
        assert_eq!(outcome.condition_applied, Some(Condition::Bruised));
        assert!(b.has_condition(Condition::Bruised));
        assert_eq!(b.temp().hit_chance, -20);
        assert_eq!(b.health(), 235);
    }

    #[test]
    fn blocked_attack_deals_nothing() {
        let config = CombatConfig::default();
        let mut a = fighter("a");
        let mut b = fighter("b");
        let mut rng = ScriptedRolls::new(vec![50.0, 10.0, 87.0, 1.0]);

        let outcome = resolve_attack(&mut a, &mut b, &jab(), &config, &mut rng);

        assert!(outcome.hit);
        assert!(outcome.blocked);
        assert!(!outcome.special_triggered);
        assert_eq!(b.health(), 250);
    }

    #[test]
    fn sure_strike_ignores_hit_and_block_rolls() {
        let config = CombatConfig::default();
        let conditions = ConditionSystem::new(&config.conditions);
        let mut a = fighter("a");
        let mut b = fighter("b");
        conditions.apply(&mut b, &mut a, Condition::Paralysed);
        let mut rng = ScriptedRolls::new(vec![50.0, 99.0, 0.0, 99.0]);

        let outcome = resolve_attack(&mut a, &mut b, &jab(), &config, &mut rng);

        assert!(outcome.sure_strike);
        assert!(outcome.landed());
        assert_eq!(outcome.damage_dealt, 15);
    }

    #[test]
    fn critical_hit_multiplies_and_reclamps() {
        let config = CombatConfig::default();
        let conditions = ConditionSystem::new(&config.conditions);
        let mut a = fighter("a");
        let mut b = fighter("b");
        conditions.apply(&mut a, &mut b, Condition::CriticalHit);
        let mut rng = ScriptedRolls::new(vec![50.0, 10.0, 95.0, 99.0]);

        let outcome = resolve_attack(&mut a, &mut b, &jab(), &config, &mut rng);
        assert_eq!(outcome.damage_dealt, 75);

        let heavy = Attack::new("Haymaker", AttackType::Punch, 100, 14, 80, 87, 15);
        let outcome = resolve_attack(&mut a, &mut b, &heavy, &config, &mut rng);
        assert_eq!(outcome.damage_dealt, 300);
    }

    #[test]
    fn custom_attacks_never_inflict_conditions() {
        let config = CombatConfig::default();
        let mut a = fighter("a");
        let mut b = fighter("b");
        let flourish = Attack::new("Flourish", AttackType::Custom, 15, 14, 80, 87, 50);
        let mut rng = ScriptedRolls::new(vec![50.0, 10.0, 95.0, 1.0]);

        let outcome = resolve_attack(&mut a, &mut b, &flourish, &config, &mut rng);

        assert!(outcome.special_triggered);
        assert_eq!(outcome.condition_applied, None);
        assert!(b.conditions().is_empty());
    }
}
