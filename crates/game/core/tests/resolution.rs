use fight_core::{
    Attack, AttackType, Balances, Bonuses, CombatConfig, Fighter, Physique, ScriptedRolls,
    resolve_attack,
};

fn fighter(name: &str, bonuses: Bonuses) -> Fighter {
    Fighter::new(
        name,
        Physique::new(180, 90, 39),
        Balances::NEUTRAL,
        bonuses,
        250,
    )
}

fn scenario_attack() -> Attack {
    Attack::new("Jab", AttackType::Punch, 15, 14, 80, 87, 15)
}

#[test]
fn plain_hit_deals_base_damage() {
    let config = CombatConfig::default();
    let mut attacker = fighter("A", Bonuses::ZERO);
    let mut defender = fighter("B", Bonuses::ZERO);
    let mut rng = ScriptedRolls::new(vec![50.0, 10.0, 95.0, 99.0]);

    let outcome = resolve_attack(
        &mut attacker,
        &mut defender,
        &scenario_attack(),
        &config,
        &mut rng,
    );

    assert!(outcome.executed);
    assert!(outcome.hit);
    assert!(!outcome.blocked);
    assert!(!outcome.special_triggered);
    assert_eq!(outcome.condition_applied, None);
    assert_eq!(outcome.damage_dealt, 15);
    assert_eq!(defender.health(), 235);
    assert_eq!(attacker.health(), 250);
    assert_eq!(outcome.rolls, [50.0, 10.0, 95.0, 99.0]);
}

#[test]
fn roll_equal_to_complexity_does_not_execute() {
    let config = CombatConfig::default();
    let mut attacker = fighter("A", Bonuses::ZERO);
    let mut defender = fighter("B", Bonuses::ZERO);
    let mut rng = ScriptedRolls::new(vec![14.0, 10.0, 95.0, 99.0]);

    let outcome = resolve_attack(
        &mut attacker,
        &mut defender,
        &scenario_attack(),
        &config,
        &mut rng,
    );

    assert!(!outcome.executed);
    assert!(!outcome.hit);
    assert_eq!(outcome.damage_dealt, 0);
    assert_eq!(defender.health(), 250);
}

#[test]
fn roll_equal_to_hit_chance_misses() {
    let config = CombatConfig::default();
    let mut attacker = fighter("A", Bonuses::ZERO);
    let mut defender = fighter("B", Bonuses::ZERO);
    let mut rng = ScriptedRolls::new(vec![50.0, 80.0, 95.0, 1.0]);

    let outcome = resolve_attack(
        &mut attacker,
        &mut defender,
        &scenario_attack(),
        &config,
        &mut rng,
    );

    assert!(outcome.executed);
    assert!(!outcome.hit);
    assert!(!outcome.special_triggered);
    assert_eq!(defender.health(), 250);
}

#[test]
fn damage_above_maximum_is_clamped() {
    let config = CombatConfig::default();
    let mut attacker = fighter(
        "A",
        Bonuses {
            damage: 5000.0,
            ..Bonuses::ZERO
        },
    );
    let mut defender = fighter("B", Bonuses::ZERO);
    let mut rng = ScriptedRolls::new(vec![50.0, 10.0, 95.0, 99.0]);

    let outcome = resolve_attack(
        &mut attacker,
        &mut defender,
        &scenario_attack(),
        &config,
        &mut rng,
    );

    assert_eq!(outcome.effective.damage, 300.0);
    assert_eq!(outcome.damage_dealt, 300);
    assert_eq!(defender.health(), 250 - 300);
}

#[test]
fn same_rolls_give_same_outcome() {
    let config = CombatConfig::default();
    let bonuses = Bonuses {
        damage: 12.5,
        complexity: -4.0,
        hit_chance: 6.0,
        block_chance: -3.0,
        special_chance: 9.0,
    };

    let run = || {
        let mut attacker = fighter("A", bonuses);
        let mut defender = fighter("B", bonuses);
        let mut rng = ScriptedRolls::new(vec![33.0, 41.0, 90.0, 7.0]);
        let outcome = resolve_attack(
            &mut attacker,
            &mut defender,
            &scenario_attack(),
            &config,
            &mut rng,
        );
        (outcome, attacker, defender)
    };

    assert_eq!(run(), run());
}
