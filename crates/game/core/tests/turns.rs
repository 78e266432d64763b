use fight_core::{
    Attack, AttackType, Balances, Bonuses, CombatConfig, CombatEnv, Condition, Corner, Fighter,
    MatchResult, MatchState, Pair, PcgRolls, Physique, RandomCatalogSelector, ScriptedRolls,
    ScriptedSelector, StaticCatalog, TurnEngine, TurnPhase,
};

fn fighter(name: &str) -> Fighter {
    Fighter::new(
        name,
        Physique::new(180, 90, 39),
        Balances::NEUTRAL,
        Bonuses::ZERO,
        250,
    )
}

fn catalog() -> StaticCatalog {
    StaticCatalog::from_attacks([
        Attack::new("Jab", AttackType::Punch, 15, 14, 80, 87, 15),
        Attack::new("Front Kick", AttackType::Kick, 25, 30, 70, 50, 10),
        Attack::new("Hip Throw", AttackType::Throw, 30, 45, 60, 40, 20),
    ])
    .expect("unique names")
}

#[test]
fn prone_attacker_skips_then_recovers() {
    let config = CombatConfig::default();
    let catalog = catalog();
    let env = CombatEnv::new(&config, &catalog);

    let mut a = fighter("A");
    let mut b = fighter("B");
    env.conditions().apply(&mut a, &mut b, Condition::Prone);
    let temp_before = (a.temp(), b.temp());
    let mut state = MatchState::new(a, b);

    let mut selector = ScriptedSelector::new(["Jab"]);
    let mut rng = ScriptedRolls::new(vec![50.0, 10.0, 95.0, 99.0]);
    let mut engine = TurnEngine::new(&mut state);

    let report = engine.run_turn(&env, &mut selector, &mut rng).unwrap();

    assert!(report.skipped);
    assert!(report.outcome.is_none());
    assert_eq!(
        report.phases,
        [
            TurnPhase::RoundStart,
            TurnPhase::PreTurn,
            TurnPhase::Skip,
            TurnPhase::PostTurn,
            TurnPhase::WinCheck,
        ]
    );
    assert_eq!(report.tick.expired, vec![Condition::Prone]);
    assert_eq!(rng.drawn(), 0);

    let state = engine.state();
    assert!(!state.fighter(Corner::A).has_condition(Condition::Prone));
    assert_eq!(
        (state.fighter(Corner::A).temp(), state.fighter(Corner::B).temp()),
        temp_before
    );
    assert_eq!(state.fighter(Corner::B).health(), 250);
    assert_eq!(state.turn, 2);
}

#[test]
fn roles_alternate_starting_with_a() {
    let config = CombatConfig::default();
    let catalog = catalog();
    let env = CombatEnv::new(&config, &catalog);
    let mut state = MatchState::new(fighter("A"), fighter("B"));
    let mut selector = ScriptedSelector::new(["Jab"]);
    // Every attack fails to execute, so no conditions interrupt the rhythm.
    let mut rng = ScriptedRolls::new(vec![0.0]);
    let mut engine = TurnEngine::new(&mut state);

    for turn in 1..=10u32 {
        let report = engine.run_turn(&env, &mut selector, &mut rng).unwrap();
        let expected = if turn % 2 == 1 { Corner::A } else { Corner::B };
        assert_eq!(report.turn, turn);
        assert_eq!(report.attacker, expected);
        assert_eq!(report.defender, expected.other());
        assert!(!report.skipped);
    }
}

#[test]
fn skipped_turn_still_counts_for_alternation() {
    let config = CombatConfig::default();
    let catalog = catalog();
    let env = CombatEnv::new(&config, &catalog);
    let mut b = fighter("B");
    let mut a = fighter("A");
    env.conditions().apply(&mut b, &mut a, Condition::Paralysed);
    let mut state = MatchState::new(a, b);
    let mut selector = ScriptedSelector::new(["Jab"]);
    let mut rng = ScriptedRolls::new(vec![50.0, 99.0, 0.0, 99.0]);
    let mut engine = TurnEngine::new(&mut state);

    // Turn 1: A strikes a paralysed B, sure strike ignores the bad rolls.
    let first = engine.run_turn(&env, &mut selector, &mut rng).unwrap();
    let outcome = first.outcome.expect("A attacks");
    assert!(outcome.sure_strike);
    assert_eq!(outcome.damage_dealt, 15);

    // Turn 2: B is paralysed and forfeits.
    let second = engine.run_turn(&env, &mut selector, &mut rng).unwrap();
    assert_eq!(second.attacker, Corner::B);
    assert!(second.skipped);

    // Turn 3: back to A.
    let third = engine.run_turn(&env, &mut selector, &mut rng).unwrap();
    assert_eq!(third.attacker, Corner::A);
}

#[test]
fn seeded_match_runs_to_a_result() {
    let config = CombatConfig::default();
    let catalog = catalog();
    let env = CombatEnv::new(&config, &catalog);

    let play = |seed: u64| {
        let mut state = MatchState::new(fighter("A"), fighter("B"));
        let mut selectors = Pair::new(RandomCatalogSelector, RandomCatalogSelector);
        let mut rng = PcgRolls::new(seed);
        let reports = TurnEngine::new(&mut state)
            .run_to_end(&env, &mut selectors, &mut rng, 10_000)
            .expect("match finishes");
        (state, reports.len())
    };

    let (state, turns) = play(1234);
    assert!(state.is_over());
    assert!(turns > 0);
    match state.result {
        Some(MatchResult::Winner(winner)) => {
            assert!(!state.fighter(winner).is_defeated());
            assert!(state.fighter(winner.other()).is_defeated());
        }
        Some(MatchResult::Draw) => {
            assert!(state.fighters.a.is_defeated() && state.fighters.b.is_defeated());
        }
        None => unreachable!("run_to_end returned without a result"),
    }

    assert_eq!(play(1234), (state, turns));
}
