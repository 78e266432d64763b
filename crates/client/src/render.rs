//! Plain-text presentation of fighters and turns.

use fight_core::{Fighter, MatchResult, MatchState, TurnReport};

const BAR_WIDTH: usize = 20;

/// Multi-line profile card shown before the match.
pub fn fighter_card(fighter: &Fighter, loadout: &[String]) -> String {
    let physique = fighter.physique();
    let bonuses = fighter.bonuses();

    let mut lines = vec![
        format!("== {} ==", fighter.name()),
        format!(
            "  {} cm, {} kg, {} years",
            physique.height, physique.weight, physique.age
        ),
        format!("  Health  {}/{}", fighter.health(), fighter.max_health()),
        format!(
            "  Bonuses damage {:+.1}  complexity {:+.1}  hit {:+.1}  block {:+.1}  special {:+.1}",
            bonuses.damage,
            bonuses.complexity,
            bonuses.hit_chance,
            bonuses.block_chance,
            bonuses.special_chance
        ),
    ];
    if !loadout.is_empty() {
        lines.push(format!("  Attacks {}", loadout.join(", ")));
    }
    lines.push(String::new());
    lines.join("\n")
}

/// Health bar with the fighter's active conditions.
pub fn status_line(fighter: &Fighter) -> String {
    let max = fighter.max_health().max(1);
    let health = fighter.health().clamp(0, max);
    let filled = (health as usize * BAR_WIDTH).div_ceil(max as usize);

    let mut line = format!(
        "{:<12} [{}{}] {:>4}/{}",
        fighter.name(),
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        fighter.health(),
        fighter.max_health()
    );
    let conditions: Vec<String> = fighter
        .conditions()
        .iter()
        .map(|(condition, remaining)| format!("{condition} ({remaining})"))
        .collect();
    if !conditions.is_empty() {
        line.push_str("  ");
        line.push_str(&conditions.join(", "));
    }
    line
}

/// One turn: the summary followed by both status lines.
pub fn turn(report: &TurnReport, state: &MatchState) -> String {
    let mut text = format!("{}\n", report.summary);
    for (_, fighter) in state.fighters.iter() {
        text.push_str(&format!("  {}\n", status_line(fighter)));
    }
    text
}

pub fn result(state: &MatchState) -> String {
    match state.result {
        Some(MatchResult::Winner(corner)) => format!(
            "{} wins after {} turns.",
            state.fighter(corner).name(),
            state.turn
        ),
        Some(MatchResult::Draw) => format!("Draw after {} turns.", state.turn),
        None => format!("No result after {} turns.", state.turn),
    }
}
