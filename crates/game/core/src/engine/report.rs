//! What one turn did, in structured and plain-text form.

use crate::combat::Outcome;
use crate::conditions::TickReport;
use crate::state::{Corner, MatchState};

use super::MatchResult;

/// Phases of a single turn, in the order they can be visited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TurnPhase {
    RoundStart,
    PreTurn,
    Skip,
    Attack,
    PostTurn,
    WinCheck,
    End,
}

/// Record of one executed turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub turn: u32,
    pub attacker: Corner,
    pub defender: Corner,
    /// Phases visited, in order.
    pub phases: Vec<TurnPhase>,
    /// The attacker forfeited the turn because of a condition.
    pub skipped: bool,
    /// `None` when the turn was skipped.
    pub outcome: Option<Outcome>,
    /// End-of-turn decay of the attacker's conditions.
    pub tick: TickReport,
    /// Set on the turn that ends the match.
    pub result: Option<MatchResult>,
    /// Plain-text description for narration and logs.
    pub summary: String,
}

/// Describe a finished turn against the state it left behind.
pub(crate) fn summarize(report: &TurnReport, state: &MatchState) -> String {
    let attacker = state.fighter(report.attacker);
    let defender = state.fighter(report.defender);
    let mut sentences = vec![format!(
        "Turn {}: {} attacks {}.",
        report.turn,
        attacker.name(),
        defender.name()
    )];

    match &report.outcome {
        None => {
            let holding: Vec<String> = attacker
                .conditions()
                .iter()
                .map(|(condition, _)| condition.to_string())
                .chain(report.tick.expired.iter().map(ToString::to_string))
                .collect();
            if !holding.is_empty() {
                sentences.push(format!("{} is {}.", attacker.name(), holding.join(", ")));
            }
            sentences.push(format!("{} cannot attack.", attacker.name()));
        }
        Some(outcome) => {
            sentences.push(format!(
                "{} tries {} ({}).",
                attacker.name(),
                outcome.attack,
                outcome.kind
            ));
            if !outcome.executed {
                sentences.push(format!("{} fails to execute it.", attacker.name()));
            } else if !outcome.hit {
                sentences.push(format!("{} misses.", attacker.name()));
            } else if outcome.blocked {
                sentences.push(format!("{} blocks it.", defender.name()));
            } else {
                sentences.push(format!(
                    "{} takes {} damage ({}/{}).",
                    defender.name(),
                    outcome.damage_dealt,
                    defender.health(),
                    defender.max_health()
                ));
                if let Some(condition) = outcome.condition_applied {
                    sentences.push(format!(
                        "{}! {} is {}.",
                        condition.action_name(),
                        defender.name(),
                        condition
                    ));
                }
            }
        }
    }

    if report.tick.health_delta < 0 {
        sentences.push(format!(
            "{} loses {} health to conditions.",
            attacker.name(),
            -report.tick.health_delta
        ));
    }
    sentences.extend(
        report
            .tick
            .expired
            .iter()
            .map(|condition| format!("{} is not {} anymore.", attacker.name(), condition)),
    );

    if defender.is_defeated() {
        sentences.push(format!("{} is knocked out.", defender.name()));
    }
    if attacker.is_defeated() {
        sentences.push(format!("{} lost consciousness.", attacker.name()));
    }
    match report.result {
        Some(MatchResult::Winner(corner)) => {
            sentences.push(format!("{} wins!", state.fighter(corner).name()));
        }
        Some(MatchResult::Draw) => sentences.push("The match is a draw.".to_owned()),
        None => {}
    }

    sentences.join(" ")
}
