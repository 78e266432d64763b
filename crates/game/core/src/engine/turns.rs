use crate::combat::resolve_attack;
use crate::env::{CombatEnv, RollSource};
use crate::state::Corner;

use super::report::summarize;
use super::{AttackSelector, MatchResult, TurnEngine, TurnError, TurnPhase, TurnReport};

/// Turn execution for TurnEngine.
impl<'a> TurnEngine<'a> {
    /// Run the current turn to completion.
    ///
    /// Odd turns belong to corner A, even turns to corner B. A skipped turn
    /// still decays the attacker's conditions. Rejected once the match has a
    /// result.
    pub fn run_turn(
        &mut self,
        env: &CombatEnv<'_>,
        selector: &mut dyn AttackSelector,
        rng: &mut dyn RollSource,
    ) -> Result<TurnReport, TurnError> {
        if let Some(result) = self.state.result {
            tracing::warn!(%result, "turn requested after match end");
            return Err(TurnError::MatchOver(result));
        }

        let turn = self.state.turn;
        let attacker = Corner::for_turn(turn);
        let defender = attacker.other();
        let conditions = env.conditions();
        let mut phases = vec![TurnPhase::RoundStart, TurnPhase::PreTurn];

        let skipped = conditions.skips_turn(&self.state.fighters[attacker]);
        let outcome = if skipped {
            phases.push(TurnPhase::Skip);
            tracing::debug!(turn, %attacker, "attacker skips turn");
            None
        } else {
            phases.push(TurnPhase::Attack);
            let attack = selector.select(attacker, &self.state.fighters[attacker], env, rng)?;
            let (striker, target) = self.state.fighters.split_mut(attacker);
            Some(resolve_attack(striker, target, &attack, env.config(), rng))
        };

        phases.push(TurnPhase::PostTurn);
        let (holder, other) = self.state.fighters.split_mut(attacker);
        let tick = conditions.tick(holder, other);

        phases.push(TurnPhase::WinCheck);
        let result = self.check_result();
        match result {
            Some(result) => {
                phases.push(TurnPhase::End);
                self.state.result = Some(result);
                tracing::info!(turn, %result, "match over");
            }
            None => self.state.turn += 1,
        }

        let mut report = TurnReport {
            turn,
            attacker,
            defender,
            phases,
            skipped,
            outcome,
            tick,
            result,
            summary: String::new(),
        };
        report.summary = summarize(&report, self.state);
        tracing::info!(turn, summary = %report.summary, "turn resolved");

        Ok(report)
    }

    /// Run turns until the match ends or `max_turns` turns have been played
    /// in total. Returns every report produced by this call.
    pub fn run_to_end(
        &mut self,
        env: &CombatEnv<'_>,
        selector: &mut dyn AttackSelector,
        rng: &mut dyn RollSource,
        max_turns: u32,
    ) -> Result<Vec<TurnReport>, TurnError> {
        let mut reports = Vec::new();
        while self.state.result.is_none() {
            if self.state.turn > max_turns {
                tracing::warn!(limit = max_turns, "turn limit reached");
                return Err(TurnError::TurnLimit { limit: max_turns });
            }
            reports.push(self.run_turn(env, selector, rng)?);
        }
        Ok(reports)
    }

    /// Health at or below zero is defeated; both defeated is a draw.
    fn check_result(&self) -> Option<MatchResult> {
        let fighters = &self.state.fighters;
        match (fighters.a.is_defeated(), fighters.b.is_defeated()) {
            (true, true) => Some(MatchResult::Draw),
            (true, false) => Some(MatchResult::Winner(Corner::B)),
            (false, true) => Some(MatchResult::Winner(Corner::A)),
            (false, false) => None,
        }
    }
}
