//! Apply, remove and decay conditions on a pair of fighters.
//!
//! Every delta a condition contributes is an integer added to the temporary
//! bonuses of the holder or the inflicter. Removal subtracts the exact same
//! values, so `apply` followed by `remove` restores both ledgers bit-for-bit
//! no matter what else is active.

use crate::error::{ErrorSeverity, FightError};
use crate::state::Fighter;

use super::{ApplyOutcome, Condition, ConditionEffects, ConditionTable};

/// Errors from condition bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConditionError {
    #[error("{fighter} does not carry {condition}")]
    NotActive {
        fighter: String,
        condition: Condition,
    },
}

impl FightError for ConditionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotActive { .. } => "CONDITION_NOT_ACTIVE",
        }
    }
}

/// What a [`ConditionSystem::tick`] did to the holder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    /// Sum of per-turn health changes applied to the holder.
    pub health_delta: i32,
    /// Conditions that ran out and were removed, in declaration order.
    pub expired: Vec<Condition>,
}

/// Condition operations against a configured modifier table.
#[derive(Clone, Copy, Debug)]
pub struct ConditionSystem<'a> {
    table: &'a ConditionTable,
}

impl<'a> ConditionSystem<'a> {
    pub fn new(table: &'a ConditionTable) -> Self {
        Self { table }
    }

    pub fn effects(&self, condition: Condition) -> ConditionEffects {
        self.table.get(condition)
    }

    /// Put `condition` on `holder`, inflicted by `inflicter`.
    ///
    /// A condition already held only has its duration reset. A condition
    /// configured to last less than one turn is never tracked.
    pub fn apply(
        &self,
        holder: &mut Fighter,
        inflicter: &mut Fighter,
        condition: Condition,
    ) -> ApplyOutcome {
        let effects = self.effects(condition);
        if !effects.is_tracked() {
            tracing::debug!(%condition, holder = holder.name(), "condition not tracked");
            return ApplyOutcome::Ignored;
        }

        if holder.has_condition(condition) {
            holder.conditions_mut().set(condition, effects.duration);
            tracing::debug!(
                %condition,
                holder = holder.name(),
                duration = effects.duration,
                "condition refreshed"
            );
            return ApplyOutcome::Refreshed;
        }

        shift(holder, inflicter, &effects, 1);
        holder.conditions_mut().set(condition, effects.duration);
        tracing::debug!(
            %condition,
            holder = holder.name(),
            inflicter = inflicter.name(),
            duration = effects.duration,
            "condition applied"
        );
        ApplyOutcome::Applied
    }

    /// Take `condition` off `holder`, reversing every delta `apply` added.
    pub fn remove(
        &self,
        holder: &mut Fighter,
        inflicter: &mut Fighter,
        condition: Condition,
    ) -> Result<(), ConditionError> {
        if holder.conditions_mut().remove(condition).is_none() {
            tracing::warn!(%condition, holder = holder.name(), "remove of inactive condition");
            return Err(ConditionError::NotActive {
                fighter: holder.name().to_owned(),
                condition,
            });
        }

        let effects = self.effects(condition);
        shift(holder, inflicter, &effects, -1);
        tracing::debug!(%condition, holder = holder.name(), "condition removed");
        Ok(())
    }

    /// Advance every condition on `holder` by one turn.
    ///
    /// In declaration order: apply the per-turn health change, decrement the
    /// remaining duration, and remove the condition once it drops below one.
    pub fn tick(&self, holder: &mut Fighter, inflicter: &mut Fighter) -> TickReport {
        let mut report = TickReport::default();

        for condition in holder.conditions().held() {
            let effects = self.effects(condition);
            if effects.hp_per_turn != 0 {
                holder.adjust_health(effects.hp_per_turn);
                report.health_delta = report.health_delta.saturating_add(effects.hp_per_turn);
            }

            let remaining = holder.conditions_mut().decrement(condition).unwrap_or(0);
            if remaining < 1 && self.remove(holder, inflicter, condition).is_ok() {
                report.expired.push(condition);
            }
        }

        report
    }

    /// True if any condition on `fighter` forfeits its turn.
    pub fn skips_turn(&self, fighter: &Fighter) -> bool {
        fighter
            .conditions()
            .iter()
            .any(|(condition, _)| self.effects(condition).skip_turn)
    }

    /// True if `defender` carries a condition that makes attacks against it
    /// hit and bypass blocking.
    pub fn grants_sure_strike(&self, defender: &Fighter) -> bool {
        defender
            .conditions()
            .iter()
            .any(|(condition, _)| self.effects(condition).sure_strike)
    }

    /// Product of every non-zero damage multiplier on `attacker`; 1 when none.
    pub fn damage_multiplier(&self, attacker: &Fighter) -> u32 {
        attacker
            .conditions()
            .iter()
            .map(|(condition, _)| self.effects(condition).damage_mult)
            .filter(|mult| *mult != 0)
            .fold(1u32, u32::saturating_mul)
    }
}

/// Add (`sign = 1`) or subtract (`sign = -1`) a condition's deltas.
fn shift(holder: &mut Fighter, inflicter: &mut Fighter, effects: &ConditionEffects, sign: i32) {
    let temp = holder.temp_mut();
    temp.hit_chance += sign * effects.hit_chance;
    temp.block_chance += sign * effects.block_chance;
    temp.damage += sign * effects.damage;
    temp.complexity += sign * effects.complexity;

    let temp = inflicter.temp_mut();
    temp.hit_chance += sign * effects.opponent_hit_chance;
    temp.block_chance += sign * effects.opponent_block_chance;
}
