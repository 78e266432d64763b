//! Deterministic combat rules for two-fighter matches.
//!
//! `fight-core` defines the canonical rules (stat derivation, status
//! conditions, attack resolution, turn orchestration) and exposes pure APIs
//! that the content loaders and the CLI client build on. All match state
//! mutation flows through [`engine::TurnEngine`]; randomness is always an
//! injected [`env::RollSource`].
pub mod attack;
pub mod combat;
pub mod conditions;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;

pub use attack::{Attack, AttackCatalog, AttackType, CatalogError, StaticCatalog};
pub use combat::{EffectiveAttack, Outcome, resolve_attack};
pub use conditions::{
    ApplyOutcome, Condition, ConditionEffects, ConditionError, ConditionSystem, ConditionTable,
    Modifier, TickReport,
};
pub use config::{AttackRanges, CombatConfig, ConfigError, HealthRules, PhysicalBounds};
pub use engine::{
    AttackSelector, LoadoutSelector, MatchResult, RandomCatalogSelector, ScriptedSelector,
    TurnEngine, TurnError, TurnPhase, TurnReport,
};
pub use env::{CombatEnv, PcgRolls, RollSource, ScriptedRolls};
pub use error::{ErrorSeverity, FightError};
pub use state::{
    ActiveConditions, BalanceSelectors, Corner, Fighter, FighterBuilder, FighterProfile,
    MatchState, Pair, Physique, ProfileError, random_profile,
};
pub use stats::{
    Balances, Bonuses, DerivationWeights, PhysicalOffsets, Range, TempBonuses, clamp,
    derive_bonuses,
};
