//! Read-only inputs the rules consult while resolving a turn.
//!
//! [`CombatEnv`] bundles the rule configuration with the attack catalog so the
//! engine can reach both without hard coupling to a concrete catalog. The
//! random source is passed separately as `&mut dyn RollSource` because it is
//! the only input that changes as it is used.
mod rng;

pub use rng::{PcgRolls, RollSource, ScriptedRolls};

use crate::attack::AttackCatalog;
use crate::conditions::ConditionSystem;
use crate::config::CombatConfig;

/// Configuration and catalog shared by every turn of a match.
#[derive(Clone, Copy)]
pub struct CombatEnv<'a> {
    config: &'a CombatConfig,
    catalog: &'a dyn AttackCatalog,
}

impl<'a> CombatEnv<'a> {
    pub fn new(config: &'a CombatConfig, catalog: &'a dyn AttackCatalog) -> Self {
        Self { config, catalog }
    }

    pub fn config(&self) -> &'a CombatConfig {
        self.config
    }

    pub fn catalog(&self) -> &'a dyn AttackCatalog {
        self.catalog
    }

    /// Condition system backed by the configured modifier table.
    pub fn conditions(&self) -> ConditionSystem<'a> {
        ConditionSystem::new(&self.config.conditions)
    }
}

impl core::fmt::Debug for CombatEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CombatEnv")
            .field("config", self.config)
            .field("attacks", &self.catalog.len())
            .finish()
    }
}
