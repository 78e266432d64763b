//! Combat configuration loader.
//!
//! Every section of the TOML file is optional; anything left out keeps the
//! default rules. Condition entries override the default table per condition.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use fight_core::{
    AttackRanges, CombatConfig, Condition, ConditionEffects, ConditionTable, DerivationWeights,
    HealthRules, PhysicalBounds,
};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Raw TOML shape of a combat config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    ranges: Option<AttackRanges>,
    physical: Option<PhysicalBounds>,
    health: Option<HealthRules>,
    derivation: Option<DerivationWeights>,
    conditions: BTreeMap<String, ConditionEffects>,
    max_turns: Option<u32>,
    loadout_size: Option<usize>,
}

/// Loader for combat rules from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file
    ///
    /// # Returns
    ///
    /// Returns a validated CombatConfig.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse TOML text on top of the default rules.
    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let mut config = CombatConfig::default();
        if let Some(ranges) = file.ranges {
            config.ranges = ranges;
        }
        if let Some(physical) = file.physical {
            config.physical = physical;
        }
        if let Some(health) = file.health {
            config.health = health;
        }
        if let Some(derivation) = file.derivation {
            config.derivation = derivation;
        }
        if let Some(max_turns) = file.max_turns {
            config.max_turns = max_turns;
        }
        if let Some(loadout_size) = file.loadout_size {
            config.loadout_size = loadout_size;
        }

        let mut overrides = ConditionTable::empty();
        for (name, effects) in file.conditions {
            let condition = Condition::from_str(&name)
                .map_err(|_| anyhow::anyhow!("Unknown condition in config: {}", name))?;
            overrides.set(condition, effects);
        }
        config.conditions.merge(&overrides);

        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid combat config: {}", e))?;
        Ok(config)
    }
}
