//! Fighter persistence.
//!
//! A saved fighter is a flat JSON record. Temporary bonuses are never written
//! and a loaded fighter comes back at rest: no active conditions, temporary
//! bonuses at zero, health as saved.

use std::collections::BTreeMap;
use std::path::Path;

use fight_core::{
    AttackCatalog, Balances, Bonuses, Condition, Fighter, LoadoutSelector, Physique,
};
use serde::{Deserialize, Serialize};

use crate::loaders::fighters::resolve_loadout;
use crate::loaders::{LoadResult, read_file};

/// Flat key/value form of a fighter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterRecord {
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub age: u32,
    pub agility_strength_balance: f32,
    pub burst_endurance_balance: f32,
    pub defense_offense_balance: f32,
    pub speed_control_balance: f32,
    pub intelligence_instinct_balance: f32,
    pub damage_bonus: f32,
    pub complexity_bonus: f32,
    pub hit_chance_bonus: f32,
    pub block_chance_bonus: f32,
    pub special_chance_bonus: f32,
    pub current_health: i32,
    pub max_health: i32,
    #[serde(default)]
    pub conditions: BTreeMap<Condition, u32>,
    #[serde(default)]
    pub loadout: Vec<String>,
}

impl FighterRecord {
    pub fn from_fighter(fighter: &Fighter, loadout: &[String]) -> Self {
        let physique = fighter.physique();
        let balances = fighter.balances();
        let bonuses = fighter.bonuses();

        Self {
            name: fighter.name().to_owned(),
            height: physique.height,
            weight: physique.weight,
            age: physique.age,
            agility_strength_balance: balances.agility_strength,
            burst_endurance_balance: balances.burst_endurance,
            defense_offense_balance: balances.defense_offense,
            speed_control_balance: balances.speed_control,
            intelligence_instinct_balance: balances.intelligence_instinct,
            damage_bonus: bonuses.damage,
            complexity_bonus: bonuses.complexity,
            hit_chance_bonus: bonuses.hit_chance,
            block_chance_bonus: bonuses.block_chance,
            special_chance_bonus: bonuses.special_chance,
            current_health: fighter.health(),
            max_health: fighter.max_health(),
            conditions: fighter.conditions().iter().collect(),
            loadout: loadout.to_vec(),
        }
    }

    /// Saved loadout checked against `catalog`, or `None` if none was saved.
    ///
    /// A non-empty loadout must name exactly `size` known attacks.
    pub fn loadout(
        &self,
        catalog: &dyn AttackCatalog,
        size: usize,
    ) -> LoadResult<Option<LoadoutSelector>> {
        if self.loadout.is_empty() {
            return Ok(None);
        }
        resolve_loadout(&self.name, &self.loadout, catalog, size).map(Some)
    }

    /// Rebuild the fighter at rest.
    pub fn to_fighter(&self) -> Fighter {
        if !self.conditions.is_empty() {
            tracing::warn!(
                name = %self.name,
                conditions = self.conditions.len(),
                "saved conditions dropped on load"
            );
        }

        Fighter::restore(
            self.name.clone(),
            Physique::new(self.height, self.weight, self.age),
            Balances {
                agility_strength: self.agility_strength_balance,
                burst_endurance: self.burst_endurance_balance,
                defense_offense: self.defense_offense_balance,
                speed_control: self.speed_control_balance,
                intelligence_instinct: self.intelligence_instinct_balance,
            },
            Bonuses {
                damage: self.damage_bonus,
                complexity: self.complexity_bonus,
                hit_chance: self.hit_chance_bonus,
                block_chance: self.block_chance_bonus,
                special_chance: self.special_chance_bonus,
            },
            self.current_health,
            self.max_health,
        )
    }
}

/// Reads and writes fighter records as pretty-printed JSON files.
pub struct FighterStore;

impl FighterStore {
    pub fn save(path: &Path, fighter: &Fighter, loadout: &[String]) -> LoadResult<()> {
        let record = FighterRecord::from_fighter(fighter, loadout);
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| anyhow::anyhow!("Failed to encode fighter {}: {}", record.name, e))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!("Failed to create directory {}: {}", parent.display(), e)
            })?;
        }
        std::fs::write(path, json)
            .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))?;

        tracing::info!(name = %record.name, path = %path.display(), "fighter saved");
        Ok(())
    }

    pub fn load(path: &Path) -> LoadResult<FighterRecord> {
        let content = read_file(path)?;
        let record: FighterRecord = serde_json::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse fighter JSON {}: {}", path.display(), e)
        })?;

        tracing::info!(name = %record.name, path = %path.display(), "fighter loaded");
        Ok(record)
    }
}
