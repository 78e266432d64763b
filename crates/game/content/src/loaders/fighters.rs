//! Fighter spec loader.
//!
//! A spec is the non-interactive stand-in for character creation: a name,
//! physique, five balance selectors and a loadout of attack names.

use std::path::Path;

use fight_core::{
    AttackCatalog, BalanceSelectors, FighterProfile, LoadoutSelector, Physique,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Fighter definition as written in TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FighterSpec {
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub age: u32,
    #[serde(default)]
    pub selectors: BalanceSelectors,
    #[serde(default)]
    pub loadout: Vec<String>,
}

impl FighterSpec {
    pub fn profile(&self) -> FighterProfile {
        FighterProfile {
            name: self.name.clone(),
            physique: Physique::new(self.height, self.weight, self.age),
            selectors: self.selectors,
        }
    }

    /// Check the loadout against `catalog` and build a selector for it.
    pub fn loadout(&self, catalog: &dyn AttackCatalog, size: usize) -> LoadResult<LoadoutSelector> {
        resolve_loadout(&self.name, &self.loadout, catalog, size)
    }
}

/// Validate a named loadout and build a selector for it.
///
/// Every name must exist in `catalog` and the loadout must hold exactly
/// `size` attacks.
pub(crate) fn resolve_loadout(
    owner: &str,
    names: &[String],
    catalog: &dyn AttackCatalog,
    size: usize,
) -> LoadResult<LoadoutSelector> {
    if names.len() != size {
        anyhow::bail!("{} brings {} attacks, expected {}", owner, names.len(), size);
    }
    for name in names {
        catalog
            .by_name(name)
            .map_err(|e| anyhow::anyhow!("{}'s loadout: {}", owner, e))?;
    }
    Ok(LoadoutSelector::new(names.iter().cloned()))
}

/// Loader for fighter specs from TOML files.
pub struct FighterLoader;

impl FighterLoader {
    pub fn load(path: &Path) -> LoadResult<FighterSpec> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<FighterSpec> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse fighter TOML: {}", e))
    }
}
