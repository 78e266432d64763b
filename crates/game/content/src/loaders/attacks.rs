//! Attack catalog loader.

use std::path::Path;

use fight_core::{Attack, AttackCatalog, StaticCatalog};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Attack catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackCatalogFile {
    pub attacks: Vec<Attack>,
}

/// Loader for attack catalogs from RON files.
pub struct AttackLoader;

impl AttackLoader {
    /// Load an attack catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an `AttackCatalogFile`
    ///
    /// # Returns
    ///
    /// Returns a StaticCatalog in file order. Duplicate names are an error.
    pub fn load(path: &Path) -> LoadResult<StaticCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse RON text into a catalog.
    pub fn parse(content: &str) -> LoadResult<StaticCatalog> {
        let file: AttackCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse attack catalog RON: {}", e))?;

        let catalog = StaticCatalog::from_attacks(file.attacks)
            .map_err(|e| anyhow::anyhow!("Invalid attack catalog: {}", e))?;
        tracing::debug!(attacks = catalog.len(), "attack catalog loaded");
        Ok(catalog)
    }

    /// The attack library bundled with the crate.
    pub fn load_default() -> LoadResult<StaticCatalog> {
        Self::parse(include_str!("../../data/attacks.ron"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fight_core::AttackType;
    use strum::IntoEnumIterator;

    #[test]
    fn default_library_covers_every_special_type() {
        let catalog = AttackLoader::load_default().expect("bundled catalog parses");

        for kind in AttackType::iter().filter(|k| k.special().is_some()) {
            assert!(!catalog.by_type(kind).is_empty(), "no {kind} attacks");
        }
        let jab = catalog.by_name("Jab").expect("Jab is bundled");
        assert_eq!(
            (jab.damage, jab.complexity, jab.hit_chance, jab.block_chance, jab.special_chance),
            (15, 14, 80, 87, 15)
        );
    }

    #[test]
    fn duplicate_names_fail_to_load() {
        let ron = r#"(
            attacks: [
                (name: "Jab", kind: Punch, damage: 15, complexity: 14, hit_chance: 80, block_chance: 87, special_chance: 15),
                (name: "jab", kind: Punch, damage: 10, complexity: 10, hit_chance: 80, block_chance: 50, special_chance: 10),
            ],
        )"#;
        let err = AttackLoader::parse(ron).unwrap_err();
        assert!(err.to_string().contains("duplicate"), "{err}");
    }
}
