//! Attack selection strategies.
//!
//! Choosing an attack is not part of the rules: the engine asks an
//! [`AttackSelector`] for one every time a fighter acts. Selectors may draw
//! from the same roll source as the pipeline.

use std::sync::Arc;

use crate::attack::{Attack, AttackCatalog, CatalogError};
use crate::env::{CombatEnv, RollSource};
use crate::state::{Corner, Fighter, Pair};

pub trait AttackSelector {
    fn select(
        &mut self,
        corner: Corner,
        attacker: &Fighter,
        env: &CombatEnv<'_>,
        rng: &mut dyn RollSource,
    ) -> Result<Arc<Attack>, CatalogError>;
}

impl<S: AttackSelector + ?Sized> AttackSelector for Box<S> {
    fn select(
        &mut self,
        corner: Corner,
        attacker: &Fighter,
        env: &CombatEnv<'_>,
        rng: &mut dyn RollSource,
    ) -> Result<Arc<Attack>, CatalogError> {
        (**self).select(corner, attacker, env, rng)
    }
}

/// One strategy per corner.
impl<S: AttackSelector> AttackSelector for Pair<S> {
    fn select(
        &mut self,
        corner: Corner,
        attacker: &Fighter,
        env: &CombatEnv<'_>,
        rng: &mut dyn RollSource,
    ) -> Result<Arc<Attack>, CatalogError> {
        self[corner].select(corner, attacker, env, rng)
    }
}

/// Uniform pick from the whole catalog.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomCatalogSelector;

impl AttackSelector for RandomCatalogSelector {
    fn select(
        &mut self,
        _corner: Corner,
        _attacker: &Fighter,
        env: &CombatEnv<'_>,
        rng: &mut dyn RollSource,
    ) -> Result<Arc<Attack>, CatalogError> {
        env.catalog().random(rng)
    }
}

/// Uniform pick among a fixed set of attack names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadoutSelector {
    names: Vec<String>,
}

impl LoadoutSelector {
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Draw `size` attacks from `catalog` the way [`AttackCatalog::random`]
    /// does. Duplicates are allowed.
    pub fn random(
        catalog: &dyn AttackCatalog,
        rng: &mut dyn RollSource,
        size: usize,
    ) -> Result<Self, CatalogError> {
        let names = (0..size)
            .map(|_| catalog.random(rng).map(|attack| attack.name.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl AttackSelector for LoadoutSelector {
    fn select(
        &mut self,
        _corner: Corner,
        _attacker: &Fighter,
        env: &CombatEnv<'_>,
        rng: &mut dyn RollSource,
    ) -> Result<Arc<Attack>, CatalogError> {
        if self.names.is_empty() {
            return Err(CatalogError::Empty);
        }
        let name = &self.names[rng.pick(self.names.len())];
        env.catalog().by_name(name)
    }
}

/// Replays a fixed sequence of attack names, wrapping around.
///
/// Does not draw from the roll source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedSelector {
    names: Vec<String>,
    cursor: usize,
}

impl ScriptedSelector {
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            cursor: 0,
        }
    }
}

impl AttackSelector for ScriptedSelector {
    fn select(
        &mut self,
        _corner: Corner,
        _attacker: &Fighter,
        env: &CombatEnv<'_>,
        _rng: &mut dyn RollSource,
    ) -> Result<Arc<Attack>, CatalogError> {
        if self.names.is_empty() {
            return Err(CatalogError::Empty);
        }
        let name = &self.names[self.cursor % self.names.len()];
        self.cursor += 1;
        env.catalog().by_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attack::{AttackType, StaticCatalog};
    use crate::config::CombatConfig;
    use crate::env::ScriptedRolls;
    use crate::state::Physique;
    use crate::stats::{Balances, Bonuses};

    fn setup() -> (CombatConfig, StaticCatalog, Fighter) {
        let catalog = StaticCatalog::from_attacks([
            Attack::new("Jab", AttackType::Punch, 15, 14, 80, 87, 15),
            Attack::new("Sweep", AttackType::Throw, 20, 30, 60, 40, 20),
        ])
        .expect("unique names");
        let fighter = Fighter::new(
            "f",
            Physique::new(180, 90, 39),
            Balances::NEUTRAL,
            Bonuses::ZERO,
            250,
        );
        (CombatConfig::default(), catalog, fighter)
    }

    #[test]
    fn scripted_selector_cycles_without_rolling() {
        let (config, catalog, fighter) = setup();
        let env = CombatEnv::new(&config, &catalog);
        let mut rng = ScriptedRolls::new(vec![1.0]);
        let mut selector = ScriptedSelector::new(["Sweep", "Jab"]);

        let picks: Vec<String> = (0..3)
            .map(|_| {
                selector
                    .select(Corner::A, &fighter, &env, &mut rng)
                    .unwrap()
                    .name
                    .clone()
            })
            .collect();
        assert_eq!(picks, ["Sweep", "Jab", "Sweep"]);
        assert_eq!(rng.drawn(), 0);
    }

    #[test]
    fn loadout_with_unknown_name_surfaces_not_found() {
        let (config, catalog, fighter) = setup();
        let env = CombatEnv::new(&config, &catalog);
        let mut rng = ScriptedRolls::new(vec![0.0]);
        let mut selector = LoadoutSelector::new(["Haymaker"]);

        assert_eq!(
            selector.select(Corner::A, &fighter, &env, &mut rng),
            Err(CatalogError::NotFound("Haymaker".into()))
        );
        assert_eq!(
            LoadoutSelector::default().select(Corner::A, &fighter, &env, &mut rng),
            Err(CatalogError::Empty)
        );
    }

    #[test]
    fn random_loadout_draws_from_catalog() {
        let (_, catalog, _) = setup();
        let mut rng = crate::env::PcgRolls::new(11);
        let loadout = LoadoutSelector::random(&catalog, &mut rng, 3).unwrap();

        assert_eq!(loadout.names().len(), 3);
        for name in loadout.names() {
            assert!(catalog.by_name(name).is_ok());
        }
    }

    #[test]
    fn pair_dispatches_by_corner() {
        let (config, catalog, fighter) = setup();
        let env = CombatEnv::new(&config, &catalog);
        let mut rng = ScriptedRolls::default();
        let mut selectors = Pair::new(
            ScriptedSelector::new(["Jab"]),
            ScriptedSelector::new(["Sweep"]),
        );

        let b = selectors.select(Corner::B, &fighter, &env, &mut rng).unwrap();
        let a = selectors.select(Corner::A, &fighter, &env, &mut rng).unwrap();
        assert_eq!((a.name.as_str(), b.name.as_str()), ("Jab", "Sweep"));
    }
}
