//! The data files shipped with the crate load and agree with the built-in rules.

use std::path::PathBuf;

use fight_content::{AttackLoader, ConfigLoader, FighterLoader};
use fight_core::{AttackCatalog, CombatConfig, FighterBuilder};

fn data(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(file)
}

#[test]
fn shipped_config_matches_defaults() {
    let config = ConfigLoader::load(&data("combat.toml")).unwrap();
    assert_eq!(config, CombatConfig::default());
}

#[test]
fn shipped_catalog_loads_from_disk() {
    let from_disk = AttackLoader::load(&data("attacks.ron")).unwrap();
    let embedded = AttackLoader::load_default().unwrap();
    assert_eq!(from_disk.len(), embedded.len());
    assert!(from_disk.by_name("rear naked choke").is_ok());
}

#[test]
fn example_fighter_is_ready_to_fight() {
    let config = CombatConfig::default();
    let catalog = AttackLoader::load_default().unwrap();
    let spec = FighterLoader::load(&data("fighters/example.toml")).unwrap();

    let fighter = FighterBuilder::new(&config).build(&spec.profile()).unwrap();
    assert_eq!(fighter.health(), fighter.max_health());

    let loadout = spec.loadout(&catalog, config.loadout_size).unwrap();
    assert_eq!(loadout.names().len(), 3);
}
