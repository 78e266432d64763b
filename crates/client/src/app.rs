//! Match orchestration for the terminal client.
//!
//! Loads content, builds the player and a computer opponent, then drives the
//! turn engine to a result, printing each turn and feeding its summary to the
//! narration worker.

use anyhow::{Context, Result};
use fight_content::{AttackLoader, ConfigLoader, FighterLoader, FighterStore};
use fight_core::{
    AttackCatalog, AttackSelector, CombatConfig, CombatEnv, Fighter, FighterBuilder,
    LoadoutSelector, MatchState, Pair, PcgRolls, RollSource, StaticCatalog, TurnEngine, TurnError,
    random_profile,
};

use crate::config::ClientConfig;
use crate::narration::{LocalNarrator, NarrationWorker};
use crate::prompt::PromptSelector;
use crate::render;

const PLAYER_NAME: &str = "Player";
const COMPUTER_NAME: &str = "Computer";

/// A fighter ready for the ring together with its attack loadout.
struct Contender {
    fighter: Fighter,
    loadout: LoadoutSelector,
}

pub struct MatchApp {
    config: ClientConfig,
}

impl MatchApp {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub async fn run(self) -> Result<()> {
        let rules = match &self.config.rules_path {
            Some(path) => ConfigLoader::load(path)?,
            None => CombatConfig::default(),
        };
        let catalog = match &self.config.attacks_path {
            Some(path) => AttackLoader::load(path)?,
            None => AttackLoader::load_default()?,
        };

        let mut rng = match self.config.seed {
            Some(seed) => PcgRolls::new(seed),
            None => PcgRolls::from_entropy(),
        };
        tracing::info!(seed = rng.seed(), attacks = catalog.len(), "match setup");

        let player = self.player(&rules, &catalog, &mut rng)?;
        let computer = computer(&rules, &catalog, &mut rng)?;

        println!("{}", render::fighter_card(&player.fighter, player.loadout.names()));
        println!(
            "{}",
            render::fighter_card(&computer.fighter, computer.loadout.names())
        );

        let player_loadout = player.loadout.names().to_vec();
        let mut state = MatchState::new(player.fighter, computer.fighter);
        let mut selectors: Pair<Box<dyn AttackSelector>> = Pair::new(
            self.player_selector(player.loadout),
            Box::new(computer.loadout),
        );

        self.play(&mut state, &rules, &catalog, &mut selectors, &mut rng)
            .await?;
        println!("{}", render::result(&state));

        if let Some(path) = &self.config.save_path {
            FighterStore::save(path, &state.fighters.a, &player_loadout)?;
            println!("Saved {} to {}", state.fighters.a.name(), path.display());
        }

        Ok(())
    }

    async fn play(
        &self,
        state: &mut MatchState,
        rules: &CombatConfig,
        catalog: &StaticCatalog,
        selectors: &mut dyn AttackSelector,
        rng: &mut PcgRolls,
    ) -> Result<()> {
        let env = CombatEnv::new(rules, catalog);
        let mut narration = self.config.narrate.then(|| {
            NarrationWorker::spawn(LocalNarrator, self.config.narration_buffer, |line| {
                println!("  >> {line}")
            })
        });

        let mut engine = TurnEngine::new(state);
        let outcome = loop {
            if engine.state().turn > rules.max_turns {
                tracing::warn!(limit = rules.max_turns, "turn limit reached");
                break Err(TurnError::TurnLimit {
                    limit: rules.max_turns,
                });
            }

            let report = match engine.run_turn(&env, selectors, rng) {
                Ok(report) => report,
                Err(e) => break Err(e),
            };
            print!("{}", render::turn(&report, engine.state()));
            if let Some(worker) = narration.as_mut() {
                worker.submit(report.summary.clone());
            }

            if report.result.is_some() {
                break Ok(());
            }
            if !self.config.pause.is_zero() {
                tokio::time::sleep(self.config.pause).await;
            }
        };

        if let Some(worker) = narration {
            let stats = worker.shutdown().await;
            tracing::info!(
                narrated = stats.narrated,
                failed = stats.failed,
                dropped = stats.dropped,
                "narration finished"
            );
        }

        outcome.context("match aborted")
    }

    /// Prompt on stdin when interactive, otherwise pick from the loadout.
    fn player_selector(&self, loadout: LoadoutSelector) -> Box<dyn AttackSelector> {
        if self.config.interactive {
            Box::new(PromptSelector::new(
                loadout,
                std::io::stdin().lock(),
                std::io::stdout(),
            ))
        } else {
            Box::new(loadout)
        }
    }

    /// The player corner: a saved fighter, a fighter spec, or a random build.
    fn player(
        &self,
        rules: &CombatConfig,
        catalog: &StaticCatalog,
        rng: &mut dyn RollSource,
    ) -> Result<Contender> {
        if let Some(path) = &self.config.load_path {
            let record = FighterStore::load(path)?;
            let fighter = record.to_fighter();
            let saved = record
                .loadout(catalog, rules.loadout_size)
                .with_context(|| format!("invalid saved fighter in {}", path.display()))?;
            let loadout = match saved {
                Some(loadout) => loadout,
                None => LoadoutSelector::random(catalog, rng, rules.loadout_size)?,
            };
            return Ok(Contender { fighter, loadout });
        }

        if let Some(path) = &self.config.fighter_path {
            let spec = FighterLoader::load(path)?;
            let fighter = FighterBuilder::new(rules)
                .build(&spec.profile())
                .with_context(|| format!("invalid fighter in {}", path.display()))?;
            let loadout = spec.loadout(catalog, rules.loadout_size)?;
            return Ok(Contender { fighter, loadout });
        }

        random_contender(PLAYER_NAME, rules, catalog, rng)
    }
}

fn computer(
    rules: &CombatConfig,
    catalog: &StaticCatalog,
    rng: &mut dyn RollSource,
) -> Result<Contender> {
    random_contender(COMPUTER_NAME, rules, catalog, rng)
}

fn random_contender(
    name: &str,
    rules: &CombatConfig,
    catalog: &StaticCatalog,
    rng: &mut dyn RollSource,
) -> Result<Contender> {
    let profile = random_profile(name, rng, rules);
    let fighter = FighterBuilder::new(rules).build(&profile)?;
    let loadout = LoadoutSelector::random(catalog, rng, rules.loadout_size)?;
    Ok(Contender { fighter, loadout })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn quiet_config(seed: u64) -> ClientConfig {
        ClientConfig {
            seed: Some(seed),
            pause: Duration::ZERO,
            narrate: false,
            ..ClientConfig::default()
        }
    }

    #[test]
    fn computer_contender_uses_configured_loadout_size() {
        let rules = CombatConfig {
            loadout_size: 5,
            ..CombatConfig::default()
        };
        let catalog = AttackLoader::load_default().unwrap();
        let mut rng = PcgRolls::new(3);

        let contender = computer(&rules, &catalog, &mut rng).unwrap();
        assert_eq!(contender.fighter.name(), COMPUTER_NAME);
        assert_eq!(contender.loadout.names().len(), 5);
        assert_eq!(contender.fighter.health(), contender.fighter.max_health());
    }

    #[tokio::test]
    async fn seeded_match_reaches_a_result() {
        let app = MatchApp::new(quiet_config(11));
        let rules = CombatConfig {
            max_turns: 100_000,
            ..CombatConfig::default()
        };
        let catalog = AttackLoader::load_default().unwrap();
        let mut rng = PcgRolls::new(11);

        let player = app.player(&rules, &catalog, &mut rng).unwrap();
        let computer = computer(&rules, &catalog, &mut rng).unwrap();
        let mut state = MatchState::new(player.fighter, computer.fighter);
        let mut selectors = Pair::new(player.loadout, computer.loadout);

        app.play(&mut state, &rules, &catalog, &mut selectors, &mut rng)
            .await
            .unwrap();
        assert!(state.is_over());
    }

    #[test]
    fn saved_fighter_with_wrong_loadout_size_is_rejected() {
        let rules = CombatConfig::default();
        let catalog = AttackLoader::load_default().unwrap();
        let mut rng = PcgRolls::new(9);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.json");

        let fighter = computer(&rules, &catalog, &mut rng).unwrap().fighter;
        FighterStore::save(&path, &fighter, &["Jab".to_string()]).unwrap();

        let app = MatchApp::new(ClientConfig {
            load_path: Some(path.clone()),
            ..quiet_config(9)
        });
        let err = app.player(&rules, &catalog, &mut rng).err().unwrap();
        assert!(format!("{err:#}").contains("expected 3"), "{err:#}");

        let loadout = ["Jab", "Hook", "Kimura"].map(String::from);
        FighterStore::save(&path, &fighter, &loadout).unwrap();
        let player = app.player(&rules, &catalog, &mut rng).unwrap();
        assert_eq!(player.loadout.names(), loadout);
    }

    #[tokio::test]
    async fn turn_cap_aborts_the_match() {
        let app = MatchApp::new(quiet_config(5));
        let rules = CombatConfig {
            max_turns: 1,
            ..CombatConfig::default()
        };
        let catalog = AttackLoader::load_default().unwrap();
        let mut rng = PcgRolls::new(5);

        let player = app.player(&rules, &catalog, &mut rng).unwrap();
        let computer = computer(&rules, &catalog, &mut rng).unwrap();
        let mut state = MatchState::new(player.fighter, computer.fighter);
        let mut selectors = Pair::new(player.loadout, computer.loadout);

        let err = app
            .play(&mut state, &rules, &catalog, &mut selectors, &mut rng)
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("turn limit"), "{err:#}");
    }
}
