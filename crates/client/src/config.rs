//! Client configuration read from the process environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime knobs for the `cogfight` binary.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Combat rules TOML. Built-in rules when unset.
    pub rules_path: Option<PathBuf>,
    /// Attack catalog RON. Bundled library when unset.
    pub attacks_path: Option<PathBuf>,
    /// Fighter spec TOML for the player corner.
    pub fighter_path: Option<PathBuf>,
    /// Saved fighter JSON for the player corner. Takes precedence over
    /// `fighter_path`.
    pub load_path: Option<PathBuf>,
    /// Where to save the player fighter after the match.
    pub save_path: Option<PathBuf>,
    /// Fixed seed for a reproducible match.
    pub seed: Option<u64>,
    pub session_id: Option<String>,
    /// Delay between turns.
    pub pause: Duration,
    /// Narration queue capacity. Summaries beyond it are dropped.
    pub narration_buffer: usize,
    pub narrate: bool,
    /// Ask the player for each attack instead of picking from the loadout.
    pub interactive: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rules_path: None,
            attacks_path: None,
            fighter_path: None,
            load_path: None,
            save_path: None,
            seed: None,
            session_id: None,
            pause: Duration::ZERO,
            narration_buffer: 16,
            narrate: true,
            interactive: false,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `COGFIGHT_CONFIG` - Combat rules TOML
    /// - `COGFIGHT_ATTACKS` - Attack catalog RON
    /// - `COGFIGHT_FIGHTER` - Player fighter spec TOML
    /// - `COGFIGHT_LOAD` - Saved player fighter JSON
    /// - `COGFIGHT_SAVE` - Save the player fighter here after the match
    /// - `COGFIGHT_SEED` - Random seed (default: entropy)
    /// - `COGFIGHT_SESSION` - Log session id (default: timestamp)
    /// - `COGFIGHT_PAUSE` - Milliseconds between turns (default: 0)
    /// - `COGFIGHT_NARRATION_BUFFER` - Narration queue size (default: 16)
    /// - `COGFIGHT_NARRATE` - Print narration lines (default: true)
    /// - `COGFIGHT_INTERACTIVE` - Prompt for the player's attacks (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.rules_path = read_env_path("COGFIGHT_CONFIG");
        config.attacks_path = read_env_path("COGFIGHT_ATTACKS");
        config.fighter_path = read_env_path("COGFIGHT_FIGHTER");
        config.load_path = read_env_path("COGFIGHT_LOAD");
        config.save_path = read_env_path("COGFIGHT_SAVE");
        config.seed = read_env::<u64>("COGFIGHT_SEED");
        config.session_id = env::var("COGFIGHT_SESSION").ok().filter(|s| !s.is_empty());

        if let Some(ms) = read_env::<u64>("COGFIGHT_PAUSE") {
            config.pause = Duration::from_millis(ms);
        }
        if let Some(capacity) = read_env::<usize>("COGFIGHT_NARRATION_BUFFER") {
            config.narration_buffer = capacity.max(1);
        }
        if let Some(narrate) = read_env_bool("COGFIGHT_NARRATE") {
            config.narrate = narrate;
        }
        if let Some(interactive) = read_env_bool("COGFIGHT_INTERACTIVE") {
            config.interactive = interactive;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn read_env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
