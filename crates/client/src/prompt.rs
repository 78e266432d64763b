//! Interactive attack choice for the player corner.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use fight_core::{
    Attack, AttackSelector, CatalogError, CombatEnv, Corner, Fighter, LoadoutSelector,
    RollSource,
};

/// Asks the player which loadout attack to use on every turn.
///
/// Accepts the attack's number or its name. When input is exhausted or
/// unreadable the choice falls back to a random loadout pick.
pub struct PromptSelector<R, W> {
    loadout: LoadoutSelector,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSelector<R, W> {
    pub fn new(loadout: LoadoutSelector, input: R, output: W) -> Self {
        Self {
            loadout,
            input,
            output,
        }
    }

    /// Show the menu and read one line. `None` at end of input.
    fn ask(&mut self, attacker: &Fighter, retry: bool) -> io::Result<Option<String>> {
        if retry {
            writeln!(
                self.output,
                "Pick 1-{} or an attack name.",
                self.loadout.names().len()
            )?;
        } else {
            writeln!(self.output, "{}, choose your attack:", attacker.name())?;
            for (index, name) in self.loadout.names().iter().enumerate() {
                writeln!(self.output, "  {}) {}", index + 1, name)?;
            }
        }
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Resolve a typed choice to a loadout entry.
fn parse_choice<'a>(names: &'a [String], choice: &str) -> Option<&'a String> {
    let choice = choice.trim();
    match choice.parse::<usize>() {
        Ok(number) => number.checked_sub(1).and_then(|index| names.get(index)),
        Err(_) => names
            .iter()
            .find(|name| name.eq_ignore_ascii_case(choice)),
    }
}

impl<R: BufRead, W: Write> AttackSelector for PromptSelector<R, W> {
    fn select(
        &mut self,
        corner: Corner,
        attacker: &Fighter,
        env: &CombatEnv<'_>,
        rng: &mut dyn RollSource,
    ) -> Result<Arc<Attack>, CatalogError> {
        if self.loadout.names().is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut retry = false;
        loop {
            let line = match self.ask(attacker, retry) {
                Ok(Some(line)) => line,
                Ok(None) => {
                    tracing::warn!("player input closed, picking at random");
                    return self.loadout.select(corner, attacker, env, rng);
                }
                Err(e) => {
                    tracing::warn!("player input failed, picking at random: {}", e);
                    return self.loadout.select(corner, attacker, env, rng);
                }
            };

            if let Some(name) = parse_choice(self.loadout.names(), &line) {
                tracing::debug!(attack = %name, "player chose attack");
                return env.catalog().by_name(name);
            }
            retry = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use fight_core::{
        AttackType, Balances, Bonuses, CombatConfig, MatchState, Pair, Physique, ScriptedRolls,
        StaticCatalog, TurnEngine,
    };

    use super::*;

    fn catalog() -> StaticCatalog {
        StaticCatalog::from_attacks([
            Attack::new("Jab", AttackType::Punch, 15, 14, 80, 87, 15),
            Attack::new("Hook", AttackType::Punch, 30, 28, 70, 75, 25),
            Attack::new("Armbar", AttackType::Lock, 10, 65, 40, 35, 45),
        ])
        .unwrap()
    }

    fn fighter(name: &str) -> Fighter {
        Fighter::new(
            name,
            Physique::new(180, 90, 39),
            Balances::NEUTRAL,
            Bonuses::ZERO,
            250,
        )
    }

    fn prompt(input: &str) -> PromptSelector<Cursor<Vec<u8>>, Vec<u8>> {
        PromptSelector::new(
            LoadoutSelector::new(["Jab", "Hook", "Armbar"]),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        )
    }

    #[test]
    fn typed_number_picks_that_loadout_slot() {
        let config = CombatConfig::default();
        let catalog = catalog();
        let env = CombatEnv::new(&config, &catalog);

        let mut state = MatchState::new(fighter("Ana"), fighter("Bo"));
        let mut selectors = Pair::new(prompt("2\n"), prompt(""));
        let mut rng = ScriptedRolls::new(vec![50.0, 10.0, 99.0, 99.0]);

        let report = TurnEngine::new(&mut state)
            .run_turn(&env, &mut selectors, &mut rng)
            .unwrap();
        assert_eq!(report.outcome.unwrap().attack, "Hook");

        let menu = String::from_utf8(selectors.a.output.clone()).unwrap();
        assert!(menu.contains("Ana, choose your attack:"));
        assert!(menu.contains("  2) Hook"));
    }

    #[test]
    fn invalid_choices_are_asked_again() {
        let config = CombatConfig::default();
        let catalog = catalog();
        let env = CombatEnv::new(&config, &catalog);
        let mut rng = ScriptedRolls::new(vec![0.0]);

        let mut selector = prompt("0\n7\nspinning kick\narmbar\n");
        let attack = selector
            .select(Corner::A, &fighter("Ana"), &env, &mut rng)
            .unwrap();
        assert_eq!(attack.name, "Armbar");

        let output = String::from_utf8(selector.output).unwrap();
        assert_eq!(output.matches("Pick 1-3 or an attack name.").count(), 3);
    }

    #[test]
    fn closed_input_falls_back_to_loadout() {
        let config = CombatConfig::default();
        let catalog = catalog();
        let env = CombatEnv::new(&config, &catalog);
        let mut rng = ScriptedRolls::new(vec![0.0]);

        let attack = prompt("")
            .select(Corner::A, &fighter("Ana"), &env, &mut rng)
            .unwrap();
        assert!(["Jab", "Hook", "Armbar"].contains(&attack.name.as_str()));
    }
}
