use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::dice::Dice;
use crate::error::Result;
use crate::game::{DiceGame, SnakesAndLadders};
use crate::rng::LinearCongruentialGenerator;
use crate::text::{PrettyTextRepresentable, TextRepresentable};
use crate::tracker::DiceGameTracker;

mod manager;

#[cfg(target_arch = "wasm32")]
mod console {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = console)]
        pub fn error(message: &str);
    }
}

/// Rejections surface in the browser console as well as the tracing log.
fn report_error(message: &str) {
    tracing::warn!("{message}");
    #[cfg(target_arch = "wasm32")]
    console::error(message);
}

#[wasm_bindgen(getter_with_clone)]
pub struct PlayResult {
    pub turns: u32,
    pub final_square: u32,
    pub events: Vec<String>,
    pub error: String,
}

impl PlayResult {
    fn invalid_handle(handle: u32) -> Self {
        Self {
            turns: 0,
            final_square: 0,
            events: Vec::new(),
            error: format!("invalid_handle:{handle}"),
        }
    }
}

pub(crate) struct ActiveGame {
    config: GameConfig,
    game: SnakesAndLadders,
    tracker: DiceGameTracker,
}

impl ActiveGame {
    pub(crate) fn new(config: GameConfig) -> Result<Self> {
        let game = SnakesAndLadders::from_config(&config)?;
        Ok(Self {
            config,
            game,
            tracker: DiceGameTracker::new(),
        })
    }

    /// Rebuilds the game so the dice replay from the configured seed.
    pub(crate) fn reset(&mut self) -> Result<()> {
        self.game = SnakesAndLadders::from_config(&self.config)?;
        self.tracker = DiceGameTracker::new();
        Ok(())
    }

    pub(crate) fn play(&mut self) -> PlayResult {
        let summary = self.game.play(Some(&mut self.tracker));
        PlayResult {
            turns: summary.turns,
            final_square: summary.final_square as u32,
            events: self.tracker.take_logs(),
            error: String::new(),
        }
    }

    pub(crate) fn describe(&self, pretty: bool) -> String {
        if pretty {
            self.game.pretty_textual_description()
        } else {
            self.game.textual_description()
        }
    }
}

fn register(config: GameConfig) -> u32 {
    match ActiveGame::new(config) {
        Ok(game) => manager::create_game(game),
        Err(err) => {
            report_error(&format!("[game:error] {err}"));
            0
        }
    }
}

/// Creates a classic game whose dice start from `seed`. Returns its handle.
#[wasm_bindgen]
pub fn create_game(seed: f64) -> u32 {
    register(GameConfig {
        seed,
        ..GameConfig::default()
    })
}

/// Creates a game from a JSON config. Returns 0 when the config is rejected.
#[wasm_bindgen]
pub fn create_game_from_config(config_json: &str) -> u32 {
    match GameConfig::from_json(config_json) {
        Ok(config) => register(config),
        Err(err) => {
            report_error(&format!("[game:error] {err}"));
            0
        }
    }
}

#[wasm_bindgen]
pub fn destroy_game(handle: u32) -> bool {
    manager::destroy_game(handle)
}

#[wasm_bindgen]
pub fn reset_game(handle: u32) -> bool {
    manager::with_game_mut(handle, |game| game.reset().is_ok()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn play_game(handle: u32) -> PlayResult {
    manager::with_game_mut(handle, |game| game.play())
        .unwrap_or_else(|| PlayResult::invalid_handle(handle))
}

#[wasm_bindgen]
pub fn describe_game(handle: u32, pretty: bool) -> String {
    manager::with_game(handle, |game| game.describe(pretty)).unwrap_or_default()
}

/// Rolls a fresh `sides`-sided die `count` times. Empty when `sides` is 0.
#[wasm_bindgen]
pub fn roll_dice(sides: u32, count: u32, seed: f64) -> Vec<u32> {
    match Dice::new(sides, Box::new(LinearCongruentialGenerator::with_seed(seed))) {
        Ok(mut dice) => (0..count).map(|_| dice.roll()).collect(),
        Err(err) => {
            report_error(&format!("[dice:error] {err}"));
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_classic_game_by_handle() {
        let handle = create_game(42.0);
        assert_ne!(handle, 0);

        let result = play_game(handle);
        assert_eq!(result.turns, 4);
        assert_eq!(result.final_square, 25);
        assert!(result.error.is_empty());
        assert_eq!(result.events.len(), 10);

        assert!(destroy_game(handle));
        assert!(!destroy_game(handle));
    }

    #[test]
    fn reset_replays_the_same_game() {
        let handle = create_game(1234.0);
        let first = play_game(handle);
        assert!(reset_game(handle));
        let second = play_game(handle);
        assert_eq!(first.events, second.events);
    }

    #[test]
    fn unknown_handle_reports_error() {
        let result = play_game(9_999);
        assert_eq!(result.error, "invalid_handle:9999");
        assert!(!reset_game(9_999));
        assert_eq!(describe_game(9_999, false), "");
    }

    #[test]
    fn config_handles_and_rejections() {
        let handle = create_game_from_config(r#"{"final_square": 12, "jumps": []}"#);
        assert_ne!(handle, 0);
        assert_eq!(
            describe_game(handle, false),
            "A game of Snakes and Ladders with 12 squares"
        );
        assert_eq!(play_game(handle).final_square, 12);

        assert_eq!(create_game_from_config(r#"{"dice_sides": 0}"#), 0);
        assert_eq!(create_game_from_config("not json"), 0);
    }

    #[test]
    fn config_that_could_never_finish_gets_no_handle() {
        let trap = r#"{"final_square": 10, "dice_sides": 1, "jumps": [{"square": 5, "offset": -3}]}"#;
        assert_eq!(create_game_from_config(trap), 0);
    }

    #[test]
    fn pretty_description_by_handle() {
        let handle = create_game(42.0);
        assert!(describe_game(handle, true).starts_with("A game of Snakes and Ladders with 25 squares:\n"));
    }

    #[test]
    fn roll_dice_from_seed() {
        assert_eq!(roll_dice(6, 5, 42.0), vec![3, 5, 4, 5, 4]);
        assert!(roll_dice(0, 5, 42.0).is_empty());
    }
}
