pub mod board;
pub mod config;
pub mod dice;
pub mod error;
pub mod event;
pub mod game;
pub mod game_api;
pub mod naming;
pub mod rng;
pub mod text;
pub mod toggle;
pub mod tracker;

use wasm_bindgen::prelude::*;

pub use config::GameConfig;
pub use dice::Dice;
pub use error::{GameError, Result};
pub use game::{DiceGame, DiceGameDelegate, SnakesAndLadders};
pub use rng::{LinearCongruentialGenerator, RandomNumberGenerator};
pub use tracker::DiceGameTracker;

/// Plays one classic game with dice seeded from `seed` and returns the number of turns.
#[wasm_bindgen]
pub fn play_classic(seed: f64) -> u32 {
    let config = GameConfig {
        seed,
        ..GameConfig::default()
    };
    match SnakesAndLadders::from_config(&config) {
        Ok(mut game) => game.play(None).turns,
        Err(_) => 0,
    }
}
