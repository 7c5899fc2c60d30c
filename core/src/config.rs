use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{GameError, Result};
use crate::rng::DEFAULT_SEED;

pub const DEFAULT_FINAL_SQUARE: usize = 25;
pub const DEFAULT_DICE_SIDES: u32 = 6;

/// A ladder (positive offset) or snake (negative offset) on one square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jump {
    pub square: usize,
    pub offset: i32,
}

/// Game setup, loadable from JSON. Missing fields take the classic values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub final_square: usize,
    pub dice_sides: u32,
    pub seed: f64,
    pub jumps: Vec<Jump>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            final_square: DEFAULT_FINAL_SQUARE,
            dice_sides: DEFAULT_DICE_SIDES,
            seed: DEFAULT_SEED,
            jumps: classic_jumps(),
        }
    }
}

pub(crate) fn classic_jumps() -> Vec<Jump> {
    [(3, 8), (6, 11), (9, 9), (10, 2), (14, -10), (19, -11), (22, -2), (24, -8)]
        .into_iter()
        .map(|(square, offset)| Jump { square, offset })
        .collect()
}

impl GameConfig {
    pub fn from_json(input: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let input = std::fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&input)
    }

    pub fn board(&self) -> Result<Board> {
        Board::new(self.final_square, &self.jumps)
    }

    /// Rejects boards with bad jumps and boards a token can get stuck on
    /// with this config's die.
    pub fn validate(&self) -> Result<()> {
        if self.dice_sides == 0 {
            return Err(GameError::InvalidDice);
        }
        self.board()?.check_escapable(self.dice_sides)
    }
}
