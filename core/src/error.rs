//! Game errors

use thiserror::Error;

/// Game result type
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors raised while building dice, boards and configs.
///
/// The simulation itself never fails once a game is constructed.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("dice must have at least one side")]
    InvalidDice,

    #[error("final square must be at least 1")]
    EmptyBoard,

    #[error("square {square} is outside the playable range 1..{final_square}")]
    JumpOutOfRange { square: usize, final_square: usize },

    #[error("jump on square {square} by {offset} lands outside the board")]
    JumpLeavesBoard { square: usize, offset: i32 },

    #[error("square {square} is reachable but the final square cannot be reached from it")]
    Trapped { square: usize },

    #[error("invalid game config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
