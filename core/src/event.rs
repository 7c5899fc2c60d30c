use serde::Serialize;

use crate::game::TurnOutcome;

/// Structured game event emitted from Rust and consumed by the JS side or the CLI log.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Event {
    GameStart {
        description: String,
        dice_sides: u32,
    },
    DiceRolled {
        turn: u32,
        roll: u32,
    },
    TurnResolved {
        turn: u32,
        from: usize,
        to: usize,
        outcome: TurnOutcome,
    },
    GameEnd {
        turns: u32,
        final_square: usize,
    },
}

impl Event {
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
