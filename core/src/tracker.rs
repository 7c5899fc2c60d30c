use tracing::info;

use crate::event::Event;
use crate::game::{DiceGame, DiceGameDelegate, Turn};

/// Delegate that counts turns and keeps the event log of the last game.
#[derive(Debug, Default)]
pub struct DiceGameTracker {
    number_of_turns: u32,
    turns: Vec<Turn>,
    logs: Vec<String>,
}

impl DiceGameTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number_of_turns(&self) -> u32 {
        self.number_of_turns
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    pub fn take_logs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.logs)
    }
}

/// Records an event as a JSON line and mirrors it to the event log target.
fn push_event(logs: &mut Vec<String>, event: Event) {
    let line = event.to_json_line();
    info!(target: "snakes_ladders::events", "{line}");
    logs.push(line);
}

impl DiceGameDelegate for DiceGameTracker {
    fn game_did_start(&mut self, game: &dyn DiceGame) {
        self.number_of_turns = 0;
        self.turns.clear();
        self.logs.clear();
        info!("Started a new game: {}", game.textual_description());
        info!("The game is using a {}-sided dice", game.dice().sides());
        push_event(
            &mut self.logs,
            Event::GameStart {
                description: game.textual_description(),
                dice_sides: game.dice().sides(),
            },
        );
    }

    fn game_did_roll(&mut self, _game: &dyn DiceGame, roll: u32) {
        self.number_of_turns += 1;
        info!("Rolled a {roll}");
        push_event(
            &mut self.logs,
            Event::DiceRolled {
                turn: self.number_of_turns,
                roll,
            },
        );
    }

    fn game_did_resolve_turn(&mut self, _game: &dyn DiceGame, turn: &Turn) {
        self.turns.push(*turn);
        push_event(
            &mut self.logs,
            Event::TurnResolved {
                turn: turn.turn,
                from: turn.from,
                to: turn.to,
                outcome: turn.outcome,
            },
        );
    }

    fn game_did_end(&mut self, _game: &dyn DiceGame) {
        let final_square = self.turns.last().map(|t| t.to).unwrap_or(0);
        push_event(
            &mut self.logs,
            Event::GameEnd {
                turns: self.number_of_turns,
                final_square,
            },
        );
        info!("The game lasted for {} turns", self.number_of_turns);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SnakesAndLadders;

    #[test]
    fn tracker_counts_turns_and_logs_events() {
        let mut game = SnakesAndLadders::classic();
        let mut tracker = DiceGameTracker::new();
        game.play(Some(&mut tracker));

        assert_eq!(tracker.number_of_turns(), 4);
        assert_eq!(tracker.turns().len(), 4);
        // start + (roll + resolve) per turn + end
        assert_eq!(tracker.logs().len(), 1 + 4 * 2 + 1);
        assert!(tracker.logs()[0].contains(r#""kind":"GameStart""#));
        assert!(tracker.logs()[0].contains(r#""dice_sides":6"#));
        assert_eq!(
            tracker.logs().last().map(String::as_str),
            Some(r#"{"kind":"GameEnd","turns":4,"final_square":25}"#)
        );
    }

    #[test]
    fn tracker_resets_between_games() {
        let mut tracker = DiceGameTracker::new();
        SnakesAndLadders::classic().play(Some(&mut tracker));
        SnakesAndLadders::classic().play(Some(&mut tracker));
        assert_eq!(tracker.number_of_turns(), 4);
        assert_eq!(tracker.turns().len(), 4);
    }
}
