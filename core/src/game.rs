use serde::Serialize;

use crate::board::Board;
use crate::config::GameConfig;
use crate::dice::Dice;
use crate::error::Result;
use crate::rng::LinearCongruentialGenerator;
use crate::text::TextRepresentable;

/// A game played with a single die.
pub trait DiceGame: TextRepresentable {
    fn dice(&self) -> &Dice;

    /// Current token position.
    fn square(&self) -> usize;

    /// Plays one full game, reporting progress to `delegate` if one is given.
    fn play(&mut self, delegate: Option<&mut dyn DiceGameDelegate>) -> PlaySummary;
}

/// Observer for a running game. The game only borrows it for one `play`.
pub trait DiceGameDelegate {
    fn game_did_start(&mut self, game: &dyn DiceGame);
    fn game_did_roll(&mut self, game: &dyn DiceGame, roll: u32);
    fn game_did_resolve_turn(&mut self, _game: &dyn DiceGame, _turn: &Turn) {}
    fn game_did_end(&mut self, game: &dyn DiceGame);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    InProgress,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TurnOutcome {
    /// Landed on `landed` and then followed its jump.
    Moved { landed: usize, jump: i32 },
    /// Roll would pass the final square; the token stays put.
    Overshot,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Turn {
    pub turn: u32,
    pub roll: u32,
    pub from: usize,
    pub to: usize,
    pub outcome: TurnOutcome,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaySummary {
    pub turns: u32,
    pub final_square: usize,
}

pub struct SnakesAndLadders {
    board: Board,
    dice: Dice,
    square: usize,
    turns: u32,
    state: GameState,
}

impl SnakesAndLadders {
    /// Fails when `dice` cannot get a token from square 0 to the end of `board`.
    pub fn new(board: Board, dice: Dice) -> Result<Self> {
        board.check_escapable(dice.sides())?;
        Ok(Self::assemble(board, dice))
    }

    /// The 25-square board with a default-seeded d6.
    pub fn classic() -> Self {
        Self::assemble(Board::classic(), Dice::d6())
    }

    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let dice = Dice::new(
            config.dice_sides,
            Box::new(LinearCongruentialGenerator::with_seed(config.seed)),
        )?;
        Self::new(config.board()?, dice)
    }

    fn assemble(board: Board, dice: Dice) -> Self {
        Self {
            board,
            dice,
            square: 0,
            turns: 0,
            state: GameState::NotStarted,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Puts the token back on square 0 and starts a new game.
    pub fn begin(&mut self) {
        self.square = 0;
        self.turns = 0;
        self.state = GameState::InProgress;
    }

    /// Rolls once and resolves the move. Calling this outside a running
    /// game starts one first.
    pub fn take_turn(&mut self) -> Turn {
        if self.state != GameState::InProgress {
            self.begin();
        }
        let roll = self.dice.roll();
        self.advance(roll)
    }

    fn advance(&mut self, roll: u32) -> Turn {
        self.turns += 1;
        let from = self.square;
        let final_square = self.board.final_square();
        let candidate = from + roll as usize;

        let outcome = if candidate == final_square {
            self.square = final_square;
            self.state = GameState::Finished;
            TurnOutcome::Finished
        } else if candidate > final_square {
            TurnOutcome::Overshot
        } else {
            self.square = self.board.destination(candidate);
            TurnOutcome::Moved {
                landed: candidate,
                jump: self.board.offset_at(candidate),
            }
        };

        tracing::debug!(turn = self.turns, roll, from, to = self.square, ?outcome, "turn resolved");

        Turn {
            turn: self.turns,
            roll,
            from,
            to: self.square,
            outcome,
        }
    }
}

impl DiceGame for SnakesAndLadders {
    fn dice(&self) -> &Dice {
        &self.dice
    }

    fn square(&self) -> usize {
        self.square
    }

    fn play(&mut self, mut delegate: Option<&mut dyn DiceGameDelegate>) -> PlaySummary {
        self.begin();
        if let Some(d) = delegate.as_mut() {
            d.game_did_start(&*self);
        }

        while self.state == GameState::InProgress {
            let roll = self.dice.roll();
            if let Some(d) = delegate.as_mut() {
                d.game_did_roll(&*self, roll);
            }
            let turn = self.advance(roll);
            if let Some(d) = delegate.as_mut() {
                d.game_did_resolve_turn(&*self, &turn);
            }
        }

        if let Some(d) = delegate.as_mut() {
            d.game_did_end(&*self);
        }

        PlaySummary {
            turns: self.turns,
            final_square: self.square,
        }
    }
}
