use std::collections::VecDeque;

use crate::config::Jump;
use crate::error::{GameError, Result};

/// What sits on a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SquareKind {
    Plain,
    Ladder,
    Snake,
}

/// Fixed-size linear board of jump offsets, indexed `0..=final_square`.
///
/// Every jump sits on `1..final` and lands on `0..final`, so the final
/// square is only ever reached by an exact roll.
#[derive(Clone, Debug)]
pub struct Board {
    offsets: Vec<i32>,
}

impl Board {
    pub fn new(final_square: usize, jumps: &[Jump]) -> Result<Self> {
        if final_square == 0 {
            return Err(GameError::EmptyBoard);
        }
        for jump in jumps {
            if jump.square == 0 || jump.square >= final_square {
                return Err(GameError::JumpOutOfRange {
                    square: jump.square,
                    final_square,
                });
            }
            let target = jump.square as i64 + jump.offset as i64;
            if target < 0 || target >= final_square as i64 {
                return Err(GameError::JumpLeavesBoard {
                    square: jump.square,
                    offset: jump.offset,
                });
            }
        }
        Ok(Self::place(final_square, jumps))
    }

    /// The classic 25-square layout.
    pub fn classic() -> Self {
        Self::place(crate::config::DEFAULT_FINAL_SQUARE, &crate::config::classic_jumps())
    }

    fn place(final_square: usize, jumps: &[Jump]) -> Self {
        let mut offsets = vec![0; final_square + 1];
        for jump in jumps {
            offsets[jump.square] = jump.offset;
        }
        Self { offsets }
    }

    pub fn final_square(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn offset_at(&self, square: usize) -> i32 {
        self.offsets.get(square).copied().unwrap_or(0)
    }

    pub fn kind_at(&self, square: usize) -> SquareKind {
        match self.offset_at(square) {
            o if o > 0 => SquareKind::Ladder,
            o if o < 0 => SquareKind::Snake,
            _ => SquareKind::Plain,
        }
    }

    /// Square reached after landing on `square` and following its jump.
    pub fn destination(&self, square: usize) -> usize {
        (square as i64 + self.offset_at(square) as i64) as usize
    }

    /// Where a token on `square` ends up after rolling `roll`.
    fn step(&self, square: usize, roll: usize) -> usize {
        let candidate = square + roll;
        match candidate.cmp(&self.final_square()) {
            std::cmp::Ordering::Greater => square,
            std::cmp::Ordering::Equal => candidate,
            std::cmp::Ordering::Less => self.destination(candidate),
        }
    }

    /// Checks that a die with `dice_sides` faces can always still finish:
    /// every square reachable from 0 must have a path to the final square.
    pub fn check_escapable(&self, dice_sides: u32) -> Result<()> {
        let final_square = self.final_square();
        // Rolls past the final square always overshoot, so larger faces add nothing.
        let max_roll = (dice_sides as usize).min(final_square);

        let mut incoming = vec![Vec::new(); final_square + 1];
        for square in 0..final_square {
            for roll in 1..=max_roll {
                incoming[self.step(square, roll)].push(square);
            }
        }

        let mut finishes = vec![false; final_square + 1];
        finishes[final_square] = true;
        let mut queue = VecDeque::from([final_square]);
        while let Some(square) = queue.pop_front() {
            for &from in &incoming[square] {
                if !finishes[from] {
                    finishes[from] = true;
                    queue.push_back(from);
                }
            }
        }

        let mut seen = vec![false; final_square + 1];
        seen[0] = true;
        let mut queue = VecDeque::from([0]);
        while let Some(square) = queue.pop_front() {
            if !finishes[square] {
                return Err(GameError::Trapped { square });
            }
            if square == final_square {
                continue;
            }
            for roll in 1..=max_roll {
                let next = self.step(square, roll);
                if !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_offsets() {
        let board = Board::classic();
        assert_eq!(board.final_square(), 25);
        assert_eq!(board.offset_at(3), 8);
        assert_eq!(board.offset_at(14), -10);
        assert_eq!(board.offset_at(24), -8);
        assert_eq!(board.offset_at(5), 0);
        assert_eq!(board.offset_at(99), 0);
    }

    #[test]
    fn ladder_and_snake_destinations() {
        let board = Board::classic();
        assert_eq!(board.destination(3), 11);
        assert_eq!(board.destination(14), 4);
        assert_eq!(board.destination(7), 7);
    }

    #[test]
    fn square_kinds() {
        let board = Board::classic();
        assert_eq!(board.kind_at(6), SquareKind::Ladder);
        assert_eq!(board.kind_at(19), SquareKind::Snake);
        assert_eq!(board.kind_at(25), SquareKind::Plain);
    }

    #[test]
    fn classic_board_can_be_finished() {
        assert!(Board::classic().check_escapable(6).is_ok());
        assert!(Board::classic().check_escapable(u32::MAX).is_ok());
    }

    #[test]
    fn ladder_onto_final_square_is_rejected() {
        let result = Board::new(6, &[Jump { square: 1, offset: 10 }]);
        assert!(matches!(result, Err(GameError::JumpLeavesBoard { square: 1, offset: 10 })));

        let result = Board::new(6, &[Jump { square: 1, offset: 5 }]);
        assert!(matches!(result, Err(GameError::JumpLeavesBoard { square: 1, offset: 5 })));
    }

    #[test]
    fn jump_outside_playable_squares_is_rejected() {
        assert!(matches!(
            Board::new(6, &[Jump { square: 0, offset: 2 }]),
            Err(GameError::JumpOutOfRange { square: 0, .. })
        ));
        assert!(matches!(
            Board::new(6, &[Jump { square: 9, offset: -2 }]),
            Err(GameError::JumpOutOfRange { square: 9, .. })
        ));
        assert!(matches!(Board::new(0, &[]), Err(GameError::EmptyBoard)));
    }

    #[test]
    fn one_sided_die_caught_in_a_loop() {
        // 1 -> 2 -> 3 -> 4 -> 5 jumps back to 2, forever.
        let board = Board::new(10, &[Jump { square: 5, offset: -3 }]).unwrap();
        assert!(matches!(board.check_escapable(1), Err(GameError::Trapped { .. })));
        assert!(board.check_escapable(2).is_ok());
    }

    #[test]
    fn every_approach_to_the_end_jumps_back() {
        let jumps: Vec<Jump> = (19..=24).map(|square| Jump { square, offset: -10 }).collect();
        let board = Board::new(25, &jumps).unwrap();
        assert!(matches!(board.check_escapable(6), Err(GameError::Trapped { .. })));
    }
}
