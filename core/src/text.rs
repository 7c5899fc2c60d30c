//! Textual descriptions for game objects.
//!
//! Collections pick up `TextRepresentable` whenever their elements have it,
//! so a `Vec<Dice>` or a slice of `&dyn TextRepresentable` describe
//! themselves as a bracketed list.

use crate::board::SquareKind;
use crate::dice::Dice;
use crate::game::SnakesAndLadders;

pub trait TextRepresentable {
    fn textual_description(&self) -> String;
}

/// A longer, multi-line rendering on top of the plain description.
pub trait PrettyTextRepresentable: TextRepresentable {
    fn pretty_textual_description(&self) -> String;
}

impl TextRepresentable for Dice {
    fn textual_description(&self) -> String {
        format!("A {}-sided dice", self.sides())
    }
}

impl TextRepresentable for SnakesAndLadders {
    fn textual_description(&self) -> String {
        format!(
            "A game of Snakes and Ladders with {} squares",
            self.board().final_square()
        )
    }
}

impl PrettyTextRepresentable for SnakesAndLadders {
    fn pretty_textual_description(&self) -> String {
        let board = self.board();
        let squares: Vec<&str> = (1..=board.final_square())
            .map(|square| match board.kind_at(square) {
                SquareKind::Ladder => "▲",
                SquareKind::Snake => "▼",
                SquareKind::Plain => "○",
            })
            .collect();
        format!("{}:\n{}", self.textual_description(), squares.join(" "))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hamster {
    pub name: String,
}

impl Hamster {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl TextRepresentable for Hamster {
    fn textual_description(&self) -> String {
        format!("A hamster named {}", self.name)
    }
}

impl<T: TextRepresentable> TextRepresentable for [T] {
    fn textual_description(&self) -> String {
        let items: Vec<String> = self.iter().map(|item| item.textual_description()).collect();
        format!("[{}]", items.join(", "))
    }
}

impl<T: TextRepresentable> TextRepresentable for Vec<T> {
    fn textual_description(&self) -> String {
        self.as_slice().textual_description()
    }
}

impl<T: TextRepresentable + ?Sized> TextRepresentable for &T {
    fn textual_description(&self) -> String {
        (**self).textual_description()
    }
}

impl<T: TextRepresentable + ?Sized> TextRepresentable for Box<T> {
    fn textual_description(&self) -> String {
        (**self).textual_description()
    }
}
