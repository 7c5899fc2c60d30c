use crate::error::{GameError, Result};
use crate::rng::{LinearCongruentialGenerator, RandomNumberGenerator};

/// An N-sided die driven by any generator.
pub struct Dice {
    sides: u32,
    generator: Box<dyn RandomNumberGenerator>,
}

impl Dice {
    pub fn new(sides: u32, generator: Box<dyn RandomNumberGenerator>) -> Result<Self> {
        if sides == 0 {
            return Err(GameError::InvalidDice);
        }
        Ok(Self { sides, generator })
    }

    /// Six sides over a fresh default-seeded LCG.
    pub fn d6() -> Self {
        Self {
            sides: 6,
            generator: Box::new(LinearCongruentialGenerator::new()),
        }
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Returns a value in `1..=sides`.
    pub fn roll(&mut self) -> u32 {
        let value = self.generator.random() * self.sides as f64;
        // random() < 1.0, the min only guards a misbehaving generator.
        (value as u32).min(self.sides - 1) + 1
    }
}

impl std::fmt::Debug for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dice").field("sides", &self.sides).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn d6_sequence_from_default_seed() {
        let mut dice = Dice::d6();
        let rolls: Vec<u32> = (0..5).map(|_| dice.roll()).collect();
        assert_eq!(rolls, vec![3, 5, 4, 5, 4]);
    }

    #[test]
    fn rolls_stay_within_sides() {
        let mut dice = Dice::new(12, Box::new(LinearCongruentialGenerator::new())).unwrap();
        for _ in 0..2_000 {
            let roll = dice.roll();
            assert!((1..=12).contains(&roll));
        }
    }

    #[test]
    fn zero_sides_is_rejected() {
        let result = Dice::new(0, Box::new(LinearCongruentialGenerator::new()));
        assert!(matches!(result, Err(GameError::InvalidDice)));
    }
}
