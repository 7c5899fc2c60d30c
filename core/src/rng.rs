/// Anything that can produce a fractional value in `[0, 1)`.
pub trait RandomNumberGenerator {
    fn random(&mut self) -> f64;
}

const LCG_MODULUS: f64 = 139968.0;
const LCG_MULTIPLIER: f64 = 3877.0;
const LCG_INCREMENT: f64 = 29573.0;

pub const DEFAULT_SEED: f64 = 42.0;

/// Small deterministic LCG working directly on `f64` state.
///
/// All intermediate products stay below 2^53, so the sequence is exact and
/// identical across platforms.
#[derive(Clone, Debug)]
pub struct LinearCongruentialGenerator {
    last_random: f64,
}

impl LinearCongruentialGenerator {
    pub fn new() -> Self {
        Self {
            last_random: DEFAULT_SEED,
        }
    }

    /// Seeds are reduced into `[0, modulus)`; non-finite seeds fall back to the default.
    pub fn with_seed(seed: f64) -> Self {
        let seed = if seed.is_finite() { seed } else { DEFAULT_SEED };
        Self {
            last_random: seed.trunc().rem_euclid(LCG_MODULUS),
        }
    }

    pub fn state(&self) -> f64 {
        self.last_random
    }
}

impl Default for LinearCongruentialGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomNumberGenerator for LinearCongruentialGenerator {
    fn random(&mut self) -> f64 {
        self.last_random = (self.last_random * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.last_random / LCG_MODULUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_two_values_follow_the_recurrence() {
        let mut generator = LinearCongruentialGenerator::new();
        assert_eq!(generator.random(), 52439.0 / 139968.0);
        assert_eq!(generator.random(), 102040.0 / 139968.0);
        assert!((52439.0_f64 / 139968.0 - 0.3746499199817101).abs() < 1e-15);
        assert!((102040.0_f64 / 139968.0 - 0.729023776863283).abs() < 1e-15);
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let mut a = LinearCongruentialGenerator::new();
        let mut b = LinearCongruentialGenerator::new();
        for _ in 0..500 {
            assert_eq!(a.random(), b.random());
        }
    }

    #[test]
    fn values_stay_in_unit_interval() {
        let mut generator = LinearCongruentialGenerator::new();
        for _ in 0..10_000 {
            let v = generator.random();
            assert!((0.0..1.0).contains(&v), "value out of range: {v}");
            assert!((0.0..LCG_MODULUS).contains(&generator.state()));
        }
    }

    #[test]
    fn seeds_are_reduced_into_modulus() {
        assert_eq!(LinearCongruentialGenerator::with_seed(-1.0).state(), 139967.0);
        assert_eq!(LinearCongruentialGenerator::with_seed(139968.0 + 42.0).state(), 42.0);
        assert_eq!(LinearCongruentialGenerator::with_seed(f64::NAN).state(), DEFAULT_SEED);
    }
}
