//! RNG trait abstraction for world generation
//!
//! Decoration and ore placement draw from a `WorldRng`, so the same code runs with:
//! - `rand::thread_rng()` (ambient randomness, decorations differ per run)
//! - a seeded `Xoshiro256StarStar` (fully reproducible worlds and tests)

/// Random number source for generation passes
pub trait WorldRng {
    /// Generate random f64 in [0.0, 1.0)
    fn gen_f64(&mut self) -> f64;

    /// Check if a random value is less than the probability threshold
    fn check_probability(&mut self, probability: f64) -> bool {
        self.gen_f64() < probability
    }

    /// Uniform index in [0, n), i.e. `floor(random * n)`
    fn gen_index(&mut self, n: usize) -> usize {
        let index = (self.gen_f64() * n as f64) as usize;
        index.min(n.saturating_sub(1))
    }

    /// Uniform step in {-1, 0, 1}
    fn gen_step(&mut self) -> i32 {
        self.gen_index(3) as i32 - 1
    }
}

// Blanket implementation for any type implementing rand::Rng
impl<T: ?Sized + rand::Rng> WorldRng for T {
    fn gen_f64(&mut self) -> f64 {
        rand::Rng::r#gen(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_world_rng_gen_f64() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(12345);

        for _ in 0..100 {
            let val = rng.gen_f64();
            assert!(val >= 0.0);
            assert!(val < 1.0);
        }
    }

    #[test]
    fn test_world_rng_check_probability_always_true() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(12345);

        for _ in 0..100 {
            assert!(rng.check_probability(1.0));
        }
    }

    #[test]
    fn test_world_rng_check_probability_always_false() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(12345);

        for _ in 0..100 {
            assert!(!rng.check_probability(0.0));
        }
    }

    #[test]
    fn test_world_rng_gen_index_bounds() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        let mut seen = [false; 5];

        for _ in 0..500 {
            let i = rng.gen_index(5);
            assert!(i < 5);
            seen[i] = true;
        }

        assert!(seen.iter().all(|&s| s), "every index should come up");
        assert_eq!(rng.gen_index(0), 0);
    }

    #[test]
    fn test_world_rng_gen_step() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(99);
        let mut seen = [false; 3];

        for _ in 0..300 {
            let step = rng.gen_step();
            assert!((-1..=1).contains(&step));
            seen[(step + 1) as usize] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_world_rng_deterministic() {
        let mut rng1 = Xoshiro256StarStar::seed_from_u64(42);
        let mut rng2 = Xoshiro256StarStar::seed_from_u64(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_f64().to_bits(), rng2.gen_f64().to_bits());
        }
    }

    #[test]
    fn test_world_rng_as_trait_object() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        let dyn_rng: &mut dyn WorldRng = &mut rng;
        assert!(dyn_rng.gen_f64() < 1.0);
    }
}
