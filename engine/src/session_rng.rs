use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_produces_same_sequence() {
        let mut a = SessionRng::new(99);
        let mut b = SessionRng::new(99);
        for _ in 0..16 {
            let x: usize = a.random_range(0..9);
            let y: usize = b.random_range(0..9);
            assert_eq!(x, y);
        }
    }

    #[test]
    fn test_seed_is_exposed_for_reproduction() {
        let rng = SessionRng::new(7);
        assert_eq!(rng.seed(), 7);
    }
}
