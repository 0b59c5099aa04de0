use crate::policies::{Cylinder, DEFAULT_MAX_CYLINDER};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws cylinder requests uniformly from `[0, max_cylinder]`. A negative
/// bound is clamped to 0.
pub struct RequestGenerator {
    pub max_cylinder: Cylinder,
    rng: StdRng,
}

impl RequestGenerator {
    pub fn new(max_cylinder: Cylinder) -> Self {
        RequestGenerator {
            max_cylinder: max_cylinder.max(0),
            rng: StdRng::from_entropy(),
        }
    }

    /// Same sequence for the same seed.
    pub fn seeded(max_cylinder: Cylinder, seed: u64) -> Self {
        RequestGenerator {
            max_cylinder: max_cylinder.max(0),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next_request(&mut self) -> Cylinder {
        self.rng.gen_range(0..=self.max_cylinder.max(0))
    }

    pub fn generate(&mut self, count: usize) -> Vec<Cylinder> {
        (0..count).map(|_| self.next_request()).collect()
    }
}

impl Default for RequestGenerator {
    fn default() -> Self {
        RequestGenerator::new(DEFAULT_MAX_CYLINDER)
    }
}
