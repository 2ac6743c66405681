//! Seeded random instance generation
//!
//! Uniform random preference permutations from a ChaCha8 stream cipher RNG.
//! Same seed, same instance — sweeps are reproducible across hosts.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use types::instance::Instance;

/// Deterministic instance generator
pub struct InstanceGenerator {
    rng: ChaCha8Rng,
}

impl InstanceGenerator {
    /// Create a generator with a deterministic seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate one instance with uniformly shuffled preference lists
    pub fn instance(&mut self, n: usize) -> Instance {
        let proposer_prefs = self.side(n);
        let receiver_prefs = self.side(n);
        Instance::from_raw(proposer_prefs, receiver_prefs)
            .expect("shuffled lists are permutations by construction")
    }

    fn side(&mut self, n: usize) -> Vec<Vec<usize>> {
        (0..n)
            .map(|_| {
                let mut prefs: Vec<usize> = (0..n).collect();
                prefs.shuffle(&mut self.rng);
                prefs
            })
            .collect()
    }
}

/// Per-trial seed schedule used by the scalability sweep
pub fn trial_seed(base_seed: u64, n: usize, trial: u32) -> u64 {
    base_seed
        .wrapping_add((n as u64).wrapping_mul(100))
        .wrapping_add(trial as u64)
}
