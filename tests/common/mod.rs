#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;

pub const SEED: u64 = 0x5eed_d161;

pub const SAMPLES: usize = 10_000;

/// Deterministic generator so failures can be replayed.
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

pub fn relative_error(actual: f64, expected: f64) -> f64 {
    ((actual - expected) / expected).abs()
}
