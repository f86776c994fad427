//! Benchmark utilities for the vecn workspace.
//!
//! Provides deterministic input generators shared by the criterion
//! benches: seeded RNG construction and random vector sampling.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use vecn::VecN;

/// Coordinate range for generated benchmark inputs.
pub const COORD_RANGE: std::ops::Range<f64> = -100.0..100.0;

/// Deterministic RNG for reproducible benchmark inputs.
pub fn bench_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A random vector with coordinates drawn from [`COORD_RANGE`].
pub fn random_vec<const N: usize>(rng: &mut StdRng) -> VecN<f64, N> {
    VecN::from_fn(|_| rng.random_range(COORD_RANGE))
}
