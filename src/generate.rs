//! Instance generators for tests and benchmarks.
//!
//! All generators return a symmetric [`CostMatrix`]. Random instances are
//! reproducible from a seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::CostMatrix;

/// Cycle `0 - 1 - ... - (n-1) - 0` with every edge of cost `weight`.
///
/// For `n < 2` the matrix has no edges (self-loops are not representable).
pub fn ring(n: usize, weight: u32) -> CostMatrix {
    let mut m = CostMatrix::new(n);
    if n >= 2 {
        for i in 0..n {
            m.write(i, (i + 1) % n, weight);
        }
    }
    m
}

/// Complete graph with uniform random costs in `1..=max_cost`.
pub fn complete(n: usize, max_cost: u32, seed: u64) -> CostMatrix {
    random(n, 1.0, max_cost, seed)
}

/// Random graph where each edge is present with probability `density`
/// and has a uniform cost in `1..=max_cost`.
pub fn random(n: usize, density: f64, max_cost: u32, seed: u64) -> CostMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    random_with(n, density, max_cost, &mut rng)
}

/// As [`random`], drawing from a caller-supplied generator.
pub fn random_with<R: Rng>(n: usize, density: f64, max_cost: u32, rng: &mut R) -> CostMatrix {
    let density = density.clamp(0.0, 1.0);
    let max_cost = max_cost.max(1);
    let mut m = CostMatrix::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.random_bool(density) {
                m.write(i, j, rng.random_range(1..=max_cost));
            }
        }
    }
    m
}
