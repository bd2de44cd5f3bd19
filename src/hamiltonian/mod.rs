//! Hamiltonian cycle detection.
//!
//! Decides whether a graph has a cycle visiting every vertex exactly once.
//! Both strategies answer the same question and return a witness cycle:
//!
//! - [`HamiltonianStrategy::Permutation`]: tests every lexicographic
//!   permutation as a candidate cycle. O(n!·n).
//! - [`HamiltonianStrategy::Backtracking`]: DFS from vertex 0 that only
//!   extends along existing edges and requires the closing edge at the leaf.
//!
//! [`hamiltonian_path_from`] answers the weaker question of whether a path
//! covering every vertex starts at a given vertex (no closing edge).

mod config;
mod detector;

pub use config::{HamiltonianConfig, HamiltonianStrategy};
pub use detector::{hamiltonian_path_from, HamiltonianDetector};
