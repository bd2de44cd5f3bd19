//! Round-trip (travelling salesman) solvers.
//!
//! All solvers consume a [`CostOracle`](crate::graph::CostOracle), validate
//! it before searching, and return a [`TspResult`] whose `tour` is `None`
//! when no round trip exists.
//!
//! # Solvers
//!
//! - [`BruteForceSolver`]: evaluates every permutation. Exact, O(n!·n).
//! - [`BranchAndBoundSolver`]: DFS from vertex 0, pruning partial routes
//!   that already cost at least the incumbent. Exact.
//! - [`NearestNeighborSolver`]: greedy walk along the cheapest unvisited
//!   edge. O(n²), may fail even when a tour exists, never beats the optimum.
//!
//! # References
//!
//! - Little, Murty, Sweeney & Karel (1963), "An Algorithm for the Traveling
//!   Salesman Problem", *Operations Research* 11(6)
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several Heuristics
//!   for the Traveling Salesman Problem", *SIAM J. Comput.* 6(3)

mod branch_bound;
mod brute_force;
mod config;
mod nearest_neighbor;
mod types;

pub use branch_bound::BranchAndBoundSolver;
pub use brute_force::BruteForceSolver;
pub use config::BruteForceConfig;
pub use nearest_neighbor::NearestNeighborSolver;
pub use types::{SearchStats, Tour, TspResult, TspSolver};
