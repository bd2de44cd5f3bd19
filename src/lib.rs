//! Exact and heuristic round-trip search on small weighted graphs.
//!
//! Provides the search machinery for Hamiltonian cycles and the
//! travelling salesman problem over dense, symmetric cost matrices:
//!
//! - **Permutations**: lexicographic successor and swap-based backtracking
//!   enumeration of `0..n`, with early stop.
//! - **Hamiltonian cycles**: exhaustive permutation testing or edge-guided
//!   DFS, both returning a witness cycle.
//! - **Brute force**: cheapest round trip over every permutation.
//! - **Branch-and-bound**: DFS from a fixed start that prunes partial
//!   routes already as expensive as the incumbent.
//! - **Nearest neighbor**: greedy O(n²) tour construction with a
//!   feasibility check.
//!
//! # Architecture
//!
//! Solvers depend only on the [`graph::CostOracle`] trait: a vertex count
//! and an `edge_cost(i, j)` query where `0` means "no edge". Labels are
//! translated at the boundary by [`graph::Graph`], so the search loops
//! never touch strings. Structural problems (asymmetric costs, bad
//! indices, empty graphs) are [`TourError`]s; "no round trip" is a normal
//! `None` result.
//!
//! # Quick Start
//!
//! ```
//! use u_tour::graph::Graph;
//! use u_tour::tsp::{BranchAndBoundSolver, TspSolver};
//!
//! let g = Graph::from_matrix(
//!     ["A", "B", "C"],
//!     &[vec![0, 2, 9], vec![2, 0, 6], vec![9, 6, 0]],
//! )
//! .unwrap();
//! let result = BranchAndBoundSolver::new().solve(&g).unwrap();
//! assert_eq!(result.cost(), Some(17));
//! assert_eq!(g.labels_of(result.route().unwrap()).unwrap(), ["A", "B", "C"]);
//! ```

pub mod error;
pub mod generate;
pub mod graph;
pub mod hamiltonian;
pub mod permutation;
pub mod tsp;

pub use error::{Result, TourError};
