//! Tour representation, solver results and the solver trait.

use crate::error::Result;
use crate::graph::CostOracle;

/// A closed round trip: each vertex once, closing edge implied.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    /// Vertex indices in visiting order.
    pub route: Vec<usize>,
    /// Sum of all edge costs including the closing edge.
    pub cost: u64,
}

impl Tour {
    /// Number of vertices visited.
    pub fn len(&self) -> usize {
        self.route.len()
    }

    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }

    /// Rotation/direction-independent form of the cycle: rotated to start at
    /// its smallest vertex, then oriented so the second vertex is the
    /// smaller of the two neighbours. Equal cycles have equal canonical forms.
    pub fn canonical(&self) -> Vec<usize> {
        let Some(pivot) = self
            .route
            .iter()
            .enumerate()
            .min_by_key(|&(_, &v)| v)
            .map(|(i, _)| i)
        else {
            return Vec::new();
        };
        let mut out = self.route.clone();
        out.rotate_left(pivot);
        if out.len() > 2 && out[out.len() - 1] < out[1] {
            out[1..].reverse();
        }
        out
    }
}

/// Counters collected during one solve.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search nodes (DFS calls, greedy steps, or permutations) visited.
    pub nodes_explored: u64,
    /// Branches cut by the bound.
    pub pruned: u64,
    /// Complete routes evaluated as candidates.
    pub candidates: u64,
}

/// Result of a solver run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TspResult {
    /// Best tour found, or `None` if no round trip exists (or the heuristic
    /// got stuck).
    pub tour: Option<Tour>,
    /// Search counters.
    pub stats: SearchStats,
}

impl TspResult {
    pub(crate) fn new(tour: Option<Tour>, stats: SearchStats) -> Self {
        Self { tour, stats }
    }

    /// Whether a round trip was found.
    pub fn is_solution_found(&self) -> bool {
        self.tour.is_some()
    }

    /// Cost of the tour, if any.
    pub fn cost(&self) -> Option<u64> {
        self.tour.as_ref().map(|t| t.cost)
    }

    /// Vertex order of the tour, if any.
    pub fn route(&self) -> Option<&[usize]> {
        self.tour.as_ref().map(|t| t.route.as_slice())
    }
}

/// A round-trip solver.
///
/// Implementations validate the oracle (non-empty, symmetric) before
/// searching and never mutate it.
pub trait TspSolver {
    /// Solves the round-trip problem on `graph`.
    fn solve<G: CostOracle + ?Sized>(&self, graph: &G) -> Result<TspResult>;
}
