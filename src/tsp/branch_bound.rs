//! Branch-and-bound search from a fixed start vertex.

use log::{debug, trace};

use super::types::{SearchStats, Tour, TspResult, TspSolver};
use crate::error::Result;
use crate::graph::{validate_oracle, CostOracle};

/// Exact solver: depth-first over partial routes starting at vertex 0.
///
/// A partial route is pruned as soon as its accumulated cost reaches the
/// best complete round trip found so far. Fixing the start loses nothing
/// because every cycle has a rotation through vertex 0.
///
/// The incumbent only changes on a strictly cheaper tour, so among
/// equal-cost optima the first one reached in index order wins.
///
/// # Examples
///
/// ```
/// use u_tour::generate;
/// use u_tour::tsp::{BranchAndBoundSolver, TspSolver};
///
/// let ring = generate::ring(5, 2);
/// let result = BranchAndBoundSolver::new().solve(&ring).unwrap();
/// assert_eq!(result.cost(), Some(10));
/// assert_eq!(result.route(), Some(&[0, 1, 2, 3, 4][..]));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchAndBoundSolver;

impl BranchAndBoundSolver {
    pub fn new() -> Self {
        Self
    }
}

impl TspSolver for BranchAndBoundSolver {
    fn solve<G: CostOracle + ?Sized>(&self, graph: &G) -> Result<TspResult> {
        let n = validate_oracle(graph)?;
        debug!("branch and bound: n={n}");

        let mut search = Search {
            graph,
            stats: SearchStats::default(),
        };
        let mut path = Vec::with_capacity(n);
        path.push(0);
        let mut placed = vec![false; n];
        placed[0] = true;
        let mut best_cost = u64::MAX;

        let route = search.descend(&mut path, &mut placed, 0, &mut best_cost);
        let tour = route.map(|route| Tour {
            route,
            cost: best_cost,
        });

        debug!(
            "branch and bound: best={:?} nodes={} pruned={}",
            tour.as_ref().map(|t| t.cost),
            search.stats.nodes_explored,
            search.stats.pruned
        );
        Ok(TspResult::new(tour, search.stats))
    }
}

struct Search<'a, G: ?Sized> {
    graph: &'a G,
    stats: SearchStats,
}

impl<G: CostOracle + ?Sized> Search<'_, G> {
    /// Explores every completion of `path`. `best_cost` is the incumbent
    /// shared by the whole search; `u64::MAX` means none yet.
    ///
    /// Returns a route only if this subtree improved the incumbent; the
    /// last one returned is the cheapest.
    fn descend(
        &mut self,
        path: &mut Vec<usize>,
        placed: &mut [bool],
        cost: u64,
        best_cost: &mut u64,
    ) -> Option<Vec<usize>> {
        self.stats.nodes_explored += 1;
        if cost >= *best_cost {
            self.stats.pruned += 1;
            return None;
        }
        let (&first, &last) = (path.first()?, path.last()?);

        if path.len() == placed.len() {
            self.stats.candidates += 1;
            let closing = self.graph.edge_cost(last, first);
            if closing == 0 {
                return None;
            }
            let total = cost + u64::from(closing);
            if total < *best_cost {
                trace!("branch and bound: new best {total} {path:?}");
                *best_cost = total;
                return Some(path.clone());
            }
            return None;
        }

        let mut best_route = None;
        for next in 0..placed.len() {
            if placed[next] {
                continue;
            }
            let weight = self.graph.edge_cost(last, next);
            if weight == 0 {
                continue;
            }
            placed[next] = true;
            path.push(next);
            if let Some(route) = self.descend(path, placed, cost + u64::from(weight), best_cost) {
                best_route = Some(route);
            }
            path.pop();
            placed[next] = false;
        }
        best_route
    }
}
