//! Greedy nearest-neighbor construction.

use std::collections::VecDeque;

use log::debug;

use super::types::{SearchStats, Tour, TspResult, TspSolver};
use crate::error::{Result, TourError};
use crate::graph::{cycle_cost, validate_oracle, CostOracle};

/// Greedy heuristic: from the start, repeatedly move to the unvisited
/// neighbour reachable by the cheapest edge (lowest index on ties).
///
/// The walk is a single path, not a traversal: each step queues at most
/// one successor and stops when none is left. The result is accepted only
/// if it covers every vertex and the closing edge exists; otherwise the
/// tour is `None`. There is no backtracking, so this can fail on graphs
/// that do have a round trip.
///
/// # Examples
///
/// ```
/// use u_tour::graph::CostMatrix;
/// use u_tour::tsp::{NearestNeighborSolver, TspSolver};
///
/// let m = CostMatrix::from_rows(&[
///     vec![0, 10, 15, 20],
///     vec![10, 0, 35, 25],
///     vec![15, 35, 0, 30],
///     vec![20, 25, 30, 0],
/// ])
/// .unwrap();
/// let result = NearestNeighborSolver::new(0).solve(&m).unwrap();
/// assert_eq!(result.route(), Some(&[0, 1, 3, 2][..]));
/// assert!(result.cost().unwrap() >= 80);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighborSolver {
    start: usize,
}

impl NearestNeighborSolver {
    /// Creates a solver that starts its walk at vertex `start`.
    pub fn new(start: usize) -> Self {
        Self { start }
    }

    pub fn start(&self) -> usize {
        self.start
    }
}

impl TspSolver for NearestNeighborSolver {
    fn solve<G: CostOracle + ?Sized>(&self, graph: &G) -> Result<TspResult> {
        let n = validate_oracle(graph)?;
        if self.start >= n {
            return Err(TourError::VertexOutOfRange {
                vertex: self.start,
                count: n,
            });
        }

        let mut visited = vec![false; n];
        let mut route = Vec::with_capacity(n);
        let mut stats = SearchStats::default();
        let mut pending = VecDeque::from([self.start]);

        while let Some(current) = pending.pop_front() {
            stats.nodes_explored += 1;
            visited[current] = true;
            route.push(current);

            let mut nearest: Option<(usize, u32)> = None;
            for next in 0..n {
                if visited[next] {
                    continue;
                }
                let weight = graph.edge_cost(current, next);
                if weight > 0 && nearest.map_or(true, |(_, w)| weight < w) {
                    nearest = Some((next, weight));
                }
            }
            if let Some((next, _)) = nearest {
                pending.push_back(next);
            }
        }

        let tour = if route.len() == n {
            stats.candidates = 1;
            cycle_cost(graph, &route).map(|cost| Tour { route, cost })
        } else {
            None
        };
        debug!(
            "nearest neighbor: start={} steps={} cost={:?}",
            self.start,
            stats.nodes_explored,
            tour.as_ref().map(|t| t.cost)
        );
        Ok(TspResult::new(tour, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate;
    use crate::graph::CostMatrix;
    use crate::tsp::BranchAndBoundSolver;

    #[test]
    fn test_follows_cheapest_edge() {
        // Vertex 3 only touches 0 and 2; the cheap 0-2 edge lures the walk away from it.
        let rows: Vec<Vec<u32>> = vec![
            vec![0, 2, 1, 5],
            vec![2, 0, 1, 0],
            vec![1, 1, 0, 3],
            vec![5, 0, 3, 0],
        ];
        let result = NearestNeighborSolver::new(0).solve(&rows).unwrap();
        // 0 -> 2 (1) -> 1 (1) -> stuck: 1 has no edge to 3.
        assert!(result.tour.is_none());
        assert_eq!(result.stats.nodes_explored, 3);

        let exact = BranchAndBoundSolver::new().solve(&rows).unwrap();
        assert_eq!(exact.cost(), Some(11));
    }

    #[test]
    fn test_missing_closing_edge() {
        let mut line = CostMatrix::new(3);
        line.set(0, 1, 1).unwrap();
        line.set(1, 2, 1).unwrap();
        let result = NearestNeighborSolver::new(0).solve(&line).unwrap();
        assert!(result.tour.is_none());
        assert_eq!(result.stats.nodes_explored, 3);
    }

    #[test]
    fn test_ring_from_any_start() {
        let ring = generate::ring(6, 2);
        for start in 0..6 {
            let result = NearestNeighborSolver::new(start).solve(&ring).unwrap();
            let tour = result.tour.unwrap();
            assert_eq!(tour.route[0], start);
            assert_eq!(tour.cost, 12);
        }
    }

    #[test]
    fn test_never_beats_optimum() {
        for seed in 0..20 {
            let m = generate::complete(7, 40, seed);
            let exact = BranchAndBoundSolver::new().solve(&m).unwrap().cost().unwrap();
            for start in 0..7 {
                let greedy = NearestNeighborSolver::new(start).solve(&m).unwrap();
                assert!(greedy.cost().unwrap() >= exact);
            }
        }
    }

    #[test]
    fn test_invalid_input() {
        let m = generate::ring(4, 1);
        assert_eq!(
            NearestNeighborSolver::new(4).solve(&m),
            Err(TourError::VertexOutOfRange { vertex: 4, count: 4 })
        );
        assert_eq!(
            NearestNeighborSolver::new(0).solve(&CostMatrix::new(0)),
            Err(TourError::EmptyGraph)
        );
        let rows: Vec<Vec<u32>> = vec![vec![0, 1], vec![2, 0]];
        assert!(matches!(
            NearestNeighborSolver::new(0).solve(&rows),
            Err(TourError::Asymmetric { .. })
        ));
    }

    #[test]
    fn test_single_vertex() {
        let result = NearestNeighborSolver::new(0).solve(&CostMatrix::new(1)).unwrap();
        assert!(result.tour.is_none());
    }
}
