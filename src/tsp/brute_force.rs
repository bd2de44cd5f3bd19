//! Exhaustive permutation search.

use std::ops::ControlFlow;

use log::{debug, trace};

use super::config::BruteForceConfig;
use super::types::{SearchStats, Tour, TspResult, TspSolver};
use crate::error::{Result, TourError};
use crate::graph::{check_vertex_limit, cycle_cost, validate_oracle, CostOracle};
use crate::permutation::for_each_suffix_permutation;

/// Exact solver that costs every permutation and keeps the cheapest
/// feasible one. Routes with a missing edge are skipped; among equal-cost
/// optima the first enumerated wins.
///
/// Only practical for roughly `n <= 10`.
///
/// # Examples
///
/// ```
/// use u_tour::graph::CostMatrix;
/// use u_tour::tsp::{BruteForceSolver, TspSolver};
///
/// let m = CostMatrix::from_rows(&[
///     vec![0, 10, 15, 20],
///     vec![10, 0, 35, 25],
///     vec![15, 35, 0, 30],
///     vec![20, 25, 30, 0],
/// ])
/// .unwrap();
/// let result = BruteForceSolver::default().solve(&m).unwrap();
/// assert_eq!(result.cost(), Some(80));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BruteForceSolver {
    config: BruteForceConfig,
}

impl BruteForceSolver {
    pub fn new(config: BruteForceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BruteForceConfig {
        &self.config
    }
}

impl TspSolver for BruteForceSolver {
    fn solve<G: CostOracle + ?Sized>(&self, graph: &G) -> Result<TspResult> {
        self.config.validate().map_err(TourError::InvalidConfig)?;
        let n = validate_oracle(graph)?;
        check_vertex_limit(n, self.config.max_vertices)?;
        debug!(
            "brute force: n={n} strategy={:?} fix_start={}",
            self.config.strategy, self.config.fix_start
        );

        let mut seq: Vec<usize> = (0..n).collect();
        let fixed = usize::from(self.config.fix_start);
        let mut best: Option<Tour> = None;
        let mut stats = SearchStats::default();

        let _ = for_each_suffix_permutation(&mut seq, fixed, self.config.strategy, |perm| {
            stats.nodes_explored += 1;
            stats.candidates += 1;
            if let Some(cost) = cycle_cost(graph, perm) {
                if best.as_ref().map_or(true, |b| cost < b.cost) {
                    trace!("brute force: new best {cost} {perm:?}");
                    best = Some(Tour {
                        route: perm.to_vec(),
                        cost,
                    });
                }
            }
            ControlFlow::Continue(())
        });

        debug!(
            "brute force: best={:?} after {} permutations",
            best.as_ref().map(|t| t.cost),
            stats.candidates
        );
        Ok(TspResult::new(best, stats))
    }
}
