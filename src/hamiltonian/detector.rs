//! Hamiltonian cycle and path search.

use log::debug;

use super::config::{HamiltonianConfig, HamiltonianStrategy};
use crate::error::{Result, TourError};
use crate::graph::{check_vertex_limit, cycle_cost, validate_oracle, CostOracle};
use crate::permutation::Lexicographic;

/// Decides whether a graph contains a Hamiltonian cycle.
///
/// The input is validated up front: an empty graph or an asymmetric edge
/// is an error, a graph without a cycle is `Ok(None)` / `Ok(false)`.
///
/// # Examples
///
/// ```
/// use u_tour::generate;
/// use u_tour::hamiltonian::HamiltonianDetector;
///
/// let ring = generate::ring(5, 1);
/// assert!(HamiltonianDetector::default().is_hamiltonian(&ring).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HamiltonianDetector {
    config: HamiltonianConfig,
}

impl HamiltonianDetector {
    pub fn new(config: HamiltonianConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HamiltonianConfig {
        &self.config
    }

    /// Returns a Hamiltonian cycle as a vertex order (closing edge implied),
    /// or `None` if the graph has none.
    pub fn find_cycle<G: CostOracle + ?Sized>(&self, graph: &G) -> Result<Option<Vec<usize>>> {
        self.config.validate().map_err(TourError::InvalidConfig)?;
        let n = validate_oracle(graph)?;
        check_vertex_limit(n, self.config.max_vertices)?;

        debug!("hamiltonian: n={n} strategy={:?}", self.config.strategy);
        let cycle = match self.config.strategy {
            HamiltonianStrategy::Permutation => cycle_by_permutation(graph, n)?,
            HamiltonianStrategy::Backtracking => {
                let mut search = PathSearch::new(graph, n, 0, true);
                let found = search.run();
                debug!("hamiltonian: {} nodes explored", search.nodes);
                found
            }
        };
        debug!("hamiltonian: found={}", cycle.is_some());
        Ok(cycle)
    }

    /// Whether the graph has a Hamiltonian cycle.
    pub fn is_hamiltonian<G: CostOracle + ?Sized>(&self, graph: &G) -> Result<bool> {
        Ok(self.find_cycle(graph)?.is_some())
    }
}

/// Finds a path that starts at `start` and visits every vertex exactly once,
/// without requiring an edge back to `start`.
///
/// # Errors
///
/// Structural errors as for [`HamiltonianDetector::find_cycle`], plus
/// [`TourError::VertexOutOfRange`] for a bad `start`.
///
/// # Examples
///
/// ```
/// use u_tour::graph::CostMatrix;
/// use u_tour::hamiltonian::hamiltonian_path_from;
///
/// // 0 - 1 - 2 : a path, but no cycle
/// let line = CostMatrix::from_rows(&[vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]).unwrap();
/// assert_eq!(hamiltonian_path_from(&line, 0).unwrap(), Some(vec![0, 1, 2]));
/// assert_eq!(hamiltonian_path_from(&line, 1).unwrap(), None);
/// ```
pub fn hamiltonian_path_from<G: CostOracle + ?Sized>(
    graph: &G,
    start: usize,
) -> Result<Option<Vec<usize>>> {
    let n = validate_oracle(graph)?;
    if start >= n {
        return Err(TourError::VertexOutOfRange {
            vertex: start,
            count: n,
        });
    }
    Ok(PathSearch::new(graph, n, start, false).run())
}

fn cycle_by_permutation<G: CostOracle + ?Sized>(graph: &G, n: usize) -> Result<Option<Vec<usize>>> {
    let mut perms = Lexicographic::new(n)?;
    let mut tested = 0u64;
    while let Some(perm) = perms.advance() {
        tested += 1;
        if cycle_cost(graph, perm).is_some() {
            debug!("hamiltonian: cycle after {tested} permutations");
            return Ok(Some(perm.to_vec()));
        }
    }
    debug!("hamiltonian: exhausted {tested} permutations");
    Ok(None)
}

/// DFS frontier: the current path and which vertices it already holds.
struct PathSearch<'a, G: ?Sized> {
    graph: &'a G,
    path: Vec<usize>,
    visited: Vec<bool>,
    close: bool,
    nodes: u64,
}

impl<'a, G: CostOracle + ?Sized> PathSearch<'a, G> {
    fn new(graph: &'a G, n: usize, start: usize, close: bool) -> Self {
        let mut visited = vec![false; n];
        visited[start] = true;
        let mut path = Vec::with_capacity(n);
        path.push(start);
        Self {
            graph,
            path,
            visited,
            close,
            nodes: 0,
        }
    }

    fn run(&mut self) -> Option<Vec<usize>> {
        if self.extend() {
            Some(std::mem::take(&mut self.path))
        } else {
            None
        }
    }

    fn extend(&mut self) -> bool {
        self.nodes += 1;
        let (Some(&first), Some(&last)) = (self.path.first(), self.path.last()) else {
            return false;
        };
        if self.path.len() == self.visited.len() {
            return !self.close || self.graph.edge_cost(last, first) > 0;
        }
        for next in 0..self.visited.len() {
            if self.visited[next] || self.graph.edge_cost(last, next) == 0 {
                continue;
            }
            self.visited[next] = true;
            self.path.push(next);
            if self.extend() {
                return true;
            }
            self.path.pop();
            self.visited[next] = false;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate;
    use crate::graph::CostMatrix;

    fn both() -> [HamiltonianDetector; 2] {
        [
            HamiltonianDetector::new(
                HamiltonianConfig::default().with_strategy(HamiltonianStrategy::Permutation),
            ),
            HamiltonianDetector::new(
                HamiltonianConfig::default().with_strategy(HamiltonianStrategy::Backtracking),
            ),
        ]
    }

    fn house() -> Vec<Vec<u32>> {
        vec![
            vec![0, 1, 0, 1, 0],
            vec![1, 0, 1, 1, 1],
            vec![0, 1, 0, 0, 1],
            vec![1, 1, 0, 0, 1],
            vec![0, 1, 1, 1, 0],
        ]
    }

    #[test]
    fn test_ring_is_hamiltonian() {
        let ring = generate::ring(5, 1);
        for detector in both() {
            let cycle = detector.find_cycle(&ring).unwrap().unwrap();
            assert_eq!(cycle.len(), 5);
            assert!(cycle_cost(&ring, &cycle).is_some());
        }
    }

    #[test]
    fn test_broken_ring_is_not_hamiltonian() {
        let mut ring = generate::ring(5, 1);
        ring.set(4, 0, 0).unwrap();
        for detector in both() {
            assert!(!detector.is_hamiltonian(&ring).unwrap());
        }
        // Still a Hamiltonian path from 0.
        assert_eq!(
            hamiltonian_path_from(&ring, 0).unwrap(),
            Some(vec![0, 1, 2, 3, 4])
        );
    }

    #[test]
    fn test_house_graphs() {
        let a = house();
        let mut b = house();
        b[3][4] = 0;
        b[4][3] = 0;
        for detector in both() {
            assert!(detector.is_hamiltonian(&a).unwrap());
            assert!(!detector.is_hamiltonian(&b).unwrap());
        }
        assert!(hamiltonian_path_from(&b, 0).unwrap().is_some());
    }

    #[test]
    fn test_single_and_pair() {
        let single = CostMatrix::new(1);
        let mut pair = CostMatrix::new(2);
        pair.set(0, 1, 3).unwrap();
        for detector in both() {
            assert!(!detector.is_hamiltonian(&single).unwrap());
            assert_eq!(detector.find_cycle(&pair).unwrap(), Some(vec![0, 1]));
        }
        assert_eq!(hamiltonian_path_from(&single, 0).unwrap(), Some(vec![0]));
    }

    #[test]
    fn test_asymmetric_rejected() {
        let mut m = house();
        m[2][1] = 4;
        for detector in both() {
            assert!(matches!(
                detector.is_hamiltonian(&m),
                Err(TourError::Asymmetric { .. })
            ));
        }
        assert!(hamiltonian_path_from(&m, 0).is_err());
    }

    #[test]
    fn test_diagonal_rejected() {
        let single: Vec<Vec<u32>> = vec![vec![5]];
        for detector in both() {
            assert_eq!(
                detector.is_hamiltonian(&single),
                Err(TourError::DiagonalCost { vertex: 0, cost: 5 })
            );
            assert!(detector.find_cycle(&single).is_err());
        }
        assert!(hamiltonian_path_from(&single, 0).is_err());
    }

    #[test]
    fn test_empty_and_bad_start() {
        let empty = CostMatrix::new(0);
        assert_eq!(
            HamiltonianDetector::default().find_cycle(&empty),
            Err(TourError::EmptyGraph)
        );
        assert_eq!(
            hamiltonian_path_from(&house(), 5),
            Err(TourError::VertexOutOfRange { vertex: 5, count: 5 })
        );
    }

    #[test]
    fn test_vertex_limit() {
        let detector = HamiltonianDetector::new(HamiltonianConfig::default().with_max_vertices(4));
        assert!(matches!(
            detector.is_hamiltonian(&house()),
            Err(TourError::InvalidConfig(_))
        ));
    }
}
