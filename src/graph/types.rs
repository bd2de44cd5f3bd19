//! The adjacency-cost oracle and helpers shared by every solver.

use crate::error::{Result, TourError};

/// Read-only adjacency-cost view of an undirected graph.
///
/// Implementors must be symmetric (`edge_cost(i, j) == edge_cost(j, i)`)
/// and must not change while a search borrows them. A cost of `0` means
/// the edge is absent. Solvers only query indices in `0..vertex_count()`.
pub trait CostOracle {
    /// Number of vertices `n`.
    fn vertex_count(&self) -> usize;

    /// Cost of the edge between `from` and `to`, or `0` if there is none.
    fn edge_cost(&self, from: usize, to: usize) -> u32;
}

impl<G: CostOracle + ?Sized> CostOracle for &G {
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn edge_cost(&self, from: usize, to: usize) -> u32 {
        (**self).edge_cost(from, to)
    }
}

/// Raw row-major matrices. Missing entries of ragged rows read as `0`.
impl CostOracle for Vec<Vec<u32>> {
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn edge_cost(&self, from: usize, to: usize) -> u32 {
        self.get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(0)
    }
}

/// Checks that the oracle is non-empty, loop-free and symmetric.
///
/// Returns the vertex count on success. Every solver calls this before
/// searching, so structural violations surface before any route is built.
pub fn validate_oracle<G: CostOracle + ?Sized>(graph: &G) -> Result<usize> {
    let n = graph.vertex_count();
    if n == 0 {
        return Err(TourError::EmptyGraph);
    }
    for from in 0..n {
        let cost = graph.edge_cost(from, from);
        if cost != 0 {
            return Err(TourError::DiagonalCost { vertex: from, cost });
        }
        for to in (from + 1)..n {
            let forward = graph.edge_cost(from, to);
            let backward = graph.edge_cost(to, from);
            if forward != backward {
                return Err(TourError::Asymmetric {
                    from,
                    to,
                    forward,
                    backward,
                });
            }
        }
    }
    Ok(n)
}

/// Rejects `n` above an optional vertex-count guard.
pub(crate) fn check_vertex_limit(n: usize, max_vertices: Option<usize>) -> Result<()> {
    match max_vertices {
        Some(max) if n > max => Err(TourError::InvalidConfig(format!(
            "graph has {n} vertices, limit is {max}"
        ))),
        _ => Ok(()),
    }
}

/// Cost of traversing `route` as a closed cycle.
///
/// Sums consecutive edges plus the closing edge from the last vertex back
/// to the first. Returns `Ok(None)` when any of those edges is missing or
/// the route is empty.
///
/// # Errors
///
/// [`TourError::VertexOutOfRange`] if the route names a vertex `>= n`.
///
/// # Examples
///
/// ```
/// use u_tour::graph::round_trip_cost;
///
/// let square: Vec<Vec<u32>> = vec![
///     vec![0, 1, 0, 1],
///     vec![1, 0, 1, 0],
///     vec![0, 1, 0, 1],
///     vec![1, 0, 1, 0],
/// ];
/// assert_eq!(round_trip_cost(&square, &[0, 1, 2, 3]).unwrap(), Some(4));
/// assert_eq!(round_trip_cost(&square, &[0, 2, 1, 3]).unwrap(), None);
/// ```
pub fn round_trip_cost<G: CostOracle + ?Sized>(graph: &G, route: &[usize]) -> Result<Option<u64>> {
    let count = graph.vertex_count();
    if let Some(&vertex) = route.iter().find(|&&v| v >= count) {
        return Err(TourError::VertexOutOfRange { vertex, count });
    }
    Ok(cycle_cost(graph, route))
}

/// Unchecked variant of [`round_trip_cost`] for routes built by the solvers.
pub(crate) fn cycle_cost<G: CostOracle + ?Sized>(graph: &G, route: &[usize]) -> Option<u64> {
    let (&first, &last) = (route.first()?, route.last()?);
    let mut total = 0u64;
    for pair in route.windows(2) {
        let weight = graph.edge_cost(pair[0], pair[1]);
        if weight == 0 {
            return None;
        }
        total += u64::from(weight);
    }
    match graph.edge_cost(last, first) {
        0 => None,
        closing => Some(total + u64::from(closing)),
    }
}
