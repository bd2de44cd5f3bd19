//! Labeled locations over a dense cost matrix.

use std::collections::HashMap;

use super::matrix::CostMatrix;
use super::types::{round_trip_cost, CostOracle};
use crate::error::{Result, TourError};
use crate::hamiltonian::HamiltonianDetector;
use crate::tsp::{
    BranchAndBoundSolver, BruteForceSolver, NearestNeighborSolver, TspResult, TspSolver,
};

/// A round trip expressed in location labels.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledTour {
    /// Locations in visiting order; the return to the first is implied.
    pub stops: Vec<String>,
    /// Total cost including the closing edge.
    pub cost: u64,
}

/// Undirected weighted graph over uniquely labeled locations.
///
/// Labels are resolved to indices once per call; the solvers run on the
/// underlying [`CostMatrix`] through [`CostOracle`]. Mutation needs
/// `&mut self`, so a graph cannot change while a search borrows it.
///
/// # Examples
///
/// ```
/// use u_tour::graph::Graph;
///
/// let mut g = Graph::new(["1", "2", "3", "4"]).unwrap();
/// g.add_edge("1", "2", 10).unwrap();
/// g.add_edge("1", "3", 15).unwrap();
/// g.add_edge("1", "4", 20).unwrap();
/// g.add_edge("3", "2", 35).unwrap();
/// g.add_edge("4", "2", 25).unwrap();
/// g.add_edge("4", "3", 30).unwrap();
///
/// let best = g.shortest_round_trip_backtrack().unwrap().unwrap();
/// assert_eq!(best.cost, 80);
/// assert_eq!(best.stops, ["1", "2", "4", "3"]);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GraphParts", into = "GraphParts")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    labels: Vec<String>,
    index: HashMap<String, usize>,
    matrix: CostMatrix,
}

impl Graph {
    /// Creates an edgeless graph over the given labels.
    ///
    /// # Errors
    ///
    /// [`TourError::DuplicateLabel`] if a label repeats.
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let matrix = CostMatrix::new(labels.len());
        Self::assemble(labels, matrix)
    }

    /// Creates a graph from labels and a full cost matrix.
    pub fn from_matrix<I, S>(labels: I, rows: &[Vec<u32>]) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let matrix = CostMatrix::from_rows(rows)?;
        Self::assemble(labels, matrix)
    }

    fn assemble(labels: Vec<String>, matrix: CostMatrix) -> Result<Self> {
        if labels.len() != matrix.len() {
            return Err(TourError::LabelCountMismatch {
                labels: labels.len(),
                vertices: matrix.len(),
            });
        }
        let mut index = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if index.insert(label.clone(), i).is_some() {
                return Err(TourError::DuplicateLabel(label.clone()));
            }
        }
        Ok(Self {
            labels,
            index,
            matrix,
        })
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in index order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The underlying cost matrix.
    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    /// Index of `label`.
    pub fn index_of(&self, label: &str) -> Result<usize> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| TourError::UnknownLabel(label.to_string()))
    }

    /// Label at `index`.
    pub fn label(&self, index: usize) -> Result<&str> {
        self.labels
            .get(index)
            .map(String::as_str)
            .ok_or(TourError::VertexOutOfRange {
                vertex: index,
                count: self.labels.len(),
            })
    }

    /// Translates a route of indices into labels.
    pub fn labels_of(&self, route: &[usize]) -> Result<Vec<&str>> {
        route.iter().map(|&i| self.label(i)).collect()
    }

    /// Adds an edge. Returns `false` (and changes nothing) if the edge
    /// already exists.
    pub fn add_edge(&mut self, a: &str, b: &str, cost: u32) -> Result<bool> {
        let (i, j) = self.edge_endpoints(a, b, cost)?;
        if self.matrix.edge_cost(i, j) != 0 {
            return Ok(false);
        }
        self.matrix.write(i, j, cost);
        Ok(true)
    }

    /// Inserts or overwrites an edge.
    pub fn set_edge(&mut self, a: &str, b: &str, cost: u32) -> Result<()> {
        let (i, j) = self.edge_endpoints(a, b, cost)?;
        self.matrix.write(i, j, cost);
        Ok(())
    }

    /// Removes an edge. Returns `false` if there was none.
    pub fn remove_edge(&mut self, a: &str, b: &str) -> Result<bool> {
        let (i, j) = (self.index_of(a)?, self.index_of(b)?);
        if i == j || self.matrix.edge_cost(i, j) == 0 {
            return Ok(false);
        }
        self.matrix.write(i, j, 0);
        Ok(true)
    }

    /// Whether `a` and `b` share an edge.
    pub fn is_neighbour(&self, a: &str, b: &str) -> Result<bool> {
        Ok(self.cost(a, b)? > 0)
    }

    /// Edge cost between `a` and `b`, `0` if there is no edge.
    pub fn cost(&self, a: &str, b: &str) -> Result<u32> {
        Ok(self.matrix.edge_cost(self.index_of(a)?, self.index_of(b)?))
    }

    /// Labels adjacent to `label`, in index order.
    pub fn neighbours(&self, label: &str) -> Result<Vec<&str>> {
        let i = self.index_of(label)?;
        Ok(self
            .matrix
            .neighbours(i)?
            .map(|(j, _)| self.labels[j].as_str())
            .collect())
    }

    /// Indices adjacent to `index`, in index order.
    pub fn neighbours_of(&self, index: usize) -> Result<Vec<usize>> {
        Ok(self.matrix.neighbours(index)?.map(|(j, _)| j).collect())
    }

    /// Cost of visiting `stops` in order and returning to the first, or
    /// `None` if an edge is missing.
    pub fn round_trip_cost<S: AsRef<str>>(&self, stops: &[S]) -> Result<Option<u64>> {
        let route = stops
            .iter()
            .map(|s| self.index_of(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        round_trip_cost(&self.matrix, &route)
    }

    /// Whether a round trip through every location exists.
    pub fn is_hamiltonian(&self) -> Result<bool> {
        HamiltonianDetector::default().is_hamiltonian(&self.matrix)
    }

    /// Cheapest round trip by exhaustive enumeration.
    pub fn shortest_round_trip_brute(&self) -> Result<Option<LabeledTour>> {
        let result = BruteForceSolver::default().solve(&self.matrix)?;
        self.label_result(result)
    }

    /// Cheapest round trip by branch-and-bound, starting at the first label.
    pub fn shortest_round_trip_backtrack(&self) -> Result<Option<LabeledTour>> {
        let result = BranchAndBoundSolver::new().solve(&self.matrix)?;
        self.label_result(result)
    }

    /// Greedy nearest-neighbor round trip from `start`.
    pub fn greedy_round_trip(&self, start: &str) -> Result<Option<LabeledTour>> {
        let start = self.index_of(start)?;
        let result = NearestNeighborSolver::new(start).solve(&self.matrix)?;
        self.label_result(result)
    }

    fn label_result(&self, result: TspResult) -> Result<Option<LabeledTour>> {
        let Some(tour) = result.tour else {
            return Ok(None);
        };
        let stops = self
            .labels_of(&tour.route)?
            .into_iter()
            .map(str::to_string)
            .collect();
        Ok(Some(LabeledTour {
            stops,
            cost: tour.cost,
        }))
    }

    fn edge_endpoints(&self, a: &str, b: &str, cost: u32) -> Result<(usize, usize)> {
        let (i, j) = (self.index_of(a)?, self.index_of(b)?);
        if i == j {
            return Err(TourError::SelfLoop(a.to_string()));
        }
        if cost == 0 {
            return Err(TourError::ZeroCost {
                from: a.to_string(),
                to: b.to_string(),
            });
        }
        Ok((i, j))
    }
}

impl CostOracle for Graph {
    fn vertex_count(&self) -> usize {
        self.matrix.vertex_count()
    }

    fn edge_cost(&self, from: usize, to: usize) -> u32 {
        self.matrix.edge_cost(from, to)
    }
}

/// Serialized form of [`Graph`]; the label index is rebuilt on load.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GraphParts {
    labels: Vec<String>,
    matrix: CostMatrix,
}

#[cfg(feature = "serde")]
impl TryFrom<GraphParts> for Graph {
    type Error = TourError;

    fn try_from(parts: GraphParts) -> Result<Self> {
        Self::assemble(parts.labels, parts.matrix)
    }
}

#[cfg(feature = "serde")]
impl From<Graph> for GraphParts {
    fn from(graph: Graph) -> Self {
        Self {
            labels: graph.labels,
            matrix: graph.matrix,
        }
    }
}
