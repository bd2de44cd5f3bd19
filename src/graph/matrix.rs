//! Dense symmetric cost matrix.

use super::types::CostOracle;
use crate::error::{Result, TourError};

/// Symmetric `n × n` edge-cost matrix stored row-major.
///
/// The diagonal is always zero. Every write goes to both `(i, j)` and
/// `(j, i)`, so the matrix cannot become asymmetric through its own API.
///
/// # Examples
///
/// ```
/// use u_tour::graph::{CostMatrix, CostOracle};
///
/// let mut m = CostMatrix::new(3);
/// m.set(0, 1, 5).unwrap();
/// assert_eq!(m.edge_cost(1, 0), 5);
/// assert_eq!(m.edge_cost(0, 2), 0);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    n: usize,
    costs: Vec<u32>,
}

impl CostMatrix {
    /// Creates an edgeless matrix over `n` vertices.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            costs: vec![0; n * n],
        }
    }

    /// Builds a matrix from rows, rejecting non-square, asymmetric or
    /// self-looping input.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self> {
        let n = rows.len();
        for (row, values) in rows.iter().enumerate() {
            if values.len() != n {
                return Err(TourError::DimensionMismatch {
                    row,
                    expected: n,
                    found: values.len(),
                });
            }
        }
        for i in 0..n {
            if rows[i][i] != 0 {
                return Err(TourError::DiagonalCost {
                    vertex: i,
                    cost: rows[i][i],
                });
            }
            for j in (i + 1)..n {
                if rows[i][j] != rows[j][i] {
                    return Err(TourError::Asymmetric {
                        from: i,
                        to: j,
                        forward: rows[i][j],
                        backward: rows[j][i],
                    });
                }
            }
        }
        Ok(Self {
            n,
            costs: rows.iter().flatten().copied().collect(),
        })
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix has no vertices.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Cost between `i` and `j`, or `None` if either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<u32> {
        if i < self.n && j < self.n {
            Some(self.costs[i * self.n + j])
        } else {
            None
        }
    }

    /// Writes `cost` to both `(i, j)` and `(j, i)`. A cost of `0` removes
    /// the edge.
    pub fn set(&mut self, i: usize, j: usize, cost: u32) -> Result<()> {
        self.check(i)?;
        self.check(j)?;
        if i == j {
            return Err(TourError::DiagonalCost { vertex: i, cost });
        }
        self.write(i, j, cost);
        Ok(())
    }

    /// Symmetric write for indices already known to be in range and distinct.
    pub(crate) fn write(&mut self, i: usize, j: usize, cost: u32) {
        debug_assert!(i < self.n && j < self.n && i != j);
        self.costs[i * self.n + j] = cost;
        self.costs[j * self.n + i] = cost;
    }

    /// Vertices adjacent to `i` with their edge costs, in index order.
    pub fn neighbours(&self, i: usize) -> Result<impl Iterator<Item = (usize, u32)> + '_> {
        self.check(i)?;
        let row = &self.costs[i * self.n..(i + 1) * self.n];
        Ok(row
            .iter()
            .enumerate()
            .filter(move |&(j, &c)| c > 0 && j != i)
            .map(|(j, &c)| (j, c)))
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        (0..self.n)
            .map(|i| {
                ((i + 1)..self.n)
                    .filter(|&j| self.costs[i * self.n + j] > 0)
                    .count()
            })
            .sum()
    }

    /// Copies the matrix out as rows.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        if self.n == 0 {
            return Vec::new();
        }
        self.costs.chunks(self.n).map(<[u32]>::to_vec).collect()
    }

    fn check(&self, vertex: usize) -> Result<()> {
        if vertex < self.n {
            Ok(())
        } else {
            Err(TourError::VertexOutOfRange {
                vertex,
                count: self.n,
            })
        }
    }
}

impl TryFrom<Vec<Vec<u32>>> for CostMatrix {
    type Error = TourError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl From<CostMatrix> for Vec<Vec<u32>> {
    fn from(matrix: CostMatrix) -> Self {
        matrix.to_rows()
    }
}

impl CostOracle for CostMatrix {
    fn vertex_count(&self) -> usize {
        self.n
    }

    fn edge_cost(&self, from: usize, to: usize) -> u32 {
        self.get(from, to).unwrap_or(0)
    }
}
