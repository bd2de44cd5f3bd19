//! Error taxonomy for graph construction and search.
//!
//! Only structural problems are errors. A graph without a round trip, or a
//! greedy walk that gets stuck, is a normal outcome and is reported through
//! `Option`/`bool` return values instead.

use thiserror::Error;

/// Errors raised while building a graph or validating search input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// The graph has no vertices.
    #[error("graph must contain at least one vertex")]
    EmptyGraph,

    /// Permutations were requested for an empty sequence.
    #[error("permutation length must be at least 1")]
    EmptyPermutation,

    /// `cost(from, to) != cost(to, from)`.
    #[error("asymmetric edge {from}->{to}: cost {forward} vs reverse cost {backward}")]
    Asymmetric {
        from: usize,
        to: usize,
        forward: u32,
        backward: u32,
    },

    /// A vertex index outside `0..count`.
    #[error("vertex {vertex} out of range for graph with {count} vertices")]
    VertexOutOfRange { vertex: usize, count: usize },

    /// A label that is not part of the graph.
    #[error("unknown location {0:?}")]
    UnknownLabel(String),

    /// The same label was given twice.
    #[error("duplicate location {0:?}")]
    DuplicateLabel(String),

    /// An edge from a location to itself.
    #[error("self-loop on location {0:?} is not allowed")]
    SelfLoop(String),

    /// A non-zero diagonal entry in raw cost data.
    #[error("self-loop on vertex {vertex} with cost {cost}")]
    DiagonalCost { vertex: usize, cost: u32 },

    /// Edge costs must be positive; zero is reserved for "no edge".
    #[error("edge {from:?}-{to:?} must have a positive cost")]
    ZeroCost { from: String, to: String },

    /// A cost matrix row has the wrong length.
    #[error("matrix row {row} has {found} entries, expected {expected}")]
    DimensionMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The number of labels differs from the matrix dimension.
    #[error("{labels} labels for a {vertices}-vertex matrix")]
    LabelCountMismatch { labels: usize, vertices: usize },

    /// A solver configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TourError {
    /// Whether this error signals invalid graph data (as opposed to a bad
    /// configuration or an unknown label at the API boundary).
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            TourError::Asymmetric { .. }
                | TourError::DiagonalCost { .. }
                | TourError::SelfLoop(_)
                | TourError::VertexOutOfRange { .. }
                | TourError::DimensionMismatch { .. }
                | TourError::LabelCountMismatch { .. }
        )
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TourError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_asymmetric() {
        let err = TourError::Asymmetric {
            from: 1,
            to: 2,
            forward: 5,
            backward: 7,
        };
        assert_eq!(
            err.to_string(),
            "asymmetric edge 1->2: cost 5 vs reverse cost 7"
        );
    }

    #[test]
    fn test_is_structural() {
        assert!(TourError::VertexOutOfRange { vertex: 4, count: 3 }.is_structural());
        assert!(TourError::DiagonalCost { vertex: 0, cost: 5 }.is_structural());
        assert!(TourError::SelfLoop("a".into()).is_structural());
        assert!(!TourError::EmptyGraph.is_structural());
        assert!(!TourError::UnknownLabel("x".into()).is_structural());
    }
}
