//! Weighted undirected graphs and the cost oracle consumed by the solvers.
//!
//! Search components never see labels. They query a [`CostOracle`], a dense
//! index-keyed view where `edge_cost(i, j) == 0` means "no edge". Labels
//! live only in [`Graph`], which translates them once at the boundary.
//!
//! # Key Components
//!
//! - **Oracle**: [`CostOracle`] — `vertex_count` + `edge_cost`
//! - **Storage**: [`CostMatrix`] — dense symmetric `n × n` matrix
//! - **Labels**: [`Graph`] — unique location labels over a `CostMatrix`
//! - **Costing**: [`round_trip_cost`] — closed-cycle cost or `None`

mod labeled;
mod matrix;
mod types;

pub use labeled::{Graph, LabeledTour};
pub use matrix::CostMatrix;
pub use types::{round_trip_cost, validate_oracle, CostOracle};

pub(crate) use types::{check_vertex_limit, cycle_cost};
