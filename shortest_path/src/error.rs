use thiserror::Error;

use crate::graph::matrix::Weight;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("the graph cannot be empty")]
    EmptyGraph,
    #[error("the graph must be a square matrix: row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix { row: usize, len: usize, expected: usize },
    #[error("the graph cannot have negative weights: entry ({row}, {col}) is {weight}")]
    NegativeWeight { row: usize, col: usize, weight: Weight },
    #[error("edge weights must be finite: entry ({row}, {col}) is {weight}")]
    NonFiniteWeight { row: usize, col: usize, weight: Weight },
    #[error("distance overflows along edge ({from}, {to})")]
    DistanceOverflow { from: usize, to: usize },
    #[error("search state has {actual} vertices, graph has {expected}")]
    StateMismatch { expected: usize, actual: usize },
    #[error("invalid vertex {vertex}: graph has {vertex_count} vertices")]
    InvalidVertex { vertex: usize, vertex_count: usize },
}
