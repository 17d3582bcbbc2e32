//! Dense adjacency-matrix graph representation.
//!
//! Variables:
//!   V          = number of vertices
//!   cells[u][v] = Some(w) for a directed edge u -> v of weight w, None otherwise
//!
//! Invariants (checked once, at construction):
//!   V > 0
//!   |cells[u]| = V          for every u
//!   w >= 0 and w finite     for every Some(w)
//!
//! Numeric input (`from_weights`) encodes "no edge" as 0, so a zero-weight
//! edge can only be expressed through `from_cells`.

use serde::Deserialize;
use tracing::debug;

use super::invariant::{Finite, Invariant, NonNegative};
use crate::error::GraphError;

pub type Weight = f64;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<Vec<Weight>>")]
pub struct AdjacencyMatrix {
    cells: Vec<Vec<Option<Weight>>>,
}

impl AdjacencyMatrix {
    /// Build from numeric rows where `0` marks the absence of an edge.
    pub fn from_weights(rows: Vec<Vec<Weight>>) -> Result<Self, GraphError> {
        let cells = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|w| if w == 0.0 { None } else { Some(w) })
                    .collect()
            })
            .collect();
        Self::from_cells(cells)
    }

    /// Build from explicit cells; `Some(0.0)` is a real zero-weight edge.
    pub fn from_cells(cells: Vec<Vec<Option<Weight>>>) -> Result<Self, GraphError> {
        validate(&cells)?;
        let matrix = Self { cells };
        debug!(
            vertices = matrix.vertex_count(),
            edges = matrix.edge_count(),
            "validated adjacency matrix"
        );
        Ok(matrix)
    }

    pub fn vertex_count(&self) -> usize {
        self.cells.len()
    }

    pub fn edge_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_some()).count())
            .sum()
    }

    pub fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Weight of the edge `from -> to`, or `None` when there is no such edge
    /// or either vertex is out of range.
    pub fn weight(&self, from: usize, to: usize) -> Option<Weight> {
        self.cells.get(from)?.get(to).copied().flatten()
    }

    /// Out-edges of `vertex` as `(to, weight)` in ascending `to` order.
    pub fn neighbours(&self, vertex: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        self.cells
            .get(vertex)
            .into_iter()
            .flat_map(|row| row.iter().enumerate())
            .filter_map(|(to, cell)| cell.map(|w| (to, w)))
    }
}

impl TryFrom<Vec<Vec<Weight>>> for AdjacencyMatrix {
    type Error = GraphError;

    fn try_from(rows: Vec<Vec<Weight>>) -> Result<Self, Self::Error> {
        Self::from_weights(rows)
    }
}

fn validate(cells: &[Vec<Option<Weight>>]) -> Result<(), GraphError> {
    let expected = cells.len();
    if expected == 0 {
        return Err(GraphError::EmptyGraph);
    }

    for (row, entries) in cells.iter().enumerate() {
        if entries.len() != expected {
            return Err(GraphError::NonSquareMatrix {
                row,
                len: entries.len(),
                expected,
            });
        }

        for (col, cell) in entries.iter().enumerate() {
            let Some(weight) = *cell else { continue };
            if !NonNegative.check(&weight) {
                return Err(GraphError::NegativeWeight { row, col, weight });
            }
            if !Finite.check(&weight) {
                return Err(GraphError::NonFiniteWeight { row, col, weight });
            }
        }
    }
    Ok(())
}
