//! Path reconstruction from a predecessor array.
//!
//!   path = [end, prev[end], prev[prev[end]], ..., start] reversed
//!
//! The walk ends at the first vertex with prev = None. Predecessors are only
//! ever set to finalized vertices, so prev forms a forest rooted at start.

use serde::Serialize;

use super::matrix::{AdjacencyMatrix, Weight};
use super::state::SearchState;

/// Vertices from start to end, inclusive. Empty when end is unreachable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path {
    vertices: Vec<usize>,
}

impl Path {
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn start(&self) -> Option<usize> {
        self.vertices.first().copied()
    }

    pub fn end(&self) -> Option<usize> {
        self.vertices.last().copied()
    }

    /// Sum of the edge weights along the path. `None` for an empty path or
    /// when two consecutive vertices are not joined by an edge.
    pub fn total_weight(&self, graph: &AdjacencyMatrix) -> Option<Weight> {
        if self.is_empty() {
            return None;
        }
        self.vertices
            .windows(2)
            .map(|hop| graph.weight(hop[0], hop[1]))
            .sum()
    }
}

impl From<Path> for Vec<usize> {
    fn from(path: Path) -> Self {
        path.vertices
    }
}

pub fn reconstruct_path(state: &SearchState, end: usize) -> Path {
    if !state.is_reachable(end) {
        return Path::default();
    }

    let mut vertices: Vec<usize> =
        std::iter::successors(Some(end), |&at| state.previous()[at]).collect();
    vertices.reverse();
    Path { vertices }
}
