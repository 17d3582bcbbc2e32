//! Per-query search state.
//!
//! Variables:
//!   dist[v]    = best known distance start -> v, INF until discovered
//!   visited[v] = true once dist[v] is final
//!   prev[v]    = predecessor of v on the best known path
//!
//! Initialise: dist[start] = 0, dist[v] = INF for v != start,
//!             visited[v] = false, prev[v] = None
//!
//! A state is created by the engine at the start of every query and is never
//! shared between queries.

use serde::Serialize;

use super::matrix::Weight;

pub const INF: Weight = Weight::INFINITY;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchState {
    distances: Vec<Weight>,
    visited: Vec<bool>,
    previous: Vec<Option<usize>>,
}

impl SearchState {
    pub(crate) fn new(vertex_count: usize, start: usize) -> Self {
        let mut distances = vec![INF; vertex_count];
        distances[start] = 0.0;
        Self {
            distances,
            visited: vec![false; vertex_count],
            previous: vec![None; vertex_count],
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        distances: Vec<Weight>,
        visited: Vec<bool>,
        previous: Vec<Option<usize>>,
    ) -> Self {
        Self { distances, visited, previous }
    }

    pub fn distances(&self) -> &[Weight] {
        &self.distances
    }

    pub fn visited(&self) -> &[bool] {
        &self.visited
    }

    pub fn previous(&self) -> &[Option<usize>] {
        &self.previous
    }

    /// `None` when `vertex` is outside this state.
    pub fn distance(&self, vertex: usize) -> Option<Weight> {
        self.distances.get(vertex).copied()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distances.get(vertex).is_some_and(|&d| d != INF)
    }

    pub(crate) fn is_visited(&self, vertex: usize) -> bool {
        self.visited[vertex]
    }

    pub(crate) fn mark_visited(&mut self, vertex: usize) {
        self.visited[vertex] = true;
    }

    pub(crate) fn update(&mut self, vertex: usize, distance: Weight, via: usize) {
        self.distances[vertex] = distance;
        self.previous[vertex] = Some(via);
    }

    pub(crate) fn len(&self) -> usize {
        self.distances.len()
    }
}
