//! Dijkstra single-pair shortest path, linear-scan variant.
//!
//! Variables:
//!   V       = number of vertices
//!   w(u, v) = weight of edge u -> v (absent edges are skipped)
//!   dist, visited, prev as in `graph::state`
//!
//! Equations:
//!   Select:  u = argmin { dist[v] | !visited[v], dist[v] < INF }
//!            (lowest index wins ties)
//!   Relax:   for each edge u -> v with !visited[v]:
//!              if dist[u] + w(u, v) < dist[v]:
//!                dist[v] = dist[u] + w(u, v),  prev[v] = u
//!
//!   Loop:    select; stop if none or u == end; visited[u] = true; relax(u)
//!
//!   With w >= 0, dist[u] is final when u is selected, so stopping at end
//!   gives the same answer as running to exhaustion.
//!
//!   Complexity: O(V^2), at most V iterations.

use serde::Serialize;
use tracing::{debug, trace};

use super::matrix::{AdjacencyMatrix, Weight};
use super::path::{reconstruct_path, Path};
use super::state::{SearchState, INF};
use crate::error::GraphError;

/// Result of a single-pair query together with the state it finished in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub start: usize,
    pub end: usize,
    pub path: Path,
    /// `None` when `end` is unreachable.
    pub distance: Option<Weight>,
    pub state: SearchState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathEngine {
    graph: AdjacencyMatrix,
}

impl ShortestPathEngine {
    pub fn new(graph: AdjacencyMatrix) -> Self {
        Self { graph }
    }

    /// Validate numeric rows (`0` = no edge) and build an engine over them.
    pub fn from_weights(rows: Vec<Vec<Weight>>) -> Result<Self, GraphError> {
        AdjacencyMatrix::from_weights(rows).map(Self::new)
    }

    pub fn graph(&self) -> &AdjacencyMatrix {
        &self.graph
    }

    pub fn initialize(&self, start: usize) -> Result<SearchState, GraphError> {
        self.graph.check_vertex(start)?;
        Ok(SearchState::new(self.graph.vertex_count(), start))
    }

    pub fn select_next_vertex(&self, state: &SearchState) -> Option<usize> {
        let mut min_distance = INF;
        let mut next = None;
        for (vertex, &distance) in state.distances().iter().enumerate() {
            if !state.is_visited(vertex) && distance < min_distance {
                min_distance = distance;
                next = Some(vertex);
            }
        }
        next
    }

    /// Fails when `current` is not a vertex of this graph, when `state` was
    /// sized for a different graph, or when a distance overflows to infinity.
    pub fn relax_edges(&self, state: &mut SearchState, current: usize) -> Result<(), GraphError> {
        self.graph.check_vertex(current)?;
        if state.len() != self.graph.vertex_count() {
            return Err(GraphError::StateMismatch {
                expected: self.graph.vertex_count(),
                actual: state.len(),
            });
        }

        let base = state.distances()[current];
        for (neighbour, weight) in self.graph.neighbours(current) {
            if state.is_visited(neighbour) {
                continue;
            }
            let candidate = base + weight;
            if base.is_finite() && candidate.is_infinite() {
                return Err(GraphError::DistanceOverflow {
                    from: current,
                    to: neighbour,
                });
            }
            if candidate < state.distances()[neighbour] {
                trace!(from = current, to = neighbour, distance = candidate, "relaxed edge");
                state.update(neighbour, candidate, current);
            }
        }
        Ok(())
    }

    pub fn find_shortest_path(&self, start: usize, end: usize) -> Result<Path, GraphError> {
        self.search(start, end).map(|outcome| outcome.path)
    }

    /// Like `find_shortest_path`, but also returns the distance to `end` and
    /// the search state at the point the loop stopped.
    pub fn search(&self, start: usize, end: usize) -> Result<SearchOutcome, GraphError> {
        self.graph.check_vertex(end)?;
        let mut state = self.initialize(start)?;
        debug!(start, end, vertices = self.graph.vertex_count(), "shortest path query");

        self.run(&mut state, Some(end))?;

        let path = reconstruct_path(&state, end);
        let distance = state.distance(end).filter(|_| state.is_reachable(end));
        debug!(
            start,
            end,
            hops = path.len().saturating_sub(1),
            ?distance,
            "shortest path query finished"
        );

        Ok(SearchOutcome {
            start,
            end,
            path,
            distance,
            state,
        })
    }

    /// Run the loop without a target, finalizing every reachable vertex.
    pub fn shortest_distances(&self, start: usize) -> Result<SearchState, GraphError> {
        let mut state = self.initialize(start)?;
        debug!(start, vertices = self.graph.vertex_count(), "single-source run");
        self.run(&mut state, None)?;
        Ok(state)
    }

    fn run(&self, state: &mut SearchState, target: Option<usize>) -> Result<(), GraphError> {
        // Each pass visits a new vertex, so the loop ends within V passes.
        for _ in 0..state.len() {
            let Some(current) = self.select_next_vertex(state) else {
                trace!("no reachable unvisited vertex left");
                return Ok(());
            };
            if Some(current) == target {
                trace!(vertex = current, "reached target");
                return Ok(());
            }
            state.mark_visited(current);
            trace!(vertex = current, distance = state.distances()[current], "finalized vertex");
            self.relax_edges(state, current)?;
        }
        Ok(())
    }
}
