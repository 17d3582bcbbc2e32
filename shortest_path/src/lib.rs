//! # Shortest Path Crate
//!
//! Single-pair shortest paths over a dense, non-negative adjacency matrix.
//!
//! ## Modules
//!
//! - `error` – Validation failures for graphs and query vertices
//! - `graph::matrix` – Validated, immutable adjacency matrix
//! - `graph::invariant` – Weight checks applied during validation
//! - `graph::state` – Per-query distances / visited / predecessor arrays
//! - `graph::path` – Path type and predecessor-chain reconstruction
//! - `graph::dijkstra` – The O(V²) linear-scan Dijkstra engine
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use shortest_path::ShortestPathEngine;
//!
//! let engine = ShortestPathEngine::from_weights(vec![
//!     vec![0.0, 10.0, 0.0, 30.0, 100.0],
//!     vec![10.0, 0.0, 50.0, 0.0, 0.0],
//!     vec![0.0, 50.0, 0.0, 20.0, 10.0],
//!     vec![30.0, 0.0, 20.0, 0.0, 60.0],
//!     vec![100.0, 0.0, 10.0, 60.0, 0.0],
//! ])
//! .unwrap();
//!
//! let path = engine.find_shortest_path(0, 4).unwrap();
//! assert_eq!(path.vertices(), &[0, 3, 2, 4]);
//! ```

pub mod error;
pub mod graph;

pub use error::GraphError;
pub use graph::dijkstra::{SearchOutcome, ShortestPathEngine};
pub use graph::matrix::{AdjacencyMatrix, Weight};
pub use graph::path::Path;
pub use graph::state::SearchState;
