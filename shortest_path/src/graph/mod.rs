pub mod dijkstra;
pub mod invariant;
pub mod matrix;
pub mod path;
pub mod state;
