use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "shortest_path",
    about = "Shortest path between two vertices of a weighted adjacency matrix",
    version
)]
pub struct Cli {
    /// JSON file holding a square matrix of weights (0 = no edge).
    /// The built-in 5-vertex sample graph is used when omitted.
    #[arg(long)]
    pub graph: Option<PathBuf>,
    #[arg(long, default_value_t = 0)]
    pub start: usize,
    #[arg(long, default_value_t = 4)]
    pub end: usize,
    /// Print the full search outcome as JSON.
    #[arg(long)]
    pub json: bool,
}
