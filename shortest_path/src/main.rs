mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use shortest_path::{AdjacencyMatrix, ShortestPathEngine};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "shortest_path=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let graph = match &cli.graph {
        Some(path) => load_graph(path)?,
        None => sample_graph()?,
    };
    tracing::info!(vertices = graph.vertex_count(), edges = graph.edge_count(), "graph loaded");

    let engine = ShortestPathEngine::new(graph);
    let outcome = engine
        .search(cli.start, cli.end)
        .with_context(|| format!("cannot search from {} to {}", cli.start, cli.end))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!(
            "Shortest path from {} to {}: {:?}",
            outcome.start,
            outcome.end,
            outcome.path.vertices()
        );
        println!("Distances from start vertex: {:?}", outcome.state.distances());
    }
    Ok(())
}

fn load_graph(path: &Path) -> Result<AdjacencyMatrix> {
    let data = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("invalid graph in {}", path.display()))
}

fn sample_graph() -> Result<AdjacencyMatrix> {
    let matrix = AdjacencyMatrix::from_weights(vec![
        vec![0.0, 10.0, 0.0, 30.0, 100.0],
        vec![10.0, 0.0, 50.0, 0.0, 0.0],
        vec![0.0, 50.0, 0.0, 20.0, 10.0],
        vec![30.0, 0.0, 20.0, 0.0, 60.0],
        vec![100.0, 0.0, 10.0, 60.0, 0.0],
    ])?;
    Ok(matrix)
}
