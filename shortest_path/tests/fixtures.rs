use std::path::PathBuf;

use shortest_path::{AdjacencyMatrix, ShortestPathEngine};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(name)
}

fn load_fixture(name: &str) -> Result<AdjacencyMatrix, serde_json::Error> {
    let data = std::fs::read(fixture_path(name)).expect("fixture must exist");
    serde_json::from_slice(&data)
}

#[test]
fn sample_fixture_loads_and_solves() {
    let graph = load_fixture("sample_graph.json").expect("sample fixture must deserialize");
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 14);

    let engine = ShortestPathEngine::new(graph);
    let path = engine.find_shortest_path(0, 4).expect("query is valid");
    assert_eq!(path.vertices(), &[0, 3, 2, 4]);
}

#[test]
fn negative_fixture_fails_to_deserialize() {
    let err = load_fixture("negative_weight.json").expect_err("negative weights must be rejected");
    assert!(err.to_string().contains("negative"), "unexpected error: {err}");
}

#[test]
fn non_square_fixture_fails_to_deserialize() {
    let err = load_fixture("non_square.json").expect_err("ragged matrix must be rejected");
    assert!(err.to_string().contains("square"), "unexpected error: {err}");
}

#[test]
fn empty_matrix_fails_to_deserialize() {
    let err = serde_json::from_str::<AdjacencyMatrix>("[]")
        .expect_err("empty matrix must be rejected");
    assert!(err.to_string().contains("empty"), "unexpected error: {err}");
}

#[test]
fn outcome_serializes_unreachable_distances_as_null() {
    let engine = ShortestPathEngine::from_weights(vec![vec![0.0, 3.0], vec![0.0, 0.0]])
        .expect("valid graph");
    let outcome = engine.search(1, 0).expect("query is valid");
    let json = serde_json::to_value(&outcome).expect("outcome serializes");

    assert_eq!(json["path"], serde_json::json!([]));
    assert_eq!(json["distance"], serde_json::Value::Null);
    assert_eq!(json["state"]["distances"], serde_json::json!([null, 0.0]));
    assert_eq!(json["state"]["previous"], serde_json::json!([null, null]));
}
