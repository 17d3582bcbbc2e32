//! Compares engine results with exhaustive simple-path enumeration on small
//! pseudo-random graphs.

use shortest_path::{AdjacencyMatrix, ShortestPathEngine};

/// Deterministic xorshift so the generated graphs are stable across runs.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }
}

fn random_rows(rng: &mut XorShift, n: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|_| {
            (0..n)
                .map(|_| {
                    // roughly half the cells are edges, weights 1..=9
                    if rng.next() % 2 == 0 {
                        0.0
                    } else {
                        (rng.next() % 9 + 1) as f64
                    }
                })
                .collect()
        })
        .collect()
}

fn brute_force(
    graph: &AdjacencyMatrix,
    at: usize,
    end: usize,
    seen: &mut Vec<bool>,
    cost: f64,
    best: &mut Option<f64>,
) {
    if at == end {
        if best.map_or(true, |b| cost < b) {
            *best = Some(cost);
        }
        return;
    }
    seen[at] = true;
    for (next, weight) in graph.neighbours(at) {
        if !seen[next] {
            brute_force(graph, next, end, seen, cost + weight, best);
        }
    }
    seen[at] = false;
}

#[test]
fn matches_exhaustive_search() {
    let mut rng = XorShift(0x9E37_79B9_7F4A_7C15);
    for round in 0..40 {
        let n = 2 + round % 5;
        let engine =
            ShortestPathEngine::from_weights(random_rows(&mut rng, n)).expect("valid graph");
        let graph = engine.graph();

        for start in 0..n {
            for end in 0..n {
                let outcome = engine.search(start, end).expect("query is valid");

                let mut best = None;
                brute_force(graph, start, end, &mut vec![false; n], 0.0, &mut best);
                assert_eq!(outcome.distance, best, "round {round}: {start} -> {end}");

                if best.is_some() {
                    assert_eq!(outcome.path.start(), Some(start));
                    assert_eq!(outcome.path.end(), Some(end));
                    assert_eq!(outcome.path.total_weight(graph), outcome.distance);
                } else {
                    assert!(outcome.path.is_empty());
                    assert_eq!(outcome.state.distance(end), Some(f64::INFINITY));
                }
            }
        }
    }
}
