use std::ops::RangeInclusive;

use ahash::HashMap;
use all_pairs_paths::{
    graphs::{
        graph_functions::{edge_weights, validate_path},
        Edge, Vertex, WeightedEdge,
    },
    read_floyd_warshall,
    search::{
        floyd_warshall::FloydWarshall,
        path::{ShortestPathRequest, ShortestPathTestCase},
    },
    write_floyd_warshall,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Minimum weight over all simple paths from `source` to `target`.
fn brute_force_distance(
    number_of_vertices: u32,
    weights: &HashMap<Edge, i64>,
    source: Vertex,
    target: Vertex,
) -> Option<i64> {
    fn extend(
        number_of_vertices: u32,
        weights: &HashMap<Edge, i64>,
        visited: &mut Vec<bool>,
        tail: Vertex,
        target: Vertex,
        weight: i64,
        best: &mut Option<i64>,
    ) {
        if tail == target {
            if best.map_or(true, |best| weight < best) {
                *best = Some(weight);
            }
            return;
        }

        for head in 0..number_of_vertices {
            if visited[head as usize] {
                continue;
            }
            if let Some(&edge_weight) = weights.get(&Edge { tail, head }) {
                visited[head as usize] = true;
                extend(
                    number_of_vertices,
                    weights,
                    visited,
                    head,
                    target,
                    weight + edge_weight,
                    best,
                );
                visited[head as usize] = false;
            }
        }
    }

    let mut visited = vec![false; number_of_vertices as usize];
    visited[source as usize] = true;
    let mut best = None;
    extend(
        number_of_vertices,
        weights,
        &mut visited,
        source,
        target,
        0,
        &mut best,
    );
    best
}

/// Random graph without negative cycles: edges to a larger vertex draw their
/// weight from `forward`, all other edges are heavy enough to outweigh any
/// negative forward chain.
fn random_graph(
    rng: &mut StdRng,
    forward: RangeInclusive<i64>,
) -> (u32, Vec<WeightedEdge<i64>>) {
    let number_of_vertices = rng.gen_range(1..=6);
    let number_of_edges = rng.gen_range(0..=15);

    let edges = (0..number_of_edges)
        .map(|_| {
            let tail = rng.gen_range(0..number_of_vertices);
            let head = rng.gen_range(0..number_of_vertices);
            let weight = if tail < head {
                rng.gen_range(forward.clone())
            } else {
                rng.gen_range(30..=40)
            };
            WeightedEdge::new(tail, head, weight)
        })
        .collect();

    (number_of_vertices, edges)
}

fn check_against_brute_force(forward: RangeInclusive<i64>, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..200 {
        let directed = rng.gen_bool(0.5);
        let (number_of_vertices, mut edges) = random_graph(&mut rng, forward.clone());
        if !directed {
            // negative undirected edges are negative cycles
            edges.iter_mut().for_each(|edge| edge.weight = edge.weight.abs());
        }

        let floyd_warshall = FloydWarshall::new(number_of_vertices, edges.clone(), directed);
        let weights = edge_weights(&edges, directed);

        for source in 0..number_of_vertices {
            for target in 0..number_of_vertices {
                let weight = brute_force_distance(number_of_vertices, &weights, source, target);
                let test_case = ShortestPathTestCase {
                    request: ShortestPathRequest { source, target },
                    weight,
                };
                let path = floyd_warshall.shortest_path(source, target);

                assert_eq!(
                    validate_path(&weights, &test_case, &path),
                    Ok(()),
                    "{} -> {} in {:?} (directed: {})",
                    source,
                    target,
                    edges,
                    directed
                );
                assert_eq!(floyd_warshall.shortest_path_distance(source, target), weight);
            }
        }
    }
}

#[test]
fn matches_brute_force_with_non_negative_weights() {
    check_against_brute_force(0..=20, 0);
}

#[test]
fn matches_brute_force_with_negative_weights() {
    check_against_brute_force(-5..=10, 1);
}

#[test]
fn unreachable_pairs_are_unreachable_both_ways_when_undirected() {
    // two components {0, 1} and {2, 3}
    let edges = vec![WeightedEdge::new(0, 1, 4u32), WeightedEdge::new(3, 2, 1)];
    let floyd_warshall = FloydWarshall::new(4, edges, false);

    for (source, target) in [(0, 2), (0, 3), (1, 2), (1, 3)] {
        assert_eq!(floyd_warshall.shortest_path(source, target), None);
        assert_eq!(floyd_warshall.shortest_path(target, source), None);
    }
    assert_eq!(floyd_warshall.shortest_path_distance(1, 0), Some(4));
    assert_eq!(floyd_warshall.shortest_path_distance(2, 3), Some(1));
}

#[test]
fn undirected_edges_are_usable_both_ways() {
    let edges = vec![
        WeightedEdge::new(0, 1, 7u32),
        WeightedEdge::new(2, 1, 3),
        WeightedEdge::new(0, 2, 20),
    ];
    let floyd_warshall = FloydWarshall::new(3, edges, false);

    assert_eq!(floyd_warshall.shortest_path_distance(1, 0), Some(7));
    assert_eq!(floyd_warshall.shortest_path_distance(1, 2), Some(3));
    assert_eq!(
        floyd_warshall.shortest_path(2, 0).map(|path| path.vertices),
        Some(vec![2, 1, 0])
    );
}

#[test]
fn duplicate_edges_keep_last_weight_before_relaxation() {
    // the cheap duplicate is overwritten, so the detour wins
    let edges = vec![
        WeightedEdge::new(0, 2, 1u32),
        WeightedEdge::new(0, 1, 2),
        WeightedEdge::new(1, 2, 2),
        WeightedEdge::new(0, 2, 9),
    ];
    let floyd_warshall = FloydWarshall::new(3, edges, true);

    let path = floyd_warshall.shortest_path(0, 2).unwrap();
    assert_eq!(path.weight, 4);
    assert_eq!(path.vertices, vec![0, 1, 2]);
}

#[test]
fn long_chain_is_reconstructed() {
    // 0 -> 1 -> ... -> n-1, plus expensive shortcuts from 0
    let number_of_vertices = 300;
    let mut edges: Vec<_> = (0..number_of_vertices - 1)
        .map(|tail| WeightedEdge::new(tail, tail + 1, 1u64))
        .collect();
    edges.extend((2..number_of_vertices).map(|head| WeightedEdge::new(0, head, 1_000)));
    let floyd_warshall = FloydWarshall::new(number_of_vertices, edges, true);

    let path = floyd_warshall
        .shortest_path(0, number_of_vertices - 1)
        .unwrap();
    assert_eq!(path.weight, (number_of_vertices - 1) as u64);
    assert_eq!(path.vertices, (0..number_of_vertices).collect::<Vec<_>>());
}

#[test]
fn written_floyd_warshall_answers_the_same() {
    let edges = vec![
        WeightedEdge::new(0, 1, 1u32),
        WeightedEdge::new(1, 2, 1),
        WeightedEdge::new(0, 2, 5),
        WeightedEdge::new(2, 3, 1),
    ];
    let floyd_warshall = FloydWarshall::new(4, edges, true);

    let path = std::env::temp_dir().join(format!(
        "all_pairs_paths_{}.bincode",
        std::process::id()
    ));
    write_floyd_warshall(&path, &floyd_warshall).unwrap();
    let read: FloydWarshall<u32> = read_floyd_warshall(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    for source in 0..4 {
        for target in 0..4 {
            assert_eq!(
                read.shortest_path(source, target),
                floyd_warshall.shortest_path(source, target)
            );
        }
    }
}
