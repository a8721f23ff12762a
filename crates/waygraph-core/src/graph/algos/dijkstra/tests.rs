use super::*;
use crate::error::GraphError;
use crate::graph::WeightedGraph;

fn road_network() -> WeightedGraph<&'static str> {
    WeightedGraph::from_edges(
        ["s", "a", "b", "c", "d", "island"],
        [
            ("s", "a", 7.0),
            ("s", "b", 2.0),
            ("b", "a", 3.0),
            ("a", "c", 1.0),
            ("b", "c", 8.0),
            ("c", "d", 2.5),
            ("d", "s", 0.5),
        ],
    )
    .unwrap()
}

/// Relax every edge |V| times and return the resulting distances
fn bellman_ford(
    graph: &WeightedGraph<&'static str>,
    source: &'static str,
) -> Vec<(&'static str, f64)> {
    let mut distances: std::collections::HashMap<&str, f64> =
        graph.vertices().map(|v| (*v, f64::INFINITY)).collect();
    distances.insert(source, 0.0);

    for _ in 0..graph.vertex_count() {
        for edge in graph.edges() {
            let candidate = distances[edge.source] + edge.weight;
            if candidate < distances[edge.target] {
                distances.insert(edge.target, candidate);
            }
        }
    }

    graph.vertices().map(|v| (*v, distances[v])).collect()
}

/// Test lowest-cost distances and predecessors on a small network
#[test]
fn test_dijkstra_traverse_weighted() {
    let graph = road_network();
    let table = dijkstra_traverse(&graph, &"s").unwrap();

    assert_eq!(table[&"s"], CostEntry::root());
    assert_eq!(table[&"b"].distance, 2.0);
    assert_eq!(table[&"a"].distance, 5.0);
    assert_eq!(table[&"a"].predecessor, Some("b"));
    assert_eq!(table[&"c"].distance, 6.0);
    assert_eq!(table[&"c"].predecessor, Some("a"));
    assert_eq!(table[&"d"].distance, 8.5);
}

/// Unreachable vertices stay in the table with infinite distance
#[test]
fn test_dijkstra_keeps_unreachable_vertices() {
    let graph = road_network();
    let table = dijkstra_traverse(&graph, &"s").unwrap();

    assert_eq!(table.len(), graph.vertex_count());
    assert_eq!(table[&"island"], CostEntry::unreached());
    assert!(!table[&"island"].is_reachable());
}

/// Every finite distance is its predecessor's distance plus the edge weight
#[test]
fn test_dijkstra_predecessor_consistency() {
    let graph = road_network();
    let table = dijkstra_traverse(&graph, &"s").unwrap();

    for (vertex, entry) in &table {
        if let Some(pred) = &entry.predecessor {
            let expected = table[pred].distance + graph.weight(pred, vertex).unwrap();
            assert_eq!(entry.distance, expected, "vertex {}", vertex);
        }
    }
}

/// Distances match an exhaustive relaxation from every source
#[test]
fn test_dijkstra_matches_bellman_ford() {
    let graph = road_network();
    for source in graph.vertices() {
        let table = dijkstra_traverse(&graph, source).unwrap();
        for (vertex, distance) in bellman_ford(&graph, *source) {
            assert_eq!(table[&vertex].distance, distance, "{} -> {}", source, vertex);
        }
    }
}

/// Equal-cost paths keep the predecessor that was found first
#[test]
fn test_dijkstra_equal_cost_paths() {
    let graph = WeightedGraph::from_edges(
        ["s", "x", "y", "t"],
        [
            ("s", "x", 1.0),
            ("s", "y", 1.0),
            ("x", "t", 1.0),
            ("y", "t", 1.0),
        ],
    )
    .unwrap();

    let table = dijkstra_traverse(&graph, &"s").unwrap();
    assert_eq!(table[&"t"].distance, 2.0);
    assert_eq!(table[&"t"].predecessor, Some("x"));
}

/// Running the query twice yields identical tables
#[test]
fn test_dijkstra_idempotent() {
    let graph = road_network();
    let first = dijkstra_traverse(&graph, &"c").unwrap();
    let second = dijkstra_traverse(&graph, &"c").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_dijkstra_unknown_source() {
    let graph = road_network();
    let err = dijkstra_traverse(&graph, &"nowhere").unwrap_err();
    assert!(matches!(err, GraphError::VertexNotFound { .. }));
}
