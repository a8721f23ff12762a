//! End-to-end queries over the seven-city road dataset

use std::collections::HashMap;

use waygraph_core::dataset::{city_graph, CITIES, ROADS};
use waygraph_core::graph::path_to;
use waygraph_core::{CostEntry, GraphError, WeightedGraph};

fn cities() -> WeightedGraph<&'static str> {
    city_graph().unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn assert_costs(
    table: &HashMap<&'static str, CostEntry<&'static str>>,
    expected: &[(&'static str, f64, Option<&'static str>)],
) {
    assert_eq!(table.len(), expected.len());
    for (city, distance, predecessor) in expected {
        let entry = &table[city];
        assert_close(entry.distance, *distance);
        assert_eq!(entry.predecessor, *predecessor, "predecessor of {city}");
    }
}

#[test]
fn test_all_cities_present() {
    let graph = cities();
    for city in CITIES {
        assert!(graph.contains_vertex(&city));
    }
}

#[test]
fn test_remove_vertex() {
    let mut graph = cities();
    graph.remove_vertex(&"New London").unwrap();

    assert!(!graph.contains_vertex(&"New London"));
    assert!(graph.neighbors(&"Boston").all(|n| *n != "New London"));
}

#[test]
fn test_remove_edges_leaves_no_neighbors() {
    let mut graph = cities();
    graph
        .remove_edge(&"Garden City", &"Maplewood", 53.6)
        .unwrap();
    graph
        .remove_edge(&"Garden City", &"New York City", 25.8)
        .unwrap();

    assert_eq!(graph.neighbors(&"Garden City").count(), 0);
}

#[test]
fn test_weight() {
    let graph = cities();
    assert_eq!(graph.weight(&"Garden City", &"Maplewood").unwrap(), 53.6);
    assert_eq!(graph.weight(&"Boston", &"Hartford").unwrap(), 103.3);
    assert_ne!(graph.weight(&"New Haven", &"Hartford").unwrap(), 500.0);

    for (from, to, miles) in ROADS {
        assert_eq!(graph.weight(&from, &to).unwrap(), miles);
    }

    let err = graph.weight(&"Boston", &"Maplewood").unwrap_err();
    assert!(matches!(err, GraphError::EdgeNotFound { .. }));
}

#[test]
fn test_fewest_edges() {
    let graph = cities();
    let expected = HashMap::from([
        ("Boston", None),
        ("Hartford", Some("Boston")),
        ("New London", Some("Boston")),
        ("New Haven", Some("Hartford")),
        ("New York City", Some("Hartford")),
        ("Garden City", Some("New York City")),
        ("Maplewood", Some("New York City")),
    ]);

    assert_eq!(graph.bfs(&"Boston").unwrap(), expected);
    assert_eq!(graph.fewest_edges(&"Boston").unwrap(), expected);

    let path = path_to(&expected, &"Maplewood").unwrap();
    assert_eq!(path, vec!["Boston", "Hartford", "New York City", "Maplewood"]);
}

#[test]
fn test_lowest_cost() {
    let mut graph = cities();
    let table = graph.lowest_cost(&"Hartford").unwrap();
    assert_costs(
        &table,
        &[
            ("Hartford", 0.0, None),
            ("Boston", 103.3, Some("Hartford")),
            ("New Haven", 38.9, Some("Hartford")),
            ("New London", 51.4, Some("Hartford")),
            ("New York City", 116.3, Some("Hartford")),
            ("Maplewood", 136.4, Some("New York City")),
            ("Garden City", 142.1, Some("New York City")),
        ],
    );

    graph
        .remove_edge(&"Hartford", &"New London", 51.4)
        .unwrap();
    graph
        .remove_edge(&"New London", &"Hartford", 51.4)
        .unwrap();

    let table = graph.lowest_cost(&"Hartford").unwrap();
    assert_costs(
        &table,
        &[
            ("Hartford", 0.0, None),
            ("Boston", 103.3, Some("Hartford")),
            ("New Haven", 38.9, Some("Hartford")),
            ("New London", 86.7, Some("New Haven")),
            ("New York City", 116.3, Some("Hartford")),
            ("Maplewood", 136.4, Some("New York City")),
            ("Garden City", 142.1, Some("New York City")),
        ],
    );
}

#[test]
fn test_lowest_cost_unreachable_city() {
    let mut graph = cities();
    graph.add_vertex("Providence");

    let table = graph.lowest_cost(&"Boston").unwrap();
    assert_eq!(table.len(), 8);
    assert_eq!(table[&"Providence"], CostEntry::unreached());
}

#[test]
fn test_lowest_total() {
    let mut graph = cities();
    let tree = graph.lowest_total(&"New London").unwrap();

    assert_close(tree.total_weight, 316.6);
    assert_eq!(
        tree.parents,
        HashMap::from([
            ("New London", None),
            ("New Haven", Some("New London")),
            ("Hartford", Some("New Haven")),
            ("Boston", Some("Hartford")),
            ("New York City", Some("New Haven")),
            ("Maplewood", Some("New York City")),
            ("Garden City", Some("New York City")),
        ])
    );

    graph
        .remove_edge(&"Garden City", &"New York City", 25.8)
        .unwrap();
    graph
        .remove_edge(&"New York City", &"Garden City", 25.8)
        .unwrap();

    let tree = graph.lowest_total(&"New London").unwrap();
    assert_close(tree.total_weight, 344.4);
    assert_eq!(tree.parents[&"Garden City"], Some("Maplewood"));
    assert_eq!(tree.parents[&"Maplewood"], Some("New York City"));
}

#[test]
fn test_lowest_total_after_isolating_city() {
    let mut graph = cities();
    graph
        .remove_edge(&"Maplewood", &"Garden City", 53.6)
        .unwrap();
    graph
        .remove_edge(&"New York City", &"Garden City", 25.8)
        .unwrap();

    let err = graph.lowest_total(&"Boston").unwrap_err();
    assert!(matches!(
        err,
        GraphError::GraphNotConnected { unreached: 1, .. }
    ));
}

#[test]
fn test_queries_are_idempotent() {
    let graph = cities();
    assert_eq!(
        graph.bfs(&"Maplewood").unwrap(),
        graph.bfs(&"Maplewood").unwrap()
    );
    assert_eq!(
        graph.lowest_cost(&"Maplewood").unwrap(),
        graph.lowest_cost(&"Maplewood").unwrap()
    );
    assert_eq!(
        graph.lowest_total(&"Maplewood").unwrap(),
        graph.lowest_total(&"Maplewood").unwrap()
    );
}

#[test]
fn test_unknown_city() {
    let graph = cities();
    for result in [
        graph.bfs(&"Albany").map(|_| ()),
        graph.lowest_cost(&"Albany").map(|_| ()),
        graph.lowest_total(&"Albany").map(|_| ()),
    ] {
        assert!(matches!(result, Err(GraphError::VertexNotFound { .. })));
    }
}
